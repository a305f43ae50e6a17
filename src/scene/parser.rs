use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::scene::types::{DEFAULT_CANVAS_HEIGHT, Relation, Scene, Shape};

/// Error for a scene document that cannot be read at all
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level scene document as received from the canvas front end.
///
/// Objects and relations are kept as raw values so that one malformed
/// entry cannot fail the whole document.
#[derive(Deserialize)]
struct RawScene {
    #[serde(default)]
    objects: Vec<serde_json::Value>,
    #[serde(default)]
    relations: IndexMap<String, serde_json::Value>,
    #[serde(rename = "useCustomColor", default)]
    use_custom_color: bool,
    #[serde(rename = "canvasHeight", default = "default_canvas_height")]
    canvas_height: f64,
}

fn default_canvas_height() -> f64 {
    DEFAULT_CANVAS_HEIGHT
}

/// Parse a canvas scene JSON document into a `Scene`.
///
/// Objects with an unrecognized `type` or missing geometry fields are
/// skipped with a warning and the remaining objects still convert.
/// Malformed relation entries are dropped without one.
pub fn parse_scene(json: &str) -> Result<Scene, SceneError> {
    let raw: RawScene = serde_json::from_str(json)?;

    let mut shapes = Vec::with_capacity(raw.objects.len());
    for (index, value) in raw.objects.into_iter().enumerate() {
        match serde_json::from_value::<Shape>(value) {
            Ok(shape) => shapes.push(shape),
            Err(err) => warn!("skipping object {index}: {err}"),
        }
    }

    let mut relations = IndexMap::with_capacity(raw.relations.len());
    for (name, value) in raw.relations {
        match serde_json::from_value::<Relation>(value) {
            Ok(relation) => {
                relations.insert(name, relation);
            }
            Err(err) => debug!("dropping relation '{name}': {err}"),
        }
    }

    Ok(Scene {
        canvas_height: raw.canvas_height,
        use_custom_color: raw.use_custom_color,
        shapes,
        relations,
    })
}
