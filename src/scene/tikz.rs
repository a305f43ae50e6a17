use log::{debug, warn};

use crate::scene::palette::Palette;
use crate::scene::types::{Point, Relation, RelationKind, Scene, Shape};

/// One canvas pixel maps to 0.01cm, so 100px of canvas become 1cm of figure.
const SCALE: f64 = 0.01;

/// Format a coordinate with at most two decimal places, treating -0 as 0
fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    let s = format!("{:.2}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Scale a pixel X coordinate into figure space
fn tx(x: f64) -> f64 {
    x * SCALE
}

/// Scale a pixel Y coordinate into figure space, flipping the canvas
/// Y-down convention into the Cartesian Y-up one
fn ty(canvas_height: f64, y: f64) -> f64 {
    (canvas_height - y) * SCALE
}

/// Format a pixel-space point as a TikZ coordinate
fn coord(canvas_height: f64, x: f64, y: f64) -> String {
    format!("({}, {})", f(tx(x)), f(ty(canvas_height, y)))
}

/// Chain pixel-space points with `--`
fn chained(canvas_height: f64, points: &[Point]) -> String {
    points
        .iter()
        .map(|p| coord(canvas_height, p.x, p.y))
        .collect::<Vec<_>>()
        .join(" -- ")
}

/// Render the bracketed option list for an optional color.
///
/// `key` is the TikZ option the symbolic name is bound to (`fill`, `draw`,
/// `text`), or None for a bare stroke color. Colors are only honored when
/// the scene enables custom colors; otherwise the options are empty.
fn color_options(
    key: Option<&str>,
    color: Option<&str>,
    use_color: bool,
    palette: &mut Palette,
) -> String {
    let Some(raw) = color.filter(|c| use_color && !c.is_empty()) else {
        return String::new();
    };
    let name = palette.intern(raw);
    match key {
        Some(key) => format!("[{key}={name}]"),
        None => format!("[{name}]"),
    }
}

/// Escape characters LaTeX treats specially in node text
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Convert a shape to a single TikZ drawing command
fn shape_command(
    shape: &Shape,
    canvas_height: f64,
    use_color: bool,
    palette: &mut Palette,
    log: &mut Vec<String>,
) -> String {
    match shape {
        Shape::Circle(circle) => {
            let options = color_options(Some("fill"), circle.fill.as_deref(), use_color, palette);
            let center = coord(
                canvas_height,
                circle.left + circle.radius,
                circle.top + circle.radius,
            );
            format!(
                "\\draw{} {} circle ({});",
                options,
                center,
                f(circle.radius * SCALE)
            )
        }
        Shape::Rect(rect) => {
            let options = color_options(Some("fill"), rect.fill.as_deref(), use_color, palette);
            format!(
                "\\draw{} {} rectangle {};",
                options,
                coord(canvas_height, rect.left, rect.top),
                coord(canvas_height, rect.left + rect.width, rect.top + rect.height)
            )
        }
        Shape::Line(line) => {
            let options = color_options(None, line.stroke.as_deref(), use_color, palette);
            format!(
                "\\draw{} {} -- {};",
                options,
                coord(canvas_height, line.x1, line.y1),
                coord(canvas_height, line.x2, line.y2)
            )
        }
        Shape::Polyline(polyline) => {
            if polyline.points.len() < 2 {
                log.push("polyline with fewer than 2 points, skipping".to_string());
                return String::new();
            }
            let options = color_options(None, polyline.stroke.as_deref(), use_color, palette);
            format!("\\draw{} {};", options, chained(canvas_height, &polyline.points))
        }
        Shape::Curve(curve) => {
            if curve.points.len() < 2 {
                log.push("curve with fewer than 2 points, skipping".to_string());
                return String::new();
            }
            let options = color_options(None, curve.stroke.as_deref(), use_color, palette);
            let coordinates = curve
                .points
                .iter()
                .map(|p| coord(canvas_height, p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "\\draw{} plot [smooth] coordinates {{{}}};",
                options, coordinates
            )
        }
        Shape::Polygon(polygon) => {
            if polygon.points.len() < 3 {
                log.push("polygon with fewer than 3 points, skipping".to_string());
                return String::new();
            }
            let options = color_options(Some("fill"), polygon.fill.as_deref(), use_color, palette);
            format!(
                "\\draw{} {} -- cycle;",
                options,
                chained(canvas_height, &polygon.points)
            )
        }
        Shape::Node(node) => {
            if node.text.is_empty() {
                log.push("node with empty text, skipping".to_string());
                return String::new();
            }
            let options = color_options(Some("text"), node.fill.as_deref(), use_color, palette);
            format!(
                "\\node{} at {} {{{}}};",
                options,
                coord(canvas_height, node.left, node.top),
                escape_text(&node.text)
            )
        }
    }
}

/// Convert a named relation to a single TikZ drawing command.
///
/// Relations with the wrong point count for their kind render nothing.
fn relation_command(
    name: &str,
    relation: &Relation,
    canvas_height: f64,
    use_color: bool,
    palette: &mut Palette,
) -> String {
    match relation.kind {
        RelationKind::Polygon => {
            if relation.points.len() < 3 {
                debug!("relation '{name}': polygon needs at least 3 points, rendering nothing");
                return String::new();
            }
            let options =
                color_options(Some("draw"), relation.color.as_deref(), use_color, palette);
            format!(
                "\\draw{} {} -- cycle;",
                options,
                chained(canvas_height, &relation.points)
            )
        }
        RelationKind::Line => {
            if relation.points.len() < 2 {
                debug!("relation '{name}': line needs at least 2 points, rendering nothing");
                return String::new();
            }
            let options = color_options(None, relation.color.as_deref(), use_color, palette);
            format!("\\draw{} {};", options, chained(canvas_height, &relation.points))
        }
        RelationKind::Rect => {
            if relation.points.len() != 2 {
                debug!("relation '{name}': rect needs exactly 2 points, rendering nothing");
                return String::new();
            }
            let options =
                color_options(Some("draw"), relation.color.as_deref(), use_color, palette);
            format!(
                "\\draw{} {} rectangle {};",
                options,
                coord(canvas_height, relation.points[0].x, relation.points[0].y),
                coord(canvas_height, relation.points[1].x, relation.points[1].y)
            )
        }
    }
}

/// Convert a Scene to TikZ drawing commands.
///
/// Shapes render in document order, then relations in theirs. When the
/// scene enables custom colors, every referenced color is interned in a
/// palette and the definition block is emitted once, ahead of the drawing
/// commands. Shapes with degenerate geometry are skipped with a warning.
pub fn scene_to_tikz(scene: &Scene) -> String {
    let mut palette = Palette::new();
    let mut log: Vec<String> = Vec::new();

    let mut commands: Vec<String> = Vec::new();
    for shape in &scene.shapes {
        let command = shape_command(
            shape,
            scene.canvas_height,
            scene.use_custom_color,
            &mut palette,
            &mut log,
        );
        if !command.is_empty() {
            commands.push(command);
        }
    }
    for (name, relation) in &scene.relations {
        let command = relation_command(
            name,
            relation,
            scene.canvas_height,
            scene.use_custom_color,
            &mut palette,
        );
        if !command.is_empty() {
            commands.push(command);
        }
    }

    for message in &log {
        warn!("{message}");
    }

    let mut lines: Vec<String> = Vec::new();
    if scene.use_custom_color && !palette.is_empty() {
        lines.extend(palette.definitions());
    }
    lines.extend(commands);
    lines.join("\n")
}

/// Wrap TikZ drawing commands in a minimal compilable standalone document
pub fn tikz_document(body: &str) -> String {
    format!(
        "\\documentclass[border=2mm]{{standalone}}\n\
         \\usepackage{{tikz}}\n\
         \\usepackage{{xcolor}}\n\
         \\begin{{document}}\n\
         \\begin{{tikzpicture}}\n\
         {body}\n\
         \\end{{tikzpicture}}\n\
         \\end{{document}}\n"
    )
}
