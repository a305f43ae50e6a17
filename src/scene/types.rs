use indexmap::IndexMap;
use serde::Deserialize;

/// Canvas height assumed when the scene does not carry one, in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 400.0;

/// 2D point in raw canvas pixel space (Y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Circle given by the top-left corner of its bounding box and its radius
#[derive(Debug, Clone, Deserialize)]
pub struct Circle {
    pub left: f64,
    pub top: f64,
    pub radius: f64,
    #[serde(default)]
    pub fill: Option<String>,
}

/// Axis-aligned rectangle given by its top-left corner
#[derive(Debug, Clone, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub fill: Option<String>,
}

/// Straight segment between two endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub stroke: Option<String>,
}

/// Open chain of straight segments (broken line)
#[derive(Debug, Clone, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    #[serde(default)]
    pub stroke: Option<String>,
}

/// Smooth curve through an ordered list of points
#[derive(Debug, Clone, Deserialize)]
pub struct Curve {
    pub points: Vec<Point>,
    #[serde(default)]
    pub stroke: Option<String>,
}

/// Closed polygon through an ordered list of points
#[derive(Debug, Clone, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    #[serde(default)]
    pub fill: Option<String>,
}

/// Text label anchored at a canvas position
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub left: f64,
    pub top: f64,
    pub text: String,
    #[serde(default)]
    pub fill: Option<String>,
}

/// All possible shape types, tagged by the canvas `type` field
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    #[serde(alias = "rectangle")]
    Rect(Rect),
    Line(Line),
    #[serde(alias = "broken-line", alias = "brokenline")]
    Polyline(Polyline),
    Curve(Curve),
    Polygon(Polygon),
    Node(Node),
}

/// How the points of a relation should be jointly rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Polygon,
    #[serde(alias = "polyline")]
    Line,
    #[serde(alias = "rectangle")]
    Rect,
}

/// Named grouping of points rendered as one joint figure
#[derive(Debug, Clone, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: RelationKind,
    pub points: Vec<Point>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Parsed canvas scene
#[derive(Debug, Clone)]
pub struct Scene {
    /// Canvas height in pixels, used to flip Y into Cartesian orientation
    pub canvas_height: f64,
    /// Whether color fields should be honored and a palette emitted
    pub use_custom_color: bool,
    pub shapes: Vec<Shape>,
    /// Relations in document order, keyed by their name
    pub relations: IndexMap<String, Relation>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            use_custom_color: false,
            shapes: Vec::new(),
            relations: IndexMap::new(),
        }
    }
}
