//! Canvas scene to TikZ conversion module
//!
//! This module parses JSON scene descriptions exported from a browser
//! drawing canvas and renders them as TikZ drawing commands.

pub mod palette;
pub mod parser;
pub mod tikz;
pub mod types;

// Re-export main public API
pub use parser::{SceneError, parse_scene};
pub use tikz::{scene_to_tikz, tikz_document};
pub use types::*;
