//! # tikz-tools
//!
//! A Rust library for turning browser-canvas drawings into TikZ figures.
//!
//! ## Features
//!
//! - **Scene to TikZ**: Convert a JSON scene description (shapes, points,
//!   named relations) into TikZ drawing commands
//! - **PDF compilation**: Compile LaTeX source to PDF through an external
//!   engine, with a built-in fallback document on failure
//!
//! ## Example - Scene Conversion
//!
//! ```rust,ignore
//! use tikz_tools::scene::{parse_scene, scene_to_tikz, tikz_document};
//!
//! let json = std::fs::read_to_string("scene.json").unwrap();
//! let scene = parse_scene(&json).unwrap();
//! let tikz = scene_to_tikz(&scene);
//! std::fs::write("figure.tex", tikz_document(&tikz)).unwrap();
//! ```
//!
//! ## Example - PDF Compilation
//!
//! ```rust,ignore
//! use tikz_tools::compile::{CompileOptions, compile_document};
//!
//! let source = std::fs::read_to_string("figure.tex").unwrap();
//! let output = compile_document(&source, &CompileOptions::default()).unwrap();
//! std::fs::write("figure.pdf", output.pdf).unwrap();
//! ```

pub mod compile;
pub mod scene;

// Re-export commonly used items
pub use compile::{CompileOptions, CompileOutput, compile_document};
pub use scene::{Scene, SceneError, parse_scene, scene_to_tikz, tikz_document};
