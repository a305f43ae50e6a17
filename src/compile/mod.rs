//! LaTeX to PDF compilation module
//!
//! This module wraps one synchronous invocation of an external LaTeX
//! engine. The source is written into a temporary directory, the engine is
//! run against it, and the produced PDF is read back. A failed run yields
//! a built-in fallback document instead of an error, so callers always
//! receive displayable bytes.

use std::fs;
use std::io;
use std::process::Command;

use log::{debug, warn};
use thiserror::Error;

/// Static single-page PDF returned when the engine fails
pub const FALLBACK_PDF: &[u8] = include_bytes!("fallback.pdf");

const JOB_NAME: &str = "figure";

/// Options for PDF compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// LaTeX engine binary to invoke (default: xelatex)
    pub compiler: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            compiler: "xelatex".to_string(),
        }
    }
}

/// Result of a compilation attempt
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The compiled document, or the fallback document on failure
    pub pdf: Vec<u8>,
    /// Whether the engine produced the document itself
    pub success: bool,
}

/// Error for local I/O failures before the engine runs
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("compile workspace I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Compile a LaTeX document to PDF.
///
/// The engine runs synchronously with no retries and no timeout; nothing
/// of its output is interpreted beyond the exit code. A non-zero exit, a
/// missing output file, or an engine that cannot be spawned all produce
/// the fallback document with `success = false`. Only failures to set up
/// the temporary workspace surface as errors.
pub fn compile_document(
    source: &str,
    options: &CompileOptions,
) -> Result<CompileOutput, CompileError> {
    let workspace = tempfile::tempdir()?;
    let tex_path = workspace.path().join(format!("{JOB_NAME}.tex"));
    fs::write(&tex_path, source)?;

    let output = Command::new(&options.compiler)
        .arg("-interaction=nonstopmode")
        .arg("-halt-on-error")
        .arg(format!("-output-directory={}", workspace.path().display()))
        .arg(&tex_path)
        .current_dir(workspace.path())
        .output();

    let output = match output {
        Ok(output) => output,
        Err(err) => {
            warn!("failed to run '{}': {}", options.compiler, err);
            return Ok(fallback());
        }
    };

    let status = output.status;
    let mut engine_log = output.stdout;
    engine_log.extend_from_slice(&output.stderr);

    if !status.success() {
        warn!(
            "'{}' exited with {}: {}",
            options.compiler,
            status,
            tail(&engine_log)
        );
        return Ok(fallback());
    }
    debug!("'{}' finished: {}", options.compiler, tail(&engine_log));

    let pdf_path = workspace.path().join(format!("{JOB_NAME}.pdf"));
    match fs::read(&pdf_path) {
        Ok(pdf) => {
            debug!("'{}' produced {} bytes", options.compiler, pdf.len());
            Ok(CompileOutput { pdf, success: true })
        }
        Err(err) => {
            warn!(
                "'{}' exited cleanly but produced no {JOB_NAME}.pdf: {err}",
                options.compiler
            );
            Ok(fallback())
        }
    }
}

fn fallback() -> CompileOutput {
    CompileOutput {
        pdf: FALLBACK_PDF.to_vec(),
        success: false,
    }
}

/// Last few lines of engine output, for the failure log
fn tail(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut lines: Vec<&str> = text.lines().rev().take(5).collect();
    lines.reverse();
    lines.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CompileOptions::default();
        assert_eq!(options.compiler, "xelatex");
    }

    #[test]
    fn test_fallback_is_a_pdf() {
        assert!(FALLBACK_PDF.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_tail_keeps_last_lines() {
        assert_eq!(tail(b"a\nb\nc\nd\ne\nf\ng"), "c | d | e | f | g");
        assert_eq!(tail(b"only"), "only");
        assert_eq!(tail(b""), "");
    }
}
