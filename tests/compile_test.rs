use tikz_tools::compile::{CompileOptions, FALLBACK_PDF, compile_document};
use tikz_tools::scene::tikz_document;

#[test]
fn test_missing_engine_returns_fallback() {
    let options = CompileOptions {
        compiler: "definitely-not-a-latex-engine".to_string(),
    };
    let output = compile_document("\\documentclass{standalone}", &options)
        .expect("missing engine is not an error");
    assert!(!output.success);
    assert_eq!(output.pdf, FALLBACK_PDF);
}

#[test]
fn test_failing_engine_returns_fallback() {
    // `false` accepts any arguments and always exits non-zero
    let options = CompileOptions {
        compiler: "false".to_string(),
    };
    let source = tikz_document("\\draw (0, 0) circle (1);");
    let output = compile_document(&source, &options).expect("engine failure is not an error");
    assert!(!output.success);
    assert_eq!(output.pdf, FALLBACK_PDF);
}

#[test]
fn test_engine_exiting_cleanly_without_output_returns_fallback() {
    // `true` exits 0 but never writes a PDF
    let options = CompileOptions {
        compiler: "true".to_string(),
    };
    let output = compile_document("\\documentclass{standalone}", &options).unwrap();
    assert!(!output.success);
    assert_eq!(output.pdf, FALLBACK_PDF);
}

#[cfg(unix)]
#[test]
fn test_successful_engine_output_is_returned() {
    use std::os::unix::fs::PermissionsExt;

    // Stub engine: runs in the compile workspace and writes the expected
    // job PDF there, like a real engine would
    let dir = tempfile::tempdir().unwrap();
    let stub = dir.path().join("fake-engine.sh");
    std::fs::write(&stub, "#!/bin/sh\nprintf '%%PDF-1.4 stub' > figure.pdf\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

    let options = CompileOptions {
        compiler: stub.to_string_lossy().into_owned(),
    };
    let output = compile_document("\\documentclass{standalone}", &options).unwrap();
    assert!(output.success);
    assert_eq!(output.pdf, b"%PDF-1.4 stub");
}
