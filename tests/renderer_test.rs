#![cfg(unix)]

use cookcut::error::Error;
use cookcut::renderer::{CookiecutterRenderer, TemplateRenderer};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes an executable shell script standing in for cookiecutter.
fn fake_renderer(dir: &Path, body: &str) -> PathBuf {
    let script = dir.join("fake-cookiecutter");
    fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[test]
fn test_renderer_receives_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let args_file = temp_dir.path().join("args.txt");
    let script = fake_renderer(
        temp_dir.path(),
        &format!("printf '%s\\n' \"$@\" > '{}'", args_file.display()),
    );

    let renderer = CookiecutterRenderer::new(script.display().to_string());
    renderer.render(Path::new("/srv/.cc"), Path::new("/srv/out")).unwrap();

    let args = fs::read_to_string(&args_file).unwrap();
    let args: Vec<&str> = args.lines().collect();
    assert_eq!(args, ["--no-input", "--overwrite-if-exists", "--output-dir", "/srv/out", "/srv/.cc"]);
}

#[test]
fn test_renderer_failure_status() {
    let temp_dir = TempDir::new().unwrap();
    let script = fake_renderer(temp_dir.path(), "exit 3");

    let renderer = CookiecutterRenderer::new(script.display().to_string());
    let result = renderer.render(temp_dir.path(), temp_dir.path());

    match result {
        Err(Error::RenderError(message)) => assert!(message.contains("failed with status")),
        other => panic!("Expected RenderError, got {other:?}"),
    }
}
