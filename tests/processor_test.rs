use cookcut::constants::CONTEXT_FILE;
use cookcut::error::{Error, Result};
use cookcut::loader::LoadOptions;
use cookcut::processor::Processor;
use cookcut::renderer::TemplateRenderer;
use serde_json::json;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Remembers every call instead of rendering.
#[derive(Default)]
struct RecordingRenderer {
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
    fail: bool,
}

impl TemplateRenderer for RecordingRenderer {
    fn render(&self, template_dir: &Path, output_dir: &Path) -> Result<()> {
        self.calls.borrow_mut().push((template_dir.to_path_buf(), output_dir.to_path_buf()));
        if self.fail {
            return Err(Error::RenderError("renderer exploded".to_string()));
        }
        Ok(())
    }
}

struct Workspace {
    _root: TempDir,
    input: PathBuf,
    template: PathBuf,
    output: PathBuf,
}

fn workspace() -> Workspace {
    let root = TempDir::new().unwrap();
    let input = root.path().join("CSVs");
    let template = root.path().join(".cc");
    let output = root.path().join("out");
    fs::create_dir(&input).unwrap();
    fs::create_dir(&template).unwrap();
    Workspace { _root: root, input, template, output }
}

fn processor(renderer: &RecordingRenderer, skip_render: bool) -> Processor<'_> {
    Processor::new(renderer, LoadOptions::default(), vec!["*.j2".to_string()], skip_render)
}

#[test_log::test]
fn test_process_writes_context_and_renders() {
    let ws = workspace();
    fs::write(ws.input.join("hosts.csv"), "host\nleaf1\n").unwrap();
    fs::write(ws.input.join("site.yml"), "name: lab\n").unwrap();
    let renderer = RecordingRenderer::default();

    let context_file = processor(&renderer, false).process(&ws.input, &ws.template, &ws.output).unwrap();

    assert_eq!(context_file, ws.template.join(CONTEXT_FILE));
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&context_file).unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "in": {"hosts": [{"host": "leaf1"}], "site": {"name": "lab"}},
            "out": {},
            "_copy_without_render": ["*.j2"]
        })
    );
    assert_eq!(renderer.calls.borrow().as_slice(), [(ws.template.clone(), ws.output.clone())]);
}

#[test_log::test]
fn test_skip_render() {
    let ws = workspace();
    let renderer = RecordingRenderer::default();

    processor(&renderer, true).process(&ws.input, &ws.template, &ws.output).unwrap();

    assert!(ws.template.join(CONTEXT_FILE).exists());
    assert!(renderer.calls.borrow().is_empty());
}

#[test]
fn test_malformed_csv_writes_nothing() {
    let ws = workspace();
    fs::write(ws.input.join("vars.csv"), "__CCkey\ndomain\n").unwrap();
    let renderer = RecordingRenderer::default();

    let result = processor(&renderer, false).process(&ws.input, &ws.template, &ws.output);

    assert!(matches!(result, Err(Error::CsvKeyWithoutValue { .. })));
    assert!(!ws.template.join(CONTEXT_FILE).exists());
    assert!(renderer.calls.borrow().is_empty());
}

#[test]
fn test_missing_input_dir_writes_nothing() {
    let ws = workspace();
    let renderer = RecordingRenderer::default();

    let result =
        processor(&renderer, false).process(ws.input.join("missing"), &ws.template, &ws.output);

    assert!(matches!(result, Err(Error::InputDirectoryNotFound(_))));
    assert!(!ws.template.join(CONTEXT_FILE).exists());
    assert!(renderer.calls.borrow().is_empty());
}

#[test]
fn test_missing_template_dir() {
    let ws = workspace();
    let renderer = RecordingRenderer::default();
    let missing = ws.template.join("nope");

    let result = processor(&renderer, false).process(&ws.input, &missing, &ws.output);

    assert!(matches!(result, Err(Error::TemplateDirectoryNotFound(_))));
    assert!(renderer.calls.borrow().is_empty());
}

#[test]
fn test_invalid_copy_pattern() {
    let ws = workspace();
    let renderer = RecordingRenderer::default();
    let processor =
        Processor::new(&renderer, LoadOptions::default(), vec!["{a,b".to_string()], false);

    let result = processor.process(&ws.input, &ws.template, &ws.output);

    assert!(matches!(result, Err(Error::PatternError { .. })));
    assert!(!ws.template.join(CONTEXT_FILE).exists());
}

#[test]
fn test_render_failure_propagates() {
    let ws = workspace();
    let renderer = RecordingRenderer { fail: true, ..Default::default() };

    let result = processor(&renderer, false).process(&ws.input, &ws.template, &ws.output);

    assert!(matches!(result, Err(Error::RenderError(_))));
    // the context was written before rendering started
    assert!(ws.template.join(CONTEXT_FILE).exists());
}
