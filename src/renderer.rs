//! Render engine invocation.
//! The render engine expands a template directory into the output tree using
//! the context file written next to the template. It is treated as a black box.
use crate::error::{Error, Result};
use log::{debug, info};
use std::path::Path;
use std::process::Command;

/// Trait for render engines.
pub trait TemplateRenderer {
    /// Renders the template directory into the output directory.
    ///
    /// The renderer runs without prompting, takes every variable from the
    /// context file in `template_dir` and overwrites existing output.
    fn render(&self, template_dir: &Path, output_dir: &Path) -> Result<()>;
}

/// Runs the cookiecutter command line tool as a child process.
pub struct CookiecutterRenderer {
    /// Executable name or path
    program: String,
}

impl CookiecutterRenderer {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    /// Builds the command without running it.
    pub fn command(&self, template_dir: &Path, output_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("--no-input")
            .arg("--overwrite-if-exists")
            .arg("--output-dir")
            .arg(output_dir)
            .arg(template_dir);
        command
    }
}

impl Default for CookiecutterRenderer {
    fn default() -> Self {
        CookiecutterRenderer::new(crate::constants::DEFAULT_RENDERER)
    }
}

impl TemplateRenderer for CookiecutterRenderer {
    /// # Errors
    /// * `Error::RenderError` if the program can not be started or exits unsuccessfully
    fn render(&self, template_dir: &Path, output_dir: &Path) -> Result<()> {
        let mut command = self.command(template_dir, output_dir);
        debug!("Running {:?}", command);
        info!("Rendering '{}' into '{}'", template_dir.display(), output_dir.display());

        let status = command
            .status()
            .map_err(|e| Error::RenderError(format!("failed to run '{}': {}", self.program, e)))?;

        if !status.success() {
            return Err(Error::RenderError(format!(
                "'{}' failed with status: {}",
                self.program, status
            )));
        }
        Ok(())
    }
}
