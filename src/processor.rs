//! Core orchestration: data files in, rendered project out.

use crate::aggregator::build_context;
use crate::cli::Args;
use crate::error::Result;
use crate::loader::LoadOptions;
use crate::renderer::TemplateRenderer;
use crate::template::{resolve_template_dir, write_context_file};
use log::info;
use std::path::{Path, PathBuf};

/// Runs the three stages in order: collect data, write the context file,
/// render. The first error aborts the run; nothing is written before all
/// data files have been read successfully.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    options: LoadOptions,
    copy_without_render: Vec<String>,
    skip_render: bool,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        options: LoadOptions,
        copy_without_render: Vec<String>,
        skip_render: bool,
    ) -> Self {
        Self { renderer, options, copy_without_render, skip_render }
    }

    /// Creates a processor configured from the command line.
    pub fn from_args(renderer: &'a dyn TemplateRenderer, args: &Args) -> Self {
        let options = LoadOptions { load_all_documents: args.load_all_documents };
        Self::new(renderer, options, args.copy_without_render.clone(), args.skip_render)
    }

    /// # Returns
    /// * `Result<PathBuf>` - Path of the context file written into the template directory
    pub fn process<I, T, O>(&self, input_dir: I, template_dir: T, output_dir: O) -> Result<PathBuf>
    where
        I: AsRef<Path>,
        T: AsRef<Path>,
        O: AsRef<Path>,
    {
        let context = build_context(input_dir, &self.options, &self.copy_without_render)?;
        let template_root = resolve_template_dir(template_dir)?;
        let context_file = write_context_file(&template_root, &context)?;

        if self.skip_render {
            info!("Skipping render, context is in {}", context_file.display());
        } else {
            self.renderer.render(&template_root, output_dir.as_ref())?;
        }
        Ok(context_file)
    }
}
