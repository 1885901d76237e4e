//! Command-line interface implementation for cookcut.
//! Provides argument parsing using clap.

use crate::constants::{
    DEFAULT_COPY_WITHOUT_RENDER, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_RENDERER,
    DEFAULT_TEMPLATE_DIR,
};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for cookcut.
#[derive(Parser, Debug)]
#[command(
    name = "cookcut",
    author,
    version,
    about = "Cook-and-cut: creates expanded data from cookiecutter templates",
    long_about = None
)]
pub struct Args {
    /// Directory with the CSV and YAML data files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory where the render engine writes the generated project
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Cookiecutter template directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    pub template_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Load every document of a multi-document YAML file as a list.
    /// By default only the first document is used.
    #[arg(long)]
    pub load_all_documents: bool,

    /// Glob of template files the render engine copies without substitution.
    /// May be repeated; replaces the default list when given. Patterns must be
    /// valid globset globs: `[` and `{` open a class or group and must be closed.
    #[arg(long, value_name = "GLOB", default_values = DEFAULT_COPY_WITHOUT_RENDER)]
    pub copy_without_render: Vec<String>,

    /// Render engine executable
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_RENDERER)]
    pub renderer: String,

    /// Write the context file into the template directory but do not render
    #[arg(long)]
    pub skip_render: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
