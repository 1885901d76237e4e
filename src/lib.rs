//! cookcut turns a directory of CSV and YAML data files into one variable
//! namespace and hands it to cookiecutter to render a project tree.

/// Data directory scanning and namespace merging
pub mod aggregator;

/// Command-line interface module for the cookcut application
pub mod cli;

/// Common constants
pub mod constants;

/// The context document written for the render engine
pub mod context;

/// Error types and handling for the cookcut application
pub mod error;

/// CSV and YAML data file readers
pub mod loader;

/// Logger initialisation
pub mod logger;

/// Orchestrates loading, context writing and rendering
pub mod processor;

/// Render engine invocation
pub mod renderer;

/// Template directory lookup and context file writing
pub mod template;
