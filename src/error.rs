//! Error handling for cookcut.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for cookcut operations.
///
/// Every variant is fatal: the first error aborts the run and is reported
/// by [`default_error_handler`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The data input directory does not exist
    #[error("Can not find data input directory '{0}'.")]
    InputDirectoryNotFound(String),

    /// The template directory does not exist, neither as given nor relative to
    /// the working directory
    #[error("Can not find template directory '{0}'.")]
    TemplateDirectoryNotFound(String),

    /// A data file could not be opened or read
    #[error("Can not read '{file}': {source}.")]
    ReadError {
        file: String,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV content
    #[error("CSV error in '{file}': {source}.")]
    CsvError {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A CSV header carries the reserved key column without the reserved value column
    #[error("{key_column} is defined without {value_column} in '{file}'.")]
    CsvKeyWithoutValue {
        file: String,
        key_column: &'static str,
        value_column: &'static str,
    },

    /// Malformed YAML content
    #[error("YAML error in '{file}': {source}.")]
    YamlError {
        file: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Represents errors that occur while serializing the template context
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// An invalid copy-without-render glob
    #[error("Invalid pattern '{pattern}': {source}.")]
    PatternError {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The render engine could not be started or reported a failure
    #[error("Render error: {0}.")]
    RenderError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("ERROR: {err}");
    std::process::exit(1);
}
