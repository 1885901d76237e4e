//! Data file loading.
//! Sniffs the format of a data file from its extension and dispatches it
//! to the matching reader.

use crate::error::Result;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::path::Path;

pub mod csv_reader;
pub mod yaml_reader;

/// One CSV row: trimmed column name to trimmed cell text.
/// A cell missing from a short row is `None`.
pub type Record = IndexMap<String, Option<String>>;

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Yaml,
}

impl DataFormat {
    /// Detects the format from the file extension, ignoring case.
    /// Returns `None` for unknown extensions and for files without one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFormat::Csv => write!(f, "CSV"),
            DataFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Parsed content of a single data file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataSet {
    /// CSV rows in file order
    Records(Vec<Record>),
    /// Variables defined by CSV rows through the reserved key/value columns
    Variables(IndexMap<String, Option<String>>),
    /// Any structure a YAML file yields
    Document(serde_json::Value),
}

/// Options that change how data files are read.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Read all documents of a YAML file instead of the first one
    pub load_all_documents: bool,
}

/// Loads a data file with the reader its extension selects.
///
/// # Returns
/// * `Result<Option<DataSet>>` - Parsed content, or `None` when the extension is not supported
pub fn load_data_file<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Option<DataSet>> {
    let path = path.as_ref();
    let Some(format) = DataFormat::from_path(path) else {
        debug!("Skipping '{}': unsupported extension", path.display());
        return Ok(None);
    };

    debug!("Loading {} data from '{}'", format, path.display());
    let data = match format {
        DataFormat::Csv => csv_reader::read_csv_file(path)?,
        DataFormat::Yaml => yaml_reader::read_yaml_file(path, options.load_all_documents)?,
    };
    Ok(Some(data))
}
