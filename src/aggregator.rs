//! Collects every data file of the input directory into one namespace.

use crate::context::{Context, Namespace};
use crate::error::{Error, Result};
use crate::loader::{load_data_file, LoadOptions};
use indexmap::map::Entry;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves the data input directory against the working directory.
/// Absolute paths are kept as they are.
///
/// # Errors
/// * `Error::InputDirectoryNotFound` if the resolved path is not a directory
pub fn resolve_input_dir<P: AsRef<Path>>(input_dir: P) -> Result<PathBuf> {
    let input_dir = std::env::current_dir()?.join(input_dir);
    if !input_dir.is_dir() {
        return Err(Error::InputDirectoryNotFound(input_dir.display().to_string()));
    }
    Ok(input_dir)
}

/// Namespace key of a data file: the lowercased file name without its extension.
pub fn namespace_key<P: AsRef<Path>>(path: P) -> Option<String> {
    let stem = path.as_ref().file_stem()?;
    Some(stem.to_string_lossy().to_lowercase())
}

/// Loads every supported file directly inside `input_dir`.
///
/// Files are visited in file name order, subdirectories are not descended into
/// and symlinks are followed. When two files map to the same key the later one
/// replaces the earlier and a warning is logged.
///
/// # Errors
/// * `Error::InputDirectoryNotFound` if `input_dir` does not exist
/// * Any error of the individual readers; the first one aborts the scan
pub fn collect_namespace<P: AsRef<Path>>(input_dir: P, options: &LoadOptions) -> Result<Namespace> {
    let input_dir = resolve_input_dir(input_dir)?;
    debug!("Reading data files from {}", input_dir.display());

    let mut namespace = Namespace::new();
    let mut origins: Vec<PathBuf> = Vec::new();

    let entries = WalkDir::new(&input_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            debug!("Skipping '{}': not a regular file", entry.path().display());
            continue;
        }

        let path = entry.path();
        let Some(data) = load_data_file(path, options)? else {
            continue;
        };
        let Some(key) = namespace_key(path) else {
            continue;
        };

        match namespace.entry(key) {
            Entry::Occupied(mut occupied) => {
                let previous = &origins[occupied.index()];
                warn!(
                    "'{}' replaces the data of '{}' under key '{}'",
                    path.display(),
                    previous.display(),
                    occupied.key()
                );
                origins[occupied.index()] = path.to_path_buf();
                occupied.insert(data);
            }
            Entry::Vacant(vacant) => {
                origins.push(path.to_path_buf());
                vacant.insert(data);
            }
        }
    }

    debug!("Loaded {} data file(s)", namespace.len());
    Ok(namespace)
}

/// Builds the full render context from the input directory.
pub fn build_context<P, S>(input_dir: P, options: &LoadOptions, copy_without_render: &[S]) -> Result<Context>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let namespace = collect_namespace(input_dir, options)?;
    Context::new(namespace, copy_without_render)
}
