//! Template directory handling.
//! Locates the template directory and writes the render context into it.

use crate::constants::CONTEXT_FILE;
use crate::context::Context;
use crate::error::{Error, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Locates the template directory.
///
/// The path is used as given when it names a directory; otherwise it is
/// resolved against the working directory.
///
/// # Errors
/// * `Error::TemplateDirectoryNotFound` if neither location is a directory
pub fn resolve_template_dir<P: AsRef<Path>>(template_dir: P) -> Result<PathBuf> {
    let template_dir = template_dir.as_ref();
    if template_dir.is_dir() {
        return Ok(template_dir.to_path_buf());
    }

    let from_cwd = std::env::current_dir()?.join(template_dir);
    debug!("'{}' is not a directory, trying '{}'", template_dir.display(), from_cwd.display());
    if !from_cwd.is_dir() {
        return Err(Error::TemplateDirectoryNotFound(from_cwd.display().to_string()));
    }
    Ok(from_cwd)
}

/// Writes `context` into the template directory under the name the render
/// engine reads its variables from. An existing file is replaced.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written file
pub fn write_context_file<P: AsRef<Path>>(template_dir: P, context: &Context) -> Result<PathBuf> {
    let context_path = template_dir.as_ref().join(CONTEXT_FILE);
    let content = context.to_json_pretty()?;
    std::fs::write(&context_path, content)?;
    info!("Wrote {}", context_path.display());
    Ok(context_path)
}
