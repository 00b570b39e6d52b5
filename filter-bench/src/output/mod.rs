//! Output modules for rendering benchmark results.
//!
//! Supports table (comfy-table), summary, JSON, CSV, and progress spinner output.

pub mod csv;
pub mod json;
pub mod progress;
pub mod summary;
pub mod table;

use std::fs;
use std::path::Path;

/// Create the parent directory of `path` if it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}
