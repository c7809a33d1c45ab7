//! Local file helpers
//!
//! Every function attaches the offending path to its error so the CLI can
//! report which file failed.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{PackError, PackResult};

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> PackResult<String> {
    fs::read_to_string(path).map_err(|e| PackError::io(path, e))
}

/// Write content to a file atomically
///
/// Writes to a temp file in the same directory, then renames it over the
/// target. Permissions of an existing target are carried over.
pub fn write_atomic(path: &Path, content: &[u8]) -> PackResult<()> {
    let parent = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| PackError::io(parent, e))?;

    tmp.write_all(content).map_err(|e| PackError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| PackError::io(tmp.path(), e))?;

    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| PackError::io(path, e))?;
    }

    tmp.persist(path).map_err(|e| PackError::io(path, e.error))?;
    Ok(())
}

/// Create `path` and any missing parents.
///
/// Returns `true` if the directory had to be created.
pub fn ensure_dir(path: &Path) -> PackResult<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(|e| PackError::io(path, e))?;
    Ok(true)
}

/// Directory a relative or absolute file path lives in
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
