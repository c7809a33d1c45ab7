//! Read back a built archive and compare it with the configured layout

use std::path::{Path, PathBuf};

use crate::archive::{self, EntryInfo};
use crate::config::PackConfig;
use crate::error::PackResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub path: PathBuf,
    pub entries: Vec<EntryInfo>,
    /// Expected entries absent from the archive
    pub missing: Vec<String>,
    /// Entries the layout does not produce
    pub unexpected: Vec<String>,
}

impl InspectReport {
    pub fn matches_layout(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Inspect `path`, or the configured archive under `root` when `path` is `None`
pub fn inspect(root: &Path, config: &PackConfig, path: Option<&Path>) -> PackResult<InspectReport> {
    let path = match path {
        Some(p) => root.join(p),
        None => config.archive_path(root),
    };
    let expected = [config.modinfo_entry()?, config.asset_entry()?];

    let entries = archive::list_entries(&path)?;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    let missing = expected
        .iter()
        .filter(|want| !names.contains(&want.as_str()))
        .cloned()
        .collect();
    let unexpected = names
        .iter()
        .filter(|name| !expected.iter().any(|want| want == *name))
        .map(|name| name.to_string())
        .collect();

    Ok(InspectReport {
        path,
        entries,
        missing,
        unexpected,
    })
}
