//! Zip archive creation and inspection
//!
//! The archive is built in a temp file next to its final location and only
//! renamed into place once the zip stream is finished and synced, so the
//! reported size always describes bytes that are on disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::config::Compression;
use crate::error::{PackError, PackResult};
use crate::fs::parent_dir;

/// A file on disk and the name it gets inside the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub source: PathBuf,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// What a finished archive looks like on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Total size of the archive file
    pub bytes: u64,
    /// `sha256:<hex>` of the archive file
    pub sha256: String,
    pub entries: Vec<String>,
}

/// Entry metadata as read back from an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
}

/// Write `entries` into a fresh zip archive at `path`, replacing any old one
pub fn write_archive(
    path: &Path,
    entries: &[ArchiveEntry],
    compression: Compression,
) -> PackResult<ArchiveSummary> {
    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PackError::io(dir, e))?;

    let options = SimpleFileOptions::default()
        .compression_method(compression.method())
        .unix_permissions(0o644);

    {
        let mut zip = ZipWriter::new(BufWriter::new(tmp.as_file_mut()));
        for entry in entries {
            tracing::debug!(entry = %entry.name, source = %entry.source.display(), "adding entry");
            let mut source =
                File::open(&entry.source).map_err(|e| PackError::io(&entry.source, e))?;
            zip.start_file(entry.name.as_str(), options)
                .map_err(|e| PackError::archive(path, e))?;
            io::copy(&mut source, &mut zip).map_err(|e| PackError::io(&entry.source, e))?;
        }

        let mut out = zip.finish().map_err(|e| PackError::archive(path, e))?;
        out.flush().map_err(|e| PackError::io(path, e))?;
    }

    tmp.as_file()
        .sync_all()
        .map_err(|e| PackError::io(tmp.path(), e))?;

    // Measured on the synced temp file so nothing can fail once it is in place.
    let bytes = tmp
        .as_file()
        .metadata()
        .map_err(|e| PackError::io(tmp.path(), e))?
        .len();
    let sha256 = hash_file(tmp.path())?;
    tmp.persist(path).map_err(|e| PackError::io(path, e.error))?;
    tracing::debug!(path = %path.display(), bytes, %sha256, "archive finalized");

    Ok(ArchiveSummary {
        path: path.to_path_buf(),
        bytes,
        sha256,
        entries: entries.iter().map(|e| e.name.clone()).collect(),
    })
}

/// List the entries of an existing archive in stored order
pub fn list_entries(path: &Path) -> PackResult<Vec<EntryInfo>> {
    let file = File::open(path).map_err(|e| PackError::io(path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| PackError::archive(path, e))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| PackError::archive(path, e))?;
        entries.push(EntryInfo {
            name: entry.name().to_string(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
        });
    }
    Ok(entries)
}

/// Compute the `sha256:`-prefixed hash of a file
pub fn hash_file(path: &Path) -> PackResult<String> {
    let mut file = File::open(path).map_err(|e| PackError::io(path, e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| PackError::io(path, e))?;
    Ok(format!("sha256:{:x}", hasher.finalize()))
}
