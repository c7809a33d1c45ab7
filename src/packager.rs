//! Packaging workflow
//!
//! `version check → stamp modinfo.ini → prepare dist dir → write archive`.
//! Every step is fatal on failure. When rollback is enabled, a failure after
//! stamping restores the configuration file to its original content.

use std::path::PathBuf;

use crate::archive::{self, ArchiveEntry, ArchiveSummary};
use crate::config::PackConfig;
use crate::error::PackResult;
use crate::events::{PackEvent, PackEventSink};
use crate::fs;
use crate::stamp::{StampOutcome, StampedFile};
use crate::version::Version;

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    pub version: Version,
    pub stamp: StampOutcome,
    pub archive: ArchiveSummary,
}

/// Drives one build of the mod archive
pub struct Packager<'a> {
    root: PathBuf,
    config: PackConfig,
    sink: &'a dyn PackEventSink,
}

impl<'a> Packager<'a> {
    pub fn new(root: impl Into<PathBuf>, config: PackConfig, sink: &'a dyn PackEventSink) -> Self {
        Self {
            root: root.into(),
            config,
            sink,
        }
    }

    /// Build with the version taken from the process environment
    pub fn run_from_env(&self) -> PackResult<PackReport> {
        self.run_with_lookup(|key| std::env::var(key).ok())
    }

    /// Build with the version looked up through `get_env`
    pub fn run_with_lookup(&self, get_env: impl Fn(&str) -> Option<String>) -> PackResult<PackReport> {
        // The layout names the variable, so it is checked before the lookup.
        self.config.validate()?;
        let version = Version::from_lookup(&self.config.version_env, get_env)?;
        self.run(&version)
    }

    /// Build the archive for `version`
    pub fn run(&self, version: &Version) -> PackResult<PackReport> {
        self.config.validate()?;
        let entries = [
            self.config.modinfo_entry()?,
            self.config.asset_entry()?,
        ];

        self.sink.on_event(PackEvent::Started {
            name: self.config.name.clone(),
            version: version.to_string(),
        });

        let modinfo = self.config.modinfo_path(&self.root);
        let stamped = StampedFile::apply(&modinfo, version, self.config.build.rollback)?;
        self.sink.on_event(PackEvent::Stamped {
            path: modinfo.clone(),
            version: version.to_string(),
            outcome: stamped.outcome().clone(),
        });

        match self.package(&entries) {
            Ok(summary) => {
                self.sink.on_event(PackEvent::ArchiveCreated {
                    summary: summary.clone(),
                });
                Ok(PackReport {
                    version: version.clone(),
                    stamp: stamped.commit(),
                    archive: summary,
                })
            }
            Err(e) => {
                let restoring = self.config.build.rollback && stamped.outcome().changed();
                drop(stamped);
                if restoring {
                    self.sink.on_event(PackEvent::RolledBack { path: modinfo });
                }
                Err(e)
            }
        }
    }

    fn package(&self, [modinfo_entry, asset_entry]: &[String; 2]) -> PackResult<ArchiveSummary> {
        let dist = self.config.dist_path(&self.root);
        let created = fs::ensure_dir(&dist)?;
        self.sink.on_event(PackEvent::OutputDirReady {
            path: dist,
            created,
        });

        let entries = [
            ArchiveEntry::new(modinfo_entry.as_str(), self.config.modinfo_path(&self.root)),
            ArchiveEntry::new(asset_entry.as_str(), self.config.asset_path(&self.root)),
        ];
        archive::write_archive(
            &self.config.archive_path(&self.root),
            &entries,
            self.config.archive.compression,
        )
    }
}
