//! Version stamping for `modinfo.ini`
//!
//! [`stamp_version`] rewrites the first line that starts with `version=`
//! and leaves every other byte of the file alone, line endings included.
//! [`StampedFile`] applies that to a file on disk and restores the original
//! content when dropped without [`StampedFile::commit`], unless rollback is
//! disabled.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::error::PackResult;
use crate::fs;
use crate::version::Version;

/// Result of stamping a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StampOutcome {
    /// The `version=` line held a different value
    Updated { previous: String },
    /// The `version=` line already held this version
    Unchanged,
    /// No line starts with `version=`; content was left as is
    NoVersionLine,
}

impl StampOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

fn version_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // CRLF mode: `\r`, `\n` and `\r\n` all end a line, and `.` never eats the `\r`.
    RE.get_or_init(|| Regex::new(r"(?mR)^version=(.*)$").expect("version line pattern"))
}

/// Replace the value of the first `version=` line in `content`
pub fn stamp_version(content: &str, version: &Version) -> (String, StampOutcome) {
    let Some(caps) = version_line().captures(content) else {
        return (content.to_string(), StampOutcome::NoVersionLine);
    };

    let previous = &caps[1];
    if previous == version.as_str() {
        return (content.to_string(), StampOutcome::Unchanged);
    }

    let line = format!("version={}", version);
    let stamped = version_line().replacen(content, 1, NoExpand(&line));
    (
        stamped.into_owned(),
        StampOutcome::Updated {
            previous: previous.to_string(),
        },
    )
}

/// A configuration file stamped on disk, restored on drop unless committed
#[derive(Debug)]
pub struct StampedFile {
    path: PathBuf,
    original: String,
    outcome: StampOutcome,
    rollback: bool,
    committed: bool,
}

impl StampedFile {
    /// Read `path`, stamp `version` into it and write it back
    pub fn apply(path: &Path, version: &Version, rollback: bool) -> PackResult<Self> {
        let original = fs::read_text(path)?;
        let (content, outcome) = stamp_version(&original, version);

        match &outcome {
            StampOutcome::Updated { previous } => {
                tracing::debug!(path = %path.display(), %previous, %version, "stamping version");
                fs::write_atomic(path, content.as_bytes())?;
            }
            StampOutcome::Unchanged => {
                tracing::debug!(path = %path.display(), "version already current");
            }
            StampOutcome::NoVersionLine => {
                tracing::debug!(path = %path.display(), "no `version=` line found");
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            original,
            outcome,
            rollback,
            committed: false,
        })
    }

    pub fn outcome(&self) -> &StampOutcome {
        &self.outcome
    }

    /// Keep the stamped content
    pub fn commit(mut self) -> StampOutcome {
        self.committed = true;
        self.outcome.clone()
    }

    fn restore(&self) -> PackResult<()> {
        fs::write_atomic(&self.path, self.original.as_bytes())
    }
}

impl Drop for StampedFile {
    fn drop(&mut self) {
        if self.committed || !self.rollback || !self.outcome.changed() {
            return;
        }

        match self.restore() {
            Ok(()) => tracing::info!(path = %self.path.display(), "restored original version"),
            Err(e) => tracing::error!(path = %self.path.display(), "rollback failed: {}", e),
        }
    }
}
