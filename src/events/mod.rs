//! Pack Event Port
//!
//! Progress of a build is reported as a stream of [`PackEvent`]s so the same
//! packager drives the human-readable console output, the NDJSON stream and
//! silent test runs.

mod json;

pub use json::JsonEventSink;

use std::path::PathBuf;

use crate::archive::ArchiveSummary;
use crate::stamp::StampOutcome;

/// Event emitted while packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackEvent {
    /// Build started with a valid version
    Started { name: String, version: String },

    /// Configuration file processed
    Stamped {
        path: PathBuf,
        version: String,
        outcome: StampOutcome,
    },

    /// Output directory exists
    OutputDirReady { path: PathBuf, created: bool },

    /// Archive finished and synced to disk
    ArchiveCreated { summary: ArchiveSummary },

    /// Configuration file restored after a failed build
    RolledBack { path: PathBuf },
}

/// Trait for receiving pack events
///
/// Implementations:
/// - `ConsoleEventSink`: progress lines in the terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait PackEventSink: Send + Sync {
    fn on_event(&self, event: PackEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PackEventSink for NoopEventSink {
    fn on_event(&self, _event: PackEvent) {}
}
