//! JSON Event Sink
//!
//! Outputs pack events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use super::{PackEvent, PackEventSink};
use crate::stamp::StampOutcome;

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Build the JSON object for an event
fn event_to_json(event: &PackEvent) -> serde_json::Value {
    match event {
        PackEvent::Started { name, version } => serde_json::json!({
            "event": "start",
            "command": "build",
            "name": name,
            "version": version,
        }),

        PackEvent::Stamped {
            path,
            version,
            outcome,
        } => {
            let (status, previous) = match outcome {
                StampOutcome::Updated { previous } => ("updated", Some(previous.as_str())),
                StampOutcome::Unchanged => ("unchanged", None),
                StampOutcome::NoVersionLine => ("no_version_line", None),
            };
            serde_json::json!({
                "event": "stamped",
                "command": "build",
                "path": path.display().to_string(),
                "version": version,
                "status": status,
                "previous": previous,
            })
        }

        PackEvent::OutputDirReady { path, created } => serde_json::json!({
            "event": "dir_ready",
            "command": "build",
            "path": path.display().to_string(),
            "created": created,
        }),

        PackEvent::ArchiveCreated { summary } => serde_json::json!({
            "event": "archive_created",
            "command": "build",
            "path": summary.path.display().to_string(),
            "bytes": summary.bytes,
            "sha256": summary.sha256,
            "entries": summary.entries,
        }),

        PackEvent::RolledBack { path } => serde_json::json!({
            "event": "rolled_back",
            "command": "build",
            "path": path.display().to_string(),
        }),
    }
}

impl PackEventSink for JsonEventSink {
    fn on_event(&self, event: PackEvent) {
        self.write_event(event_to_json(&event));
    }
}
