//! Console Event Sink
//!
//! Human-readable progress lines for interactive builds.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crossterm::style::{style, Color, Stylize};

use super::theme::{colors, Icons};
use crate::events::{PackEvent, PackEventSink};
use crate::stamp::StampOutcome;

/// Styling decisions shared by every console line
#[derive(Debug, Clone, Copy)]
pub struct ConsoleStyle {
    pub color: bool,
    pub icons: Icons,
}

impl ConsoleStyle {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            color,
            icons: Icons::new(unicode),
        }
    }

    pub fn paint<D: Display>(&self, text: D, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, message: &str) -> String {
        format!("{} {}", self.paint(self.icons.success, colors::SUCCESS), message)
    }

    pub fn warning(&self, message: &str) -> String {
        format!("{} {}", self.paint(self.icons.warning, colors::WARNING), message)
    }

    pub fn error(&self, message: &str) -> String {
        format!(
            "{} {}",
            self.paint(self.icons.error, colors::ERROR),
            self.paint(message, colors::ERROR)
        )
    }

    pub fn detail(&self, message: &str) -> String {
        format!("  {} {}", self.icons.arrow, self.paint(message, colors::DIM))
    }
}

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    style: ConsoleStyle,
}

impl ConsoleEventSink {
    pub fn stdout(style: ConsoleStyle) -> Self {
        Self::with_writer(io::stdout(), style)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, style: ConsoleStyle) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            style,
        }
    }

    fn render(&self, event: &PackEvent) -> Vec<String> {
        let s = &self.style;
        match event {
            PackEvent::Started { name, version } => vec![format!(
                "{} Building {} mod version {}",
                s.paint(s.icons.build, colors::INFO),
                name,
                version
            )],

            PackEvent::Stamped {
                path,
                version,
                outcome,
            } => {
                let file = file_label(path);
                let line = match outcome {
                    StampOutcome::Updated { .. } => {
                        s.success(&format!("Updated {} to version {}", file, version))
                    }
                    StampOutcome::Unchanged => {
                        s.success(&format!("{} already at version {}", file, version))
                    }
                    StampOutcome::NoVersionLine => {
                        s.warning(&format!("No version= line in {}; left unchanged", file))
                    }
                };
                vec![line]
            }

            PackEvent::OutputDirReady { path, created } => {
                if *created {
                    vec![s.success(&format!("Created output directory {}", path.display()))]
                } else {
                    Vec::new()
                }
            }

            PackEvent::ArchiveCreated { summary } => vec![
                s.success(&format!("Created ZIP archive ({} total bytes)", summary.bytes)),
                s.detail(&summary.path.display().to_string()),
                s.detail(&summary.sha256),
            ],

            PackEvent::RolledBack { path } => vec![s.warning(&format!(
                "Restored {} to its previous content",
                file_label(path)
            ))],
        }
    }
}

impl PackEventSink for ConsoleEventSink {
    fn on_event(&self, event: PackEvent) {
        let lines = self.render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
