//! modpack - release packaging for the Better Hunter Highlights mod
//!
//! Stamps the version from the environment into `modinfo.ini` and bundles it
//! with the REFramework autorun script into a distributable zip archive.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod fs;
pub mod inspect;
pub mod packager;
pub mod stamp;
pub mod ui;
pub mod version;

// Re-exports for convenience
pub use archive::{ArchiveEntry, ArchiveSummary, EntryInfo};
pub use config::{Compression, ConfigWarning, PackConfig};
pub use error::{PackError, PackResult};
pub use events::{JsonEventSink, NoopEventSink, PackEvent, PackEventSink};
pub use inspect::{inspect, InspectReport};
pub use packager::{PackReport, Packager};
pub use stamp::{stamp_version, StampOutcome, StampedFile};
pub use version::Version;
