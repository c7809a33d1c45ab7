//! Error types for modpack
//!
//! Library code returns [`PackError`]; the binary wraps it in `anyhow` and
//! maps it back to an exit status with [`PackError::exit_code`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations
pub type PackResult<T> = Result<T, PackError>;

/// Exit status for configuration problems (missing version, bad modpack.toml)
pub const EXIT_CONFIG: i32 = 1;

/// Exit status for file or archive I/O failures
pub const EXIT_IO: i32 = 3;

/// Main error type for packaging operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Required version variable absent or empty
    #[error("{var} environment variable is not set.")]
    MissingVersion { var: String },

    /// Malformed or inconsistent modpack configuration
    #[error("invalid configuration in {origin}: {message}")]
    InvalidConfig { origin: String, message: String },

    /// File read/write failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Zip stream failure
    #[error("failed to write archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl PackError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn archive(path: impl AsRef<Path>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for the ConfigurationError family
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingVersion { .. } | Self::InvalidConfig { .. })
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_configuration() {
            EXIT_CONFIG
        } else {
            EXIT_IO
        }
    }
}
