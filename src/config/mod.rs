//! Configuration module for modpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MODPACK_*)
//! 3. Project config (modpack.toml in the project root)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{with_env_overrides, ConfigWarning};
pub use types::{
    ArchiveConfig, BuildConfig, Compression, LayoutConfig, PackConfig, CONFIG_FILE_NAME,
};
