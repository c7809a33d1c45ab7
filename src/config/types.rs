//! Configuration type definitions

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{PackError, PackResult};

use super::loader::{self, ConfigWarning};

/// Project-level config file name, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "modpack.toml";

/// Paths of the packaged files, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_modinfo")]
    pub modinfo: PathBuf,

    #[serde(default = "default_asset")]
    pub asset: PathBuf,

    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default = "default_archive")]
    pub archive: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            modinfo: default_modinfo(),
            asset: default_asset(),
            dist_dir: default_dist_dir(),
            archive: default_archive(),
        }
    }
}

fn default_modinfo() -> PathBuf {
    PathBuf::from("modinfo.ini")
}

fn default_asset() -> PathBuf {
    ["reframework", "autorun", "better_hunter_highlights.lua"]
        .iter()
        .collect()
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_archive() -> String {
    "Better-Hunter-Highlights.zip".to_string()
}

/// Compression method for archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

impl Compression {
    pub const VALID_VALUES: &'static [&'static str] = &["deflated", "stored"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "deflated" | "deflate" => Some(Self::Deflated),
            "stored" | "store" | "none" => Some(Self::Stored),
            _ => None,
        }
    }

    pub fn method(self) -> zip::CompressionMethod {
        match self {
            Self::Deflated => zip::CompressionMethod::Deflated,
            Self::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Archive configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ArchiveConfig {
    #[serde(default)]
    pub compression: Compression,
}

/// Build behaviour configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    /// Restore modinfo.ini when packaging fails after it was stamped
    #[serde(default = "default_true")]
    pub rollback: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { rollback: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackConfig {
    /// Display name used in progress output
    #[serde(default = "default_name")]
    pub name: String,

    /// Environment variable holding the version identifier
    #[serde(default = "default_version_env")]
    pub version_env: String,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub build: BuildConfig,

    /// File the values were loaded from; `None` for built-in defaults
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version_env: default_version_env(),
            layout: LayoutConfig::default(),
            archive: ArchiveConfig::default(),
            build: BuildConfig::default(),
            source: None,
        }
    }
}

fn default_name() -> String {
    "Better Hunter Highlights".to_string()
}

fn default_version_env() -> String {
    "VERSION".to_string()
}

impl PackConfig {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<root>/modpack.toml` if present, defaults otherwise.
    ///
    /// Environment overrides are not applied here; see [`PackConfig::with_env_overrides`].
    pub fn load_for_root(root: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_root(root)
    }

    /// Apply environment variable overrides (MODPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok(), &mut std::io::stderr())
    }

    pub fn modinfo_path(&self, root: &Path) -> PathBuf {
        root.join(&self.layout.modinfo)
    }

    pub fn asset_path(&self, root: &Path) -> PathBuf {
        root.join(&self.layout.asset)
    }

    pub fn dist_path(&self, root: &Path) -> PathBuf {
        root.join(&self.layout.dist_dir)
    }

    pub fn archive_path(&self, root: &Path) -> PathBuf {
        self.dist_path(root).join(&self.layout.archive)
    }

    /// Entry name of the configuration file: its base name
    pub fn modinfo_entry(&self) -> PackResult<String> {
        match self.layout.modinfo.file_name() {
            Some(name) => Ok(name.to_string_lossy().into_owned()),
            None => Err(self.invalid(format!(
                "layout.modinfo '{}' has no file name",
                self.layout.modinfo.display()
            ))),
        }
    }

    /// Entry name of the asset: its project-relative path with `/` separators
    pub fn asset_entry(&self) -> PackResult<String> {
        let mut parts = Vec::new();
        for component in self.layout.asset.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => {
                    return Err(self.invalid(format!(
                        "layout.asset '{}' must be a relative path inside the project",
                        self.layout.asset.display()
                    )))
                }
            }
        }

        if parts.is_empty() {
            return Err(self.invalid("layout.asset is empty".to_string()));
        }
        Ok(parts.join("/"))
    }

    /// Check the layout before anything is touched on disk
    pub fn validate(&self) -> PackResult<()> {
        if self.version_env.trim().is_empty() {
            return Err(self.invalid("version_env must not be empty".to_string()));
        }
        if self.layout.archive.is_empty() || self.layout.archive.contains(['/', '\\']) {
            return Err(self.invalid(format!(
                "layout.archive '{}' must be a plain file name",
                self.layout.archive
            )));
        }

        let modinfo = self.modinfo_entry()?;
        let asset = self.asset_entry()?;
        if modinfo == asset {
            return Err(self.invalid(format!(
                "layout.modinfo and layout.asset map to the same entry '{}'",
                modinfo
            )));
        }
        Ok(())
    }

    /// Where the configuration values came from, for error messages
    pub fn origin(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        }
    }

    fn invalid(&self, message: String) -> PackError {
        PackError::InvalidConfig {
            origin: self.origin(),
            message,
        }
    }
}
