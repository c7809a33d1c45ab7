//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Compression, PackConfig, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(PackConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: PackConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::InvalidConfig {
        origin: path.display().to_string(),
        message: e.to_string(),
    })?;

    config.source = Some(path.to_path_buf());

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<root>/modpack.toml`, falling back to defaults when it does not exist
pub fn load_for_root(root: &Path) -> PackResult<(PackConfig, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
        return Ok((PackConfig::default(), Vec::new()));
    }

    tracing::debug!("loading {}", path.display());
    load_with_warnings(&path)
}

/// Apply environment variable overrides (MODPACK_* prefix)
///
/// Invalid values are reported on `warnings` and leave the current value in place.
pub fn with_env_overrides<W: Write>(
    mut config: PackConfig,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> PackConfig {
    // MODPACK_DIST_DIR
    if let Some(dir) = get_env("MODPACK_DIST_DIR").filter(|d| !d.is_empty()) {
        config.layout.dist_dir = PathBuf::from(dir);
    }

    // MODPACK_COMPRESSION
    if let Some(value) = get_env("MODPACK_COMPRESSION") {
        let validator = EnvVarValidator::new("MODPACK_COMPRESSION", Compression::VALID_VALUES);
        config.archive.compression = validator.parse_with_writer(
            &value,
            Compression::parse,
            config.archive.compression,
            warnings,
        );
    }

    // MODPACK_ROLLBACK
    if let Some(value) = get_env("MODPACK_ROLLBACK") {
        config.build.rollback = !(value.eq_ignore_ascii_case("false") || value == "0");
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "name",
        "version_env",
        "layout",
        "modinfo",
        "asset",
        "dist_dir",
        "archive",
        "compression",
        "build",
        "rollback",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
