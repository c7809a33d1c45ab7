//! Version identifier read from the environment

use std::fmt;

use crate::error::{PackError, PackResult};

/// Non-empty version identifier. No format validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Read the version through `get_env`; absent and empty are both errors
    pub fn from_lookup(var: &str, get_env: impl Fn(&str) -> Option<String>) -> PackResult<Self> {
        get_env(var)
            .and_then(Self::new)
            .ok_or_else(|| PackError::MissingVersion {
                var: var.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
