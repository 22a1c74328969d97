//! Shortlink entity mapping a path segment to a destination URL.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A shortlink mapping.
///
/// `id` is the path segment users type after the host. It is compared
/// case-insensitively by every storage backend, so `Repo` and `repo` name the
/// same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlinkRecord {
    pub id: String,
    pub long_url: String,
    /// Selects 307 (method and body preserved) over 302.
    #[serde(default = "default_true")]
    pub preserve_http_method: bool,
    /// Inactive records redirect to the fallback as if they did not exist.
    #[serde(default = "default_true")]
    pub active: bool,
}

impl ShortlinkRecord {
    /// Creates an active record that preserves the HTTP method.
    pub fn new(id: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            long_url: long_url.into(),
            preserve_http_method: true,
            active: true,
        }
    }

    pub fn with_preserve_http_method(mut self, preserve: bool) -> Self {
        self.preserve_http_method = preserve;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns the case-folded key used for storage and cache lookups.
    pub fn key(&self) -> String {
        storage_key(&self.id)
    }
}

/// Folds a shortlink id into its canonical lookup key.
///
/// Folding is ASCII-only so the result does not depend on the host locale.
pub fn storage_key(id: &str) -> String {
    id.to_ascii_lowercase()
}
