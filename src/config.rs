//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `FALLBACK_URL` - Where unknown or inactive shortlinks redirect to
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STORAGE_BACKEND` - `memory` or `file` (default: `memory`)
//! - `STORAGE_FILE` - JSON file path, required when `STORAGE_BACKEND=file`
//! - `SEED_SAMPLE` - Seed the in-memory backend with the `Test1` sample (default: `true`)
//! - `SEED_FILE` - JSON file of records upserted at startup
//! - `CACHE_ENABLED` - Cache lookups in process (default: `true`)
//! - `CACHE_CAPACITY` - Maximum cached entries (default: 10000)
//! - `CACHE_TTL_SECONDS` - Lifetime of a cached entry (default: 300)
//! - `STORAGE_RETRY_ATTEMPTS` - Retries for transient storage failures (default: 3, max: 10)
//! - `STORAGE_RETRY_BASE_DELAY_MS` - First retry delay, doubled per attempt (default: 50)
//! - `STATIC_DIR` - Directory of static assets and the SPA `index.html` (default: `public`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::utils::url_validator::validate_long_url;

/// Which storage implementation backs the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => anyhow::bail!("STORAGE_BACKEND must be 'memory' or 'file', got '{}'", other),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub fallback_url: String,
    pub storage_backend: StorageBackend,
    pub storage_file: Option<String>,
    /// Only meaningful for the in-memory backend.
    pub seed_sample: bool,
    pub seed_file: Option<String>,
    pub cache_enabled: bool,
    pub cache_capacity: u64,
    pub cache_ttl_seconds: u64,
    pub storage_retry_attempts: usize,
    pub storage_retry_base_delay_ms: u64,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `FALLBACK_URL` is missing or `STORAGE_BACKEND` is unknown.
    pub fn from_env() -> Result<Self> {
        let fallback_url = env::var("FALLBACK_URL")
            .context("FALLBACK_URL must be set to the redirect target for unknown shortlinks")?;

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .parse()?;

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            fallback_url,
            storage_backend,
            storage_file: non_empty_var("STORAGE_FILE"),
            seed_sample: flag("SEED_SAMPLE", true),
            seed_file: non_empty_var("SEED_FILE"),
            cache_enabled: flag("CACHE_ENABLED", true),
            cache_capacity: parsed("CACHE_CAPACITY", 10_000),
            cache_ttl_seconds: parsed("CACHE_TTL_SECONDS", 300),
            storage_retry_attempts: parsed("STORAGE_RETRY_ATTEMPTS", 3),
            storage_retry_base_delay_ms: parsed("STORAGE_RETRY_BASE_DELAY_MS", 50),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `fallback_url` is not an absolute `http`/`https` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the file backend is selected without `STORAGE_FILE`
    /// - cache or retry settings are out of range
    pub fn validate(&self) -> Result<()> {
        validate_long_url(&self.fallback_url)
            .with_context(|| format!("FALLBACK_URL is not a valid URL: '{}'", self.fallback_url))?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_backend == StorageBackend::File && self.storage_file.is_none() {
            anyhow::bail!("STORAGE_FILE must be set when STORAGE_BACKEND is 'file'");
        }

        if self.cache_enabled {
            if self.cache_capacity == 0 {
                anyhow::bail!("CACHE_CAPACITY must be greater than 0");
            }
            if self.cache_ttl_seconds == 0 {
                anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
            }
        }

        if self.storage_retry_attempts > 10 {
            anyhow::bail!(
                "STORAGE_RETRY_ATTEMPTS is too large (max: 10), got {}",
                self.storage_retry_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Fallback URL: {}", self.fallback_url);

        match (&self.storage_backend, &self.storage_file) {
            (StorageBackend::File, Some(path)) => tracing::info!("  Storage: file ({})", path),
            (backend, _) => tracing::info!("  Storage: {}", backend),
        }

        if self.cache_enabled {
            tracing::info!(
                "  Cache: enabled (capacity {}, TTL {}s)",
                self.cache_capacity,
                self.cache_ttl_seconds
            );
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!(
            "  Storage retries: {} (base delay {}ms)",
            self.storage_retry_attempts,
            self.storage_retry_base_delay_ms
        );
        tracing::info!("  Static assets: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}

fn parsed<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
