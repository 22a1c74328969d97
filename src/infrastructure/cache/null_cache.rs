//! No-op cache implementation for disabled caching.

use super::service::{Resolver, ShortlinkCache};
use crate::domain::entities::ShortlinkRecord;
use crate::error::AppError;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that stores nothing.
///
/// Every lookup goes straight to storage and concurrent lookups are not
/// coalesced.
///
/// # Use Cases
///
/// - Deployments with `CACHE_ENABLED=false`
/// - Tests that need to observe every storage call
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortlinkCache for NullCache {
    async fn get_or_resolve<'a>(
        &'a self,
        _key: &'a str,
        resolve: Resolver<'a>,
    ) -> Result<Option<ShortlinkRecord>, AppError> {
        resolve().await
    }

    async fn invalidate(&self, _key: &str) {}

    fn entry_count(&self) -> u64 {
        0
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
