//! Cache trait sitting between the repository and storage.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::domain::entities::ShortlinkRecord;
use crate::error::AppError;

/// Storage lookup handed to the cache on a miss.
pub type ResolveFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<ShortlinkRecord>, AppError>> + Send + 'a>>;

/// Starts a fresh storage lookup each time it is called.
pub type Resolver<'a> = Box<dyn Fn() -> ResolveFuture<'a> + Send + Sync + 'a>;

/// Cache for shortlink lookups.
///
/// Keys are already case-folded by the caller. Both hits and confirmed
/// misses (`None`) may be cached; errors never are.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MokaShortlinkCache`] - In-process cache with single-flight loads
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait ShortlinkCache: Send + Sync {
    /// Returns the cached value for `key`, or calls `resolve` to load it.
    ///
    /// Implementations that coalesce guarantee that concurrent callers for
    /// the same uncached key share one storage lookup and all observe the
    /// same result. A value loaded before the last [`invalidate`] of `key`
    /// is never returned; `resolve` is called again instead.
    ///
    /// [`invalidate`]: ShortlinkCache::invalidate
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `resolve`.
    async fn get_or_resolve<'a>(
        &'a self,
        key: &'a str,
        resolve: Resolver<'a>,
    ) -> Result<Option<ShortlinkRecord>, AppError>;

    /// Drops any cached value for `key` and any lookup of it still in flight.
    ///
    /// Called after a record is written, so every lookup that starts
    /// afterwards sees the new value.
    async fn invalidate(&self, key: &str);

    /// Number of entries currently held.
    fn entry_count(&self) -> u64;

    /// Human-readable backend name for logs and health output.
    fn name(&self) -> &'static str;
}
