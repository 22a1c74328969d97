//! In-process shortlink cache backed by Moka.

use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use moka::future::Cache;
use tracing::{debug, trace};

use super::service::{Resolver, ShortlinkCache};
use crate::domain::entities::ShortlinkRecord;
use crate::error::AppError;

/// Reloads attempted before a lookup under constant writes bypasses the cache.
const MAX_STALE_RELOADS: usize = 3;

/// A loaded value stamped with the key's write generation at load start.
#[derive(Debug, Clone)]
struct Stamped {
    generation: u64,
    record: Option<ShortlinkRecord>,
}

/// Concurrent in-memory cache with single-flight loading.
///
/// Values are `Option<ShortlinkRecord>` so that confirmed misses are cached
/// as well. Moka's `try_get_with` coalesces concurrent loads of the same key:
/// one caller runs the storage lookup, the rest wait for its result. If that
/// caller is cancelled, a waiting caller takes over the load.
///
/// `invalidate` cannot cancel a load that is already running, so every
/// cached value carries the write generation of its key as of the moment
/// its storage read began. Values older than the current generation are
/// discarded and reloaded.
pub struct MokaShortlinkCache {
    cache: Cache<String, Stamped>,
    generations: DashMap<String, u64>,
}

impl MokaShortlinkCache {
    /// Creates a cache bounded by `max_capacity` entries, each living at most `ttl`.
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            generations: DashMap::new(),
        }
    }

    fn generation(&self, key: &str) -> u64 {
        self.generations.get(key).map(|g| *g).unwrap_or(0)
    }
}

#[async_trait]
impl ShortlinkCache for MokaShortlinkCache {
    async fn get_or_resolve<'a>(
        &'a self,
        key: &'a str,
        resolve: Resolver<'a>,
    ) -> Result<Option<ShortlinkRecord>, AppError> {
        trace!(key, "Shortlink cache lookup");

        for _ in 0..MAX_STALE_RELOADS {
            let stamped = self
                .cache
                .try_get_with(key.to_string(), async {
                    debug!(key, "Cache MISS, loading from storage");
                    let generation = self.generation(key);
                    let record = resolve().await?;
                    Ok::<_, AppError>(Stamped { generation, record })
                })
                .await
                .map_err(|e| e.as_ref().clone())?;

            if stamped.generation == self.generation(key) {
                return Ok(stamped.record);
            }

            debug!(key, "Cache STALE, value predates last write");
            self.cache.invalidate(key).await;
        }

        debug!(key, "Key is being rewritten, reading storage directly");
        resolve().await
    }

    async fn invalidate(&self, key: &str) {
        *self.generations.entry(key.to_string()).or_insert(0) += 1;
        self.cache.invalidate(key).await;
        debug!(key, "Cache INVALIDATE");
    }

    fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    fn name(&self) -> &'static str {
        "moka"
    }
}
