//! Shortlink resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{ShortlinkRecord, storage_key};
use crate::domain::repositories::{ShortlinkStorage, ensure_id};
use crate::error::AppError;
use crate::infrastructure::cache::ShortlinkCache;
use crate::utils::url_validator::validate_long_url;

/// Core read path from a shortlink id to its record.
///
/// Lookups go through the cache, which decides whether concurrent requests
/// for the same id share a single storage call. Storage is assumed to be
/// expensive; with [`crate::infrastructure::cache::MokaShortlinkCache`] N
/// simultaneous lookups of an uncached id hit storage exactly once.
pub struct ShortlinkRepository {
    storage: Arc<dyn ShortlinkStorage>,
    cache: Arc<dyn ShortlinkCache>,
}

impl ShortlinkRepository {
    /// Creates a repository over the given storage and cache.
    pub fn new(storage: Arc<dyn ShortlinkStorage>, cache: Arc<dyn ShortlinkCache>) -> Self {
        Self { storage, cache }
    }

    /// Resolves a shortlink id to its record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if a record exists, active or not
    /// - `Ok(None)` if nothing is stored under `id`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is empty or whitespace; storage
    /// is not consulted in that case.
    /// Returns [`AppError::StorageUnavailable`] if storage cannot be reached.
    pub async fn resolve_shortlink(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError> {
        ensure_id(id, "id")?;

        let key = storage_key(id);
        let record = self
            .cache
            .get_or_resolve(&key, Box::new(move || self.storage.get_data(id)))
            .await?;

        debug!(id, found = record.is_some(), "Shortlink resolved");
        Ok(record)
    }

    /// Inserts or replaces a record, then drops its cached value.
    ///
    /// The destination URL is validated and stored in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is blank or the URL is not an
    /// absolute `http`/`https` URL.
    /// Returns [`AppError::StorageUnavailable`] if storage cannot be reached.
    pub async fn upsert_shortlink(&self, mut record: ShortlinkRecord) -> Result<(), AppError> {
        ensure_id(&record.id, "record.id")?;

        record.long_url = validate_long_url(&record.long_url).map_err(|e| {
            AppError::bad_request(
                "Invalid destination URL",
                json!({ "id": record.id, "reason": e.to_string() }),
            )
        })?;

        let key = record.key();
        let id = record.id.clone();
        self.storage.put_data(record).await?;
        self.cache.invalidate(&key).await;

        info!(id, "Shortlink upserted");
        Ok(())
    }

    /// Checks whether the storage backend is usable.
    pub async fn storage_healthy(&self) -> bool {
        self.storage.health_check().await
    }

    /// The cache in front of storage.
    pub fn cache(&self) -> &dyn ShortlinkCache {
        self.cache.as_ref()
    }
}
