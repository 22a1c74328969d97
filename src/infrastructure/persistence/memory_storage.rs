//! In-memory shortlink storage for development and tests.

use crate::domain::entities::{ShortlinkRecord, storage_key};
use crate::domain::repositories::{ShortlinkStorage, ensure_id};
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Sample record available out of the box for local testing.
pub const SAMPLE_SHORTLINK_ID: &str = "Test1";
pub const SAMPLE_SHORTLINK_URL: &str = "https://github.com/solari23/GoLinks";

/// Process-local storage backed by a sharded concurrent map.
///
/// Each key is guarded by its shard lock, so a put replaces the whole record
/// atomically and readers never observe a partially written value. The map
/// belongs to this instance; construct one at startup and share it behind an
/// `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryShortlinkStorage {
    records: DashMap<String, ShortlinkRecord>,
}

impl InMemoryShortlinkStorage {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Creates storage seeded with the sample `Test1` record.
    pub fn with_sample() -> Self {
        let storage = Self::new();
        let sample = ShortlinkRecord::new(SAMPLE_SHORTLINK_ID, SAMPLE_SHORTLINK_URL);
        storage.records.insert(sample.key(), sample);
        storage
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ShortlinkStorage for InMemoryShortlinkStorage {
    async fn get_data(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError> {
        ensure_id(id, "id")?;

        Ok(self
            .records
            .get(&storage_key(id))
            .map(|entry| entry.value().clone()))
    }

    async fn put_data(&self, record: ShortlinkRecord) -> Result<(), AppError> {
        ensure_id(&record.id, "record.id")?;

        self.records.insert(record.key(), record);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
