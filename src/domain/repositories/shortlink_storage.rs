//! Storage trait for shortlink records.

use crate::domain::entities::ShortlinkRecord;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;

/// Key-value persistence for shortlink records.
///
/// Keys are compared case-insensitively. Implementations are internally
/// synchronized: callers may share one instance across any number of tasks
/// without extra locking, and a `put_data` that has completed is visible to
/// every `get_data` started afterwards.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortlinkStorage`] - Process-local map
/// - [`crate::infrastructure::persistence::FileShortlinkStorage`] - JSON file on disk
/// - [`crate::infrastructure::persistence::RetryingStorage`] - Retry decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortlinkStorage: Send + Sync {
    /// Fetches the record stored under `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if no record uses this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is empty or whitespace.
    /// Returns [`AppError::StorageUnavailable`] if the backend cannot be reached.
    async fn get_data(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError>;

    /// Inserts or fully replaces the record keyed by `record.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `record.id` is empty or whitespace.
    /// Returns [`AppError::StorageUnavailable`] if the backend cannot be reached.
    async fn put_data(&self, record: ShortlinkRecord) -> Result<(), AppError>;

    /// Checks whether the backend is usable.
    async fn health_check(&self) -> bool;
}

/// Rejects empty or whitespace-only shortlink ids.
pub fn ensure_id(id: &str, argument: &'static str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::bad_request(
            "Shortlink id must not be empty",
            json!({ "argument": argument }),
        ));
    }
    Ok(())
}
