//! Retry decorator for shortlink storage.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::warn;

use crate::domain::entities::ShortlinkRecord;
use crate::domain::repositories::{ShortlinkStorage, ensure_id};
use crate::error::AppError;

/// Retry bounds for transient storage failures.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first attempt. Zero disables retrying.
    pub max_retries: usize,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
    /// Upper bound for a single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    fn strategy(&self) -> impl Iterator<Item = Duration> + use<> {
        let base_ms = self.base_delay.as_millis().max(1) as u64;
        // Yields factor * 2^n for n = 1, 2, ..., i.e. roughly base_ms, 2 * base_ms, ...
        ExponentialBackoff::from_millis(2)
            .factor(base_ms / 2 + base_ms % 2)
            .max_delay(self.max_delay)
            .map(jitter)
            .take(self.max_retries)
    }
}

/// Wraps another storage and retries [`AppError::StorageUnavailable`]
/// failures with exponential backoff and jitter.
///
/// Invalid arguments are rejected before the first attempt and never retried.
pub struct RetryingStorage {
    inner: Arc<dyn ShortlinkStorage>,
    policy: RetryPolicy,
}

impl RetryingStorage {
    pub fn new(inner: Arc<dyn ShortlinkStorage>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

fn should_retry(operation: &'static str) -> impl FnMut(&AppError) -> bool {
    move |e: &AppError| {
        let transient = e.is_transient();
        if transient {
            warn!(operation, error = %e, "Transient storage failure, retrying");
        }
        transient
    }
}

#[async_trait]
impl ShortlinkStorage for RetryingStorage {
    async fn get_data(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError> {
        ensure_id(id, "id")?;

        RetryIf::start(
            self.policy.strategy(),
            || self.inner.get_data(id),
            should_retry("get_data"),
        )
        .await
    }

    async fn put_data(&self, record: ShortlinkRecord) -> Result<(), AppError> {
        ensure_id(&record.id, "record.id")?;

        RetryIf::start(
            self.policy.strategy(),
            || self.inner.put_data(record.clone()),
            should_retry("put_data"),
        )
        .await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}
