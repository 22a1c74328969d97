//! Loading shortlink records from seed files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::api::dto::seed::SeedFile;
use crate::application::services::ShortlinkRepository;
use crate::domain::entities::ShortlinkRecord;
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed file {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("seed file {path} contains invalid records: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationErrors,
    },
}

/// Reads and validates a seed file.
///
/// Nothing is written; the whole file must be valid before any record is
/// returned.
///
/// # Errors
///
/// Returns [`SeedError`] if the file cannot be read, is not valid JSON, or
/// any record fails validation.
pub async fn read_seed_file(path: impl AsRef<Path>) -> Result<Vec<ShortlinkRecord>, SeedError> {
    let path = path.as_ref();

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let seed: SeedFile = serde_json::from_str(&contents).map_err(|source| SeedError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    seed.validate().map_err(|source| SeedError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(seed.records.into_iter().map(ShortlinkRecord::from).collect())
}

/// Upserts every record through the repository, in order.
///
/// Returns the number of records written. Stops at the first failure.
///
/// # Errors
///
/// Propagates the first [`AppError`] returned by
/// [`ShortlinkRepository::upsert_shortlink`].
pub async fn apply_seed(
    repository: &ShortlinkRepository,
    records: Vec<ShortlinkRecord>,
) -> Result<usize, AppError> {
    let mut written = 0;
    for record in records {
        repository.upsert_shortlink(record).await?;
        written += 1;
    }

    info!(count = written, "Seed records applied");
    Ok(written)
}
