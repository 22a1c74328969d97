//! JSON-file shortlink storage.
//!
//! Records are kept in memory for reads and written back to disk as a JSON
//! array on every put. Writes go to a sibling temporary file that is then
//! renamed over the target, so a crash mid-write leaves the previous file
//! intact.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::{ShortlinkRecord, storage_key};
use crate::domain::repositories::{ShortlinkStorage, ensure_id};
use crate::error::AppError;

/// Errors raised while loading or persisting the storage file.
#[derive(Debug, thiserror::Error)]
pub enum FileStorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed storage file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage file {path} contains a record with an empty id")]
    EmptyId { path: PathBuf },
}

impl From<FileStorageError> for AppError {
    fn from(e: FileStorageError) -> Self {
        AppError::storage_unavailable("Shortlink file storage failed", json!({ "reason": e.to_string() }))
    }
}

/// Durable storage backed by a single JSON file.
///
/// A `tokio` read-write lock serializes writers, so two concurrent puts can
/// never lose each other's update, and readers see either the old or the new
/// record, never a mix.
#[derive(Debug)]
pub struct FileShortlinkStorage {
    path: PathBuf,
    records: RwLock<HashMap<String, ShortlinkRecord>>,
}

impl FileShortlinkStorage {
    /// Opens the storage file, starting empty if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`FileStorageError`] if the file cannot be read, is not a
    /// JSON array of records, or contains a record with a blank id.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, FileStorageError> {
        let path = path.into();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => Self::parse(&path, &bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Storage file {} not found, starting empty", path.display());
                HashMap::new()
            }
            Err(source) => return Err(FileStorageError::Io { path, source }),
        };

        info!(
            "Loaded {} shortlink(s) from {}",
            records.len(),
            path.display()
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(path: &Path, bytes: &[u8]) -> Result<HashMap<String, ShortlinkRecord>, FileStorageError> {
        let list: Vec<ShortlinkRecord> =
            serde_json::from_slice(bytes).map_err(|source| FileStorageError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        let mut records = HashMap::with_capacity(list.len());
        for record in list {
            if record.id.trim().is_empty() {
                return Err(FileStorageError::EmptyId {
                    path: path.to_path_buf(),
                });
            }
            records.insert(record.key(), record);
        }
        Ok(records)
    }

    async fn persist(&self, records: &HashMap<String, ShortlinkRecord>) -> Result<(), FileStorageError> {
        let mut list: Vec<&ShortlinkRecord> = records.values().collect();
        list.sort_by_key(|record| record.key());

        let bytes = serde_json::to_vec_pretty(&list).map_err(|source| FileStorageError::Format {
            path: self.path.clone(),
            source,
        })?;

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|source| FileStorageError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| FileStorageError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!("Persisted {} shortlink(s) to {}", list.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

#[async_trait]
impl ShortlinkStorage for FileShortlinkStorage {
    async fn get_data(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError> {
        ensure_id(id, "id")?;

        let records = self.records.read().await;
        Ok(records.get(&storage_key(id)).cloned())
    }

    async fn put_data(&self, record: ShortlinkRecord) -> Result<(), AppError> {
        ensure_id(&record.id, "record.id")?;

        let mut records = self.records.write().await;

        // Persist first; memory only changes once the file is safely written.
        let mut updated = records.clone();
        updated.insert(record.key(), record);
        self.persist(&updated).await?;

        *records = updated;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(self.directory())
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}
