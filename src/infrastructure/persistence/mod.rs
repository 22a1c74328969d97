//! Shortlink storage implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::ShortlinkStorage`].
//! The backend is selected from configuration at startup.
//!
//! # Backends
//!
//! - [`InMemoryShortlinkStorage`] - Process-local map, optionally seeded with a sample record
//! - [`FileShortlinkStorage`] - JSON file persisted on every write
//! - [`RetryingStorage`] - Decorator adding bounded retries with backoff

pub mod file_storage;
pub mod memory_storage;
pub mod retrying_storage;

pub use file_storage::{FileShortlinkStorage, FileStorageError};
pub use memory_storage::InMemoryShortlinkStorage;
pub use retrying_storage::{RetryPolicy, RetryingStorage};
