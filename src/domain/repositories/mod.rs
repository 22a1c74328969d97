//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod shortlink_storage;

pub use shortlink_storage::{ShortlinkStorage, ensure_id};

#[cfg(test)]
pub use shortlink_storage::MockShortlinkStorage;
