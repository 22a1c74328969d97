//! Core domain entities.
//!
//! - [`ShortlinkRecord`] - A shortlink id mapped to its destination URL

pub mod shortlink;

pub use shortlink::{ShortlinkRecord, storage_key};
