//! Caching layer in front of shortlink storage.
//!
//! Provides a [`ShortlinkCache`] trait with two implementations:
//! - [`MokaShortlinkCache`] - In-process cache that coalesces concurrent loads
//! - [`NullCache`] - No-op implementation for disabled caching

mod moka_cache;
mod null_cache;
mod service;

pub use moka_cache::MokaShortlinkCache;
pub use null_cache::NullCache;
pub use service::{ResolveFuture, Resolver, ShortlinkCache};
