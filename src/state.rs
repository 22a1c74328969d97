//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortlinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<ShortlinkRepository>,
    /// Destination for shortlinks that do not resolve.
    pub fallback_url: Arc<str>,
}

impl AppState {
    pub fn new(repository: Arc<ShortlinkRepository>, fallback_url: impl Into<Arc<str>>) -> Self {
        Self {
            repository,
            fallback_url: fallback_url.into(),
        }
    }
}
