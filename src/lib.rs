//! # golinks
//!
//! A shortlink resolver and redirector built with Axum.
//!
//! Requests for `/{shortlink}` are looked up and answered with a redirect to
//! the registered destination, or to a configured fallback URL when nothing
//! matches. Paths that belong to the single-page management app are served
//! as static files instead.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Shortlink record, storage trait and redirect decision
//! - **Application Layer** ([`application`]) - Repository service and seeding
//! - **Infrastructure Layer** ([`infrastructure`]) - Storage backends and caching
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Case-insensitive shortlink lookup with `307`/`302` redirects
//! - In-process caching that coalesces concurrent lookups
//! - In-memory or JSON file storage with retries on transient failures
//! - Health endpoint, rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export FALLBACK_URL="https://intranet.example.com/"
//! cargo run
//! curl -i http://localhost:3000/Test1
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortlinkRepository;
    pub use crate::domain::entities::ShortlinkRecord;
    pub use crate::domain::redirect::RedirectOutcome;
    pub use crate::domain::repositories::ShortlinkStorage;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
