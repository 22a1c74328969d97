//! API route configuration.

use crate::api::handlers::{health_handler, info_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET /`        - Service name and version
/// - `GET /health`  - Storage and cache health
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
}
