//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY /{*shortlink_id}` - Shortlink redirect, behind the shortlink gate
//! - `GET /api/v1`          - Service info (rate limited)
//! - `GET /api/v1/health`   - Storage and cache health (rate limited)
//! - everything else        - Static assets with SPA fallback to `index.html`
//!
//! # Middleware
//!
//! - **Shortlink gate** - Sends paths that cannot be shortlinks to static serving
//! - **Rate limiting** - Per-IP token bucket on the API
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash trimming

use std::path::Path;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::shortlink_gate::{self, static_assets};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::routing::any;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding the SPA build (`index.html` and assets)
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, static_dir))
}

/// The routes of [`app_router`] without path normalization.
pub fn app_routes(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let assets = static_assets(static_dir);

    let api_router = api::routes::routes().layer(rate_limit::layer());

    Router::new()
        .route("/{*shortlink_id}", any(redirect_handler))
        .route_layer(middleware::from_fn_with_state(
            assets.clone(),
            shortlink_gate::layer,
        ))
        .nest("/api/v1", api_router)
        .fallback_service(assets)
        .with_state(state)
        .layer(tracing::layer())
}
