//! Routing gate in front of the redirect handler.
//!
//! The redirect route captures every path, including the single-page app's
//! own assets. This middleware runs the shortlink validator on the captured
//! path and hands rejected requests to the static file service instead.

use std::convert::Infallible;
use std::path::Path as FsPath;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

use crate::utils::shortlink_validator::is_valid_shortlink;

/// Static file service with the SPA's `index.html` as fallback.
pub type StaticAssets = ServeDir<ServeFile>;

/// Builds the static file service rooted at `dir`.
///
/// Unknown files resolve to `dir/index.html` so client-side routes load the
/// app.
pub fn static_assets(dir: impl AsRef<FsPath>) -> StaticAssets {
    let dir = dir.as_ref();
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Passes valid shortlink candidates on to the redirect handler and serves
/// everything else from `assets`.
///
/// # Integration
///
/// ```rust,ignore
/// Router::new()
///     .route("/{*shortlink_id}", any(redirect_handler))
///     .route_layer(middleware::from_fn_with_state(assets, shortlink_gate::layer))
/// ```
pub async fn layer(
    State(assets): State<StaticAssets>,
    Path(candidate): Path<String>,
    request: Request,
    next: Next,
) -> Response {
    if is_valid_shortlink(&candidate) {
        return next.run(request).await;
    }

    debug!(path = %request.uri().path(), "Serving static asset");
    assets
        .oneshot(request)
        .await
        .map(IntoResponse::into_response)
        .unwrap_or_else(|never: Infallible| match never {})
}
