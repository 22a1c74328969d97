//! Handler for shortlink redirects.

use axum::{
    extract::{Path, State},
    http::Method,
    response::Response,
};
use tracing::debug;

use crate::domain::redirect::RedirectOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortlink to its destination, or to the fallback URL.
///
/// # Endpoint
///
/// `ANY /{*shortlink_id}`
///
/// Only reached for paths the shortlink gate accepted; everything else is
/// served as a static asset.
///
/// # Request Flow
///
/// 1. Resolve the id through the repository (cache, then storage)
/// 2. Active record: `307` if it preserves the HTTP method, `302` otherwise
/// 3. Missing or inactive record: `302` to the configured fallback URL
///
/// # Errors
///
/// Returns 500 Internal Server Error if storage is unavailable after retries
/// or the destination cannot be encoded as a `Location` header.
pub async fn redirect_handler(
    State(state): State<AppState>,
    method: Method,
    Path(shortlink_id): Path<String>,
) -> Result<Response, AppError> {
    let record = state.repository.resolve_shortlink(&shortlink_id).await?;

    let outcome = RedirectOutcome::decide(record, &state.fallback_url);

    debug!(
        %method,
        shortlink_id,
        status = outcome.status().as_u16(),
        location = outcome.location(),
        "Redirecting"
    );

    outcome.try_into_response()
}
