//! Redirect decision for a resolved (or unresolved) shortlink.
//!
//! A request ends in exactly one of two states: redirected to the record's
//! destination, or redirected to the configured fallback. There is no retry
//! state at this level; storage retries happen below the repository.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::entities::ShortlinkRecord;
use crate::error::AppError;

/// Terminal state of a redirection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// The shortlink resolved to an active record.
    Redirected {
        status: StatusCode,
        location: String,
    },
    /// The shortlink is unknown or inactive.
    RedirectedToFallback { location: String },
}

impl RedirectOutcome {
    /// Decides how to answer a lookup result.
    ///
    /// - Active record, `preserve_http_method` -> `307 Temporary Redirect`
    /// - Active record otherwise -> `302 Found`
    /// - Missing or inactive record -> `302 Found` to `fallback_url`
    pub fn decide(record: Option<ShortlinkRecord>, fallback_url: &str) -> Self {
        match record {
            Some(record) if record.active => {
                let status = if record.preserve_http_method {
                    StatusCode::TEMPORARY_REDIRECT
                } else {
                    StatusCode::FOUND
                };
                Self::Redirected {
                    status,
                    location: record.long_url,
                }
            }
            _ => Self::RedirectedToFallback {
                location: fallback_url.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Redirected { status, .. } => *status,
            Self::RedirectedToFallback { .. } => StatusCode::FOUND,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Self::Redirected { location, .. } | Self::RedirectedToFallback { location } => location,
        }
    }

    /// Builds the HTTP response without panicking on malformed locations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the location cannot be used as a
    /// header value.
    pub fn try_into_response(self) -> Result<Response, AppError> {
        let status = self.status();
        let location = HeaderValue::try_from(self.location()).map_err(|_| {
            AppError::internal(
                "Redirect location is not a valid header value",
                json!({ "location": self.location() }),
            )
        })?;

        Ok((status, [(header::LOCATION, location)]).into_response())
    }
}
