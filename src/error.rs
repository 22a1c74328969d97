//! Application error type shared by storage, services and HTTP handlers.
//!
//! Every variant carries a human-readable message plus structured JSON
//! details. Conversion into an HTTP response happens in one place so that
//! handlers can simply propagate errors with `?`.
//!
//! A missing shortlink is deliberately *not* an error: lookups return
//! `Ok(None)` and the redirect handler branches on it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// An empty id, malformed record or otherwise invalid argument.
    #[error("validation error: {message}")]
    Validation { message: String, details: Value },

    /// The persistence backend could not be reached. Retryable.
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn storage_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for failures worth retrying against the storage backend.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, info) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorInfo {
                    code: "validation_error",
                    message,
                    details,
                },
            ),
            // Backend details stay in the logs; clients get a generic body.
            AppError::StorageUnavailable { message, details }
            | AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorInfo {
                        code: "internal_error",
                        message: "Internal server error".to_string(),
                        details: json!({}),
                    },
                )
            }
        };

        (status, Json(ErrorBody { error: info })).into_response()
    }
}
