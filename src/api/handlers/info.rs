//! Handler for the API root.

use axum::Json;

use crate::api::dto::info::ServiceInfo;

/// Returns the service name and version.
///
/// # Endpoint
///
/// `GET /api/v1`
pub async fn info_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}
