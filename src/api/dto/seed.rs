//! DTOs for seed files loaded at startup and checked by the admin CLI.
//!
//! A seed file is a JSON document of the form:
//!
//! ```json
//! {
//!   "records": [
//!     { "id": "docs", "longUrl": "https://docs.example.com/" },
//!     { "id": "form", "longUrl": "https://forms.example.com/", "preserveHttpMethod": true },
//!     { "id": "old",  "longUrl": "https://example.com/", "active": false }
//!   ]
//! }
//! ```

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::ShortlinkRecord;
use crate::utils::shortlink_validator::check_shortlink;

/// Contents of a seed file.
#[derive(Debug, Deserialize, Validate)]
pub struct SeedFile {
    #[validate(nested)]
    pub records: Vec<SeedRecord>,
}

/// Individual record in a seed file.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    /// Shortlink id; must be something the router would actually send to
    /// the redirect handler.
    #[validate(length(min = 1, max = 256))]
    #[validate(custom(function = "routable_id"))]
    pub id: String,

    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,

    #[serde(default = "default_true")]
    pub preserve_http_method: bool,

    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

fn routable_id(id: &str) -> Result<(), ValidationError> {
    // Trailing slashes are trimmed before routing and captures never start with one.
    if id.starts_with('/') || id.ends_with('/') {
        let mut error = ValidationError::new("unroutable_id");
        error.message = Some("it starts or ends with '/'".into());
        return Err(error);
    }

    check_shortlink(id).map_err(|rejection| {
        let mut error = ValidationError::new("unroutable_id");
        error.message = Some(rejection.reason().into());
        error
    })
}

impl From<SeedRecord> for ShortlinkRecord {
    fn from(seed: SeedRecord) -> Self {
        ShortlinkRecord::new(seed.id, seed.long_url)
            .with_preserve_http_method(seed.preserve_http_method)
            .with_active(seed.active)
    }
}
