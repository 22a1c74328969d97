//! Utility functions shared by the HTTP layer, services and CLI.
//!
//! - [`shortlink_validator`] - Pure predicate deciding whether a path may be a shortlink
//! - [`url_validator`] - Destination URL validation

pub mod shortlink_validator;
pub mod url_validator;
