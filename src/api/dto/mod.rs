//! Data Transfer Objects for API requests and responses.
//!
//! DTOs define the external contract of the service and are kept separate
//! from domain entities.

pub mod health;
pub mod info;
pub mod seed;
