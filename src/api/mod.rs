//! HTTP layer: redirect, health and service info endpoints.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response and seed file serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Shortlink gate, rate limiting and tracing middleware
//! - [`routes`] - `/api/v1` route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
