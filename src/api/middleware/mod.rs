//! HTTP middleware for request routing, protection and observability.

pub mod rate_limit;
pub mod shortlink_gate;
pub mod tracing;
