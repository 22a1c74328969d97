//! Domain layer: entities, storage contracts and the redirect decision.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`redirect`] - Mapping a lookup result to a redirect response
//!
//! The domain layer has no dependency on concrete storage backends or on
//! the router. Backends are chosen at startup in [`crate::server`].

pub mod entities;
pub mod redirect;
pub mod repositories;
