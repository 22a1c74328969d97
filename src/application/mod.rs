//! Application layer services.
//!
//! Services consume storage traits and provide a clean API for HTTP handlers,
//! startup seeding and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::ShortlinkRepository`] - Shortlink resolution and write-through upserts
//! - [`services::seeding`] - Seed file loading for startup and the admin CLI

pub mod services;
