//! Business logic services for the application layer.

pub mod seeding;
pub mod shortlink_repository;

pub use seeding::{SeedError, apply_seed, read_seed_file};
pub use shortlink_repository::ShortlinkRepository;
