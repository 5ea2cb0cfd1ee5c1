//! sketchspark - inspiration generator for drawing practice
//!
//! Composes three independent draws into one answer:
//!
//! - **Color**: one call to an external color API (short timeout, no retry)
//! - **Word**: a random Russian word from the embedded lexicon
//! - **Challenge**: a uniformly-random row from the seeded SQLite store
//!
//! The store is populated once at startup by the seed loader (only when
//! empty) and is read-only afterwards. Served over a rendered page and JSON
//! endpoints under `/api/`.

pub mod config;
pub mod db;
pub mod error;
pub mod providers;
pub mod seed;
pub mod server;

// Re-exports
pub use config::Config;
pub use db::ChallengeDb;
pub use error::ServiceError;
pub use providers::ColorClient;
pub use seed::SeedLoader;
pub use server::{create_router, AppState};
