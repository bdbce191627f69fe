//! # Domain Blocklist
//!
//! A small HTTP service that keeps a set of blocked domain names in SQLite,
//! built with Axum and SQLx.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Batch entities and store traits
//! - **Application Layer** ([`application`]) - Batch mutation and membership queries
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - HTTP handlers, payloads and request validation
//!
//! ## Batches
//!
//! `POST /domains/append` and `POST /domains/delete` take a JSON array of
//! names and apply it in one transaction. Names that conflict (append) or are
//! absent (delete) are reported per item while the rest of the batch still
//! commits; any other storage failure rolls the whole batch back.
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_PATH="database/db.db"   # Optional, this is the default
//! cargo run
//!
//! curl -X POST -H 'Content-Type: application/json' \
//!      -d '["ads.example.com"]' http://localhost:8000/domains/append
//! curl 'http://localhost:8000/domains/check?domain=ads.example.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::BlocklistService;
    pub use crate::domain::entities::{BatchOp, BatchResult, BlockedDomain, ItemOutcome};
    pub use crate::error::{AppError, ValidationError};
    pub use crate::infrastructure::persistence::SqliteBlocklistRepository;
    pub use crate::state::AppState;
}
