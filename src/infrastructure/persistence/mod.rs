//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries against a pooled SQLite database.
//!
//! # Contents
//!
//! - [`SqliteBlocklistRepository`] - Blocklist reads and transactions
//! - [`pool::connect`] - Pool construction from configuration

pub mod pool;
pub mod sqlite_blocklist_repository;

pub use pool::PoolSettings;
pub use sqlite_blocklist_repository::{SqliteBlocklistRepository, SqliteBlocklistTransaction};
