//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the blocklist store. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`BlocklistRepository`] - Schema, reads and transaction boundaries
//! - [`BlocklistTransaction`] - Row-level insert/delete inside one transaction

pub mod blocklist_repository;

pub use blocklist_repository::{BlocklistRepository, BlocklistTransaction, StoreError};

#[cfg(test)]
pub use blocklist_repository::{MockBlocklistRepository, MockBlocklistTransaction};
