//! Core domain entities representing the blocklist data model.
//!
//! Entities are plain data structures without storage or transport concerns.
//!
//! # Entity Types
//!
//! - [`BlockedDomain`] - A single blocked domain name (one table row)
//! - [`BatchOp`] - Insert or delete, applied to every name in a batch
//! - [`ItemOutcome`] - Per-name result of a batch (`Applied`, `Conflict`, `Missing`)
//! - [`BatchResult`] - Aggregate of a committed batch, partitioned into applied and failed

pub mod batch;
pub mod blocked_domain;

pub use batch::{BatchOp, BatchResult, BatchStatus, ItemOutcome};
pub use blocked_domain::BlockedDomain;
