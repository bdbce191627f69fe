//! Application layer services implementing business logic.
//!
//! This layer orchestrates store operations: it opens transactions, applies
//! batches item by item and decides between commit and rollback. Services
//! consume repository traits and know nothing about HTTP.
//!
//! # Available Services
//!
//! - [`services::blocklist_service::BlocklistService`] - Batch append/delete and membership checks

pub mod services;
