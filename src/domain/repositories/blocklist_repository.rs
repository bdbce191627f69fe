//! Store contract for the blocklist table.

use crate::domain::entities::BlockedDomain;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a blocklist store.
///
/// Only [`StoreError::UniqueViolation`] is an expected, per-item condition.
/// Every other variant is fatal for the operation that raised it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An insert hit the uniqueness constraint on the domain name.
    #[error("unique constraint violation")]
    UniqueViolation,

    /// The store could not hand out a connection or transaction.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(String),

    /// The transaction was already committed or rolled back.
    #[error("transaction already finished")]
    TransactionClosed,
}

/// Repository interface for the set of blocked domain names.
///
/// Reads run directly against the store; mutations go through a
/// [`BlocklistTransaction`] obtained from [`BlocklistRepository::begin`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteBlocklistRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_blocklist.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlocklistRepository: Send + Sync {
    /// Creates the blocklist table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the schema statement fails.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Opens one unit of work covering a whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if no connection can be acquired.
    async fn begin(&self) -> Result<Box<dyn BlocklistTransaction>, StoreError>;

    /// Reports whether `name` is in the blocklist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Database`] on failure.
    async fn exists(&self, name: &str) -> Result<bool, StoreError>;

    /// Counts the stored names.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Lists all stored names in lexical order.
    async fn list(&self) -> Result<Vec<BlockedDomain>, StoreError>;
}

/// A single open transaction against the blocklist table.
///
/// Dropping an unfinished transaction rolls it back, so every exit path
/// releases it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlocklistTransaction: Send {
    /// Inserts `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the name is already stored.
    async fn insert(&mut self, name: &str) -> Result<(), StoreError>;

    /// Deletes `name` and returns the number of rows removed (0 or 1).
    async fn delete(&mut self, name: &str) -> Result<u64, StoreError>;

    /// Reports whether `name` is visible inside this transaction.
    async fn exists(&mut self, name: &str) -> Result<bool, StoreError>;

    /// Makes every change of this transaction durable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionClosed`] if already finished.
    async fn commit(&mut self) -> Result<(), StoreError>;

    /// Discards every change of this transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionClosed`] if already finished.
    async fn rollback(&mut self) -> Result<(), StoreError>;
}
