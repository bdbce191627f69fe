//! Blocklist mutation and membership service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{BatchOp, BatchResult, BlockedDomain, ItemOutcome};
use crate::domain::repositories::{BlocklistRepository, BlocklistTransaction, StoreError};
use crate::error::{AppError, ValidationError};

/// Default upper bound for a single membership query.
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Service applying batches of names to the blocklist and answering
/// membership queries.
///
/// Each batch runs in exactly one store transaction:
/// - per-item conflicts and misses are recorded and the loop continues
/// - any other store error rolls the whole batch back
/// - a loop that completes is always committed, even if every item failed
pub struct BlocklistService<R: BlocklistRepository> {
    repository: Arc<R>,
    check_timeout: Duration,
}

impl<R: BlocklistRepository> BlocklistService<R> {
    /// Creates a new blocklist service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            check_timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }

    /// Overrides the membership query timeout.
    pub fn with_check_timeout(mut self, check_timeout: Duration) -> Self {
        self.check_timeout = check_timeout;
        self
    }

    /// Inserts every name of the batch.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_batch`].
    pub async fn append(&self, names: Vec<String>) -> Result<BatchResult, AppError> {
        self.apply_batch(names, BatchOp::Insert).await
    }

    /// Deletes every name of the batch.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_batch`].
    pub async fn remove(&self, names: Vec<String>) -> Result<BatchResult, AppError> {
        self.apply_batch(names, BatchOp::Delete).await
    }

    /// Applies `op` to each name in submission order inside one transaction.
    ///
    /// Duplicates are not collapsed: a name repeated in an insert batch
    /// conflicts with its own first occurrence, and a name repeated in a
    /// delete batch is missing the second time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `names` is empty; no transaction is opened.
    /// Returns [`AppError::Internal`] if the transaction cannot be opened, any
    /// item fails with a non-constraint error, or the commit fails. Nothing
    /// from the batch is persisted in that case.
    pub async fn apply_batch(
        &self,
        names: Vec<String>,
        op: BatchOp,
    ) -> Result<BatchResult, AppError> {
        if names.is_empty() {
            return Err(ValidationError::NoItemsProvided.into());
        }

        let mut tx = self.repository.begin().await.map_err(|e| {
            tracing::error!(error = %e, %op, "Failed to open batch transaction");
            AppError::from(e)
        })?;

        let mut result = BatchResult::with_capacity(op, names.len());

        for (index, name) in names.into_iter().enumerate() {
            match apply_one(tx.as_mut(), op, index, name).await {
                Ok(outcome) => result.record(outcome),
                Err(e) => {
                    tracing::error!(error = %e, %op, index, "Batch aborted, rolling back");
                    if let Err(rollback_err) = tx.rollback().await {
                        tracing::warn!(error = %rollback_err, "Rollback failed");
                    }
                    return Err(e.into());
                }
            }
        }

        tx.commit().await.map_err(|e| {
            tracing::error!(error = %e, %op, "Failed to commit batch");
            AppError::from(e)
        })?;

        tracing::info!(
            %op,
            submitted = result.submitted(),
            applied = result.applied.len(),
            failed = result.failed.len(),
            "Batch committed"
        );

        Ok(result)
    }

    /// Reports whether `name` is blocked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is empty.
    /// Returns [`AppError::Internal`] on store errors or when the query
    /// exceeds the configured timeout.
    pub async fn check_exists(&self, name: &str) -> Result<bool, AppError> {
        if name.is_empty() {
            return Err(ValidationError::MissingParameter("domain").into());
        }

        match tokio::time::timeout(self.check_timeout, self.repository.exists(name)).await {
            Ok(Ok(found)) => Ok(found),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Membership query failed");
                Err(e.into())
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.check_timeout, "Membership query timed out");
                Err(AppError::internal("membership query timed out"))
            }
        }
    }

    /// Counts the blocked names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.repository.count().await?)
    }

    /// Lists every blocked name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list(&self) -> Result<Vec<BlockedDomain>, AppError> {
        Ok(self.repository.list().await?)
    }
}

/// Applies `op` to a single name and classifies the result.
///
/// Only fatal errors are returned as `Err`.
async fn apply_one(
    tx: &mut dyn BlocklistTransaction,
    op: BatchOp,
    index: usize,
    name: String,
) -> Result<ItemOutcome, StoreError> {
    match op {
        BatchOp::Insert => match tx.insert(&name).await {
            Ok(()) => Ok(ItemOutcome::Applied { index, name }),
            Err(StoreError::UniqueViolation) => Ok(ItemOutcome::Conflict { index, name }),
            Err(e) => Err(e),
        },
        BatchOp::Delete => match tx.delete(&name).await? {
            0 => Ok(ItemOutcome::Missing { index, name }),
            _ => Ok(ItemOutcome::Applied { index, name }),
        },
    }
}
