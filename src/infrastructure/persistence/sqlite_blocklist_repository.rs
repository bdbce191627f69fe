//! SQLite implementation of the blocklist repository.

use async_trait::async_trait;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::sync::Arc;

use crate::domain::entities::BlockedDomain;
use crate::domain::repositories::{BlocklistRepository, BlocklistTransaction, StoreError};

const EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM blocked_domains WHERE domain_name = ?)";
const INSERT_SQL: &str = "INSERT INTO blocked_domains (domain_name) VALUES (?)";
const DELETE_SQL: &str = "DELETE FROM blocked_domains WHERE domain_name = ?";
const COUNT_SQL: &str = "SELECT COUNT(*) FROM blocked_domains";
const LIST_SQL: &str = "SELECT domain_name FROM blocked_domains ORDER BY domain_name";

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::UniqueViolation,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(e.to_string())
            }
            _ => StoreError::Database(e.to_string()),
        }
    }
}

/// SQLite repository for the blocklist table.
///
/// Statements are prepared once per pooled connection and reused from the
/// connection's statement cache.
pub struct SqliteBlocklistRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBlocklistRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlocklistRepository for SqliteBlocklistRepository {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn begin(&self) -> Result<Box<dyn BlocklistTransaction>, StoreError> {
        let tx = self.pool.begin().await.map_err(|e| match StoreError::from(e) {
            StoreError::Database(message) => StoreError::Unavailable(message),
            other => other,
        })?;

        Ok(Box::new(SqliteBlocklistTransaction { tx: Some(tx) }))
    }

    async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        let found: i64 = sqlx::query_scalar(EXISTS_SQL)
            .bind(name)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(found != 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(COUNT_SQL)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self) -> Result<Vec<BlockedDomain>, StoreError> {
        let rows: Vec<String> = sqlx::query_scalar(LIST_SQL)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(BlockedDomain::new).collect())
    }
}

/// One open SQLite transaction.
///
/// `tx` is `None` once committed or rolled back. Dropping the value while
/// `tx` is still `Some` rolls the transaction back.
pub struct SqliteBlocklistTransaction {
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SqliteBlocklistTransaction {
    fn conn(&mut self) -> Result<&mut SqliteConnection, StoreError> {
        self.tx.as_deref_mut().ok_or(StoreError::TransactionClosed)
    }
}

#[async_trait]
impl BlocklistTransaction for SqliteBlocklistTransaction {
    async fn insert(&mut self, name: &str) -> Result<(), StoreError> {
        sqlx::query(INSERT_SQL)
            .bind(name)
            .execute(self.conn()?)
            .await?;

        Ok(())
    }

    async fn delete(&mut self, name: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(DELETE_SQL)
            .bind(name)
            .execute(self.conn()?)
            .await?;

        Ok(result.rows_affected())
    }

    async fn exists(&mut self, name: &str) -> Result<bool, StoreError> {
        let found: i64 = sqlx::query_scalar(EXISTS_SQL)
            .bind(name)
            .fetch_one(self.conn()?)
            .await?;

        Ok(found != 0)
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        let tx = self.tx.take().ok_or(StoreError::TransactionClosed)?;
        tx.commit().await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        let tx = self.tx.take().ok_or(StoreError::TransactionClosed)?;
        tx.rollback().await?;
        Ok(())
    }
}
