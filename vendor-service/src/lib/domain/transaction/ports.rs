use async_trait::async_trait;

use crate::transaction::errors::TransactionError;
use crate::transaction::models::TransactionLog;

/// Port for transaction log queries.
#[async_trait]
pub trait TransactionServicePort: Send + Sync + 'static {
    /// Most recent log entries, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn recent_transactions(
        &self,
        limit: u32,
    ) -> Result<Vec<TransactionLog>, TransactionError>;
}

/// Persistence operations for the transaction log.
#[async_trait]
pub trait TransactionLogRepository: Send + Sync + 'static {
    /// Retrieve up to `limit` entries ordered by creation time, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_recent(&self, limit: u32) -> Result<Vec<TransactionLog>, TransactionError>;
}
