use thiserror::Error;

/// Error for transaction log operations
#[derive(Debug, Clone, Error)]
pub enum TransactionError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
