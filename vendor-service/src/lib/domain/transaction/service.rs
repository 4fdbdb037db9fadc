use std::sync::Arc;

use async_trait::async_trait;

use crate::transaction::errors::TransactionError;
use crate::transaction::models::TransactionLog;
use crate::transaction::ports::TransactionLogRepository;
use crate::transaction::ports::TransactionServicePort;

/// Upper bound on a single page of log entries.
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct TransactionService<TR>
where
    TR: TransactionLogRepository,
{
    repository: Arc<TR>,
}

impl<TR> TransactionService<TR>
where
    TR: TransactionLogRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TransactionServicePort for TransactionService<TR>
where
    TR: TransactionLogRepository,
{
    async fn recent_transactions(
        &self,
        limit: u32,
    ) -> Result<Vec<TransactionLog>, TransactionError> {
        self.repository
            .list_recent(limit.clamp(1, MAX_PAGE_SIZE))
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;

    mock! {
        pub TestTransactionLogRepository {}

        #[async_trait]
        impl TransactionLogRepository for TestTransactionLogRepository {
            async fn list_recent(
                &self,
                limit: u32,
            ) -> Result<Vec<TransactionLog>, TransactionError>;
        }
    }

    fn entry(id: i64) -> TransactionLog {
        TransactionLog {
            id,
            supplier_id: 10,
            agent_id: 2,
            status: "verified".to_string(),
            distance_meters: 12.5,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_recent_transactions() {
        let mut repository = MockTestTransactionLogRepository::new();
        repository
            .expect_list_recent()
            .with(eq(10))
            .times(1)
            .returning(|_| Ok(vec![entry(2), entry(1)]));

        let service = TransactionService::new(Arc::new(repository));

        let entries = service.recent_transactions(10).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 2);
    }

    #[tokio::test]
    async fn test_recent_transactions_limit_is_clamped() {
        let mut repository = MockTestTransactionLogRepository::new();
        repository
            .expect_list_recent()
            .with(eq(MAX_PAGE_SIZE))
            .times(1)
            .returning(|_| Ok(vec![]));
        repository
            .expect_list_recent()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = TransactionService::new(Arc::new(repository));

        service.recent_transactions(10_000).await.unwrap();
        service.recent_transactions(0).await.unwrap();
    }

    #[tokio::test]
    async fn test_recent_transactions_database_error() {
        let mut repository = MockTestTransactionLogRepository::new();
        repository
            .expect_list_recent()
            .times(1)
            .returning(|_| Err(TransactionError::DatabaseError("connection refused".to_string())));

        let service = TransactionService::new(Arc::new(repository));

        let result = service.recent_transactions(10).await;
        assert!(matches!(result, Err(TransactionError::DatabaseError(_))));
    }
}
