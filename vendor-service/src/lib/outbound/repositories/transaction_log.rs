use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::transaction::errors::TransactionError;
use crate::transaction::models::TransactionLog;
use crate::transaction::ports::TransactionLogRepository;

pub struct PostgresTransactionLogRepository {
    pool: PgPool,
}

impl PostgresTransactionLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TransactionLogRow {
    id: i64,
    supplier_id: i64,
    agent_id: i64,
    status: String,
    distance_meters: f64,
    created_at: DateTime<Utc>,
}

impl From<TransactionLogRow> for TransactionLog {
    fn from(row: TransactionLogRow) -> Self {
        TransactionLog {
            id: row.id,
            supplier_id: row.supplier_id,
            agent_id: row.agent_id,
            status: row.status,
            distance_meters: row.distance_meters,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TransactionLogRepository for PostgresTransactionLogRepository {
    async fn list_recent(&self, limit: u32) -> Result<Vec<TransactionLog>, TransactionError> {
        let rows = sqlx::query_as::<_, TransactionLogRow>(
            r#"
            SELECT id, supplier_id, agent_id, status, distance_meters, created_at
            FROM transactions_log
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TransactionError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(TransactionLog::from).collect())
    }
}
