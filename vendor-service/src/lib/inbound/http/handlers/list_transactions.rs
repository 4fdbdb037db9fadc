use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::authentication::models::Identity;
use crate::inbound::http::router::AppState;
use crate::transaction::models::TransactionLog;
use crate::transaction::ports::TransactionServicePort;

/// Number of entries returned by the transaction log endpoint.
pub const RECENT_TRANSACTIONS: u32 = 10;

pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<Vec<TransactionLogData>>, ApiError> {
    let entries = state
        .transaction_service
        .recent_transactions(RECENT_TRANSACTIONS)
        .await?;

    tracing::debug!(
        user_id = %identity.user_id,
        count = entries.len(),
        "Transaction log listed"
    );

    Ok(ApiSuccess::new(
        StatusCode::OK,
        entries.iter().map(TransactionLogData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionLogData {
    pub id: i64,
    pub supplier_id: i64,
    pub agent_id: i64,
    pub status: String,
    pub distance_meters: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&TransactionLog> for TransactionLogData {
    fn from(entry: &TransactionLog) -> Self {
        Self {
            id: entry.id,
            supplier_id: entry.supplier_id,
            agent_id: entry.agent_id,
            status: entry.status.clone(),
            distance_meters: entry.distance_meters,
            created_at: entry.created_at,
        }
    }
}
