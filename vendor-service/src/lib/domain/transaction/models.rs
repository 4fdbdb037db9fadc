use chrono::DateTime;
use chrono::Utc;

/// A recorded geo-verified payment attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLog {
    pub id: i64,
    pub supplier_id: i64,
    pub agent_id: i64,
    pub status: String,
    pub distance_meters: f64,
    pub created_at: DateTime<Utc>,
}
