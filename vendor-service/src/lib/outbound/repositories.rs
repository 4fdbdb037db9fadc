pub mod credential;
pub mod transaction_log;

pub use credential::PostgresCredentialStore;
pub use transaction_log::PostgresTransactionLogRepository;
