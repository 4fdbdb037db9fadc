use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::HashingParams;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;
use vendor_service::authentication::errors::CredentialStoreError;
use vendor_service::authentication::models::EmailAddress;
use vendor_service::authentication::models::StoredCredential;
use vendor_service::authentication::models::UserId;
use vendor_service::authentication::ports::CredentialStore;
use vendor_service::domain::authentication::service::AuthService;
use vendor_service::domain::transaction::service::TransactionService;
use vendor_service::inbound::http::router::create_router;
use vendor_service::transaction::errors::TransactionError;
use vendor_service::transaction::models::TransactionLog;
use vendor_service::transaction::ports::TransactionLogRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

pub const ADMIN_ID: i64 = 1;
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const AGENT_ID: i64 = 2;
pub const AGENT_EMAIL: &str = "agent@example.com";
pub const AGENT_PASSWORD: &str = "agent123";

/// Cheap Argon2 parameters so tests stay fast.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::with_params(HashingParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Valid test hashing parameters")
}

pub fn test_codec() -> TokenCodec {
    TokenCodec::new(TEST_SECRET, Duration::hours(24))
}

/// Credential store double keyed by email.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    credentials: HashMap<String, StoredCredential>,
}

impl InMemoryCredentialStore {
    pub fn with_user(mut self, id: i64, email: &str, password: &str, role_name: &str) -> Self {
        let credential = StoredCredential {
            user_id: UserId(id),
            email: EmailAddress::new(email.to_string()).expect("Valid test email"),
            password_hash: test_hasher().hash(password).expect("Failed to hash password"),
            role_name: role_name.to_string(),
        };
        self.credentials.insert(email.to_string(), credential);
        self
    }

    pub fn seeded() -> Self {
        Self::default()
            .with_user(ADMIN_ID, ADMIN_EMAIL, ADMIN_PASSWORD, "Admin")
            .with_user(AGENT_ID, AGENT_EMAIL, AGENT_PASSWORD, "Field Agent")
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredential>, CredentialStoreError> {
        Ok(self.credentials.get(email.as_str()).cloned())
    }
}

/// Credential store whose backing database is down.
pub struct UnavailableCredentialStore;

#[async_trait]
impl CredentialStore for UnavailableCredentialStore {
    async fn find_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<Option<StoredCredential>, CredentialStoreError> {
        Err(CredentialStoreError::DatabaseError(
            "connection refused: postgres://geo_user:hunter2@db/geo_vendor_db".to_string(),
        ))
    }
}

/// Transaction log double holding `count` entries, one minute apart.
pub struct InMemoryTransactionLog {
    entries: Vec<TransactionLog>,
}

impl InMemoryTransactionLog {
    pub fn with_entries(count: i64) -> Self {
        let now = Utc::now();
        let entries = (1..=count)
            .map(|id| TransactionLog {
                id,
                supplier_id: 100 + id,
                agent_id: AGENT_ID,
                status: if id % 2 == 0 { "verified" } else { "rejected" }.to_string(),
                distance_meters: id as f64 * 1.5,
                created_at: now - Duration::minutes(count - id),
            })
            .collect();
        Self { entries }
    }
}

#[async_trait]
impl TransactionLogRepository for InMemoryTransactionLog {
    async fn list_recent(&self, limit: u32) -> Result<Vec<TransactionLog>, TransactionError> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application with the seeded admin and field agent
    pub async fn spawn() -> Self {
        Self::spawn_with_store(InMemoryCredentialStore::seeded()).await
    }

    /// Spawn the application in a background task around `store`
    pub async fn spawn_with_store<CS: CredentialStore>(store: CS) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(test_hasher(), test_codec()));
        let auth_service = Arc::new(AuthService::new(Arc::new(store), Arc::clone(&authenticator)));
        let transaction_service = Arc::new(TransactionService::new(Arc::new(
            InMemoryTransactionLog::with_entries(12),
        )));

        let router = create_router(auth_service, transaction_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_codec: test_codec(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Token missing from login response")
            .to_string()
    }
}
