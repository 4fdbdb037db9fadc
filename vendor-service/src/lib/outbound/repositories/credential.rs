use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::authentication::errors::CredentialStoreError;
use crate::authentication::models::EmailAddress;
use crate::authentication::models::StoredCredential;
use crate::authentication::models::UserId;
use crate::authentication::ports::CredentialStore;

/// Credential store backed by the `users` and `roles` tables.
///
/// Every lookup hits the database; connection pooling is the pool's concern.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CredentialRow {
    id: i64,
    email: String,
    password_hash: String,
    role_name: String,
}

impl TryFrom<CredentialRow> for StoredCredential {
    type Error = CredentialStoreError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        Ok(StoredCredential {
            user_id: UserId(row.id),
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            role_name: row.role_name,
        })
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredential>, CredentialStoreError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT u.id, u.email, u.password_hash, r.role_name
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::DatabaseError(e.to_string()))?;

        row.map(StoredCredential::try_from).transpose()
    }
}
