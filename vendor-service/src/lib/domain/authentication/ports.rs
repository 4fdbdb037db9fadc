use async_trait::async_trait;

use crate::authentication::errors::AuthError;
use crate::authentication::errors::CredentialStoreError;
use crate::authentication::models::EmailAddress;
use crate::authentication::models::LoginCommand;
use crate::authentication::models::LoginOutcome;
use crate::authentication::models::StoredCredential;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a signed token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Token, its expiry, and the identity it was issued for
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `ServiceUnavailable` - Credential store or token issuance failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError>;
}

/// Read access to stored credentials.
///
/// Implementations must be safe to call concurrently and must not serve
/// cached records across calls.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential by email address.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store could not be queried
    /// * `InvalidRecord` - Stored row could not be mapped
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredential>, CredentialStoreError>;
}
