use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::authentication::errors::AuthError;
use crate::authentication::models::LoginCommand;
use crate::authentication::models::LoginOutcome;
use crate::authentication::ports::AuthServicePort;
use crate::authentication::ports::CredentialStore;

/// Domain service implementation for authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Failures are returned as-is; retry policy belongs to the caller.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
    /// Verified on unknown emails so both rejections pay the same hashing cost.
    dummy_hash: Option<String>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential lookup implementation
    /// * `authenticator` - Password verification and token issuance
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        let dummy_hash = authenticator
            .hash_password("unknown-account-placeholder")
            .map_err(|e| tracing::warn!(error = %e, "Failed to prepare dummy password hash"))
            .ok();

        Self {
            store,
            authenticator,
            dummy_hash,
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError> {
        let credential = self
            .store
            .find_by_email(&command.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Credential lookup failed");
                AuthError::from(e)
            })?;

        let Some(credential) = credential else {
            if let Some(dummy_hash) = &self.dummy_hash {
                self.authenticator.verify_password(&command.password, dummy_hash);
            }
            tracing::info!(reason = "unknown_email", "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let identity = credential.identity();

        let issued = self
            .authenticator
            .authenticate(&command.password, &credential.password_hash, &identity)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::info!(
                        user_id = %credential.user_id,
                        reason = "wrong_password",
                        "Login rejected"
                    );
                    AuthError::InvalidCredentials
                }
                AuthenticationError::Token(err) => {
                    tracing::error!(error = %err, "Token issuance failed");
                    AuthError::ServiceUnavailable(err.to_string())
                }
            })?;

        tracing::info!(
            user_id = %identity.user_id,
            role = %identity.role_name,
            expires_at = %issued.expires_at,
            "Login succeeded"
        );

        Ok(LoginOutcome {
            token: issued.token,
            expires_at: issued.expires_at,
            identity,
        })
    }
}
