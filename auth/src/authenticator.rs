use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::jwt::DecodedToken;
use crate::jwt::IssuedToken;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds no per-request state; share it behind an `Arc` across handlers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator from its two collaborators.
    pub fn new(password_hasher: PasswordHasher, token_codec: TokenCodec) -> Self {
        Self {
            password_hasher,
            token_codec,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash without issuing a token.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for `claims`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - Claims to encode in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the hash is malformed)
    /// * `Token` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.encode(claims)?)
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn generate_token<T: Serialize>(&self, claims: &T) -> Result<IssuedToken, TokenError> {
        self.token_codec.encode(claims)
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `InvalidSignature`, `Expired` or `Malformed` - Token was rejected
    pub fn validate_token<T: DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<DecodedToken<T>, TokenError> {
        self.token_codec.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        user_id: i64,
        role_name: String,
    }

    fn authenticator() -> Authenticator {
        Authenticator::new(
            PasswordHasher::new(),
            TokenCodec::new(b"test_secret_key_at_least_32_bytes!", Duration::hours(24)),
        )
    }

    fn claims() -> TestClaims {
        TestClaims {
            user_id: 42,
            role_name: "Field Agent".to_string(),
        }
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let issued = authenticator
            .authenticate(password, &hash, &claims())
            .expect("Authentication failed");
        assert!(!issued.token.is_empty());

        let decoded: DecodedToken<TestClaims> = authenticator
            .validate_token(&issued.token)
            .expect("Token validation failed");
        assert_eq!(decoded.claims, claims());
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, &claims());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", "not-a-phc-string", &claims());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        assert!(authenticator.verify_password("my_password", &hash));
        assert!(!authenticator.verify_password("wrong_password", &hash));
        assert!(!authenticator.verify_password("my_password", "not-a-phc-string"));
    }

    #[test]
    fn test_generate_and_validate_token() {
        let authenticator = authenticator();

        let issued = authenticator
            .generate_token(&claims())
            .expect("Failed to generate token");

        let decoded: DecodedToken<TestClaims> = authenticator
            .validate_token(&issued.token)
            .expect("Failed to validate token");
        assert_eq!(decoded.claims.user_id, 42);
        assert_eq!(decoded.expires_at, issued.expires_at);
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token::<TestClaims>("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }
}
