use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error raised by credential store adapters
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored credential is invalid: {0}")]
    InvalidRecord(String),
}

impl From<EmailError> for CredentialStoreError {
    fn from(err: EmailError) -> Self {
        CredentialStoreError::InvalidRecord(err.to_string())
    }
}

/// Top-level error for login operations.
///
/// Unknown email and wrong password both surface as `InvalidCredentials`;
/// infrastructure failures stay separate so they are never reported as a bad login.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<CredentialStoreError> for AuthError {
    fn from(err: CredentialStoreError) -> Self {
        AuthError::ServiceUnavailable(err.to_string())
    }
}
