use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::authentication::errors::EmailError;
use crate::authentication::errors::RoleError;

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailError;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        Self::new(email)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Roles known to the application.
///
/// Role names are matched exactly and case-sensitively everywhere,
/// so `"admin"` or `"Administrator"` are not the `Admin` role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    FieldAgent,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::FieldAgent];

    /// Canonical role name as stored in the `roles` table and in tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::FieldAgent => "Field Agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleError::Unknown(s.to_string()))
    }
}

/// Authenticated principal.
///
/// Snapshot of the user record taken at login and carried verbatim as the
/// token claims. It is not re-read from the store until the token expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub email: EmailAddress,
    pub role_name: String,
}

impl Identity {
    /// Exact, case-sensitive role check.
    pub fn has_role(&self, role: Role) -> bool {
        self.role_name == role.as_str()
    }
}

/// User record as held by the credential store, joined with its role.
#[derive(Clone)]
pub struct StoredCredential {
    pub user_id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role_name: String,
}

impl StoredCredential {
    /// Identity to embed in a token issued for this record.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id,
            email: self.email.clone(),
            role_name: self.role_name.clone(),
        }
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role_name", &self.role_name)
            .finish()
    }
}

/// Command to log in with an email and a plaintext password
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub identity: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_are_exact() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Field Agent".parse::<Role>(), Ok(Role::FieldAgent));
        assert!("admin".parse::<Role>().is_err());
        assert!("Administrator".parse::<Role>().is_err());
        assert!("field agent".parse::<Role>().is_err());
    }

    #[test]
    fn test_identity_role_check() {
        let identity = Identity {
            user_id: UserId(1),
            email: EmailAddress::new("admin@example.com".to_string()).unwrap(),
            role_name: "Admin".to_string(),
        };

        assert!(identity.has_role(Role::Admin));
        assert!(!identity.has_role(Role::FieldAgent));
    }

    #[test]
    fn test_identity_claims_shape() {
        let identity = Identity {
            user_id: UserId(3),
            email: EmailAddress::new("agent@example.com".to_string()).unwrap(),
            role_name: "Field Agent".to_string(),
        };

        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "user_id": 3,
                "email": "agent@example.com",
                "role_name": "Field Agent"
            })
        );
    }

    #[test]
    fn test_identity_rejects_invalid_email_claim() {
        let result = serde_json::from_value::<Identity>(serde_json::json!({
            "user_id": 3,
            "email": "not-an-email",
            "role_name": "Admin"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let credential = StoredCredential {
            user_id: UserId(1),
            email: EmailAddress::new("admin@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            role_name: "Admin".to_string(),
        };
        let command = LoginCommand::new(credential.email.clone(), "admin123".to_string());

        assert!(!format!("{:?}", credential).contains("$argon2id"));
        assert!(!format!("{:?}", command).contains("admin123"));
    }
}
