//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the vendor payment backend:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Signed, time-bounded token encoding and validation (HS256 JWT)
//! - Authentication coordination
//!
//! Services define their own claims type and credential storage; this crate never
//! touches a database or reads ambient configuration.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let issued = codec.encode(&serde_json::json!({"user_id": 1})).unwrap();
//! let decoded = codec.decode::<serde_json::Value>(&issued.token).unwrap();
//! assert_eq!(decoded.claims["user_id"], 1);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenCodec};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     PasswordHasher::new(),
//!     TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24)),
//! );
//!
//! // Registration: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let claims = serde_json::json!({"user_id": 1, "role_name": "Admin"});
//! let issued = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token::<serde_json::Value>(&issued.token).unwrap();
//! assert_eq!(decoded.claims["role_name"], "Admin");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::DecodedToken;
pub use jwt::IssuedToken;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
