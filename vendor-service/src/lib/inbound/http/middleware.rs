use std::sync::Arc;

use auth::Authenticator;
use auth::DecodedToken;
use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::authentication::models::Identity;
use crate::authentication::models::Role;
use crate::inbound::http::handlers::ApiError;

/// Per-route-group gate enforcing a single required role.
///
/// Used as the state of [`require_role`]; the decoded [`Identity`] is handed to
/// the wrapped handler through request extensions.
#[derive(Clone)]
pub struct AccessGuard {
    authenticator: Arc<Authenticator>,
    required_role: Role,
}

/// Why a request was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardRejection {
    /// Authorization header absent or not `Bearer <token>` (any scheme case)
    NoToken,
    /// Signature mismatch or structurally broken token
    Invalid(TokenError),
    Expired,
    WrongRole { required: Role },
}

impl GuardRejection {
    /// Internal diagnostic reason; finer grained than the HTTP body.
    pub fn reason(&self) -> &'static str {
        match self {
            GuardRejection::NoToken => "no_token",
            GuardRejection::Invalid(err) => err.reason(),
            GuardRejection::Expired => "token_expired",
            GuardRejection::WrongRole { .. } => "wrong_role",
        }
    }
}

impl From<GuardRejection> for ApiError {
    fn from(rejection: GuardRejection) -> Self {
        match rejection {
            GuardRejection::NoToken => ApiError::Unauthorized {
                reason: "missing_token",
                message: "Valid bearer token required in Authorization header".to_string(),
            },
            GuardRejection::Invalid(_) => ApiError::Unauthorized {
                reason: "invalid_token",
                message: "Invalid token".to_string(),
            },
            GuardRejection::Expired => ApiError::Unauthorized {
                reason: "token_expired",
                message: "Token expired, please log in again".to_string(),
            },
            GuardRejection::WrongRole { required } => ApiError::Forbidden {
                required_role: required.as_str().to_string(),
            },
        }
    }
}

impl AccessGuard {
    pub fn new(authenticator: Arc<Authenticator>, required_role: Role) -> Self {
        Self {
            authenticator,
            required_role,
        }
    }

    pub fn required_role(&self) -> Role {
        self.required_role
    }

    /// Decide whether the request headers carry a token for the required role.
    ///
    /// # Errors
    /// * `NoToken` - No usable bearer token
    /// * `Invalid` - Token failed signature or format checks
    /// * `Expired` - Token is past its expiry
    /// * `WrongRole` - Token is valid but for a different role
    pub fn check(&self, headers: &HeaderMap) -> Result<Identity, GuardRejection> {
        let token = extract_bearer_token(headers).ok_or(GuardRejection::NoToken)?;

        let decoded: DecodedToken<Identity> = self
            .authenticator
            .validate_token(token)
            .map_err(|e| match e {
                TokenError::Expired => GuardRejection::Expired,
                other => GuardRejection::Invalid(other),
            })?;

        if !decoded.claims.has_role(self.required_role) {
            return Err(GuardRejection::WrongRole {
                required: self.required_role,
            });
        }

        Ok(decoded.claims)
    }
}

/// Middleware that validates the bearer token, enforces the guard's role and
/// adds the caller's identity to request extensions
pub async fn require_role(
    State(guard): State<AccessGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = guard.check(req.headers()).map_err(|rejection| {
        tracing::warn!(
            reason = rejection.reason(),
            required_role = %guard.required_role,
            path = %req.uri().path(),
            "Access denied"
        );
        ApiError::from(rejection)
    })?;

    tracing::debug!(
        user_id = %identity.user_id,
        role = %identity.role_name,
        "Access granted"
    );

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;

    // Auth schemes are case-insensitive (RFC 7235)
    let (scheme, token) = auth_str.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token)
}
