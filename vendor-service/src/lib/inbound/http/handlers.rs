use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::authentication::errors::AuthError;
use crate::authentication::models::Identity;
use crate::transaction::errors::TransactionError;

pub mod admin_dashboard;
pub mod agent_verify;
pub mod health;
pub mod list_transactions;
pub mod login;
pub mod profile;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Outward error taxonomy.
///
/// Internal error details are logged, never sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized {
        reason: &'static str,
        message: String,
    },
    Forbidden {
        required_role: String,
    },
}

impl ApiError {
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized {
            reason: "invalid_credentials",
            message: "Invalid email or password".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, data) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::new("internal_error", "An internal error occurred".to_string()),
                )
            }
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorData::new("validation_error", message),
            ),
            ApiError::Unauthorized { reason, message } => {
                (StatusCode::UNAUTHORIZED, ApiErrorData::new(reason, message))
            }
            ApiError::Forbidden { required_role } => (
                StatusCode::FORBIDDEN,
                ApiErrorData {
                    error: "insufficient_role".to_string(),
                    message: format!("Access denied. Required role: {}", required_role),
                    required_role: Some(required_role),
                },
            ),
        };

        (status, Json(data)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::invalid_credentials(),
            AuthError::ServiceUnavailable(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TransactionError> for ApiError {
    fn from(err: TransactionError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_role: Option<String>,
}

impl ApiErrorData {
    pub fn new(error: &str, message: String) -> Self {
        Self {
            error: error.to_string(),
            message,
            required_role: None,
        }
    }
}

/// Identity fields echoed back to the caller of a protected route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserData {
    pub user_id: i64,
    pub email: String,
    pub role_name: String,
}

impl From<&Identity> for CurrentUserData {
    fn from(identity: &Identity) -> Self {
        Self {
            user_id: identity.user_id.0,
            email: identity.email.as_str().to_string(),
            role_name: identity.role_name.clone(),
        }
    }
}
