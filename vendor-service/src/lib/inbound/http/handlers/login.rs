use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::authentication::errors::EmailError;
use crate::authentication::models::EmailAddress;
use crate::authentication::models::LoginCommand;
use crate::authentication::models::LoginOutcome;
use crate::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref outcome| ApiSuccess::new(StatusCode::OK, outcome.into()))
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error("Email and password must be provided")]
    MissingFields,

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl LoginRequestBody {
    fn try_into_command(self) -> Result<LoginCommand, ParseLoginRequestError> {
        let (Some(email), Some(password)) = (self.email, self.password) else {
            return Err(ParseLoginRequestError::MissingFields);
        };
        if email.trim().is_empty() || password.is_empty() {
            return Err(ParseLoginRequestError::MissingFields);
        }

        let email = EmailAddress::new(email.trim().to_string())?;
        Ok(LoginCommand::new(email, password))
    }
}

impl From<ParseLoginRequestError> for ApiError {
    fn from(err: ParseLoginRequestError) -> Self {
        match err {
            ParseLoginRequestError::MissingFields => ApiError::BadRequest(err.to_string()),
            // An address that cannot exist is answered like an unknown one
            ParseLoginRequestError::Email(_) => ApiError::invalid_credentials(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub email: String,
    pub role_name: String,
}

impl From<&LoginOutcome> for LoginResponseData {
    fn from(outcome: &LoginOutcome) -> Self {
        Self {
            token: outcome.token.clone(),
            expires_at: outcome.expires_at,
            user: UserData {
                id: outcome.identity.user_id.0,
                email: outcome.identity.email.as_str().to_string(),
                role_name: outcome.identity.role_name.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(email: Option<&str>, password: Option<&str>) -> LoginRequestBody {
        LoginRequestBody {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_or_empty_fields_are_bad_request() {
        for request in [
            body(None, Some("admin123")),
            body(Some("admin@example.com"), None),
            body(Some(""), Some("admin123")),
            body(Some("   "), Some("admin123")),
            body(Some("admin@example.com"), Some("")),
        ] {
            let err = ApiError::from(request.try_into_command().unwrap_err());
            assert!(matches!(err, ApiError::BadRequest(_)));
        }
    }

    #[test]
    fn test_impossible_email_is_invalid_credentials() {
        let err = body(Some("not-an-email"), Some("admin123"))
            .try_into_command()
            .unwrap_err();

        assert_eq!(ApiError::from(err), ApiError::invalid_credentials());
    }

    #[test]
    fn test_valid_body() {
        let command = body(Some(" admin@example.com "), Some("admin123"))
            .try_into_command()
            .unwrap();

        assert_eq!(command.email.as_str(), "admin@example.com");
        assert_eq!(command.password, "admin123");
    }
}
