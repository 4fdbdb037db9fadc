use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::CurrentUserData;
use crate::authentication::models::Identity;

pub async fn agent_verify(
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<AgentVerifyResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        AgentVerifyResponseData {
            message: "Field Agent Verification Area".to_string(),
            user: (&identity).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentVerifyResponseData {
    pub message: String,
    pub user: CurrentUserData,
}
