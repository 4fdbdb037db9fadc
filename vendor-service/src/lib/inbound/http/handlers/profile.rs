use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::CurrentUserData;
use crate::authentication::models::Identity;

pub async fn profile(
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProfileResponseData {
            message: "Admin Profile".to_string(),
            profile: (&identity).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub message: String,
    pub profile: CurrentUserData,
}
