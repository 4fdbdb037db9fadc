use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::CurrentUserData;
use crate::authentication::models::Identity;

pub async fn admin_dashboard(
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<AdminDashboardResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        AdminDashboardResponseData {
            message: "Welcome to Admin Dashboard".to_string(),
            user: (&identity).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminDashboardResponseData {
    pub message: String,
    pub user: CurrentUserData,
}
