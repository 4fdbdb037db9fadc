use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

pub async fn health() -> Result<ApiSuccess<HealthResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            message: "Geo-Verified Vendor Pay API is up and running".to_string(),
            status: "active".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub message: String,
    pub status: String,
    pub version: String,
}
