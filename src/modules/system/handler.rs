use super::dto::{HealthResponse, RootResponse};
use crate::common::response::ApiSuccess;
use axum::{http::StatusCode, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = RootResponse)
    ),
    tag = "System"
)]
pub async fn root() -> impl IntoResponse {
    ApiSuccess(
        RootResponse {
            message: "Auto Shorts API is running!".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        StatusCode::OK,
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Liveness probe", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> impl IntoResponse {
    ApiSuccess(
        HealthResponse {
            status: "healthy".to_string(),
        },
        StatusCode::OK,
    )
}
