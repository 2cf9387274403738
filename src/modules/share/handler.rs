use super::dto::{ShareRequest, ShareResponse};
use super::service::ShareService;
use crate::common::response::{ApiError, ApiSuccess, ErrorDetail};
use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use tracing::warn;

/// Prepare a clip for sharing on a social platform
#[utoipa::path(
    post,
    path = "/api/share/{platform}",
    params(
        ("platform" = String, Path, description = "instagram, youtube or tiktok")
    ),
    request_body = ShareRequest,
    responses(
        (status = 200, description = "Share link prepared", body = ShareResponse),
        (status = 400, description = "Invalid platform", body = ErrorDetail)
    ),
    tag = "Share"
)]
pub async fn share_video(
    Path(platform): Path<String>,
    Json(req): Json<ShareRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let res = ShareService::share(&platform, &req).inspect_err(|_| {
        warn!("Share requested for unsupported platform '{}'", platform);
    })?;
    Ok(ApiSuccess(res, StatusCode::OK))
}
