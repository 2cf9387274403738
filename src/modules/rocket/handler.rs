use super::dto::{RocketMetadata, RocketRequest};
use super::service::RocketService;
use crate::common::response::ApiSuccess;
use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::debug;

/// Generate title, description and hashtags for sharing a clip
#[utoipa::path(
    post,
    path = "/api/rocket/generate",
    request_body = RocketRequest,
    responses(
        (status = 200, description = "Generated metadata", body = RocketMetadata)
    ),
    tag = "Rocket"
)]
pub async fn generate_metadata(Json(req): Json<RocketRequest>) -> impl IntoResponse {
    debug!("Generating metadata for {} ({:?})", req.clip_id, req.platform);
    ApiSuccess(RocketService::generate(), StatusCode::OK)
}
