use super::dto::{JobStatusResponse, ProcessRequest, ProcessResponse, RegenerateRequest, RegenerateResponse};
use super::service::ProcessService;
use crate::common::response::{ApiError, ApiSuccess, ErrorDetail};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Start simulated processing for an uploaded video
#[utoipa::path(
    post,
    path = "/api/process",
    request_body = ProcessRequest,
    responses(
        (status = 200, description = "Processing started", body = ProcessResponse),
        (status = 404, description = "Video not found", body = ErrorDetail)
    ),
    tag = "Process"
)]
pub async fn start_processing(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let res = ProcessService::start(state, req).await?;
    Ok(ApiSuccess(res, StatusCode::OK))
}

/// Poll a processing job
#[utoipa::path(
    get,
    path = "/api/process/status/{job_id}",
    params(
        ("job_id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job snapshot", body = JobStatusResponse),
        (status = 404, description = "Job not found", body = ErrorDetail)
    ),
    tag = "Process"
)]
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let res = ProcessService::status(&state, &job_id).await?;
    Ok(ApiSuccess(res, StatusCode::OK))
}

/// Regenerate a clip with a new caption style
#[utoipa::path(
    post,
    path = "/api/process/regenerate",
    request_body = RegenerateRequest,
    responses(
        (status = 200, description = "Clip regenerated", body = RegenerateResponse),
        (status = 404, description = "Job not found", body = ErrorDetail)
    ),
    tag = "Process"
)]
pub async fn regenerate_clip(
    State(state): State<AppState>,
    Json(req): Json<RegenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let res = ProcessService::regenerate(&state, req).await?;
    Ok(ApiSuccess(res, StatusCode::OK))
}
