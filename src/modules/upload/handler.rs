use super::dto::{UploadQuery, UploadResponse, UrlUploadRequest};
use super::service::UploadService;
use crate::common::response::{ApiError, ApiSuccess, ErrorDetail};
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        Multipart, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

/// Upload a video file or a video URL
///
/// The file travels as the `file` part of a multipart body. A URL may be given
/// either as a `url` text part or as the `url` query parameter.
#[utoipa::path(
    post,
    path = "/api/upload",
    params(UploadQuery),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video registered", body = UploadResponse),
        (status = 400, description = "No file or URL provided", body = ErrorDetail)
    ),
    tag = "Upload"
)]
pub async fn upload_video(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut file: Option<Option<String>> = None;
    let mut url = query.url;

    if let Ok(mut multipart) = multipart {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().map(str::to_string);
                    let size = drain_field(field).await?;
                    info!("Received file part {:?} ({} bytes)", file_name, size);
                    file = Some(file_name);
                }
                "url" if url.is_none() => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_request(format!("Invalid url field: {}", e)))?;
                    url = Some(text);
                }
                _ => {}
            }
        }
    }

    let res = UploadService::register(&state, file, url).await.inspect_err(|e| {
        warn!("Rejected upload: {}", e);
    })?;

    Ok(ApiSuccess(res, StatusCode::OK))
}

/// Register a video by URL (JSON body)
#[utoipa::path(
    post,
    path = "/api/upload/url",
    request_body = UrlUploadRequest,
    responses(
        (status = 200, description = "Video queued", body = UploadResponse)
    ),
    tag = "Upload"
)]
pub async fn upload_url(
    State(state): State<AppState>,
    Json(req): Json<UrlUploadRequest>,
) -> impl IntoResponse {
    let res = UploadService::register_url(&state, req.url, "YouTube video queued for processing").await;
    ApiSuccess(res, StatusCode::OK)
}

/// Reads a part chunk by chunk and discards it; only the byte count survives.
async fn drain_field(mut field: Field<'_>) -> Result<usize, ApiError> {
    let mut size = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| ApiError::bad_request(format!("Upload interrupted: {}", e)))?
    {
        size += chunk.len();
    }
    Ok(size)
}
