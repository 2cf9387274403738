use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use crate::state::AppState;
use tower_http::limit::RequestBodyLimitLayer;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

/// Only the multipart route gets the raised body limit; the JSON route keeps axum's default.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/api/upload",
            post(handler::upload_video)
                .layer::<_, std::convert::Infallible>(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(max_upload_bytes)),
        )
        .route("/api/upload/url", post(handler::upload_url))
}
