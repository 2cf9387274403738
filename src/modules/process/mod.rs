use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/process", post(handler::start_processing))
        .route("/api/process/status/{job_id}", get(handler::get_job_status))
        .route("/api/process/regenerate", post(handler::regenerate_clip))
}
