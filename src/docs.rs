use utoipa::OpenApi;
use crate::common::response::ErrorDetail;
use crate::modules::process::dto::*;
use crate::modules::process::model::{Clip, JobStatus, JobStep, StepStatus};
use crate::modules::rocket::dto::*;
use crate::modules::share::dto::*;
use crate::modules::system::dto::*;
use crate::modules::upload::dto::*;

#[derive(OpenApi)]
#[openapi(
    info(title = "Auto Shorts API", description = "Backend API for the Auto Shorts mobile app"),
    paths(
        crate::modules::system::handler::root,
        crate::modules::system::handler::health,
        crate::modules::upload::handler::upload_video,
        crate::modules::upload::handler::upload_url,
        crate::modules::process::handler::start_processing,
        crate::modules::process::handler::get_job_status,
        crate::modules::process::handler::regenerate_clip,
        crate::modules::rocket::handler::generate_metadata,
        crate::modules::share::handler::share_video,
    ),
    components(
        schemas(
            ErrorDetail, RootResponse, HealthResponse,
            UrlUploadRequest, UploadResponse,
            ProcessRequest, ProcessResponse, JobStatusResponse,
            CaptionStyle, RegenerateRequest, RegenerateResponse,
            JobStatus, JobStep, StepStatus, Clip,
            RocketRequest, RocketMetadata,
            ShareRequest, ShareResponse,
        )
    ),
    tags(
        (name = "System", description = "Liveness and banner"),
        (name = "Upload", description = "Video intake"),
        (name = "Process", description = "Simulated clip generation"),
        (name = "Rocket", description = "Social metadata suggestions"),
        (name = "Share", description = "Platform share links")
    )
)]
pub struct ApiDoc;
