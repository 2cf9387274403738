use super::dto::{JobStatusResponse, ProcessRequest, ProcessResponse, RegenerateRequest, RegenerateResponse};
use super::model::{Job, JobStatus, PLACEHOLDER_VIDEO_URL};
use super::repository::JobRepository;
use crate::common::ids::short_id;
use crate::common::response::ApiError;
use crate::modules::upload::repository::VideoRepository;
use crate::state::AppState;
use crate::workers::simulator;
use tracing::info;

pub struct ProcessService;

impl ProcessService {
    pub async fn start(state: AppState, req: ProcessRequest) -> Result<ProcessResponse, ApiError> {
        let video = VideoRepository::find_by_id(&state.store, &req.video_id)
            .await
            .ok_or_else(|| ApiError::not_found("Video not found"))?;

        let job_id = short_id();
        let job = Job::new(job_id.clone(), video.id, req.duration, req.quantity, req.language);
        JobRepository::insert(&state.store, job).await;

        info!(
            "Job {} created for {} ({:?}, {} clips requested)",
            job_id, video.filename, video.source, req.quantity
        );

        // Fire-and-forget: nobody joins or cancels the simulator.
        tokio::spawn(simulator::run(
            state.store.clone(),
            job_id.clone(),
            req.quantity,
            state.config.step_delay(),
        ));

        Ok(ProcessResponse {
            job_id,
            message: "Processing started".to_string(),
            status: JobStatus::Processing,
        })
    }

    pub async fn status(state: &AppState, job_id: &str) -> Result<JobStatusResponse, ApiError> {
        JobRepository::find_by_id(&state.store, job_id)
            .await
            .map(JobStatusResponse::from)
            .ok_or_else(|| ApiError::not_found("Job not found"))
    }

    /// Fakes a re-render. The stored job and its clips are left untouched.
    pub async fn regenerate(state: &AppState, req: RegenerateRequest) -> Result<RegenerateResponse, ApiError> {
        if !JobRepository::exists(&state.store, &req.job_id).await {
            return Err(ApiError::not_found("Job not found"));
        }

        info!(
            "Regenerating {} for job {} with style {:?}",
            req.clip_id, req.job_id, req.caption_style.style
        );
        tokio::time::sleep(state.config.regenerate_delay()).await;

        Ok(RegenerateResponse {
            job_id: req.job_id,
            clip_id: req.clip_id,
            url: PLACEHOLDER_VIDEO_URL.to_string(),
            status: "regenerated".to_string(),
        })
    }
}
