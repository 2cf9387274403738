use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use super::model::{Clip, Job, JobStatus, JobStep};

fn default_duration() -> u32 {
    60
}

fn default_quantity() -> u32 {
    3
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProcessRequest {
    pub video_id: String,
    #[serde(default = "default_duration")]
    #[schema(default = 60)]
    pub duration: u32,
    #[serde(default = "default_quantity")]
    #[schema(default = 3)]
    pub quantity: u32,
    #[serde(default = "default_language")]
    #[schema(default = "en")]
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessResponse {
    pub job_id: String,
    pub message: String,
    pub status: JobStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: JobStatus,
    pub progress: u8,
    pub current_step: String,
    pub steps: Vec<JobStep>,
    pub clips: Vec<Clip>,
    pub estimated_time_remaining: u32,
}

impl From<Job> for JobStatusResponse {
    fn from(job: Job) -> Self {
        let estimated_time_remaining = job.estimated_time_remaining();
        Self {
            job_id: job.job_id,
            status: job.status,
            progress: job.progress,
            current_step: job.current_step,
            steps: job.steps,
            clips: job.clips,
            estimated_time_remaining,
        }
    }
}

// Accepted for API compatibility; rendering ignores it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CaptionStyle {
    #[serde(default = "CaptionStyle::default_style")]
    pub style: String,
    #[serde(default = "CaptionStyle::default_color")]
    pub color: String,
    #[serde(default = "CaptionStyle::default_font_size")]
    pub font_size: u32,
    #[serde(default = "CaptionStyle::default_position")]
    pub position: String,
}

impl CaptionStyle {
    fn default_style() -> String {
        "Modern".to_string()
    }

    fn default_color() -> String {
        "#FFFFFF".to_string()
    }

    fn default_font_size() -> u32 {
        24
    }

    fn default_position() -> String {
        "bottom".to_string()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegenerateRequest {
    pub job_id: String,
    pub clip_id: String,
    pub caption_style: CaptionStyle,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegenerateResponse {
    pub job_id: String,
    pub clip_id: String,
    pub url: String,
    pub status: String,
}
