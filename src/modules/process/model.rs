use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Pipeline stages, in the order the simulator walks them.
pub const STEP_NAMES: [&str; 5] = [
    "Analyzing Video",
    "Extracting Highlights",
    "Generating Captions",
    "Creating Shorts",
    "Finalizing",
];

pub const INITIAL_STEP: &str = "Initializing...";
pub const COMPLETE_STEP: &str = "Complete!";

pub const PLACEHOLDER_VIDEO_URL: &str =
    "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Processing,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct JobStep {
    pub name: String,
    pub status: StepStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Clip {
    pub id: String,
    pub url: String,
    pub thumbnail_url: String,
    pub duration: u32,
    pub title: String,
}

impl Clip {
    pub fn placeholder(job_id: &str, index: usize, duration: u32) -> Self {
        let id = format!("clip_{}_{}", job_id, index);
        Self {
            url: PLACEHOLDER_VIDEO_URL.to_string(),
            thumbnail_url: format!("https://picsum.photos/seed/{}/270/480", id),
            duration,
            title: format!("Viral Short #{}", index),
            id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Job {
    pub job_id: String,
    pub video_id: String,
    pub status: JobStatus,
    pub progress: u8,
    pub current_step: String,
    pub steps: Vec<JobStep>,
    pub clips: Vec<Clip>,
    pub duration: u32,
    pub quantity: u32,
    pub language: String,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

impl Job {
    pub fn new(job_id: String, video_id: String, duration: u32, quantity: u32, language: String) -> Self {
        Self {
            job_id,
            video_id,
            status: JobStatus::Processing,
            progress: 0,
            current_step: INITIAL_STEP.to_string(),
            steps: STEP_NAMES
                .iter()
                .map(|name| JobStep {
                    name: name.to_string(),
                    status: StepStatus::Pending,
                })
                .collect(),
            clips: Vec::new(),
            duration,
            quantity,
            language,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn start_step(&mut self, index: usize) {
        if let Some(step) = self.steps.get_mut(index) {
            if step.status == StepStatus::Pending {
                step.status = StepStatus::InProgress;
                self.current_step = step.name.clone();
            }
        }
    }

    /// Marks step `index` done and moves progress to its share of 100.
    pub fn finish_step(&mut self, index: usize) {
        let total = self.steps.len();
        if let Some(step) = self.steps.get_mut(index) {
            if step.status == StepStatus::InProgress {
                step.status = StepStatus::Completed;
                let progress = step_progress(index, total);
                self.progress = self.progress.max(progress);
            }
        }
    }

    pub fn complete(&mut self, clips: Vec<Clip>) {
        self.clips = clips;
        self.status = JobStatus::Completed;
        self.current_step = COMPLETE_STEP.to_string();
    }

    /// Seconds-ish estimate shown to clients; not a scheduling promise.
    pub fn estimated_time_remaining(&self) -> u32 {
        let remaining = 100u32.saturating_sub(self.progress as u32);
        remaining / 10 * 2
    }
}

pub fn step_progress(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((100 * (index + 1) + total / 2) / total).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        Job::new("j1".to_string(), "v1".to_string(), 60, 3, "en".to_string())
    }

    #[test]
    fn new_job_starts_pending() {
        let job = job();

        assert_eq!(job.status, JobStatus::Processing);
        assert_eq!(job.progress, 0);
        assert_eq!(job.current_step, INITIAL_STEP);
        assert_eq!(job.steps.len(), 5);
        assert!(job.steps.iter().all(|s| s.status == StepStatus::Pending));
        assert!(job.clips.is_empty());
    }

    #[test]
    fn progress_steps_in_fifths() {
        let expected = [20, 40, 60, 80, 100];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(step_progress(i, 5), *want);
        }
    }

    #[test]
    fn steps_cannot_skip_or_reverse() {
        let mut job = job();

        // finishing a step that never started is a no-op
        job.finish_step(0);
        assert_eq!(job.steps[0].status, StepStatus::Pending);
        assert_eq!(job.progress, 0);

        job.start_step(0);
        assert_eq!(job.current_step, "Analyzing Video");
        job.finish_step(0);
        job.start_step(0);
        assert_eq!(job.steps[0].status, StepStatus::Completed);
        assert_eq!(job.progress, 20);
    }

    #[test]
    fn estimate_shrinks_with_progress() {
        let mut job = job();
        let mut last = job.estimated_time_remaining();
        assert_eq!(last, 20);

        for i in 0..STEP_NAMES.len() {
            job.start_step(i);
            job.finish_step(i);
            let now = job.estimated_time_remaining();
            assert!(now <= last);
            last = now;
        }
        assert_eq!(job.progress, 100);
        assert_eq!(last, 0);
    }

    #[test]
    fn placeholder_clip_fields() {
        let clip = Clip::placeholder("j1", 2, 45);

        assert_eq!(clip.id, "clip_j1_2");
        assert_eq!(clip.title, "Viral Short #2");
        assert_eq!(clip.url, PLACEHOLDER_VIDEO_URL);
        assert_eq!(clip.thumbnail_url, "https://picsum.photos/seed/clip_j1_2/270/480");
    }

    #[test]
    fn statuses_serialize_snake_case() {
        assert_eq!(serde_json::to_value(StepStatus::InProgress).unwrap(), "in_progress");
        assert_eq!(serde_json::to_value(JobStatus::Processing).unwrap(), "processing");
    }
}
