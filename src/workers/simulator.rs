use crate::infrastructure::memory::store::MemoryStore;
use crate::modules::process::model::{Clip, STEP_NAMES};
use crate::modules::process::repository::JobRepository;
use rand::seq::IndexedRandom;
use std::time::Duration;
use tracing::{debug, info};

pub const CLIP_DURATIONS: [u32; 3] = [30, 45, 60];

/// Walks a job through every pipeline step, then attaches fabricated clips.
///
/// Exits quietly as soon as the job disappears from the store.
pub async fn run(store: MemoryStore, job_id: String, quantity: u32, step_delay: Duration) {
    if !JobRepository::exists(&store, &job_id).await {
        return;
    }

    for (index, name) in STEP_NAMES.iter().enumerate() {
        if !JobRepository::update(&store, &job_id, |job| job.start_step(index)).await {
            debug!("Job {} vanished before step '{}'", job_id, name);
            return;
        }

        tokio::time::sleep(step_delay).await;

        if !JobRepository::update(&store, &job_id, |job| job.finish_step(index)).await {
            debug!("Job {} vanished during step '{}'", job_id, name);
            return;
        }
        debug!("Job {} finished '{}'", job_id, name);
    }

    let clips = generate_clips(&job_id, quantity);
    if JobRepository::update(&store, &job_id, |job| job.complete(clips)).await {
        info!("✅ Job {} completed with {} clips", job_id, quantity);
    }
}

pub fn generate_clips(job_id: &str, quantity: u32) -> Vec<Clip> {
    let mut rng = rand::rng();
    (1..=quantity as usize)
        .map(|n| {
            let duration = *CLIP_DURATIONS.choose(&mut rng).unwrap_or(&CLIP_DURATIONS[0]);
            Clip::placeholder(job_id, n, duration)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::process::model::{COMPLETE_STEP, Job, JobStatus, StepStatus};

    #[test]
    fn clips_are_numbered_from_one() {
        let clips = generate_clips("abc", 3);

        let ids: Vec<_> = clips.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["clip_abc_1", "clip_abc_2", "clip_abc_3"]);
        assert!(clips.iter().all(|c| CLIP_DURATIONS.contains(&c.duration)));
    }

    #[test]
    fn zero_quantity_yields_no_clips() {
        assert!(generate_clips("abc", 0).is_empty());
    }

    #[tokio::test]
    async fn run_completes_the_job() {
        let store = MemoryStore::new();
        JobRepository::insert(&store, Job::new("j1".to_string(), "v1".to_string(), 60, 2, "en".to_string())).await;

        run(store.clone(), "j1".to_string(), 2, Duration::from_millis(1)).await;

        let job = JobRepository::find_by_id(&store, "j1").await.unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.progress, 100);
        assert_eq!(job.current_step, COMPLETE_STEP);
        assert!(job.steps.iter().all(|s| s.status == StepStatus::Completed));
        assert_eq!(job.clips.len(), 2);
    }

    #[tokio::test]
    async fn run_ignores_missing_job() {
        let store = MemoryStore::new();

        run(store.clone(), "ghost".to_string(), 2, Duration::from_millis(1)).await;

        assert!(store.jobs.read().await.is_empty());
    }

    #[tokio::test]
    async fn run_stops_when_job_is_removed_midway() {
        let store = MemoryStore::new();
        JobRepository::insert(&store, Job::new("j1".to_string(), "v1".to_string(), 60, 2, "en".to_string())).await;

        let handle = tokio::spawn(run(store.clone(), "j1".to_string(), 2, Duration::from_millis(20)));
        tokio::time::sleep(Duration::from_millis(30)).await;
        JobRepository::remove(&store, "j1").await;
        handle.await.unwrap();

        assert!(!JobRepository::exists(&store, "j1").await);
    }
}
