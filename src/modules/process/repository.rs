use super::model::{Job, JobStatus};
use crate::infrastructure::memory::store::MemoryStore;
use time::OffsetDateTime;

pub struct JobRepository;

impl JobRepository {
    pub async fn insert(store: &MemoryStore, job: Job) {
        store.jobs.write().await.insert(job.job_id.clone(), job);
    }

    pub async fn exists(store: &MemoryStore, id: &str) -> bool {
        store.jobs.read().await.contains_key(id)
    }

    /// Cloned snapshot; later simulator writes are not reflected in it.
    pub async fn find_by_id(store: &MemoryStore, id: &str) -> Option<Job> {
        store.jobs.read().await.get(id).cloned()
    }

    /// Applies `f` under the write lock. Returns false when the job is gone.
    pub async fn update<F>(store: &MemoryStore, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Job),
    {
        match store.jobs.write().await.get_mut(id) {
            Some(job) => {
                f(job);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub async fn remove(store: &MemoryStore, id: &str) -> Option<Job> {
        store.jobs.write().await.remove(id)
    }

    /// Drops completed jobs created before `cutoff`. Running jobs are kept.
    pub async fn evict_completed_before(store: &MemoryStore, cutoff: OffsetDateTime) -> usize {
        let mut jobs = store.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|_, job| job.status == JobStatus::Processing || job.created_at >= cutoff);
        before - jobs.len()
    }
}
