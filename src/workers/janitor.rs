use crate::infrastructure::memory::store::MemoryStore;
use crate::modules::process::repository::JobRepository;
use crate::modules::upload::repository::VideoRepository;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Periodically drops finished jobs and uploads older than `retention`.
///
/// Only started when a retention window is configured; by default the store
/// grows for the life of the process.
pub async fn start_janitor_worker(store: MemoryStore, retention: Duration, interval: Duration) {
    info!("🧹 Starting janitor (retention {:?}, every {:?})", retention, interval);

    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        sweep(&store, retention).await;
    }
}

pub async fn sweep(store: &MemoryStore, retention: Duration) -> (usize, usize) {
    let retention = match time::Duration::try_from(retention) {
        Ok(d) => d,
        Err(e) => {
            warn!("Retention window out of range, skipping sweep: {}", e);
            return (0, 0);
        }
    };
    let cutoff = OffsetDateTime::now_utc() - retention;

    let jobs = JobRepository::evict_completed_before(store, cutoff).await;
    let videos = VideoRepository::evict_before(store, cutoff).await;
    if jobs + videos > 0 {
        info!("🧹 Evicted {} jobs and {} videos", jobs, videos);
    }
    (jobs, videos)
}
