use super::model::VideoRecord;
use crate::infrastructure::memory::store::MemoryStore;
use time::OffsetDateTime;

pub struct VideoRepository;

impl VideoRepository {
    pub async fn insert(store: &MemoryStore, record: VideoRecord) {
        store.videos.write().await.insert(record.id.clone(), record);
    }

    pub async fn exists(store: &MemoryStore, id: &str) -> bool {
        store.videos.read().await.contains_key(id)
    }

    pub async fn find_by_id(store: &MemoryStore, id: &str) -> Option<VideoRecord> {
        store.videos.read().await.get(id).cloned()
    }

    /// Drops every record uploaded before `cutoff`, returning how many went.
    pub async fn evict_before(store: &MemoryStore, cutoff: OffsetDateTime) -> usize {
        let mut videos = store.videos.write().await;
        let before = videos.len();
        videos.retain(|_, video| video.uploaded_at >= cutoff);
        before - videos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[tokio::test]
    async fn insert_then_lookup() {
        let store = MemoryStore::new();
        VideoRepository::insert(&store, VideoRecord::from_file("v1".to_string(), "a.mp4".to_string())).await;

        assert!(VideoRepository::exists(&store, "v1").await);
        assert!(!VideoRepository::exists(&store, "v2").await);
        assert_eq!(VideoRepository::find_by_id(&store, "v1").await.unwrap().filename, "a.mp4");
    }

    #[tokio::test]
    async fn evict_before_keeps_recent_uploads() {
        let store = MemoryStore::new();
        let mut old = VideoRecord::from_file("old".to_string(), "a.mp4".to_string());
        old.uploaded_at -= Duration::hours(2);
        VideoRepository::insert(&store, old).await;
        VideoRepository::insert(&store, VideoRecord::from_file("new".to_string(), "b.mp4".to_string())).await;

        let evicted = VideoRepository::evict_before(&store, OffsetDateTime::now_utc() - Duration::hours(1)).await;

        assert_eq!(evicted, 1);
        assert!(VideoRepository::exists(&store, "new").await);
        assert!(!VideoRepository::exists(&store, "old").await);
    }
}
