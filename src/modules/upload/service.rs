use super::dto::UploadResponse;
use super::model::VideoRecord;
use super::repository::VideoRepository;
use crate::common::ids::short_id;
use crate::common::response::ApiError;
use crate::state::AppState;
use tracing::info;

const DEFAULT_FILENAME: &str = "video.mp4";

pub struct UploadService;

impl UploadService {
    pub async fn register_file(state: &AppState, filename: Option<String>) -> UploadResponse {
        let video_id = short_id();
        let filename = filename
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        VideoRepository::insert(&state.store, VideoRecord::from_file(video_id.clone(), filename.clone())).await;
        info!("Stored uploaded video {} ({})", video_id, filename);

        UploadResponse {
            video_id,
            filename,
            message: "Video uploaded successfully".to_string(),
            status: "success".to_string(),
        }
    }

    pub async fn register_url(state: &AppState, url: String, message: &str) -> UploadResponse {
        let video_id = short_id();
        let record = VideoRecord::from_url(video_id.clone(), url);
        let filename = record.filename.clone();

        info!("Queued URL video {} from {:?}", video_id, record.url);
        VideoRepository::insert(&state.store, record).await;

        UploadResponse {
            video_id,
            filename,
            message: message.to_string(),
            status: "success".to_string(),
        }
    }

    /// Resolves the multipart endpoint: a file part wins over a URL.
    pub async fn register(
        state: &AppState,
        file: Option<Option<String>>,
        url: Option<String>,
    ) -> Result<UploadResponse, ApiError> {
        match (file, url.filter(|u| !u.is_empty())) {
            (Some(filename), _) => Ok(Self::register_file(state, filename).await),
            (None, Some(url)) => Ok(Self::register_url(state, url, "YouTube video queued for download").await),
            (None, None) => Err(ApiError::bad_request("No file or URL provided")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use crate::infrastructure::memory::store::MemoryStore;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), MemoryStore::new())
    }

    #[tokio::test]
    async fn file_without_name_falls_back_to_default() {
        let state = state();
        let res = UploadService::register(&state, Some(None), None).await.unwrap();

        assert_eq!(res.filename, "video.mp4");
        assert_eq!(res.message, "Video uploaded successfully");
        assert!(VideoRepository::exists(&state.store, &res.video_id).await);
    }

    #[tokio::test]
    async fn file_takes_precedence_over_url() {
        let state = state();
        let res = UploadService::register(&state, Some(Some("a.mp4".to_string())), Some("http://x".to_string()))
            .await
            .unwrap();

        let stored = VideoRepository::find_by_id(&state.store, &res.video_id).await.unwrap();
        assert_eq!(stored.filename, "a.mp4");
        assert!(stored.url.is_none());
    }

    #[tokio::test]
    async fn missing_inputs_are_rejected() {
        let state = state();
        let err = UploadService::register(&state, None, Some(String::new())).await.unwrap_err();

        assert_eq!(err, ApiError::bad_request("No file or URL provided"));
        assert!(state.store.videos.read().await.is_empty());
    }
}
