use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    File,
    Youtube,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct VideoRecord {
    pub id: String,
    pub filename: String,
    pub source: VideoSource,
    /// Present only for `VideoSource::Youtube`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(with = "time::serde::iso8601")]
    pub uploaded_at: OffsetDateTime,
}

impl VideoRecord {
    pub fn from_file(id: String, filename: String) -> Self {
        Self {
            id,
            filename,
            source: VideoSource::File,
            url: None,
            uploaded_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn from_url(id: String, url: String) -> Self {
        Self {
            filename: format!("youtube_{}.mp4", id),
            id,
            source: VideoSource::Youtube,
            url: Some(url),
            uploaded_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_records_derive_their_filename() {
        let record = VideoRecord::from_url("ab12cd34".to_string(), "http://x/y.mp4".to_string());

        assert_eq!(record.filename, "youtube_ab12cd34.mp4");
        assert_eq!(record.source, VideoSource::Youtube);
        assert_eq!(record.url.as_deref(), Some("http://x/y.mp4"));
    }

    #[test]
    fn file_records_serialize_without_url() {
        let record = VideoRecord::from_file("ab12cd34".to_string(), "clip.mov".to_string());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["source"], "file");
        assert!(json.get("url").is_none());
        assert!(json["uploaded_at"].is_string());
    }
}
