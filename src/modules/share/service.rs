use super::dto::{ShareRequest, ShareResponse};
use super::model::Platform;
use crate::common::response::ApiError;
use tracing::info;

pub struct ShareService;

impl ShareService {
    /// Nothing is published; the caller gets a link shaped like the platform's.
    pub fn share(platform: &str, req: &ShareRequest) -> Result<ShareResponse, ApiError> {
        let parsed = platform.parse::<Platform>().map_err(ApiError::bad_request)?;
        info!("Share of {} prepared for {}", req.clip_id, parsed);

        Ok(ShareResponse {
            success: true,
            message: format!("Video ready to share on {}", title_case(platform)),
            share_url: format!("https://{}.com/share?video={}", platform, req.clip_id),
        })
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ShareRequest {
        ShareRequest {
            clip_id: "clip_j1_1".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            title: None,
            description: None,
            hashtags: None,
        }
    }

    #[test]
    fn builds_message_and_link() {
        let res = ShareService::share("TikTok", &request()).unwrap();

        assert!(res.success);
        assert_eq!(res.message, "Video ready to share on Tiktok");
        assert_eq!(res.share_url, "https://TikTok.com/share?video=clip_j1_1");
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = ShareService::share("bogus-platform", &request()).unwrap_err();

        assert_eq!(
            err,
            ApiError::bad_request("Invalid platform. Use: instagram, youtube, tiktok")
        );
    }

    #[test]
    fn title_case_handles_edges() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("youtube"), "Youtube");
    }
}
