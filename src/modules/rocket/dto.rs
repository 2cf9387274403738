use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RocketRequest {
    pub clip_id: String,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RocketMetadata {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub suggested_time: String,
}
