use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::modules::process::model::Job;
use crate::modules::upload::model::VideoRecord;

pub type Table<T> = Arc<RwLock<HashMap<String, T>>>;

/// Process-lifetime storage for uploads and jobs. Nothing is persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub videos: Table<VideoRecord>,
    pub jobs: Table<Job>,
}

impl MemoryStore {
    pub fn new() -> Self {
        info!("✅ In-memory store ready");
        Self::default()
    }
}
