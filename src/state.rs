use crate::config::settings::AppConfig;
use crate::infrastructure::memory::store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: MemoryStore,
}

impl AppState {
    pub fn new(config: AppConfig, store: MemoryStore) -> Self {
        Self { config, store }
    }
}
