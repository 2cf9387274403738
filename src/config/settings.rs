use serde::Deserialize;
use std::time::Duration;
use crate::config::env::{self, EnvKey};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STEP_DELAY_MS: u64 = 2000;
const DEFAULT_REGENERATE_DELAY_MS: u64 = 2000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;
const DEFAULT_JANITOR_INTERVAL_SECS: u64 = 60;
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub step_delay_ms: u64,
    pub regenerate_delay_ms: u64,
    pub max_upload_bytes: usize,
    /// `None` disables the janitor entirely.
    pub retention_secs: Option<u64>,
    pub janitor_interval_secs: u64,
    pub log_filter: String,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, DEFAULT_PORT),
            step_delay_ms: env::get_parsed(EnvKey::StepDelayMs, DEFAULT_STEP_DELAY_MS),
            regenerate_delay_ms: env::get_parsed(EnvKey::RegenerateDelayMs, DEFAULT_REGENERATE_DELAY_MS),
            max_upload_bytes: env::get_parsed(EnvKey::MaxUploadBytes, DEFAULT_MAX_UPLOAD_BYTES),
            retention_secs: env::get_optional(EnvKey::RetentionSecs),
            janitor_interval_secs: env::get_parsed(EnvKey::JanitorIntervalSecs, DEFAULT_JANITOR_INTERVAL_SECS),
            log_filter: env::get_or(EnvKey::LogFilter, DEFAULT_LOG_FILTER),
        }
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn regenerate_delay(&self) -> Duration {
        Duration::from_millis(self.regenerate_delay_ms)
    }

    pub fn retention(&self) -> Option<Duration> {
        self.retention_secs.map(Duration::from_secs)
    }

    pub fn janitor_interval(&self) -> Duration {
        Duration::from_secs(self.janitor_interval_secs.max(1))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_follow_millisecond_fields() {
        let config = AppConfig {
            server_port: 8000,
            step_delay_ms: 15,
            regenerate_delay_ms: 5,
            max_upload_bytes: 1024,
            retention_secs: None,
            janitor_interval_secs: 0,
            log_filter: "info".to_string(),
        };

        assert_eq!(config.step_delay(), Duration::from_millis(15));
        assert_eq!(config.regenerate_delay(), Duration::from_millis(5));
        assert_eq!(config.retention(), None);
        assert_eq!(config.janitor_interval(), Duration::from_secs(1));
    }
}
