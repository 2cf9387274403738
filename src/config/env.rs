use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    StepDelayMs,
    RegenerateDelayMs,
    MaxUploadBytes,
    RetentionSecs,
    JanitorIntervalSecs,
    LogFilter,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "PORT",
            EnvKey::StepDelayMs => "STEP_DELAY_MS",
            EnvKey::RegenerateDelayMs => "REGENERATE_DELAY_MS",
            EnvKey::MaxUploadBytes => "MAX_UPLOAD_BYTES",
            EnvKey::RetentionSecs => "RETENTION_SECS",
            EnvKey::JanitorIntervalSecs => "JANITOR_INTERVAL_SECS",
            EnvKey::LogFilter => "RUST_LOG",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Like `get_parsed`, but unset or unparseable values yield `None`.
pub fn get_optional<T: FromStr>(key: EnvKey) -> Option<T> {
    get(key).ok().and_then(|val| val.parse::<T>().ok())
}
