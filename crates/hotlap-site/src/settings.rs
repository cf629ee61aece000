use serde::Deserialize;
use std::path::Path;

use hotlap_core::RELEASES_API_URL;
use hotlap_platform::AppPaths;

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,

    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_auto_redirect_delay")]
    pub auto_redirect_delay_ms: u64,

    #[serde(default = "default_release_api_url")]
    pub release_api_url: String,
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_http_timeout() -> u64 {
    10
}

fn default_fetch_timeout() -> u64 {
    15
}

fn default_auto_redirect_delay() -> u64 {
    u64::try_from(hotlap_core::AUTO_REDIRECT_DELAY.as_millis()).unwrap_or(500)
}

fn default_release_api_url() -> String {
    RELEASES_API_URL.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
            http_timeout_secs: default_http_timeout(),
            fetch_timeout_secs: default_fetch_timeout(),
            auto_redirect_delay_ms: default_auto_redirect_delay(),
            release_api_url: default_release_api_url(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        let Ok(paths) = AppPaths::new() else {
            return Self::default();
        };
        Self::load_from(&paths.settings_file())
    }

    pub fn load_from(settings_path: &Path) -> Self {
        if !settings_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(settings_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
