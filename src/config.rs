use std::fs;

use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

const CONFIG_FILE: &str = "docdrop.toml";
const SERVER_URL_ENV: &str = "DOCDROP_SERVER_URL";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

/// Resolves settings in order: compiled defaults, `docdrop.toml` in the
/// working directory, then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(CONFIG_FILE) {
        match toml::from_str::<Settings>(&raw) {
            Ok(file_cfg) => settings = file_cfg,
            Err(e) => warn!("ignoring malformed {CONFIG_FILE}: {e}"),
        }
    }

    if let Ok(v) = std::env::var(SERVER_URL_ENV) {
        settings.server_url = v;
    }

    settings.server_url = normalize_server_url(&settings.server_url);
    debug!(server = %settings.server_url, "settings resolved");
    settings
}

fn normalize_server_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
