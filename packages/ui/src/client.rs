//! Shared client constructor for the native platforms.
//!
//! Configuration and the session live side by side under the app data directory:
//!
//! - `<data_dir>/goal-achiever/goal-achiever.toml`
//! - `<data_dir>/goal-achiever/kv/<key>`

use std::path::{Path, PathBuf};

use store::{AppConfig, FileStore, SessionStore};
use tracing::{info, warn};

/// Environment variable that overrides `[api] base_url`.
pub const API_URL_ENV: &str = "GOAL_ACHIEVER_API_URL";

/// The facade as the app uses it: persisted on the filesystem.
pub type AppClient = api::ApiClient<FileStore>;

pub fn data_dir() -> PathBuf {
    FileStore::default_dir()
}

/// Read the config file, falling back to defaults when it is missing or unreadable,
/// then apply the environment override.
pub fn load_config(dir: &Path) -> AppConfig {
    let config = AppConfig::load(dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config file");
        AppConfig::default()
    });
    apply_env_override(config, std::env::var(API_URL_ENV).ok())
}

fn apply_env_override(config: AppConfig, value: Option<String>) -> AppConfig {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(url) => {
            info!(%url, "api url overridden from environment");
            config.with_base_url(url)
        }
        None => config,
    }
}

pub fn make_client(config: &AppConfig, dir: PathBuf) -> AppClient {
    api::ApiClient::new(&config.api.base_url, SessionStore::new(FileStore::new(dir)))
}
