//! # App configuration — `goal-achiever.toml`
//!
//! Defines the TOML configuration file that lives in the app's data directory
//! (filename: [`AppConfig::filename`] = `"goal-achiever.toml"`). It is read once at
//! launch and written back from the Settings screen.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # backend root, no trailing slash needed
//!
//! [reminder]
//! enabled = false   # daily study reminder
//! hour = 9          # 0-23, local time
//! minute = 0
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. Builder helpers (`with_base_url`, `with_reminder`), TOML (de)serialisation, load/save against a directory. |
//! | [`ApiConfig`] | Backend location. |
//! | [`ReminderConfig`] | Daily reminder preference. Scheduling itself belongs to the platform notification service. |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::StoreError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Top-level configuration stored in `goal-achiever.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Daily reminder preference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReminderConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_reminder_hour")]
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

fn default_reminder_hour() -> u8 {
    9
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            hour: default_reminder_hour(),
            minute: 0,
        }
    }
}

impl ReminderConfig {
    /// 12-hour clock label, e.g. `9:00 AM`, `12:30 PM`, `12:00 AM` for midnight.
    pub fn time_label(&self) -> String {
        let period = if self.hour >= 12 { "PM" } else { "AM" };
        let display_hour = match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        format!("{display_hour}:{:02} {period}", self.minute)
    }
}

impl AppConfig {
    /// Builder method to set the backend URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Builder method to set the reminder preference.
    pub fn with_reminder(mut self, enabled: bool, hour: u8, minute: u8) -> Self {
        self.reminder = ReminderConfig {
            enabled,
            hour: hour.min(23),
            minute: minute.min(59),
        };
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "goal-achiever.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load from `dir`, returning defaults when the file does not exist.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(dir.join(Self::filename())) {
            Ok(s) => Ok(Self::from_toml(&s)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, dir: &Path) -> Result<(), StoreError> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(Self::filename()), self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.reminder.hour, 9);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://goals.example.com"

            [reminder]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://goals.example.com");
        assert!(config.reminder.enabled);
        assert_eq!(config.reminder.hour, 9);
        assert_eq!(config.reminder.minute, 0);
    }

    #[test]
    fn test_load_missing_then_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());

        let config = AppConfig::default()
            .with_base_url("http://10.0.2.2:8000")
            .with_reminder(true, 20, 15);
        config.save(dir.path()).unwrap();

        assert_eq!(AppConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(AppConfig::filename()), "[api\nbase_url =").unwrap();
        assert!(matches!(AppConfig::load(dir.path()), Err(StoreError::Config(_))));
    }

    #[test]
    fn test_reminder_clamped() {
        let config = AppConfig::default().with_reminder(true, 30, 75);
        assert_eq!(config.reminder.hour, 23);
        assert_eq!(config.reminder.minute, 59);
    }

    #[test]
    fn test_time_label() {
        let at = |hour, minute| ReminderConfig { enabled: true, hour, minute }.time_label();
        assert_eq!(at(0, 0), "12:00 AM");
        assert_eq!(at(9, 5), "9:05 AM");
        assert_eq!(at(12, 30), "12:30 PM");
        assert_eq!(at(23, 0), "11:00 PM");
    }
}
