//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Notification preferences (streak warnings)
//! - Default chat retention for new conversations
//!
//! Configuration is stored at `~/.config/solace/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chat::RetentionPeriod;
use crate::error::ConfigError;
use crate::journal::ReminderPreferences;

use super::data_dir;

fn default_true() -> bool {
    true
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub streak_warnings: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            streak_warnings: true,
        }
    }
}

/// Chat configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Retention applied to newly created chats
    #[serde(default)]
    pub default_retention: RetentionPeriod,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/solace"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults if the file
    /// does not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path (missing file yields defaults).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Reminder preferences view for the streak-warning check.
    pub fn reminder_preferences(&self) -> ReminderPreferences {
        ReminderPreferences {
            enabled: self.notifications.enabled,
            streak_warnings: self.notifications.streak_warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.notifications.enabled);
        assert!(config.notifications.streak_warnings);
        assert_eq!(config.chat.default_retention, RetentionPeriod::Forever);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.notifications.enabled);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.notifications.streak_warnings = false;
        config.chat.default_retention = RetentionPeriod::OneWeek;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.notifications.streak_warnings);
        assert_eq!(loaded.chat.default_retention, RetentionPeriod::OneWeek);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[notifications]\nenabled = false\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.notifications.enabled);
        assert!(loaded.notifications.streak_warnings);
        assert_eq!(loaded.chat.default_retention, RetentionPeriod::Forever);
    }

    #[test]
    fn test_retention_wire_name_in_toml() {
        let mut config = Config::default();
        config.chat.default_retention = RetentionPeriod::TwentyFourHours;
        let raw = toml::to_string_pretty(&config).unwrap();
        assert!(raw.contains("\"24h\""));
    }
}
