//! Tool configuration
//!
//! Layered configuration: defaults → `config.toml` → environment variables

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};
use crate::store::SettingsStore;

/// Name of the settings directory under the user's home
pub const SETTINGS_DIR_NAME: &str = ".rush";

/// Name of the configuration file inside the settings directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Port the rush daemon listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 7770;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings directory (defaults to `~/.rush`)
    pub settings_dir: Option<PathBuf>,

    /// Port of the remote daemon
    pub daemon_port: u16,

    /// Enable debug logging
    pub debug: bool,

    /// Log file path (if set, logs to file instead of stderr)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_dir: None,
            daemon_port: DEFAULT_PORT,
            debug: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration using a specific config file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config: Config = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Layer config file if it exists
            .merge(Toml::file(config_path))
            // Layer environment variables (RUSH_SETTINGS_DIR, etc.)
            .merge(Env::prefixed("RUSH_"))
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        Ok(config)
    }

    /// `~/.rush`, resolved from the user's home directory
    pub fn default_settings_dir() -> Result<PathBuf> {
        let dirs = BaseDirs::new().ok_or(Error::Config(ConfigError::HomeNotFound))?;
        Ok(dirs.home_dir().join(SETTINGS_DIR_NAME))
    }

    /// Get the configuration file path
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::default_settings_dir()?.join(CONFIG_FILE_NAME))
    }

    /// The settings directory in effect
    pub fn settings_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.settings_dir {
            Ok(dir.clone())
        } else {
            Self::default_settings_dir()
        }
    }

    /// Open the settings store in the configured directory
    pub fn open_store(&self) -> Result<SettingsStore> {
        SettingsStore::open(self.settings_dir()?)
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save current configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        std::fs::write(config_path, toml)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.settings_dir, None);
        assert_eq!(config.daemon_port, 7770);
        assert!(!config.debug);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("daemon_port"));
        assert!(toml.contains("7770"));
    }

    #[test]
    fn test_save_and_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config = Config {
            settings_dir: Some(temp_dir.path().join("settings")),
            daemon_port: 9000,
            ..Config::default()
        };
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.daemon_port, 9000);
        assert_eq!(loaded.settings_dir, config.settings_dir);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.daemon_port, DEFAULT_PORT);
    }

    #[test]
    fn test_explicit_settings_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            settings_dir: Some(temp_dir.path().join("custom")),
            ..Config::default()
        };

        assert_eq!(config.settings_dir().unwrap(), temp_dir.path().join("custom"));
        let store = config.open_store().unwrap();
        assert!(store.dir().is_dir());
    }
}
