//! rush-config - Per-user settings for the rush remote file-management shell
//!
//! Persists small pieces of state as flat files in a single settings
//! directory (`~/.rush` by default): shell history, startup and command
//! scripts, daemon passwords, client credentials and SSH tunnels.
//!
//! # Modules
//!
//! - [`store`] - The settings store and its file formats
//! - [`config`] - Tool configuration and settings directory resolution
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use store::{
    Credentials, Directory, HistoryLog, LocalDir, PasswordTable, SettingFile, SettingsStore,
    TunnelRegistry,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
