//! Settings store
//!
//! Maps rush's logical settings onto flat files in one directory:
//! - Command history (`history`)
//! - Shell startup and custom command scripts (`env.rb`, `commands.rb`)
//! - Remote access passwords and client credentials (`passwords`, `credentials`)
//! - SSH tunnel registry (`tunnels`)

mod dir;
pub mod format;
pub mod secret;
mod settings_store;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use dir::{Directory, LocalDir, split_lines};
pub use settings_store::*;

/// Past commands of the interactive shell, oldest first
pub type HistoryLog = Vec<String>;

/// Usernames mapped to passwords accepted by the daemon
pub type PasswordTable = IndexMap<String, String>;

/// Remote hosts mapped to the local port their tunnel listens on
pub type TunnelRegistry = IndexMap<String, u16>;

/// The single user/password pair a client sends when connecting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Generate a random user/password pair
    pub fn generate() -> Self {
        Self::new(secret::generate_user(), secret::generate_password())
    }
}

/// A file in the settings directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingFile {
    History,
    Env,
    Commands,
    Passwords,
    Credentials,
    Tunnels,
    /// Reserved for key pairs; nothing reads or writes it
    Keys,
}

impl SettingFile {
    pub const ALL: [SettingFile; 7] = [
        SettingFile::History,
        SettingFile::Env,
        SettingFile::Commands,
        SettingFile::Passwords,
        SettingFile::Credentials,
        SettingFile::Tunnels,
        SettingFile::Keys,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            SettingFile::History => "history",
            SettingFile::Env => "env.rb",
            SettingFile::Commands => "commands.rb",
            SettingFile::Passwords => "passwords",
            SettingFile::Credentials => "credentials",
            SettingFile::Tunnels => "tunnels",
            SettingFile::Keys => "keys_file",
        }
    }
}

impl std::fmt::Display for SettingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<_> = SettingFile::ALL.iter().map(|f| f.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SettingFile::ALL.len());
    }

    #[test]
    fn test_generated_credentials_lengths() {
        let creds = Credentials::generate();
        assert!(secret::USER_LENGTH.contains(&creds.user.len()));
        assert!(secret::PASSWORD_LENGTH.contains(&creds.password.len()));
        assert!(!creds.user.contains(':'));
    }
}
