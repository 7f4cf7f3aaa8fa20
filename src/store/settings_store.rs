//! Typed accessors over the settings directory

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::format;
use super::{
    Credentials, Directory, HistoryLog, LocalDir, PasswordTable, SettingFile, TunnelRegistry,
};
use crate::error::{Result, StoreError};

/// Per-user settings backed by a directory of flat files
///
/// Every read tolerates a missing file and returns an empty value, except
/// [`SettingsStore::credentials`], which expects
/// [`SettingsStore::ensure_credentials_exist`] to have run first.
#[derive(Debug, Clone)]
pub struct SettingsStore<D: Directory = LocalDir> {
    dir: D,
}

impl SettingsStore<LocalDir> {
    /// Open the store at `path`, creating the directory if needed
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_dir(LocalDir::new(path.as_ref()))
    }
}

impl<D: Directory> SettingsStore<D> {
    /// Wrap an existing directory handle, creating the directory if needed
    pub fn with_dir(dir: D) -> Result<Self> {
        dir.create()?;
        debug!("Settings directory ready at {:?}", dir.path());
        Ok(Self { dir })
    }

    /// The settings directory
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Where a given setting is stored
    pub fn file_path(&self, file: SettingFile) -> PathBuf {
        self.dir.child(file.file_name())
    }

    /// Overwrite the history file
    #[instrument(skip_all, fields(entries = history.len()))]
    pub fn save_history(&self, history: &[String]) -> Result<()> {
        self.write(SettingFile::History, &format::format_history(history))
    }

    /// Load command history, oldest first
    pub fn load_history(&self) -> Result<HistoryLog> {
        let contents = self.dir.contents_or_blank(SettingFile::History.file_name())?;
        Ok(format::parse_history(&contents))
    }

    /// Script run when the interactive shell starts
    pub fn load_env(&self) -> Result<String> {
        self.dir.contents_or_blank(SettingFile::Env.file_name())
    }

    /// User-defined commands mixed into the shell
    pub fn load_commands(&self) -> Result<String> {
        self.dir.contents_or_blank(SettingFile::Commands.file_name())
    }

    /// Users allowed to connect to the daemon
    pub fn passwords(&self) -> Result<PasswordTable> {
        let lines = self.dir.lines_or_empty(SettingFile::Passwords.file_name())?;
        Ok(format::parse_passwords(&lines))
    }

    /// Overwrite the password table, as when a remote connection publishes it
    #[instrument(skip_all, fields(users = passwords.len()))]
    pub fn save_passwords(&self, passwords: &PasswordTable) -> Result<()> {
        self.write(SettingFile::Passwords, &format::format_pairs(passwords))
    }

    /// The client credentials from the first line of the credentials file
    pub fn credentials(&self) -> Result<Credentials> {
        let path = self.file_path(SettingFile::Credentials);
        let lines = self
            .dir
            .lines(SettingFile::Credentials.file_name())?
            .ok_or_else(|| StoreError::MissingCredentials(path.clone()))?;
        let first = lines
            .first()
            .ok_or_else(|| StoreError::MissingCredentials(path.clone()))?;

        Ok(format::parse_credentials(first).ok_or(StoreError::MalformedCredentials(path))?)
    }

    pub fn credentials_user(&self) -> Result<String> {
        Ok(self.credentials()?.user)
    }

    pub fn credentials_password(&self) -> Result<String> {
        Ok(self.credentials()?.password)
    }

    /// Overwrite the credentials file with a single `user:password` line
    #[instrument(skip_all, fields(user = %user))]
    pub fn save_credentials(&self, user: &str, password: &str) -> Result<()> {
        let credentials = Credentials::new(user, password);
        self.write(
            SettingFile::Credentials,
            &format::format_credentials(&credentials),
        )
    }

    /// Generate credentials if the credentials file is missing or blank
    ///
    /// Returns `true` if new credentials were generated.
    pub fn ensure_credentials_exist(&self) -> Result<bool> {
        let contents = self
            .dir
            .contents_or_blank(SettingFile::Credentials.file_name())?;
        if contents.trim().is_empty() {
            self.generate_credentials()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Replace the credentials with a freshly generated pair
    pub fn generate_credentials(&self) -> Result<Credentials> {
        let credentials = Credentials::generate();
        self.save_credentials(&credentials.user, &credentials.password)?;
        info!(user = %credentials.user, "Generated new client credentials");
        Ok(credentials)
    }

    /// Previously established SSH tunnels
    pub fn tunnels(&self) -> Result<TunnelRegistry> {
        let lines = self.dir.lines_or_empty(SettingFile::Tunnels.file_name())?;
        Ok(format::parse_tunnels(&lines))
    }

    /// Overwrite the tunnel registry, one `host:port` line per entry in order
    #[instrument(skip_all, fields(tunnels = tunnels.len()))]
    pub fn save_tunnels(&self, tunnels: &TunnelRegistry) -> Result<()> {
        self.write(SettingFile::Tunnels, &format::format_pairs(tunnels))
    }

    fn write(&self, file: SettingFile, contents: &str) -> Result<()> {
        debug!("Saving {}", file);
        self.dir.write(file.file_name(), contents)
    }
}
