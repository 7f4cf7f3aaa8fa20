//! Error types for rush-config
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `Display` and `Error` impls.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for rush-config
#[derive(Error, Debug)]
pub enum Error {
    #[error("Settings store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings directory and file errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create settings directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No credentials stored at {0} (run ensure_credentials_exist first)")]
    MissingCredentials(PathBuf),

    #[error("Credentials line in {0} is not in user:password form")]
    MalformedCredentials(PathBuf),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Could not determine home directory")]
    HomeNotFound,
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::MissingCredentials(PathBuf::from("/tmp/rush/credentials"));
        assert!(err.to_string().contains("/tmp/rush/credentials"));

        let err = ConfigError::HomeNotFound;
        assert!(err.to_string().contains("home directory"));

        let err = StoreError::WriteFailed {
            path: PathBuf::from("/tmp/rush/history"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("Failed to write /tmp/rush/history"));
    }

    #[test]
    fn test_error_conversion() {
        let store_err = StoreError::MalformedCredentials(PathBuf::from("credentials"));
        let top_err: Error = store_err.into();
        assert!(matches!(top_err, Error::Store(_)));

        let config_err = ConfigError::LoadFailed("bad toml".to_string());
        let top_err: Error = config_err.into();
        assert!(matches!(top_err, Error::Config(_)));
    }
}
