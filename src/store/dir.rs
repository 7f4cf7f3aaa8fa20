//! Directory access for the settings store
//!
//! The store never touches the filesystem directly; it goes through a
//! [`Directory`] so every read path can share the same "absent means empty"
//! behaviour.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StoreError};

/// Whole-file access to a single directory of named files
pub trait Directory {
    /// Path of the directory itself
    fn path(&self) -> &Path;

    /// Create the directory (and parents). Succeeds if it already exists.
    fn create(&self) -> Result<()>;

    /// Path of a file inside the directory
    fn child(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Overwrite a file with `contents`
    fn write(&self, name: &str, contents: &str) -> Result<()>;

    /// Read a file, or `None` if it does not exist
    fn read(&self, name: &str) -> Result<Option<String>>;

    /// File contents, or an empty string if the file does not exist
    fn contents_or_blank(&self, name: &str) -> Result<String> {
        Ok(self.read(name)?.unwrap_or_default())
    }

    /// File lines, or an empty list if the file does not exist
    fn lines_or_empty(&self, name: &str) -> Result<Vec<String>> {
        Ok(split_lines(&self.contents_or_blank(name)?))
    }

    /// File lines. Returns `Ok(None)` if the file does not exist.
    fn lines(&self, name: &str) -> Result<Option<Vec<String>>> {
        Ok(self.read(name)?.map(|contents| split_lines(&contents)))
    }
}

/// Split on `\n`, dropping trailing empty segments.
///
/// `"a\n\nb\n"` yields `["a", "", "b"]`; `""` and `"\n\n"` yield nothing.
pub fn split_lines(contents: &str) -> Vec<String> {
    let mut lines: Vec<String> = contents.split('\n').map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// [`Directory`] backed by the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDir {
    path: PathBuf,
}

impl LocalDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Directory for LocalDir {
    fn path(&self) -> &Path {
        &self.path
    }

    fn create(&self) -> Result<()> {
        std::fs::create_dir_all(&self.path).map_err(|source| {
            StoreError::DirectoryCreationFailed {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(())
    }

    fn write(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.child(name);
        std::fs::write(&path, contents)
            .map_err(|source| StoreError::WriteFailed { path: path.clone(), source })?;
        debug!("Wrote {} bytes to {:?}", contents.len(), path);
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.child(name);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{:?} does not exist, treating as empty", path);
                Ok(None)
            }
            Err(source) => Err(StoreError::ReadFailed { path, source }.into()),
        }
    }
}
