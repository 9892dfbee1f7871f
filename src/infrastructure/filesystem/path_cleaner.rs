use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;

use crate::common::error::BootstrapError;

#[derive(Debug, Error)]
#[error("Failed to remove {}: {source}", .path.display())]
pub struct PathCleanerError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// What happened to a path handed to the cleaner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    Absent,
}

/// Recursively removes files and directories, tolerating paths that do not exist
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCleaner;

impl PathCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Remove `path` if present. Symlinks are removed, never followed.
    pub async fn remove_if_exists(&self, path: &Path) -> Result<Removal, PathCleanerError> {
        let metadata = match async_fs::symlink_metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Removal::Absent),
            Err(source) => {
                return Err(PathCleanerError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let result = if metadata.is_dir() {
            async_fs::remove_dir_all(path).await
        } else {
            async_fs::remove_file(path).await
        };

        match result {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed path");
                Ok(Removal::Removed)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Removal::Absent),
            Err(source) => Err(PathCleanerError {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl From<PathCleanerError> for BootstrapError {
    fn from(error: PathCleanerError) -> Self {
        let message = error.to_string();
        BootstrapError::filesystem_error_with_source(message, Some(error.path), error.source)
    }
}
