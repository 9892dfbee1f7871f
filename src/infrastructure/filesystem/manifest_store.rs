use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;

use crate::common::error::BootstrapError;
use crate::domain::entities::package_manifest::PackageManifest;

/// Manifest store related errors
#[derive(Debug, Error)]
pub enum ManifestStoreError {
    #[error("Manifest file not found at path: {}", .0.display())]
    ManifestFileNotFound(PathBuf),

    #[error("Manifest file read failed: {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest JSON parsing failed at {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest JSON serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Manifest file write failed: {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads and writes package.json files
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestStore;

impl ManifestStore {
    /// Create a new manifest store
    pub fn new() -> Self {
        Self
    }

    /// Whether a regular file exists at `manifest_path`
    pub async fn manifest_exists<P: AsRef<Path>>(&self, manifest_path: P) -> bool {
        async_fs::metadata(manifest_path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    /// Read and parse a manifest, keeping the key order of the file
    pub async fn read_manifest<P: AsRef<Path>>(
        &self,
        manifest_path: P,
    ) -> Result<PackageManifest, ManifestStoreError> {
        let manifest_path = manifest_path.as_ref();

        if !self.manifest_exists(manifest_path).await {
            return Err(ManifestStoreError::ManifestFileNotFound(
                manifest_path.to_path_buf(),
            ));
        }

        let content = async_fs::read_to_string(manifest_path)
            .await
            .map_err(|source| ManifestStoreError::ReadFailed {
                path: manifest_path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| ManifestStoreError::InvalidJson {
            path: manifest_path.to_path_buf(),
            source,
        })
    }

    /// Write the manifest with two-space indentation and a trailing newline
    pub async fn write_manifest<P: AsRef<Path>>(
        &self,
        manifest_path: P,
        manifest: &PackageManifest,
    ) -> Result<(), ManifestStoreError> {
        let manifest_path = manifest_path.as_ref();
        let content = Self::render(manifest)?;

        async_fs::write(manifest_path, content)
            .await
            .map_err(|source| ManifestStoreError::WriteFailed {
                path: manifest_path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %manifest_path.display(), "wrote manifest");
        Ok(())
    }

    /// Serialized form of a manifest as it is written to disk
    pub fn render(manifest: &PackageManifest) -> Result<String, ManifestStoreError> {
        let mut content = serde_json::to_string_pretty(manifest)?;
        content.push('\n');
        Ok(content)
    }
}

impl From<ManifestStoreError> for BootstrapError {
    fn from(error: ManifestStoreError) -> Self {
        match error {
            ManifestStoreError::ManifestFileNotFound(path) => BootstrapError::manifest_missing(path),
            ManifestStoreError::InvalidJson { path, source } => {
                BootstrapError::manifest_invalid_with_source(path, source)
            }
            ManifestStoreError::ReadFailed { path, source } => {
                BootstrapError::filesystem_error_with_source(
                    format!("Failed to read {}", path.display()),
                    Some(path),
                    source,
                )
            }
            ManifestStoreError::WriteFailed { path, source } => {
                BootstrapError::filesystem_error_with_source(
                    format!("Failed to write {}", path.display()),
                    Some(path),
                    source,
                )
            }
            ManifestStoreError::SerializationFailed(source) => {
                BootstrapError::filesystem_error(source.to_string(), None)
            }
        }
    }
}
