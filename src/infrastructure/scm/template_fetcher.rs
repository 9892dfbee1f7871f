use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::common::error::{BootstrapError, FetchFailureKind};
use crate::domain::value_objects::template_source::TemplateSource;

/// Stderr fragments git prints when the remote refuses access
const ACCESS_PATTERNS: &[&str] = &[
    "authentication failed",
    "permission denied",
    "repository not found",
    "could not read username",
    "could not read from remote repository",
    "returned error: 401",
    "returned error: 403",
    "returned error: 404",
];

/// Stderr fragments git prints when the remote host cannot be reached
const NETWORK_PATTERNS: &[&str] = &[
    "could not resolve host",
    "could not resolve hostname",
    "connection refused",
    "connection timed out",
    "operation timed out",
    "network is unreachable",
    "failed to connect",
    "unable to access",
];

/// Template fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Executable not found: {0}")]
    ExecutableNotFound(String),

    #[error("Clone failed: {message}")]
    CloneFailed {
        kind: FetchFailureKind,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    pub fn clone_failed(stderr: impl Into<String>) -> Self {
        let message = stderr.into().trim().to_string();
        Self::CloneFailed {
            kind: classify_clone_failure(&message),
            message,
        }
    }

    pub fn kind(&self) -> FetchFailureKind {
        match self {
            FetchError::ExecutableNotFound(_) => FetchFailureKind::ToolUnavailable,
            FetchError::CloneFailed { kind, .. } => *kind,
            FetchError::Io(_) => FetchFailureKind::Other,
        }
    }

    pub fn into_bootstrap_error(self, source: &TemplateSource) -> BootstrapError {
        let kind = self.kind();
        let message = match self {
            FetchError::CloneFailed { message, .. } => message,
            other => other.to_string(),
        };
        BootstrapError::fetch_failed(source.clone_url(), source.web_url(), kind, message)
    }
}

/// Sort a failed clone into a [`FetchFailureKind`] by what git wrote to stderr
pub fn classify_clone_failure(stderr: &str) -> FetchFailureKind {
    let stderr = stderr.to_lowercase();

    if ACCESS_PATTERNS.iter().any(|pattern| stderr.contains(pattern)) {
        FetchFailureKind::Access
    } else if NETWORK_PATTERNS.iter().any(|pattern| stderr.contains(pattern)) {
        FetchFailureKind::Network
    } else {
        FetchFailureKind::Other
    }
}

/// Copies the template tree into a directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    /// Fetch `source` into `destination`, which exists and is empty
    async fn fetch(&self, source: &TemplateSource, destination: &Path) -> Result<(), FetchError>;
}
