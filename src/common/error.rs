use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classes of bootstrap failures.
///
/// Every class is terminal for the run; the category only decides how the
/// failure is explained to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The target directory is unusable (not empty, not a directory).
    Usage,
    /// The template could not be fetched.
    Acquisition,
    /// The fetched template is missing its manifest or the manifest is malformed.
    Integrity,
    /// A local file system operation failed.
    FileSystem,
}

/// Why the template fetch failed, as far as it can be told from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    /// The git executable could not be started.
    ToolUnavailable,
    /// The remote host could not be reached.
    Network,
    /// The remote refused access or the repository does not exist.
    Access,
    /// Anything git reported that does not fit the categories above.
    Other,
}

impl FetchFailureKind {
    /// Short, actionable hint for this kind of failure.
    pub fn hint(&self) -> &'static str {
        match self {
            FetchFailureKind::ToolUnavailable => {
                "Git could not be started. Install git and make sure it is on your PATH."
            }
            FetchFailureKind::Network => {
                "The template host could not be reached. Check your internet connection or proxy settings."
            }
            FetchFailureKind::Access => {
                "Access to the template repository was denied. Check your credentials and repository permissions."
            }
            FetchFailureKind::Other => "Git reported an unexpected error while cloning.",
        }
    }
}

impl fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailureKind::ToolUnavailable => write!(f, "git unavailable"),
            FetchFailureKind::Network => write!(f, "network failure"),
            FetchFailureKind::Access => write!(f, "access denied"),
            FetchFailureKind::Other => write!(f, "clone error"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Target directory is not empty: {}", .path.display())]
    TargetNotEmpty { path: PathBuf },

    #[error("Target path is not a directory: {}", .path.display())]
    TargetNotDirectory { path: PathBuf },

    #[error("Failed to clone repository {url} ({kind}): {message}")]
    FetchFailed {
        url: String,
        web_url: String,
        kind: FetchFailureKind,
        message: String,
    },

    #[error("Expected package.json at: {}", .path.display())]
    ManifestMissing { path: PathBuf },

    #[error("Invalid package.json at {}: {message}", .path.display())]
    ManifestInvalid {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("File system operation failed: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl BootstrapError {
    pub fn target_not_empty(path: impl Into<PathBuf>) -> Self {
        Self::TargetNotEmpty { path: path.into() }
    }

    pub fn fetch_failed(
        url: impl Into<String>,
        web_url: impl Into<String>,
        kind: FetchFailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self::FetchFailed {
            url: url.into(),
            web_url: web_url.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn manifest_missing(path: impl Into<PathBuf>) -> Self {
        Self::ManifestMissing { path: path.into() }
    }

    pub fn manifest_invalid_with_source(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ManifestInvalid {
            path: path.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetNotEmpty { .. } | Self::TargetNotDirectory { .. } => ErrorCategory::Usage,
            Self::FetchFailed { .. } => ErrorCategory::Acquisition,
            Self::ManifestMissing { .. } | Self::ManifestInvalid { .. } => ErrorCategory::Integrity,
            Self::FileSystem { .. } => ErrorCategory::FileSystem,
        }
    }

    /// Process exit status for this failure. Every failure is terminal.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Lines telling the user what to fix before re-running.
    pub fn remediation(&self) -> Vec<String> {
        match self {
            Self::TargetNotEmpty { path, .. } => vec![
                format!("Directory: {}", path.display()),
                "Please use an empty directory or remove existing files.".to_string(),
            ],
            Self::TargetNotDirectory { path } => vec![
                format!("Path: {}", path.display()),
                "Please point the bootstrap at a directory, not a file.".to_string(),
            ],
            Self::FetchFailed { web_url, kind, .. } => vec![
                kind.hint().to_string(),
                String::new(),
                "Please ensure:".to_string(),
                "  1. Git is installed and available in PATH".to_string(),
                "  2. You have internet connectivity".to_string(),
                format!("  3. You have access to {}", web_url),
            ],
            Self::ManifestMissing { .. } => vec![
                "The cloned template does not contain a package.json.".to_string(),
                "Remove the target directory and run the bootstrap again.".to_string(),
            ],
            Self::ManifestInvalid { .. } => vec![
                "The template's package.json could not be parsed as JSON.".to_string(),
                "Remove the target directory and run the bootstrap again.".to_string(),
            ],
            Self::FileSystem { path, .. } => {
                let mut lines = Vec::new();
                if let Some(path) = path {
                    lines.push(format!("Path: {}", path.display()));
                }
                lines.push("Check the permissions of the target directory.".to_string());
                lines
            }
        }
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source(error.to_string(), None, error)
    }
}
