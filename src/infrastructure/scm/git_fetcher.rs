use super::template_fetcher::{FetchError, TemplateFetcher};
use crate::domain::value_objects::template_source::TemplateSource;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Fetches templates with a shallow `git clone`
#[derive(Debug, Clone)]
pub struct GitFetcher {
    git_executable: String,
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitFetcher {
    /// Create a new fetcher that runs `git` from PATH
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new fetcher with a custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Check if git executable is available
    pub async fn check_availability(&self) -> Result<(), FetchError> {
        let output = self.execute_git_command(["--version"], None).await?;

        if !output.status.success() {
            return Err(FetchError::ExecutableNotFound(self.git_executable.clone()));
        }

        Ok(())
    }

    /// Execute a git command, optionally inside `working_dir`
    async fn execute_git_command<I, S>(
        &self,
        args: I,
        working_dir: Option<&Path>,
    ) -> Result<std::process::Output, FetchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.git_executable);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env("GIT_TERMINAL_PROMPT", "0");

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FetchError::ExecutableNotFound(self.git_executable.clone())
            } else {
                FetchError::Io(e)
            }
        })
    }
}

#[async_trait]
impl TemplateFetcher for GitFetcher {
    async fn fetch(&self, source: &TemplateSource, destination: &Path) -> Result<(), FetchError> {
        tracing::info!(
            url = source.clone_url(),
            destination = %destination.display(),
            "cloning template"
        );

        let args: [&OsStr; 5] = [
            OsStr::new("clone"),
            OsStr::new("--depth"),
            OsStr::new("1"),
            OsStr::new(source.clone_url()),
            destination.as_os_str(),
        ];
        let output = self.execute_git_command(args, None).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(
                status = ?output.status.code(),
                stderr = %stderr.trim(),
                "git clone failed"
            );
            return Err(FetchError::clone_failed(stderr));
        }

        tracing::info!(destination = %destination.display(), "template cloned");
        Ok(())
    }
}
