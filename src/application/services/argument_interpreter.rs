use std::path::{Component, Path, PathBuf};

use crate::domain::entities::bootstrap_config::BootstrapConfig;

/// Turns the raw argument vector into a [`BootstrapConfig`].
///
/// Tokens are read left to right and later tokens win. Unknown `--` flags and
/// unknown build targets are accepted without complaint.
#[derive(Debug, Clone)]
pub struct ArgumentInterpreter {
    working_dir: PathBuf,
}

impl ArgumentInterpreter {
    /// Create an interpreter that resolves relative paths against `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Create an interpreter bound to the process working directory
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Interpret the arguments (program name excluded)
    pub fn interpret<I, S>(&self, args: I) -> BootstrapConfig
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut config = BootstrapConfig::new(resolve_path(&self.working_dir, ""));

        let mut index = 0;
        while index < args.len() {
            let arg = args[index].as_ref();

            if arg == "--help" || arg == "-h" {
                config = config.with_help(true);
            } else if arg == "--part-of-monorepo" {
                config = config.with_multi_repo(true);
            } else if arg == "--target" && index + 1 < args.len() {
                index += 1;
                config = config.with_build_targets(args[index].as_ref().split(','));
            } else if !arg.starts_with("--") {
                config = config.with_target_path(resolve_path(&self.working_dir, arg));
            } else {
                tracing::debug!(flag = arg, "ignoring unrecognized flag");
            }

            index += 1;
        }

        tracing::debug!(?config, "interpreted bootstrap arguments");
        config
    }
}

/// Resolve `raw` against `base` into an absolute path, folding `.` and `..`
/// lexically without touching the file system.
pub fn resolve_path(base: &Path, raw: &str) -> PathBuf {
    let joined = base.join(raw);
    let mut resolved = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    resolved
}
