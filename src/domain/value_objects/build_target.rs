use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every build script in the template's `scripts` table
pub const BUILD_SCRIPT_PREFIX: &str = "build:";

/// Output format the template knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    /// Keep every build script
    All,
    /// ES modules
    Esm,
    /// CommonJS
    Cjs,
    /// Browser bundle
    Browser,
    /// Immediately-invoked bundle
    Iife,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildTargetError {
    #[error("Unknown build target: '{0}'. Supported targets are: all, esm, cjs, browser, iife")]
    UnknownTarget(String),
}

impl BuildTarget {
    /// Every target in vocabulary order
    pub const ALL_TARGETS: [BuildTarget; 5] = [
        BuildTarget::All,
        BuildTarget::Esm,
        BuildTarget::Cjs,
        BuildTarget::Browser,
        BuildTarget::Iife,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::All => "all",
            BuildTarget::Esm => "esm",
            BuildTarget::Cjs => "cjs",
            BuildTarget::Browser => "browser",
            BuildTarget::Iife => "iife",
        }
    }

    /// The `scripts` key this target keeps alive; `All` has none because it keeps everything
    pub fn script_key(&self) -> Option<String> {
        match self {
            BuildTarget::All => None,
            other => Some(format!("{}{}", BUILD_SCRIPT_PREFIX, other.as_str())),
        }
    }

    /// Map a raw target string to its script key.
    ///
    /// Strings outside the vocabulary map to nothing instead of failing.
    pub fn script_key_for(raw: &str) -> Option<String> {
        raw.parse::<BuildTarget>()
            .ok()
            .and_then(|target| target.script_key())
    }

    pub fn is_build_script(key: &str) -> bool {
        key.starts_with(BUILD_SCRIPT_PREFIX)
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTarget {
    type Err = BuildTargetError;

    // Exact, case-sensitive match: "ESM" is not a known target.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildTarget::ALL_TARGETS
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| BuildTargetError::UnknownTarget(s.to_string()))
    }
}
