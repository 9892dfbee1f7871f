use serde_json::json;
use std::fmt;

use crate::domain::entities::bootstrap_config::BootstrapConfig;
use crate::domain::entities::package_manifest::{
    fields, PackageManifest, INITIAL_VERSION, PLACEHOLDER_NAME,
};
use crate::domain::value_objects::build_target::BuildTarget;

/// Development dependencies a surrounding monorepo already provides
pub const MONOREPO_DEV_DEPENDENCIES: [&str; 2] = ["husky", "lint-staged"];

/// Script the hook manager uses to install itself
pub const HOOK_INSTALL_SCRIPT: &str = "prepare";

/// A single edit a stage applied to the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestChange {
    ScriptRemoved(String),
    BinRemoved,
    MetadataReset,
    DependencyRemoved(String),
    LintStagedRemoved,
    PrepareScriptRemoved,
}

impl fmt::Display for ManifestChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestChange::ScriptRemoved(key) => write!(f, "Removed script: {}", key),
            ManifestChange::BinRemoved => write!(f, "Removed bin configuration"),
            ManifestChange::MetadataReset => write!(f, "Updated package metadata"),
            ManifestChange::DependencyRemoved(name) => write!(f, "Removed dependency: {}", name),
            ManifestChange::LintStagedRemoved => write!(f, "Removed lint-staged configuration"),
            ManifestChange::PrepareScriptRemoved => write!(f, "Removed prepare script"),
        }
    }
}

/// Output of a stage: the new manifest and what changed
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub manifest: PackageManifest,
    pub changes: Vec<ManifestChange>,
}

impl Transformed {
    pub fn unchanged(manifest: PackageManifest) -> Self {
        Self {
            manifest,
            changes: Vec::new(),
        }
    }
}

/// One step of the manifest rewrite
pub trait ManifestStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, manifest: PackageManifest) -> Transformed;
}

/// Drops `build:*` scripts for targets the caller did not ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneBuildScripts {
    /// `None` keeps every script
    retained: Option<Vec<String>>,
}

impl PruneBuildScripts {
    pub fn from_config(config: &BootstrapConfig) -> Self {
        let retained = if config.keeps_all_build_scripts() {
            None
        } else {
            Some(config.retained_build_scripts())
        };
        Self { retained }
    }

    pub fn retaining<I, S>(script_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            retained: Some(script_keys.into_iter().map(Into::into).collect()),
        }
    }
}

impl ManifestStage for PruneBuildScripts {
    fn name(&self) -> &'static str {
        "prune-build-scripts"
    }

    fn apply(&self, manifest: PackageManifest) -> Transformed {
        let Some(retained) = &self.retained else {
            return Transformed::unchanged(manifest);
        };

        let (manifest, removed) = manifest.retain_scripts(|key| {
            !BuildTarget::is_build_script(key) || retained.iter().any(|kept| kept == key)
        });

        Transformed {
            manifest,
            changes: removed.into_iter().map(ManifestChange::ScriptRemoved).collect(),
        }
    }
}

/// Removes the executable entry point the template uses for its own installer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripBootstrapEntry;

impl ManifestStage for StripBootstrapEntry {
    fn name(&self) -> &'static str {
        "strip-bootstrap-entry"
    }

    fn apply(&self, manifest: PackageManifest) -> Transformed {
        let (manifest, removed) = manifest.without_field(fields::BIN);
        let changes = removed.map(|_| ManifestChange::BinRemoved).into_iter().collect();
        Transformed { manifest, changes }
    }
}

/// Resets identity fields to placeholders and blanks the links that point at the template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetMetadata;

impl ManifestStage for ResetMetadata {
    fn name(&self) -> &'static str {
        "reset-metadata"
    }

    fn apply(&self, manifest: PackageManifest) -> Transformed {
        let mut manifest = manifest
            .with_field(fields::NAME, json!(PLACEHOLDER_NAME))
            .with_field(fields::VERSION, json!(INITIAL_VERSION));

        if manifest.contains(fields::REPOSITORY) {
            manifest = manifest.with_field(fields::REPOSITORY, json!({ "type": "git", "url": "" }));
        }
        if manifest.contains(fields::BUGS) {
            manifest = manifest.with_field(fields::BUGS, json!({ "url": "" }));
        }
        if manifest.contains(fields::HOMEPAGE) {
            manifest = manifest.with_field(fields::HOMEPAGE, json!(""));
        }

        Transformed {
            manifest,
            changes: vec![ManifestChange::MetadataReset],
        }
    }
}

/// Removes tooling a surrounding monorepo already owns: hook manager, lint-staged, `prepare`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveMonorepoTooling;

impl ManifestStage for RemoveMonorepoTooling {
    fn name(&self) -> &'static str {
        "remove-monorepo-tooling"
    }

    fn apply(&self, manifest: PackageManifest) -> Transformed {
        let mut changes = Vec::new();
        let mut manifest = manifest;

        for dependency in MONOREPO_DEV_DEPENDENCIES {
            let (next, removed) = manifest.without_dev_dependency(dependency);
            manifest = next;
            if removed.is_some() {
                changes.push(ManifestChange::DependencyRemoved(dependency.to_string()));
            }
        }

        let (manifest, removed) = manifest.without_field(fields::LINT_STAGED);
        if removed.is_some() {
            changes.push(ManifestChange::LintStagedRemoved);
        }

        let (manifest, removed) = manifest.without_script(HOOK_INSTALL_SCRIPT);
        if removed.is_some() {
            changes.push(ManifestChange::PrepareScriptRemoved);
        }

        Transformed { manifest, changes }
    }
}

/// Ordered chain of stages
pub struct ManifestPipeline {
    stages: Vec<Box<dyn ManifestStage>>,
}

impl ManifestPipeline {
    pub fn new(stages: Vec<Box<dyn ManifestStage>>) -> Self {
        Self { stages }
    }

    /// Standard chain: prune, strip entry point, reset metadata, then monorepo cleanup when asked for
    pub fn for_config(config: &BootstrapConfig) -> Self {
        let mut stages: Vec<Box<dyn ManifestStage>> = vec![
            Box::new(PruneBuildScripts::from_config(config)),
            Box::new(StripBootstrapEntry),
            Box::new(ResetMetadata),
        ];
        if config.is_part_of_multi_repo() {
            stages.push(Box::new(RemoveMonorepoTooling));
        }
        Self::new(stages)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn run(&self, manifest: PackageManifest) -> Transformed {
        self.stages
            .iter()
            .fold(Transformed::unchanged(manifest), |acc, stage| {
                let mut output = stage.apply(acc.manifest);
                tracing::debug!(
                    stage = stage.name(),
                    changes = output.changes.len(),
                    "applied manifest stage"
                );
                let mut changes = acc.changes;
                changes.append(&mut output.changes);
                Transformed {
                    manifest: output.manifest,
                    changes,
                }
            })
    }
}
