//! Test fixtures for creating test data
//!
//! This module provides a stand-in for the upstream template tree and a
//! fetcher that writes it instead of cloning.

use async_trait::async_trait;
use jsboot::domain::value_objects::template_source::TemplateSource;
use jsboot::infrastructure::scm::template_fetcher::{FetchError, TemplateFetcher};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test fixture for the files a template clone produces
#[derive(Debug, Clone)]
pub struct TemplateFixture {
    pub manifest: Option<String>,
}

impl TemplateFixture {
    /// A manifest shaped like the upstream template's
    pub fn upstream_manifest() -> Value {
        json!({
            "name": "@templ-project/javascript",
            "version": "2.3.1",
            "description": "JavaScript template",
            "type": "module",
            "bin": { "create-js": "./.npx-install/bootstrap.js" },
            "scripts": {
                "build": "npm run build:all",
                "build:all": "npm run build:esm && npm run build:cjs",
                "build:esm": "esbuild --format=esm",
                "build:cjs": "esbuild --format=cjs",
                "build:browser": "esbuild --platform=browser",
                "build:iife": "esbuild --format=iife",
                "prepare": "husky",
                "test": "vitest run"
            },
            "repository": {
                "type": "git",
                "url": "git+https://github.com/templ-project/javascript.git"
            },
            "bugs": { "url": "https://github.com/templ-project/javascript/issues" },
            "homepage": "https://github.com/templ-project/javascript#readme",
            "devDependencies": {
                "esbuild": "^0.20.0",
                "husky": "^9.0.0",
                "lint-staged": "^15.0.0",
                "vitest": "^1.0.0"
            },
            "lint-staged": { "*.js": ["eslint --fix", "prettier --write"] }
        })
    }

    pub fn upstream() -> Self {
        Self::with_manifest(Self::upstream_manifest())
    }

    pub fn with_manifest(manifest: Value) -> Self {
        Self {
            manifest: Some(manifest.to_string()),
        }
    }

    pub fn with_raw_manifest(raw: &str) -> Self {
        Self {
            manifest: Some(raw.to_string()),
        }
    }

    pub fn without_manifest() -> Self {
        Self { manifest: None }
    }

    /// Write the template tree into `root`
    pub fn write_to(&self, root: &Path) -> std::io::Result<()> {
        for dir in [
            ".git/refs/heads",
            ".npx-install",
            ".husky",
            ".github/workflows",
            "src",
        ] {
            std::fs::create_dir_all(root.join(dir))?;
        }
        std::fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n")?;
        std::fs::write(root.join(".npx-install/bootstrap.js"), "#!/usr/bin/env node\n")?;
        std::fs::write(root.join(".husky/pre-commit"), "npx lint-staged\n")?;
        std::fs::write(root.join(".github/workflows/ci.yml"), "name: CI\n")?;
        std::fs::write(root.join("src/index.js"), "export const hello = () => 'hello';\n")?;
        if let Some(manifest) = &self.manifest {
            std::fs::write(root.join("package.json"), manifest)?;
        }
        Ok(())
    }
}

/// Fetcher that writes a [`TemplateFixture`] and counts how often it ran
pub struct FakeFetcher {
    fixture: TemplateFixture,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new(fixture: TemplateFixture) -> Self {
        Self {
            fixture,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TemplateFetcher for FakeFetcher {
    async fn fetch(&self, _source: &TemplateSource, destination: &Path) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fixture.write_to(destination)?;
        Ok(())
    }
}

/// Fetcher that always fails the way git does when offline
pub struct OfflineFetcher;

#[async_trait]
impl TemplateFetcher for OfflineFetcher {
    async fn fetch(&self, _source: &TemplateSource, _destination: &Path) -> Result<(), FetchError> {
        Err(FetchError::clone_failed(
            "Cloning into '.'...\nfatal: unable to access 'https://github.com/templ-project/javascript.git/': Could not resolve host: github.com",
        ))
    }
}
