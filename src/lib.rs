//! # jsboot - JavaScript Project Bootstrap
//!
//! `jsboot` creates a new JavaScript project from the
//! [templ-project JavaScript template](https://github.com/templ-project/javascript).
//! It clones the template into an empty directory, strips the template's own
//! history and installer, and rewrites `package.json` for the new project.
//!
//! ## Features
//!
//! - **Shallow Acquisition**: The template is fetched with a single `git clone --depth 1`
//! - **Build Target Selection**: Keep only the `build:*` scripts for the targets you ship
//! - **Monorepo Mode**: Drop git hooks, CI configuration and their dev dependencies
//!   when the project lives inside a larger repository
//! - **Order Preserving Rewrite**: Unknown `package.json` fields stay where they were
//!
//! ## Quick Start
//!
//! ```bash
//! # Bootstrap in a new directory with ESM and CJS builds only
//! jsboot --target esm,cjs ./my-lib
//!
//! # Bootstrap inside a monorepo
//! jsboot --part-of-monorepo ./packages/my-lib
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Configuration, manifest and layout entities
//! - [`application`]: Argument interpretation, manifest pipeline and the bootstrap use case
//! - [`infrastructure`]: Template fetching and file system operations
//! - [`presentation`]: CLI interface and console rendering
//! - [`common`]: Shared utilities and error handling
//!
//! ## Error Handling
//!
//! - [`common::error::BootstrapError`]: Main error type with category and remediation hints
//! - [`common::result::BootstrapResult`]: Type alias for `Result<T, BootstrapError>`
//!
//! ## Examples
//!
//! ### Transforming a Manifest
//!
//! ```rust
//! use jsboot::application::services::manifest_transformer::ManifestPipeline;
//! use jsboot::domain::entities::bootstrap_config::BootstrapConfig;
//! use jsboot::domain::entities::package_manifest::PackageManifest;
//!
//! let config = BootstrapConfig::new("/tmp/my-lib").with_build_targets(["esm"]);
//! let manifest: PackageManifest = serde_json::from_str(
//!     r#"{"name":"tpl","scripts":{"build:esm":"a","build:cjs":"b"}}"#,
//! )
//! .unwrap();
//!
//! let transformed = ManifestPipeline::for_config(&config).run(manifest);
//! assert_eq!(transformed.manifest.name(), Some("my-javascript-project"));
//! assert!(transformed.manifest.script("build:cjs").is_none());
//! ```
//!
//! ### Running a Bootstrap
//!
//! ```rust,no_run
//! use jsboot::application::use_cases::bootstrap_project::{
//!     BootstrapProjectUseCase, SilentReporter,
//! };
//! use jsboot::domain::entities::bootstrap_config::BootstrapConfig;
//! use jsboot::domain::value_objects::template_source::TemplateSource;
//! use jsboot::infrastructure::scm::git_fetcher::GitFetcher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BootstrapConfig::new("/tmp/my-lib");
//! let use_case = BootstrapProjectUseCase::new(config, TemplateSource::upstream()?);
//! let outcome = use_case.execute(&GitFetcher::new(), &SilentReporter).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::BootstrapError;
pub use crate::common::result::BootstrapResult as Result;
