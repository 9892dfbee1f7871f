/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Template acquisition (shallow git clone)
/// - File system operations (package.json, path removal)
pub mod filesystem;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{
    manifest_store::{ManifestStore, ManifestStoreError},
    path_cleaner::{PathCleaner, PathCleanerError, Removal},
};
pub use scm::{
    git_fetcher::GitFetcher,
    template_fetcher::{FetchError, TemplateFetcher},
};
