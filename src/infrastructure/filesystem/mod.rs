pub mod manifest_store;
pub mod path_cleaner;

pub use manifest_store::{ManifestStore, ManifestStoreError};
pub use path_cleaner::{PathCleaner, PathCleanerError, Removal};
