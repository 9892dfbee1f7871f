pub mod bootstrap_config;
pub mod package_manifest;
pub mod project_layout;

pub use bootstrap_config::BootstrapConfig;
pub use package_manifest::PackageManifest;
pub use project_layout::ProjectLayout;
