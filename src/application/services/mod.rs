pub mod argument_interpreter;
pub mod manifest_transformer;

pub use argument_interpreter::{resolve_path, ArgumentInterpreter};
pub use manifest_transformer::{
    ManifestChange, ManifestPipeline, ManifestStage, PruneBuildScripts, RemoveMonorepoTooling,
    ResetMetadata, StripBootstrapEntry, Transformed,
};
