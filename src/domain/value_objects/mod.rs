pub mod build_target;
pub mod template_source;

pub use build_target::BuildTarget;
pub use template_source::TemplateSource;
