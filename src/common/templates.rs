//! Templates module for embedded text templates
//! This module provides access to embedded template files using include_str! macro
use std::collections::HashMap;

use crate::domain::value_objects::template_source::TemplateSource;

/// Get the usage text template
/// The template is embedded at compile time using include_str! macro
pub fn get_usage_template() -> &'static str {
    include_str!("../../templates/usage.txt")
}

/// Template replacement functionality
pub struct TemplateProcessor;

impl TemplateProcessor {
    /// Create a new template processor
    pub fn new() -> Self {
        Self
    }

    /// Substitute `{{key}}` placeholders; unknown placeholders are left untouched
    pub fn process(&self, template: &str, replacements: &HashMap<&str, String>) -> String {
        let mut rendered = template.to_string();
        for (key, value) in replacements {
            rendered = rendered.replace(&format!("{{{{{}}}}}", key), value);
        }
        rendered
    }

    /// Render the usage text for the given binary name and template source
    pub fn render_usage(&self, bin: &str, source: &TemplateSource) -> String {
        let mut replacements = HashMap::new();
        replacements.insert("bin", bin.to_string());
        replacements.insert("template_url", source.web_url().to_string());
        replacements.insert("version", env!("CARGO_PKG_VERSION").to_string());
        replacements.insert("git_hash", env!("GIT_HASH").to_string());
        replacements.insert("build_date", env!("BUILD_DATE").to_string());
        replacements.insert("build_target", env!("BUILD_TARGET").to_string());
        self.process(get_usage_template(), &replacements)
    }
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new()
    }
}
