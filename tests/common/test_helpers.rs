//! Test helper functions and utilities
//!
//! This module provides common helper functions that can be used across
//! different tests to perform common operations and validations.

use jsboot::application::use_cases::bootstrap_project::{
    BootstrapEvent, BootstrapProjectUseCase, BootstrapReporter,
};
use jsboot::domain::entities::bootstrap_config::BootstrapConfig;
use jsboot::domain::value_objects::template_source::TemplateSource;
use serde_json::Value;
use std::path::Path;
use std::sync::Mutex;

/// Reporter that keeps every event it receives
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<BootstrapEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<BootstrapEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BootstrapReporter for RecordingReporter {
    fn report(&self, event: &BootstrapEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Use case wired to the upstream template
pub fn upstream_use_case(config: BootstrapConfig) -> BootstrapProjectUseCase {
    BootstrapProjectUseCase::new(config, TemplateSource::upstream().unwrap())
}

/// Read and parse `package.json` under `root`
pub fn read_manifest(root: &Path) -> Value {
    let content = std::fs::read_to_string(root.join("package.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Raw text of `package.json` under `root`
pub fn read_manifest_text(root: &Path) -> String {
    std::fs::read_to_string(root.join("package.json")).unwrap()
}
