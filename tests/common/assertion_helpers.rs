//! Assertion helpers for testing
//!
//! This module provides custom assertion macros and helper functions
//! that make test assertions more readable and provide better error messages.

use serde_json::Value;
use std::path::Path;

/// Assert that a file exists
#[macro_export]
macro_rules! assert_file_exists {
    ($path:expr) => {
        assert!($path.exists(), "File should exist: {}", $path.display());
    };
    ($path:expr, $msg:expr) => {
        assert!($path.exists(), "{}: {}", $msg, $path.display());
    };
}

/// Assert that a file does not exist
#[macro_export]
macro_rules! assert_file_not_exists {
    ($path:expr) => {
        assert!(
            !$path.exists(),
            "File should not exist: {}",
            $path.display()
        );
    };
    ($path:expr, $msg:expr) => {
        assert!(!$path.exists(), "{}: {}", $msg, $path.display());
    };
}

/// Assert that a directory exists
#[macro_export]
macro_rules! assert_dir_exists {
    ($path:expr) => {
        assert!(
            $path.exists() && $path.is_dir(),
            "Directory should exist: {}",
            $path.display()
        );
    };
}

/// Assert that a directory has no entries
pub fn assert_dir_empty(path: &Path) {
    let entries: Vec<_> = std::fs::read_dir(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
        .collect();
    assert!(
        entries.is_empty(),
        "Directory should be empty: {} ({} entries)",
        path.display(),
        entries.len()
    );
}

/// Assert the top-level keys of a JSON object, in order
pub fn assert_key_order(value: &Value, expected: &[&str]) {
    let keys: Vec<&str> = value
        .as_object()
        .expect("value should be a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, expected, "unexpected key order");
}
