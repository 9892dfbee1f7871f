//! Common test utilities and helpers
//!
//! This module provides shared test utilities that can be used across
//! different test modules to reduce code duplication and improve test maintainability.
#![allow(dead_code)]

pub mod assertion_helpers;
pub mod test_fixtures;
pub mod test_helpers;
