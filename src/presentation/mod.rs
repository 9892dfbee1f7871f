//! Presentation layer: command-line entry point and console rendering

pub mod cli;
pub mod ui;
