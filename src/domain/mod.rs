//! Core domain types: the bootstrap configuration, the package manifest and
//! the value objects they are built from.

pub mod entities;
pub mod value_objects;
