//! Shared utilities and error handling

pub mod error;
pub mod result;
pub mod templates;

pub use error::{BootstrapError, ErrorCategory, FetchFailureKind};
pub use result::{BootstrapResult, ResultExt};
