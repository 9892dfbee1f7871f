pub mod bootstrap_project;

pub use bootstrap_project::{
    prepare_target, BootstrapEvent, BootstrapOutcome, BootstrapProjectUseCase, BootstrapReport,
    BootstrapReporter, BootstrapStep, SilentReporter, StepFailure,
};
