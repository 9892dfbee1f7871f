use anyhow::Context;
use clap::Parser;
use std::process::exit;

use crate::application::services::argument_interpreter::ArgumentInterpreter;
use crate::application::use_cases::bootstrap_project::{
    BootstrapOutcome, BootstrapProjectUseCase,
};
use crate::domain::value_objects::template_source::TemplateSource;
use crate::infrastructure::scm::git_fetcher::GitFetcher;
use crate::presentation::ui::console_reporter::ConsoleReporter;

/// Name shown in the usage text
pub const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// jsboot - Bootstrap a new JavaScript project from the templ-project template
///
/// Flags are interpreted by the bootstrap itself so that unknown flags are
/// ignored rather than rejected; clap only captures the raw tokens.
#[derive(Parser, Debug)]
#[command(name = "jsboot")]
#[command(about = "Bootstrap a new JavaScript project from the templ-project template")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Options and target path, in any order
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let interpreter = ArgumentInterpreter::from_current_dir()
            .context("Failed to determine the current directory")?;
        let config = interpreter.interpret(&self.cli.args);

        let source =
            TemplateSource::upstream().context("Invalid template repository URL")?;

        let reporter = ConsoleReporter::new();
        let fetcher = GitFetcher::new();
        let use_case = BootstrapProjectUseCase::new(config, source);

        match use_case.execute(&fetcher, &reporter).await {
            Ok(BootstrapOutcome::HelpRequested) => {
                reporter.print_usage(BIN_NAME, use_case.source());
                Ok(())
            }
            Ok(BootstrapOutcome::Completed(report)) => {
                tracing::debug!(
                    manifest = %report.manifest_path.display(),
                    removed = report.removed_paths.len(),
                    changes = report.changes.len(),
                    "bootstrap finished"
                );
                Ok(())
            }
            Err(failure) => {
                tracing::debug!(step = %failure.step, error = ?failure.error, "bootstrap failed");
                reporter.print_failure(&failure);
                exit(failure.exit_code());
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
