use colored::Colorize;
use console::{Emoji, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use crate::application::use_cases::bootstrap_project::{
    BootstrapEvent, BootstrapReporter, StepFailure,
};
use crate::common::templates::TemplateProcessor;
use crate::domain::value_objects::template_source::TemplateSource;

static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
static BUILDING: Emoji<'_, '_> = Emoji("🏢 ", "");
static MEMO: Emoji<'_, '_> = Emoji("📝 ", "");
static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static CHECK: Emoji<'_, '_> = Emoji("✓", "+");

/// Guidance printed once the project is ready
pub const NEXT_STEPS: [&str; 4] = [
    "Update package.json name, description, and repository",
    "Run: npm install",
    "Run: npm test",
    "Start coding!",
];

/// Renders bootstrap events as status lines on the terminal
pub struct ConsoleReporter {
    use_color: bool,
    interactive: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    /// Create a reporter that adapts to the attached terminal
    pub fn new() -> Self {
        let use_color = console::colors_enabled();
        colored::control::set_override(use_color);
        Self {
            use_color,
            interactive: Term::stderr().is_term(),
            spinner: Mutex::new(None),
        }
    }

    /// Create a reporter without colour or spinner
    pub fn plain() -> Self {
        Self {
            use_color: false,
            interactive: false,
            spinner: Mutex::new(None),
        }
    }

    /// Print the usage text
    pub fn print_usage(&self, bin: &str, source: &TemplateSource) {
        println!("{}", TemplateProcessor::new().render_usage(bin, source));
    }

    /// Print a failure with its remediation hints to stderr
    pub fn print_failure(&self, failure: &StepFailure) {
        self.finish_spinner();
        for line in self.render_failure(failure) {
            eprintln!("{}", line);
        }
    }

    /// Status line(s) for a single event
    pub fn render_event(&self, event: &BootstrapEvent) -> String {
        match event {
            BootstrapEvent::Started { .. } => format!(
                "\n{}\n\n{}Cloning template repository...\n",
                self.heading(&format!("{}JavaScript Template Bootstrap", ROCKET)),
                FOLDER
            ),
            BootstrapEvent::FetchStarted { source } => format!("  Cloning from {}...", source),
            BootstrapEvent::FetchCompleted { target } => {
                format!("  {} Template cloned to {}", self.check(), target.display())
            }
            BootstrapEvent::CleanupStarted => {
                format!("{}Cleaning up template artifacts...\n", PACKAGE)
            }
            BootstrapEvent::PathRemoved { path } => {
                format!("  {} Removed: {}", self.check(), display_name(path))
            }
            BootstrapEvent::MonorepoCleanupStarted => {
                format!("\n{}Monorepo mode: removing git hooks and CI...\n", BUILDING)
            }
            BootstrapEvent::ManifestUpdateStarted => format!("\n{}Updating package.json...\n", MEMO),
            BootstrapEvent::ManifestChanged(change) => format!("  {} {}", self.check(), change),
            BootstrapEvent::Completed { .. } => {
                let steps: Vec<String> = NEXT_STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| format!("  {}. {}", index + 1, step))
                    .collect();
                format!(
                    "\n{}\n\nNext steps:\n{}\n",
                    self.heading(&format!("{}Bootstrap complete!", SPARKLES)),
                    steps.join("\n")
                )
            }
        }
    }

    /// Error headline naming the failed step, followed by indented remediation lines
    pub fn render_failure(&self, failure: &StepFailure) -> Vec<String> {
        let label = if self.use_color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };

        let mut lines = vec![format!("{}{} {}", CROSS, label, failure)];
        lines.extend(failure.error.remediation().into_iter().map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("   {}", line)
            }
        }));
        lines
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn check(&self) -> String {
        if self.use_color {
            CHECK.to_string().green().to_string()
        } else {
            CHECK.to_string()
        }
    }

    fn start_spinner(&self, message: String) {
        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠁", "⠂", "⠄", "⡀", "⢀", "⠠", "⠐", "⠈", "✓"])
            .template("  {spinner:.green} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn finish_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapReporter for ConsoleReporter {
    fn report(&self, event: &BootstrapEvent) {
        match event {
            BootstrapEvent::FetchStarted { source } if self.interactive => {
                self.start_spinner(format!("Cloning from {}...", source));
                return;
            }
            BootstrapEvent::FetchCompleted { .. } => self.finish_spinner(),
            _ => {}
        }
        println!("{}", self.render_event(event));
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
