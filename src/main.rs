use jsboot::presentation::cli::CliApp;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Logs go to stderr so they never interleave with status output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_tracing();

    // Run the CLI application
    let app = CliApp::new();
    app.run().await
}
