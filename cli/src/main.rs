use clap::Parser;
use register_cli::{Cli, CliError, run};
use register_harness::diagnostics::TracingSink;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let outcomes = run(&cli, &TracingSink).await?;

    let failed = outcomes.iter().filter(|o| !o.is_response()).count();
    tracing::info!(submitted = outcomes.len(), failed, "done");
    Ok(())
}
