use anyhow::Context;
use app_ui::App;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vitrine::cli::Cli;
use vitrine::Driver;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli
        .resolve_config()
        .context("failed to load configuration")?;
    tracing::info!(edition = ?config.edition, "Starting vitrine");

    let mut driver = Driver::new(App::new(config), cli.compact);
    let stdin = std::io::stdin();
    let summary = driver
        .run(stdin.lock(), std::io::stdout().lock(), std::io::stderr())
        .context("session failed")?;

    tracing::info!(applied = summary.applied, rejected = summary.rejected, "Done");
    Ok(())
}
