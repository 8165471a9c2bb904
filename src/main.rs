use anyhow::{Context, Result};
use astro_reports::cli::{handle_command, Cli};
use astro_reports::core::ConfigManager;
use clap::Parser;
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfigManager::load(cli.api_url.as_deref())?;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("astro_reports=info,rocket=warn")),
        )
        .init();

    info!("Loaded configuration for environment: {}", config.environment);
    info!("Log file: {}", config.log_file.display());
    info!("Reports API: {}", config.service.api_base_url);

    handle_command(cli.command, config).await
}
