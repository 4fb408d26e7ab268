use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod password;
mod provision;

#[cfg(test)]
mod test_utils;

use cli::Cli;
use config::Settings;

/// Main entry point for the userseed tool.
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads DATABASE_URL; parse before reading config files.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::load()?;

    // Diagnostics go to stderr; stdout carries the operator report.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("userseed starting up");

    cli.run(&settings).await?;

    Ok(())
}
