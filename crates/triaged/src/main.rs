//! Triage Daemon - symptom chatbot over HTTP
//!
//! Builds the intent catalog once at startup, then serves it read-only.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triaged::config::Config;
use triaged::server::{self, AppState};

#[derive(Parser)]
#[command(name = "triaged")]
#[command(about = "Triage Assistant daemon - answers symptom questions over HTTP", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: /etc/triage/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overrides server.bind
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Triage Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load(cli.config.as_deref())?;

    // Catalog must be complete before the listener exists
    let catalog = config
        .catalog
        .build_catalog()
        .context("failed to build intent catalog")?;
    info!("Intent catalog ready: {} intents", catalog.len());

    let bind = cli.bind.unwrap_or(config.server.bind);
    server::run(AppState::new(catalog), &bind).await
}
