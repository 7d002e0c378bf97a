//! Triage Control - CLI client for the triage assistant
//!
//! Asks a running daemon, or resolves messages locally against the catalog.

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "triagectl")]
#[command(about = "Triage Assistant - symptom chatbot client", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logs, e.g. phrase key collisions (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the running daemon
    Ask {
        /// Message to send
        message: String,

        /// Daemon base URL
        #[arg(long, default_value = client::DEFAULT_URL)]
        url: String,
    },

    /// Resolve a message locally, without the daemon
    Resolve {
        /// Message to resolve
        message: String,

        /// Phrase file to use instead of the built-in phrases
        #[arg(long)]
        phrases: Option<PathBuf>,
    },

    /// Show the normalized matching key for some text
    Normalize {
        text: String,
    },

    /// List catalog phrases with their intent ids and keys
    Phrases {
        /// Phrase file to use instead of the built-in phrases
        #[arg(long)]
        phrases: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so answers on stdout stay scriptable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Ask { message, url } => commands::ask(&url, &message).await,
        Commands::Resolve { message, phrases } => commands::resolve(&message, phrases.as_deref()),
        Commands::Normalize { text } => {
            commands::normalize(&text);
            Ok(())
        }
        Commands::Phrases { phrases } => commands::phrases(phrases.as_deref()),
    }
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_enables_debug_logs() {
        let cli = Cli::parse_from(["triagectl", "phrases", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(default_log_level(cli.verbose), "debug");
        assert_eq!(default_log_level(false), "warn");
    }
}
