//! # Tack CLI Entry Point
//!
//! Sets up logging and checks that a Jira instance is configured. The client
//! and document builders live in the `tack-jira` and `tack-adf` crates.

use anyhow::Result;
use clap::Parser;
use tack_jira::{JiraClient, JiraConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Jira Cloud administration helpers
#[derive(Debug, Parser)]
#[command(name = "tack", version, about)]
struct Cli {
  /// Set logger to debug level
  #[arg(long)]
  debug: bool,
}

impl Cli {
  const fn log_level(&self) -> tracing::Level {
    if self.debug {
      tracing::Level::DEBUG
    } else {
      tracing::Level::INFO
    }
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let level = cli.log_level();
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  match JiraConfig::from_env() {
    Ok(config) => {
      let client = JiraClient::from_config(&config)?;
      info!("Jira client ready for {} as {}", client.base_url(), config.user);
    }
    Err(err) => warn!("Jira is not configured: {err:#}"),
  }

  Ok(())
}
