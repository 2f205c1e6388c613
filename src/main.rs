//! Commercial vehicle financing quote service.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /quote?...
//!     ──────────────▶ http::server ──▶ quoting::params ──▶ quoting::validator
//!                                                              │
//!     ◀────────────── JSON QuoteResult ◀── quoting::calculator ◀┘
//!                       or 400/422 violation
//!
//!     Cross-cutting: config (TOML rules + pricing), observability
//!     (tracing, metrics), lifecycle (signals, graceful shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;

use quoter::config::{load_config, QuoterConfig};
use quoter::lifecycle::startup;
use quoter::observability::logging;

#[derive(Parser)]
#[command(name = "quoter")]
#[command(about = "Financing quote service for commercial vehicles", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => QuoterConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability);

    tracing::info!("quoter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?args.config,
        bind_address = %config.listener.bind_address,
        rules_revision = %config.rules.revision,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
