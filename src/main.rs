//! DCC Updates main entry point
//!
//! This is the command-line interface for the latest-updates HTTP service.

use clap::Parser;
use dcc_updates::config::load_optional_config;
use dcc_updates::server::{start, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// DCC Updates: latest CannaConnect announcements as JSON
///
/// Serves `GET /dcc/cannaconnect/latest`, scraping the compliance hub page
/// on every request.
#[derive(Parser, Debug)]
#[command(name = "dcc-updates")]
#[command(version = "1.0.0")]
#[command(about = "Latest CannaConnect updates as JSON", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the configuration file
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let mut config = match load_optional_config(cli.config.as_deref()) {
        Ok(cfg) => {
            match &cli.config {
                Some(path) => tracing::info!("Configuration loaded from: {}", path.display()),
                None => tracing::info!("No configuration file given, using defaults"),
            }
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(port) = cli.port {
        if port == 0 {
            tracing::error!("Port must be between 1 and 65535");
            return Err("invalid port 0".into());
        }
        config.server.port = port;
    }

    tracing::info!("Source page: {}", config.source.url);
    tracing::info!(
        "Section '{}' ({} / {}), CTA scope {:?}",
        config.extraction.section_heading,
        config.extraction.section_level,
        config.extraction.item_level,
        config.extraction.cta_scope
    );

    let state = Arc::new(AppState::from_config(&config)?);

    match start(config.server.port, state).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("dcc_updates=info,tower_http=info,warn"),
            1 => EnvFilter::new("dcc_updates=debug,tower_http=debug,info"),
            2 => EnvFilter::new("dcc_updates=trace,tower_http=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
