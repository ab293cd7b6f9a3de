//! HORSE TRACKER — betting kiosk
//!
//! Entry point. Loads configuration, initialises structured logging
//! (to stderr, so stdout carries only kiosk output), builds the kiosk,
//! and runs the command loop on stdin until `Q` or end of input.

use anyhow::{Context, Result};
use std::io;
use tracing::info;

use horse_tracker::cli;
use horse_tracker::config::{AppConfig, DEFAULT_CONFIG_FILE};
use horse_tracker::engine::Kiosk;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let cfg = AppConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    let mut kiosk = Kiosk::from_config(&cfg).context("Failed to build kiosk from config")?;
    info!(
        horses = kiosk.roster().len(),
        restock_quantity = cfg.machine.restock_quantity,
        winner = ?kiosk.roster().winning_number(),
        "Kiosk ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&mut kiosk, stdin.lock(), &mut out)?;

    info!("Kiosk shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("horse_tracker=warn"));

    let json_logging = std::env::var("HORSE_TRACKER_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }
}
