//! # StatsMan - Terminal System Dashboard
//!
//! Visualizes live host telemetry (CPU, memory, disk, network,
//! per-process usage) as text-mode charts: sparklines, bar charts,
//! gauges, and a ranked process table.

mod app;
mod config;
pub mod constants;
mod models;
mod monitor;
mod ui;
mod utils;

use anyhow::Result;
use clap::Parser;

use config::Config;
use constants::{MIN_HISTORY_SIZE, MIN_REFRESH_MS};

/// StatsMan - live terminal dashboard for host telemetry.
#[derive(Parser, Debug)]
#[command(name = "statsman", version, about = "A terminal dashboard for live host telemetry")]
struct Cli {
    /// Refresh rate in milliseconds
    #[arg(long, short = 'r')]
    refresh_rate: Option<u64>,

    /// Color theme (default, gruvbox, nord)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Rolling history capacity in samples
    #[arg(long)]
    history_size: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(rate) = cli.refresh_rate {
        config.refresh_interval_ms = rate.max(MIN_REFRESH_MS);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(size) = cli.history_size {
        config.history_size = size.max(MIN_HISTORY_SIZE);
    }

    let mut app = app::App::new(&config);
    app.run().await
}
