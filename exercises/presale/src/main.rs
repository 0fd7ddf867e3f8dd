//! Cinema ticket pre-sale binary
//!
//! ```text
//! presale --stockpile 20
//! PRESALE_STOCKPILE=20 presale
//! ```

use anyhow::Context;
use clap::Parser;
use classroom_core::{console::StdioConsole, environment::SystemClock};
use presale::{Config, config::DEFAULT_LOG_FILTER, run_presale};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "presale", version, about = "Cinema ticket pre-sale simulator")]
struct Cli {
    /// Total tickets available for this sale (overrides PRESALE_STOCKPILE)
    #[arg(long, short = 's')]
    stockpile: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the sale on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.stockpile).context("invalid pre-sale configuration")?;
    tracing::info!(stockpile = %config.stockpile, "Configuration loaded");

    let summary = run_presale(
        config.stockpile,
        Arc::new(SystemClock),
        Arc::new(StdioConsole::new()),
    )
    .await
    .context("pre-sale stopped before selling out")?;

    tracing::info!(
        buyers = summary.buyer_count,
        tickets_sold = summary.tickets_sold,
        "Pre-sale complete"
    );
    Ok(())
}
