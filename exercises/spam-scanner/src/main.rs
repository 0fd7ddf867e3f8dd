//! Spam scanner binary: paste a message, finish with a blank line.

use anyhow::Context;
use classroom_core::console::StdioConsole;
use spam_scanner::{SpamScanner, run_scan};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spam_scanner=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let scanner = SpamScanner::with_default_terms().context("failed to build spam terms")?;
    let report = run_scan(&scanner, &StdioConsole::new())
        .await
        .context("console failed during scan")?;

    if let Some(report) = report {
        tracing::info!(score = report.score, rating = ?report.rating, "Scan complete");
    }
    Ok(())
}
