//! Monthly expenses binary.

use anyhow::Context;
use classroom_core::console::StdioConsole;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expenses=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let summary = expenses::run_session(&StdioConsole::new())
        .await
        .context("expense entry stopped early")?;

    tracing::info!(total = summary.total, "Summary printed");
    Ok(())
}
