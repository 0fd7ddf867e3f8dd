//! Drives a sale from the console until it sells out.

use crate::sale::{SaleAction, SaleEnvironment, SaleReducer};
use crate::types::{SaleState, SaleSummary, Stockpile};
use crate::validator::request_tickets;
use classroom_core::console::{Console, ConsoleError};
use classroom_core::environment::Clock;
use classroom_runtime::{Store, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Store type for a sale
pub type SaleStore = Store<SaleState, SaleAction, SaleEnvironment, SaleReducer>;

/// Reasons a sale stops before selling out
#[derive(Error, Debug)]
pub enum PresaleError {
    /// Reading a request failed, including end of input
    #[error("could not read ticket request: {0}")]
    Console(#[from] ConsoleError),

    /// An announcement could not be printed
    #[error("could not print sale announcement: {0}")]
    Announcement(String),

    /// The store rejected an action
    #[error("sale store failed: {0}")]
    Store(#[from] StoreError),
}

/// Run a pre-sale of `stockpile` tickets to completion.
///
/// Prints the welcome banner, then serves one buyer per validated request
/// until no tickets remain. Invalid requests are explained and re-prompted
/// inside [`request_tickets`]; they never end the sale.
///
/// # Errors
///
/// - [`PresaleError::Console`] if input ends or fails mid-sale
/// - [`PresaleError::Announcement`] if output cannot be written
/// - [`PresaleError::Store`] if the runtime fails
#[tracing::instrument(skip(clock, console), fields(stockpile = stockpile.get()))]
pub async fn run_presale(
    stockpile: Stockpile,
    clock: Arc<dyn Clock>,
    console: Arc<dyn Console>,
) -> Result<SaleSummary, PresaleError> {
    let environment = SaleEnvironment::new(clock, Arc::clone(&console));
    let store = SaleStore::new(SaleState::new(stockpile), SaleReducer::new(), environment);

    tracing::info!("Pre-sale opened");
    store.send(SaleAction::OpenSale).await?;
    ensure_announced(&store).await?;

    loop {
        let remaining = store.state(|s| s.remaining_tickets).await;
        if remaining == 0 {
            break;
        }

        let quantity = request_tickets(console.as_ref(), remaining).await?;
        store.send(SaleAction::Purchase { quantity }).await?;
        ensure_announced(&store).await?;
    }

    let summary = store.state(SaleState::summary).await;
    tracing::info!(
        buyers = summary.buyer_count,
        tickets_sold = summary.tickets_sold,
        "Pre-sale finished"
    );
    Ok(summary)
}

async fn ensure_announced(store: &SaleStore) -> Result<(), PresaleError> {
    match store.state(|s| s.console_fault.clone()).await {
        Some(error) => Err(PresaleError::Announcement(error)),
        None => Ok(()),
    }
}
