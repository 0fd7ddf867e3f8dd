//! Sale reducer: the pre-sale state machine.
//!
//! `Selling` → (purchase empties the stockpile) → `SoldOut`. `SoldOut` is
//! terminal; late purchases are ignored.
//!
//! All console output caused by a transition is described as an effect. If
//! writing it fails, the effect feeds [`SaleAction::AnnouncementFailed`] back
//! so the orchestrator can stop the sale.

use crate::types::{MAX_TICKETS_PER_BUYER, PurchaseReceipt, SaleState, TicketQuantity};
use crate::validator::RejectionReason;
use classroom_core::{
    SmallVec, async_effect, console::Console, effect::Effect, environment::Clock,
    reducer::Reducer, smallvec,
};
use std::sync::Arc;

// ============================================================================
// Actions
// ============================================================================

/// Inputs to the sale reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleAction {
    /// Print the welcome banner
    OpenSale,

    /// A buyer asked for a validated number of tickets
    Purchase {
        /// Tickets requested
        quantity: TicketQuantity,
    },

    /// An announcement could not be written
    AnnouncementFailed {
        /// Console error text
        error: String,
    },
}

// ============================================================================
// Environment
// ============================================================================

/// Dependencies of the sale reducer
#[derive(Clone)]
pub struct SaleEnvironment {
    /// Timestamps purchase receipts
    pub clock: Arc<dyn Clock>,
    /// Where announcements are written
    pub console: Arc<dyn Console>,
}

impl SaleEnvironment {
    /// Create a new sale environment
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, console: Arc<dyn Console>) -> Self {
        Self { clock, console }
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Business rules of the pre-sale
#[derive(Debug, Clone, Copy, Default)]
pub struct SaleReducer;

impl SaleReducer {
    /// Create a new sale reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn purchase(
        state: &mut SaleState,
        quantity: TicketQuantity,
        env: &SaleEnvironment,
    ) -> SmallVec<[Effect<SaleAction>; 4]> {
        if state.is_sold_out() {
            tracing::warn!(%quantity, "Purchase ignored: sale is sold out");
            return smallvec![Effect::None];
        }

        // Callers validate first; a stale quantity is refused, not clamped
        if quantity.get() > state.remaining_tickets {
            let reason = RejectionReason::ExceedsRemaining {
                requested: quantity.get(),
                remaining: state.remaining_tickets,
            };
            tracing::warn!(?reason, "Purchase refused");
            return smallvec![announce(env, vec![reason.to_string(), String::new()])];
        }

        state.remaining_tickets -= quantity.get();
        state.buyer_count += 1;
        state.purchases.push(PurchaseReceipt {
            buyer_number: state.buyer_count,
            quantity,
            remaining_after: state.remaining_tickets,
            purchased_at: env.clock.now(),
        });

        tracing::info!(
            buyer = state.buyer_count,
            %quantity,
            remaining = state.remaining_tickets,
            "Purchase recorded"
        );

        let mut lines = vec![
            format!("Purchase complete. Tickets remaining: {}", state.remaining_tickets),
            String::new(),
        ];
        if state.is_sold_out() {
            tracing::info!(buyers = state.buyer_count, "Sale sold out");
            lines.push("Sold out! No tickets remain.".to_string());
            lines.push(format!("Total number of buyers: {}", state.buyer_count));
        }

        smallvec![announce(env, lines)]
    }
}

impl Reducer for SaleReducer {
    type State = SaleState;
    type Action = SaleAction;
    type Environment = SaleEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SaleAction::OpenSale => smallvec![announce(env, welcome_banner(state))],
            SaleAction::Purchase { quantity } => Self::purchase(state, quantity, env),
            SaleAction::AnnouncementFailed { error } => {
                tracing::error!(%error, "Console announcement failed");
                if state.console_fault.is_none() {
                    state.console_fault = Some(error);
                }
                smallvec![Effect::None]
            },
        }
    }
}

fn welcome_banner(state: &SaleState) -> Vec<String> {
    vec![
        "Welcome to the Cinema Ticket Pre-Sale!".to_string(),
        format!("Each buyer may purchase up to {MAX_TICKETS_PER_BUYER} tickets."),
        format!("There are {} tickets available in total.", state.stockpile),
        String::new(),
    ]
}

/// Effect that prints `lines` in order, stopping at the first failure
fn announce(env: &SaleEnvironment, lines: Vec<String>) -> Effect<SaleAction> {
    let console = Arc::clone(&env.console);
    async_effect! {
        let mut failure = None;
        for line in &lines {
            if let Err(error) = console.say(line).await {
                failure = Some(SaleAction::AnnouncementFailed { error: error.to_string() });
                break;
            }
        }
        failure
    }
}
