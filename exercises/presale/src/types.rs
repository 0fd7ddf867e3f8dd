//! Domain types for the ticket pre-sale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Most tickets a single buyer may take in one purchase
pub const MAX_TICKETS_PER_BUYER: u32 = 4;

// ============================================================================
// Value Objects
// ============================================================================

/// Total tickets available for a sale run, fixed at start. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stockpile(NonZeroU32);

impl Stockpile {
    /// Returns `None` for an empty stockpile
    #[must_use]
    pub const fn new(tickets: u32) -> Option<Self> {
        match NonZeroU32::new(tickets) {
            Some(tickets) => Some(Self(tickets)),
            None => None,
        }
    }

    /// Number of tickets
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Stockpile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A per-buyer purchase quantity, always within `1..=MAX_TICKETS_PER_BUYER`.
///
/// Whether it also fits the remaining inventory depends on the sale, so that
/// check lives in [`crate::validator::validate_request`] and in the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketQuantity(u32);

impl TicketQuantity {
    /// Returns `None` outside `1..=MAX_TICKETS_PER_BUYER`
    #[must_use]
    pub const fn new(tickets: u32) -> Option<Self> {
        if tickets >= 1 && tickets <= MAX_TICKETS_PER_BUYER {
            Some(Self(tickets))
        } else {
            None
        }
    }

    /// Number of tickets
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TicketQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Sale State
// ============================================================================

/// Where the sale is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalePhase {
    /// Tickets remain; buyers are being served
    Selling,
    /// No tickets remain. Terminal.
    SoldOut,
}

/// One accepted purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// 1-based position of this buyer in the queue
    pub buyer_number: u32,
    /// Tickets taken
    pub quantity: TicketQuantity,
    /// Tickets left once this purchase was applied
    pub remaining_after: u32,
    /// When the purchase was recorded
    pub purchased_at: DateTime<Utc>,
}

/// State of a single pre-sale run
///
/// `remaining_tickets` only decreases and `buyer_count` only increases; both
/// change together, once per accepted purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleState {
    /// Tickets available when the sale opened
    pub stockpile: Stockpile,
    /// Tickets still for sale
    pub remaining_tickets: u32,
    /// Buyers served so far
    pub buyer_count: u32,
    /// Accepted purchases, oldest first
    pub purchases: Vec<PurchaseReceipt>,
    /// Set when an announcement could not be written to the console
    pub console_fault: Option<String>,
}

impl SaleState {
    /// Fresh sale with the whole stockpile available
    #[must_use]
    pub const fn new(stockpile: Stockpile) -> Self {
        Self {
            stockpile,
            remaining_tickets: stockpile.get(),
            buyer_count: 0,
            purchases: Vec::new(),
            console_fault: None,
        }
    }

    /// Current lifecycle phase, derived from the remaining inventory
    #[must_use]
    pub const fn phase(&self) -> SalePhase {
        if self.remaining_tickets == 0 {
            SalePhase::SoldOut
        } else {
            SalePhase::Selling
        }
    }

    /// Whether the sale has reached its terminal state
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        matches!(self.phase(), SalePhase::SoldOut)
    }

    /// Tickets sold so far
    #[must_use]
    pub const fn tickets_sold(&self) -> u32 {
        self.stockpile.get() - self.remaining_tickets
    }

    /// Snapshot for reporting
    #[must_use]
    pub const fn summary(&self) -> SaleSummary {
        SaleSummary {
            stockpile: self.stockpile,
            tickets_sold: self.tickets_sold(),
            buyer_count: self.buyer_count,
        }
    }
}

/// Outcome of a pre-sale run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleSummary {
    /// Tickets available when the sale opened
    pub stockpile: Stockpile,
    /// Tickets sold
    pub tickets_sold: u32,
    /// Buyers served
    pub buyer_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stockpile_rejects_zero() {
        assert_eq!(Stockpile::new(0), None);
        assert_eq!(Stockpile::new(20).map(Stockpile::get), Some(20));
    }

    #[test]
    fn test_ticket_quantity_bounds() {
        assert_eq!(TicketQuantity::new(0), None);
        assert_eq!(TicketQuantity::new(5), None);
        for tickets in 1..=MAX_TICKETS_PER_BUYER {
            assert_eq!(TicketQuantity::new(tickets).map(TicketQuantity::get), Some(tickets));
        }
    }

    #[test]
    fn test_phase_follows_remaining_tickets() {
        let Some(stockpile) = Stockpile::new(3) else {
            unreachable!("3 is a valid stockpile");
        };
        let mut state = SaleState::new(stockpile);
        assert_eq!(state.phase(), SalePhase::Selling);
        assert_eq!(state.tickets_sold(), 0);

        state.remaining_tickets = 0;
        assert!(state.is_sold_out());
        assert_eq!(state.summary().tickets_sold, 3);
    }
}
