//! Ticket request validation.
//!
//! [`validate_request`] is the pure decision over one line of input;
//! [`request_tickets`] is the interactive loop that keeps asking until a line
//! passes.

use crate::types::{MAX_TICKETS_PER_BUYER, TicketQuantity};
use classroom_core::console::{Console, ConsoleError};
use thiserror::Error;

/// Text shown before each read
pub const TICKET_PROMPT: &str = "How many tickets would you like to buy (1-4)? ";

/// Why a purchase request was turned down.
///
/// The `Display` text is the message shown to the buyer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Empty, signed, or otherwise not a plain digit string
    #[error("Invalid entry. Please enter a whole number from 1 to 4.")]
    NotANumber,

    /// A number, but not within the per-buyer limit
    #[error("Invalid number of tickets. You may purchase 1 to 4 tickets per buyer.")]
    OutOfRange,

    /// Within the per-buyer limit, but more than the sale has left
    #[error("Only {remaining} ticket(s) remain. Please enter a smaller number.")]
    ExceedsRemaining {
        /// Tickets asked for
        requested: u32,
        /// Tickets left in the sale
        remaining: u32,
    },
}

/// Decide whether `raw` is an acceptable purchase while `remaining` tickets are left.
///
/// Checks run in order: digits only (after trimming), then `1..=4`, then
/// against `remaining`. A digit string too large for `u32` is out of range.
///
/// # Errors
///
/// Returns the first [`RejectionReason`] that applies.
///
/// # Example
///
/// ```
/// use presale::validator::{validate_request, RejectionReason};
///
/// assert_eq!(validate_request(" 3 ", 10).map(|q| q.get()), Ok(3));
/// assert_eq!(validate_request("-2", 10), Err(RejectionReason::NotANumber));
/// assert_eq!(
///     validate_request("3", 2),
///     Err(RejectionReason::ExceedsRemaining { requested: 3, remaining: 2 })
/// );
/// ```
pub fn validate_request(raw: &str, remaining: u32) -> Result<TicketQuantity, RejectionReason> {
    let text = raw.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RejectionReason::NotANumber);
    }

    let requested: u32 = text.parse().map_err(|_| RejectionReason::OutOfRange)?;
    let quantity = TicketQuantity::new(requested).ok_or(RejectionReason::OutOfRange)?;

    if requested > remaining {
        return Err(RejectionReason::ExceedsRemaining {
            requested,
            remaining,
        });
    }

    debug_assert!(requested <= MAX_TICKETS_PER_BUYER);
    Ok(quantity)
}

/// Prompt until the buyer enters an acceptable quantity.
///
/// Each rejection prints its reason followed by a blank line, then prompts
/// again. Rejections never end the loop.
///
/// # Errors
///
/// Returns [`ConsoleError::InputClosed`] if input ends before an acceptable
/// line arrives, or [`ConsoleError::Io`] if the console fails.
#[tracing::instrument(skip(console))]
pub async fn request_tickets(
    console: &dyn Console,
    remaining: u32,
) -> Result<TicketQuantity, ConsoleError> {
    loop {
        let raw = console.prompt(TICKET_PROMPT).await?;

        match validate_request(&raw, remaining) {
            Ok(quantity) => {
                tracing::debug!(%quantity, "Ticket request accepted");
                return Ok(quantity);
            },
            Err(reason) => {
                tracing::debug!(input = %raw, ?reason, "Ticket request rejected");
                console.say(&reason.to_string()).await?;
                console.say("").await?;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_each_allowed_quantity() {
        for tickets in 1..=4 {
            assert_eq!(
                validate_request(&tickets.to_string(), 20).map(TicketQuantity::get),
                Ok(tickets)
            );
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(validate_request("  2\t", 5).map(TicketQuantity::get), Ok(2));
        assert_eq!(validate_request("04", 5).map(TicketQuantity::get), Ok(4));
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        for raw in ["", "   ", "abc", "-2", "+2", "2.5", "1 2", "two"] {
            assert_eq!(
                validate_request(raw, 20),
                Err(RejectionReason::NotANumber),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_only_ascii_digits_count() {
        for raw in ["３", "٣", "１２"] {
            assert_eq!(
                validate_request(raw, 20),
                Err(RejectionReason::NotANumber),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        for raw in ["0", "5", "40", "99999999999999999999"] {
            assert_eq!(
                validate_request(raw, 20),
                Err(RejectionReason::OutOfRange),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_range_is_checked_before_inventory() {
        // 7 exceeds both limits; the per-buyer limit is reported
        assert_eq!(validate_request("7", 2), Err(RejectionReason::OutOfRange));
    }

    #[test]
    fn test_rejects_more_than_remaining() {
        assert_eq!(
            validate_request("3", 2),
            Err(RejectionReason::ExceedsRemaining {
                requested: 3,
                remaining: 2
            })
        );
        assert_eq!(validate_request("2", 2).map(TicketQuantity::get), Ok(2));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            RejectionReason::NotANumber.to_string(),
            "Invalid entry. Please enter a whole number from 1 to 4."
        );
        assert_eq!(
            RejectionReason::OutOfRange.to_string(),
            "Invalid number of tickets. You may purchase 1 to 4 tickets per buyer."
        );
        assert_eq!(
            RejectionReason::ExceedsRemaining {
                requested: 4,
                remaining: 1
            }
            .to_string(),
            "Only 1 ticket(s) remain. Please enter a smaller number."
        );
    }
}
