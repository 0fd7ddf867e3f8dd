//! Property tests for request validation and the sale reducer.

#![allow(clippy::expect_used)]

use classroom_core::reducer::Reducer;
use classroom_testing::{ScriptedConsole, test_clock};
use presale::types::MAX_TICKETS_PER_BUYER;
use presale::{SaleAction, SaleEnvironment, SaleReducer, SaleState, Stockpile, validate_request};
use proptest::prelude::*;
use std::sync::Arc;

fn env() -> SaleEnvironment {
    SaleEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(ScriptedConsole::new(Vec::<String>::new())),
    )
}

proptest! {
    #[test]
    fn prop_validator_stays_within_limits(raw in ".{0,12}", remaining in 1u32..200) {
        if let Ok(quantity) = validate_request(&raw, remaining) {
            prop_assert!(quantity.get() >= 1);
            prop_assert!(quantity.get() <= MAX_TICKETS_PER_BUYER);
            prop_assert!(quantity.get() <= remaining);
        }
    }

    #[test]
    fn prop_non_digit_text_is_rejected(
        raw in "[^0-9 \t\r\n]*[a-zA-Z+.-][^0-9]*",
        remaining in 1u32..200
    ) {
        prop_assert!(validate_request(&raw, remaining).is_err());
    }

    #[test]
    fn prop_greedy_purchases_sell_out_in_ceil_quarter(tickets in 1u32..500) {
        let reducer = SaleReducer::new();
        let env = env();
        let mut state = SaleState::new(Stockpile::new(tickets).expect("range starts at 1"));

        while !state.is_sold_out() {
            let before = (state.remaining_tickets, state.buyer_count);
            let requested = state.remaining_tickets.min(MAX_TICKETS_PER_BUYER).to_string();
            let quantity = validate_request(&requested, state.remaining_tickets)
                .expect("greedy request is always valid");

            let _ = reducer.reduce(&mut state, SaleAction::Purchase { quantity }, &env);

            prop_assert!(state.remaining_tickets < before.0);
            prop_assert_eq!(state.buyer_count, before.1 + 1);
        }

        prop_assert_eq!(state.remaining_tickets, 0);
        prop_assert_eq!(state.buyer_count, tickets.div_ceil(MAX_TICKETS_PER_BUYER));
    }

}
