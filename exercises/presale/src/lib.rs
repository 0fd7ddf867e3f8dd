//! # Cinema Ticket Pre-Sale
//!
//! Sells a fixed stockpile of tickets to buyers arriving one at a time on the
//! console. Each buyer may take 1 to 4 tickets, never more than remain. The
//! sale ends when the stockpile is gone and reports how many buyers were served.
//!
//! ## Architecture
//!
//! ```text
//!   console ──line──▶ validator ──TicketQuantity──▶ Store ──▶ SaleReducer
//!      ▲                  │                                     │
//!      └──── reason ──────┘            announcements (effects) ◀┘
//! ```
//!
//! - [`validator`]: pure request check plus the re-prompt loop
//! - [`sale`]: the `Selling` / `SoldOut` state machine as a reducer
//! - [`orchestrator`]: drives the store from the console until sold out
//! - [`config`]: stockpile configuration
//!
//! ## Example
//!
//! ```no_run
//! use classroom_core::{console::StdioConsole, environment::SystemClock};
//! use presale::{orchestrator::run_presale, types::Stockpile};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let stockpile = Stockpile::new(20).ok_or("empty stockpile")?;
//! let console = Arc::new(StdioConsole::new());
//! let summary = run_presale(stockpile, Arc::new(SystemClock), console).await?;
//! println!("{} buyers", summary.buyer_count);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod orchestrator;
pub mod sale;
pub mod types;
pub mod validator;

pub use config::{Config, ConfigError};
pub use orchestrator::{PresaleError, run_presale};
pub use sale::{SaleAction, SaleEnvironment, SaleReducer};
pub use types::{SalePhase, SaleState, SaleSummary, Stockpile, TicketQuantity};
pub use validator::{RejectionReason, request_tickets, validate_request};
