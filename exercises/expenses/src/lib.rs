//! # Monthly Expenses
//!
//! Collects labelled expenses from the console and reports the month's total
//! along with the highest and lowest expense.
//!
//! ```
//! use expenses::{Expense, analyze_expenses};
//!
//! let summary = analyze_expenses(&[Expense::new("Rent", 900.0), Expense::new("Food", 250.0)])?;
//! assert_eq!(summary.highest.label, "Rent");
//! # Ok::<(), expenses::ExpenseError>(())
//! ```

pub mod analysis;
pub mod collect;

pub use analysis::{ExpenseError, ExpenseSummary, analyze_expenses};
pub use collect::{AmountRejection, Expense, collect_expenses, parse_amount, read_amount};

use classroom_core::console::Console;

/// Errors ending an expenses session
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The console failed or input ended early
    #[error(transparent)]
    Console(#[from] classroom_core::console::ConsoleError),

    /// Nothing to analyze
    #[error(transparent)]
    Analysis(#[from] ExpenseError),
}

/// Collect expenses, then print the summary.
///
/// # Errors
///
/// Returns [`SessionError`] if the console fails or input ends early.
pub async fn run_session(console: &dyn Console) -> Result<ExpenseSummary, SessionError> {
    let expenses = collect_expenses(console).await?;
    let summary = analyze_expenses(&expenses)?;
    for line in summary.report_lines() {
        console.say(&line).await?;
    }
    Ok(summary)
}
