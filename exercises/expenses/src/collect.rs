//! Interactive expense entry.

use classroom_core::console::{Console, ConsoleError};
use thiserror::Error;

/// Prompt for each expense label
pub const LABEL_PROMPT: &str = "Expense type (example: Rent): ";

/// One month's expense
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// What the money went on
    pub label: String,
    /// Non-negative amount in dollars
    pub amount: f64,
}

impl Expense {
    /// Create an expense.
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Why an amount was turned down; the text is shown to the user
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRejection {
    /// Not a finite number
    #[error("Please enter a valid number (example: 125.50).")]
    NotANumber,

    /// Below zero
    #[error("Please enter a value of 0 or greater.")]
    Negative,
}

/// Parse one amount entry.
///
/// # Errors
///
/// Returns the [`AmountRejection`] to show the user.
pub fn parse_amount(raw: &str) -> Result<f64, AmountRejection> {
    let amount: f64 = raw.trim().parse().map_err(|_| AmountRejection::NotANumber)?;
    if !amount.is_finite() {
        return Err(AmountRejection::NotANumber);
    }
    if amount < 0.0 {
        return Err(AmountRejection::Negative);
    }
    Ok(amount)
}

/// Prompt for the amount of `label` until a valid one is entered.
///
/// # Errors
///
/// Returns [`ConsoleError`] if input ends or the console fails.
pub async fn read_amount(console: &dyn Console, label: &str) -> Result<f64, ConsoleError> {
    let prompt = format!("Amount for {label}: $");
    loop {
        let line = console.prompt(&prompt).await?;
        match parse_amount(&line) {
            Ok(amount) => return Ok(amount),
            Err(reason) => {
                tracing::debug!(input = %line, %reason, "Amount rejected");
                console.say(&reason.to_string()).await?;
            },
        }
    }
}

/// Collect expenses until a blank label is entered after at least one entry.
///
/// # Errors
///
/// Returns [`ConsoleError`] if input ends or the console fails.
pub async fn collect_expenses(console: &dyn Console) -> Result<Vec<Expense>, ConsoleError> {
    console
        .say("Enter your monthly expenses. Press Enter on the expense type to finish.")
        .await?;

    let mut expenses = Vec::new();
    loop {
        let label = console.prompt(LABEL_PROMPT).await?.trim().to_string();

        if label.is_empty() {
            if !expenses.is_empty() {
                break;
            }
            console.say("You must enter at least one expense.").await?;
            continue;
        }

        let amount = read_amount(console, &label).await?;
        expenses.push(Expense::new(label, amount));
        console.say("").await?;
    }
    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 125.50 "), Ok(125.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
        assert_eq!(parse_amount("abc"), Err(AmountRejection::NotANumber));
        assert_eq!(parse_amount(""), Err(AmountRejection::NotANumber));
        assert_eq!(parse_amount("inf"), Err(AmountRejection::NotANumber));
        assert_eq!(parse_amount("-1"), Err(AmountRejection::Negative));
    }
}
