//! Expense totals and extremes.

use crate::collect::Expense;
use classroom_core::money::format_money;
use thiserror::Error;

/// Analysis errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseError {
    /// Highest and lowest are undefined without any expense
    #[error("no expenses to analyze")]
    Empty,
}

/// Total, highest and lowest expense for a month
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of all amounts
    pub total: f64,
    /// Largest expense; the earliest one wins a tie
    pub highest: Expense,
    /// Smallest expense; the earliest one wins a tie
    pub lowest: Expense,
}

impl ExpenseSummary {
    /// Report lines, starting with a blank line.
    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            String::new(),
            "--- Monthly Expense Summary ---".to_string(),
            format!("Total monthly expenses: {}", format_money(self.total)),
            format!(
                "Highest expense: {} ({})",
                self.highest.label,
                format_money(self.highest.amount)
            ),
            format!(
                "Lowest expense:  {} ({})",
                self.lowest.label,
                format_money(self.lowest.amount)
            ),
        ]
    }
}

/// Fold the expenses into a summary.
///
/// # Errors
///
/// Returns [`ExpenseError::Empty`] for an empty slice.
pub fn analyze_expenses(expenses: &[Expense]) -> Result<ExpenseSummary, ExpenseError> {
    let first = expenses.first().ok_or(ExpenseError::Empty)?;

    let total = expenses.iter().fold(0.0, |total, expense| total + expense.amount);
    let highest = expenses.iter().fold(first, |best, expense| {
        if expense.amount > best.amount { expense } else { best }
    });
    let lowest = expenses.iter().fold(first, |best, expense| {
        if expense.amount < best.amount { expense } else { best }
    });

    Ok(ExpenseSummary {
        total,
        highest: highest.clone(),
        lowest: lowest.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_an_error() {
        assert_eq!(analyze_expenses(&[]), Err(ExpenseError::Empty));
    }

    #[test]
    fn test_first_wins_ties() {
        let expenses = [
            Expense::new("Rent", 100.0),
            Expense::new("Food", 50.0),
            Expense::new("Car", 100.0),
            Expense::new("Gym", 50.0),
        ];
        let summary = analyze_expenses(&expenses).unwrap();

        assert_eq!(summary.highest.label, "Rent");
        assert_eq!(summary.lowest.label, "Food");
        assert_eq!(format_money(summary.total), "$300.00");
    }

    #[test]
    fn test_single_expense_is_both_extremes() {
        let summary = analyze_expenses(&[Expense::new("Rent", 1250.0)]).unwrap();
        assert_eq!(summary.highest, summary.lowest);
        assert_eq!(
            summary.report_lines(),
            vec![
                "",
                "--- Monthly Expense Summary ---",
                "Total monthly expenses: $1,250.00",
                "Highest expense: Rent ($1,250.00)",
                "Lowest expense:  Rent ($1,250.00)",
            ]
        );
    }
}
