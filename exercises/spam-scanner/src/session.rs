//! Interactive scan: read a message from the console and print the verdict.

use crate::scanner::{ScanReport, SpamScanner, format_matched_terms};
use classroom_core::console::{Console, ConsoleError};

/// Width of the rule under the results heading
const RULE_WIDTH: usize = 60;

/// Read message lines until a blank line or end of input.
///
/// The lines are joined with `\n` and trimmed.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if the console fails.
pub async fn read_message(console: &dyn Console) -> Result<String, ConsoleError> {
    let mut lines = Vec::new();
    loop {
        match console.prompt("").await {
            Ok(line) if line.trim().is_empty() => break,
            Ok(line) => lines.push(line),
            Err(ConsoleError::InputClosed) => break,
            Err(error) => return Err(error),
        }
    }
    Ok(lines.join("\n").trim().to_string())
}

/// Lines printed for a scanned message.
#[must_use]
pub fn report_lines(report: &ScanReport) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Results".to_string(),
        "-".repeat(RULE_WIDTH),
        format!("Spam score: {}", report.score),
        format!("Likelihood: {}", report.rating),
        String::new(),
        "Words/phrases that increased the score:".to_string(),
    ];
    lines.extend(format_matched_terms(report));
    lines
}

/// Run one scan against `console`.
///
/// Returns the report, or `None` when no message was entered.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if the console fails.
pub async fn run_scan(
    scanner: &SpamScanner,
    console: &dyn Console,
) -> Result<Option<ScanReport>, ConsoleError> {
    console.say("Spam Scanner (Case-Sensitive Version)").await?;
    console
        .say("Enter your email message below. Press Enter on a blank line to finish.")
        .await?;
    console.say("").await?;

    let message = read_message(console).await?;
    if message.is_empty() {
        console.say("").await?;
        console
            .say("No message entered. Please run the program again.")
            .await?;
        return Ok(None);
    }

    let report = scanner.analyze(&message);
    for line in report_lines(&report) {
        console.say(&line).await?;
    }
    Ok(Some(report))
}
