//! # Spam Scanner
//!
//! Scores an email message by counting occurrences of common spam words and
//! phrases, then rates how likely the message is to be spam. Matching is
//! case-sensitive.
//!
//! - [`scanner`]: term matching, scoring and rating
//! - [`session`]: the console flow around a single scan

pub mod scanner;
pub mod session;

pub use scanner::{
    SPAM_TERMS, ScanReport, ScannerError, SpamRating, SpamScanner, format_matched_terms,
};
pub use session::{read_message, report_lines, run_scan};
