//! Term matching and scoring.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The built-in list of spam words and phrases.
pub const SPAM_TERMS: [&str; 30] = [
    "act now",
    "urgent",
    "limited time",
    "offer expires",
    "last chance",
    "risk-free",
    "no hidden fees",
    "free money",
    "cash bonus",
    "get paid",
    "earn extra cash",
    "make money",
    "work from home",
    "financial freedom",
    "pre-approved loan",
    "consolidate your debt",
    "unclaimed funds",
    "you've won",
    "winner",
    "claim your prize",
    "congratulations",
    "exclusive offer",
    "free gift",
    "100% free",
    "guaranteed",
    "click here",
    "verify your account",
    "password expires",
    "unusual activity",
    "update now",
];

/// Errors building a scanner
#[derive(Error, Debug)]
pub enum ScannerError {
    /// Blank terms would match everywhere
    #[error("spam terms cannot be blank")]
    BlankTerm,

    /// The whole-word pattern for a term failed to compile
    #[error("invalid spam term {term:?}: {source}")]
    InvalidTerm {
        /// The offending term
        term: String,
        /// Underlying regex error
        source: regex::Error,
    },
}

/// How likely a message is to be spam
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpamRating {
    /// Score 0
    VeryUnlikely,
    /// Score 1 to 2
    Unlikely,
    /// Score 3 to 6
    Possibly,
    /// Score 7 to 11
    Likely,
    /// Score 12 and above
    VeryLikely,
}

impl SpamRating {
    /// Rating for a total score.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            0 => Self::VeryUnlikely,
            1..=2 => Self::Unlikely,
            3..=6 => Self::Possibly,
            7..=11 => Self::Likely,
            _ => Self::VeryLikely,
        }
    }
}

impl fmt::Display for SpamRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryUnlikely => "Very unlikely to be spam.",
            Self::Unlikely => "Unlikely to be spam.",
            Self::Possibly => "Possibly spam.",
            Self::Likely => "Likely spam.",
            Self::VeryLikely => "Very likely spam.",
        })
    }
}

#[derive(Debug)]
enum Matcher {
    /// Single words match on word boundaries only
    Word(Regex),
    /// Phrases match anywhere, overlapping
    Phrase,
}

#[derive(Debug)]
struct Term {
    text: String,
    matcher: Matcher,
}

impl Term {
    fn count_in(&self, message: &str) -> u32 {
        let count = match &self.matcher {
            Matcher::Word(pattern) => pattern.find_iter(message).count(),
            Matcher::Phrase => message
                .char_indices()
                .filter(|(start, _)| message[*start..].starts_with(&self.text))
                .count(),
        };
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

/// Outcome of scanning one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Sum of all occurrences
    pub score: u32,
    /// Occurrences per matched term; unmatched terms are absent
    pub matched: BTreeMap<String, u32>,
    /// Rating for `score`
    pub rating: SpamRating,
}

impl ScanReport {
    /// Matched terms, most frequent first, ties in alphabetical order.
    #[must_use]
    pub fn ranked_terms(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .matched
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
            .collect();
        // BTreeMap order already breaks ties alphabetically; sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Case-sensitive keyword scanner.
///
/// ```
/// use spam_scanner::scanner::{SpamRating, SpamScanner};
///
/// let scanner = SpamScanner::with_default_terms()?;
/// let report = scanner.analyze("urgent: click here, urgent!");
/// assert_eq!(report.score, 3);
/// assert_eq!(report.rating, SpamRating::Possibly);
/// # Ok::<(), spam_scanner::scanner::ScannerError>(())
/// ```
#[derive(Debug)]
pub struct SpamScanner {
    terms: Vec<Term>,
}

impl SpamScanner {
    /// Build a scanner for `terms`.
    ///
    /// Terms containing a space are phrases; every other term is a word.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError`] for a blank term or an uncompilable pattern.
    pub fn new<I, T>(terms: I) -> Result<Self, ScannerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(|term| {
                let text: String = term.into();
                if text.trim().is_empty() {
                    return Err(ScannerError::BlankTerm);
                }
                let matcher = if text.contains(' ') {
                    Matcher::Phrase
                } else {
                    let pattern = format!(r"\b{}\b", regex::escape(&text));
                    Matcher::Word(Regex::new(&pattern).map_err(|source| {
                        ScannerError::InvalidTerm {
                            term: text.clone(),
                            source,
                        }
                    })?)
                };
                Ok(Term { text, matcher })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { terms })
    }

    /// Scanner for [`SPAM_TERMS`].
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError`] if a built-in pattern fails to compile.
    pub fn with_default_terms() -> Result<Self, ScannerError> {
        Self::new(SPAM_TERMS)
    }

    /// Score a message.
    #[must_use]
    pub fn analyze(&self, message: &str) -> ScanReport {
        let matched: BTreeMap<String, u32> = self
            .terms
            .iter()
            .filter_map(|term| {
                let count = term.count_in(message);
                (count > 0).then(|| (term.text.clone(), count))
            })
            .collect();

        let score = matched.values().fold(0_u32, |total, count| total.saturating_add(*count));
        tracing::debug!(score, terms = matched.len(), "Message scanned");

        ScanReport {
            score,
            matched,
            rating: SpamRating::from_score(score),
        }
    }
}

/// Lines listing the matched terms as `- term (count)`, or `None`.
#[must_use]
pub fn format_matched_terms(report: &ScanReport) -> Vec<String> {
    if report.matched.is_empty() {
        return vec!["None".to_string()];
    }
    report
        .ranked_terms()
        .into_iter()
        .map(|(term, count)| format!("- {term} ({count})"))
        .collect()
}
