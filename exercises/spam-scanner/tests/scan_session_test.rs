//! Console scans against scripted input.

#![allow(clippy::expect_used)]

use classroom_testing::ScriptedConsole;
use proptest::prelude::*;
use spam_scanner::{SpamRating, SpamScanner, run_scan};

fn scanner() -> SpamScanner {
    SpamScanner::with_default_terms().expect("built-in terms compile")
}

#[tokio::test]
async fn test_full_scan_transcript() {
    let console = ScriptedConsole::new([
        "Congratulations, you've won!",
        "Click here or click here now: act now, urgent.",
        "",
        "ignored after the blank line",
    ]);

    let report = run_scan(&scanner(), &console)
        .await
        .expect("console works")
        .expect("message entered");

    // "Click here" is capitalised once, so only the lowercase one counts
    assert_eq!(report.score, 4);
    assert_eq!(report.rating, SpamRating::Possibly);
    assert_eq!(console.unread(), 1);

    assert_eq!(
        console.output(),
        vec![
            "Spam Scanner (Case-Sensitive Version)",
            "Enter your email message below. Press Enter on a blank line to finish.",
            "",
            "",
            "Results",
            "-".repeat(60).as_str(),
            "Spam score: 4",
            "Likelihood: Possibly spam.",
            "",
            "Words/phrases that increased the score:",
            "- act now (1)",
            "- click here (1)",
            "- urgent (1)",
            "- you've won (1)",
        ]
    );
}

#[tokio::test]
async fn test_empty_message() {
    let console = ScriptedConsole::new(["   "]);

    let report = run_scan(&scanner(), &console).await.expect("console works");

    assert!(report.is_none());
    assert_eq!(
        console.output().last().map(String::as_str),
        Some("No message entered. Please run the program again.")
    );
}

#[tokio::test]
async fn test_end_of_input_finishes_message() {
    let console = ScriptedConsole::new(["free gift and a free gift"]);

    let report = run_scan(&scanner(), &console)
        .await
        .expect("end of input is not an error")
        .expect("message entered");

    assert_eq!(report.matched.get("free gift"), Some(&2));
    assert_eq!(report.rating, SpamRating::Unlikely);
}

proptest! {
    #[test]
    fn prop_score_is_sum_of_matches(message in "[a-z !'%-]{0,80}") {
        let report = scanner().analyze(&message);
        prop_assert_eq!(report.score, report.matched.values().sum::<u32>());
        prop_assert_eq!(report.rating, SpamRating::from_score(report.score));
        prop_assert!(report.matched.values().all(|count| *count > 0));
    }
}
