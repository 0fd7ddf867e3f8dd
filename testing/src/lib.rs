//! # Classroom Testing
//!
//! Testing utilities and helpers for the classroom exercises.
//!
//! This crate provides:
//! - Mock implementations of Environment traits ([`FixedClock`], [`ScriptedConsole`])
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use classroom_testing::{ScriptedConsole, test_clock};
//!
//! #[tokio::test]
//! async fn test_single_buyer() {
//!     let console = Arc::new(ScriptedConsole::new(["1"]));
//!     let summary = run_presale(stockpile(1), Arc::new(test_clock()), console.clone())
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(summary.buyer_count, 1);
//!     assert!(console.output().contains(&"Total number of buyers: 1".to_string()));
//! }
//! ```

use chrono::{DateTime, Utc};
use classroom_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use classroom_core::console::{Console, ConsoleError};
    use futures::future::BoxFuture;
    use std::collections::VecDeque;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use classroom_testing::mocks::FixedClock;
    /// use classroom_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default())
    }

    /// Console that replays scripted input and records everything printed.
    ///
    /// Once the script runs out, `prompt` fails with
    /// [`ConsoleError::InputClosed`], exactly like stdin at end-of-file.
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        input: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
        output: Mutex<Vec<String>>,
        broken_output: bool,
    }

    impl ScriptedConsole {
        /// Create a console that answers prompts with `lines`, in order
        #[must_use]
        pub fn new<I, L>(lines: I) -> Self
        where
            I: IntoIterator<Item = L>,
            L: Into<String>,
        {
            Self {
                input: Mutex::new(lines.into_iter().map(Into::into).collect()),
                ..Self::default()
            }
        }

        /// Make every `say` fail as if stdout were a closed pipe
        #[must_use]
        pub fn with_broken_output(mut self) -> Self {
            self.broken_output = true;
            self
        }

        /// Lines printed so far, in order
        #[must_use]
        pub fn output(&self) -> Vec<String> {
            lock(&self.output).clone()
        }

        /// Prompt texts shown so far, in order
        #[must_use]
        pub fn prompts(&self) -> Vec<String> {
            lock(&self.prompts).clone()
        }

        /// Scripted lines that were never read
        #[must_use]
        pub fn unread(&self) -> usize {
            lock(&self.input).len()
        }
    }

    // A panicking test thread must not hide the transcript from the others
    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    impl Console for ScriptedConsole {
        fn prompt<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<String, ConsoleError>> {
            Box::pin(async move {
                lock(&self.prompts).push(message.to_string());
                lock(&self.input).pop_front().ok_or(ConsoleError::InputClosed)
            })
        }

        fn say<'a>(&'a self, line: &'a str) -> BoxFuture<'a, Result<(), ConsoleError>> {
            Box::pin(async move {
                if self.broken_output {
                    return Err(ConsoleError::Io(std::io::Error::new(
                        std::io::ErrorKind::BrokenPipe,
                        "scripted output closed",
                    )));
                }
                lock(&self.output).push(line.to_string());
                Ok(())
            })
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, ScriptedConsole, test_clock};
pub use reducer_test::{ReducerTest, assertions};
