//! Line-oriented console access.
//!
//! Interactive exercises never touch stdin/stdout directly. They receive an
//! `Arc<dyn Console>` through their environment so tests can replay scripted
//! input and inspect everything that was printed.

use futures::future::BoxFuture;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Errors raised while talking to the console
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading or writing the underlying stream failed
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input reached end-of-file while a value was still expected
    #[error("input closed before a value was entered")]
    InputClosed,
}

/// A line-oriented console.
///
/// Returns `BoxFuture` instead of async fn to stay dyn-compatible.
pub trait Console: Send + Sync {
    /// Print `message` without a trailing newline and read one line of input.
    ///
    /// The returned line has its line terminator removed but is otherwise
    /// untouched; callers decide how to trim it.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] at end of input, or
    /// [`ConsoleError::Io`] if the streams fail.
    fn prompt<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<String, ConsoleError>>;

    /// Print one line of output.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the output stream fails.
    fn say<'a>(&'a self, line: &'a str) -> BoxFuture<'a, Result<(), ConsoleError>>;
}

/// Console backed by the process's standard input and output.
#[derive(Debug)]
pub struct StdioConsole {
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdioConsole {
    /// Wrap the process's stdin/stdout
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn prompt<'a>(&'a self, message: &'a str) -> BoxFuture<'a, Result<String, ConsoleError>> {
        Box::pin(async move {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(message.as_bytes()).await?;
            stdout.flush().await?;

            let mut input = self.input.lock().await;
            input.next_line().await?.ok_or(ConsoleError::InputClosed)
        })
    }

    fn say<'a>(&'a self, line: &'a str) -> BoxFuture<'a, Result<(), ConsoleError>> {
        Box::pin(async move {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(line.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConsoleError::InputClosed.to_string(),
            "input closed before a value was entered"
        );

        let io = ConsoleError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(io.to_string(), "console I/O failed: pipe closed");
    }
}
