//! Configuration management for the pre-sale.
//!
//! The stockpile has no default: it must come from `--stockpile` or from the
//! `PRESALE_STOCKPILE` environment variable.

use crate::types::Stockpile;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Environment variable holding the stockpile
pub const STOCKPILE_VAR: &str = "PRESALE_STOCKPILE";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "presale=warn,classroom_runtime=warn";

/// Configuration problems
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither the flag nor the environment variable was given
    #[error("no ticket stockpile configured; pass --stockpile or set PRESALE_STOCKPILE")]
    MissingStockpile,

    /// The value is not a whole number
    #[error("PRESALE_STOCKPILE must be a whole number of tickets, got {value:?}")]
    InvalidStockpile {
        /// Raw value as given
        value: String,
    },

    /// A sale needs at least one ticket
    #[error("ticket stockpile must be at least 1")]
    EmptyStockpile,
}

/// Pre-sale configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tickets available when the sale opens
    pub stockpile: Stockpile,
}

impl Config {
    /// Build a configuration from an explicit stockpile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStockpile`] for zero.
    pub fn new(stockpile: u32) -> Result<Self, ConfigError> {
        Stockpile::new(stockpile)
            .map(|stockpile| Self { stockpile })
            .ok_or(ConfigError::EmptyStockpile)
    }

    /// Load configuration, preferring the command-line value over the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if no stockpile is given or it is invalid.
    pub fn load(cli_stockpile: Option<u32>) -> Result<Self, ConfigError> {
        match cli_stockpile {
            Some(stockpile) => Self::new(stockpile),
            None => Self::from_env(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `PRESALE_STOCKPILE` is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the stockpile is missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(STOCKPILE_VAR).ok_or(ConfigError::MissingStockpile)?;
        let stockpile = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidStockpile { value: raw.clone() })?;
        Self::new(stockpile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, STOCKPILE_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn test_reads_stockpile() {
        let config = Config::from_lookup(lookup(Some(" 20 ")));
        assert_eq!(config.map(|c| c.stockpile.get()), Ok(20));
    }

    #[test]
    fn test_missing_stockpile_has_no_default() {
        assert_eq!(
            Config::from_lookup(lookup(None)),
            Err(ConfigError::MissingStockpile)
        );
    }

    #[test]
    fn test_invalid_stockpile() {
        assert_eq!(
            Config::from_lookup(lookup(Some("twenty"))),
            Err(ConfigError::InvalidStockpile {
                value: "twenty".to_string()
            })
        );
        assert_eq!(
            Config::from_lookup(lookup(Some("0"))),
            Err(ConfigError::EmptyStockpile)
        );
    }

    #[test]
    fn test_command_line_wins() {
        assert_eq!(Config::load(Some(10)).map(|c| c.stockpile.get()), Ok(10));
        assert_eq!(Config::load(Some(0)), Err(ConfigError::EmptyStockpile));
    }
}
