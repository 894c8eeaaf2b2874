//! FX engine error types.

use crossrate_common::{Currency, CurrencyPair};
use thiserror::Error;

/// Errors that can occur while resolving or applying a cross rate.
#[derive(Debug, Error)]
pub enum FxError {
    /// Currency does not appear in any loaded quote.
    #[error("Unknown currency {0}")]
    UnknownCurrency(Currency),

    /// Pair was never loaded into the quote index.
    #[error("Unknown pair {0}")]
    UnknownPair(CurrencyPair),

    /// No chain of quotes connects the two currencies.
    #[error("No path exists from {from} to {to}")]
    NoPathExists { from: Currency, to: Currency },

    /// Backward reconstruction revisited a currency.
    #[error("Path resolution failed from {from} to {to}: revisited {revisited}")]
    PathResolution {
        from: Currency,
        to: Currency,
        revisited: Currency,
    },

    /// A hop traversed against its quote direction has a zero price.
    #[error("Zero rate for {0}, cannot invert")]
    ZeroRate(CurrencyPair),

    /// Composite rate or converted amount exceeds decimal range.
    #[error("Arithmetic overflow applying {0}")]
    Overflow(CurrencyPair),

    /// Engine configuration rejected.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FxError {
    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            FxError::UnknownPair(_) => "UNKNOWN_PAIR",
            FxError::NoPathExists { .. } => "NO_PATH_EXISTS",
            FxError::PathResolution { .. } => "PATH_RESOLUTION_ERROR",
            FxError::ZeroRate(_) => "ZERO_RATE",
            FxError::Overflow(_) => "OVERFLOW",
            FxError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
