//! Parse errors for currency and pair identifiers.

use thiserror::Error;

/// Errors raised while parsing currency codes and pair symbols.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    /// Pair symbol is not six ASCII letters.
    #[error("Invalid pair symbol: {0:?}")]
    InvalidPair(String),
}

impl ParseError {
    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            ParseError::InvalidCurrency(_) => "INVALID_CURRENCY",
            ParseError::InvalidPair(_) => "INVALID_PAIR",
        }
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
