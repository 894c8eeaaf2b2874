//! Monetary types for crossrate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};

/// Length of a currency code.
pub const CURRENCY_CODE_LEN: usize = 3;

/// Three-letter currency code (e.g. `USD`).
///
/// Codes are case-sensitive: `usd` and `USD` are different currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parse a currency code, rejecting anything that is not three ASCII letters.
    pub fn parse(code: &str) -> Result<Self> {
        if code.len() == CURRENCY_CODE_LEN && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(code.to_string()))
        } else {
            Err(ParseError::InvalidCurrency(code.to_string()))
        }
    }

    /// Get the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Common currencies
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn eur() -> Self {
        Self("EUR".to_string())
    }

    pub fn gbp() -> Self {
        Self("GBP".to_string())
    }

    pub fn jpy() -> Self {
        Self("JPY".to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// A quoted market, written as the concatenation of base and quote codes
/// (`EURUSD` prices one EUR in USD).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    /// Base currency (being bought/sold).
    pub base: Currency,
    /// Quote currency (pricing currency).
    pub quote: Currency,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Parse a six-letter symbol such as `EURUSD`.
    pub fn parse(symbol: &str) -> Result<Self> {
        let invalid = || ParseError::InvalidPair(symbol.to_string());
        if symbol.len() != 2 * CURRENCY_CODE_LEN || !symbol.is_ascii() {
            return Err(invalid());
        }
        let (base, quote) = symbol.split_at(CURRENCY_CODE_LEN);
        let base = Currency::parse(base).map_err(|_| invalid())?;
        let quote = Currency::parse(quote).map_err(|_| invalid())?;
        Ok(Self { base, quote })
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.to_string()
    }
}

/// Bid and ask prices for one pair, in quote currency per unit of base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Price at which the base currency is bought.
    pub bid: Decimal,
    /// Price at which the base currency is sold.
    pub ask: Decimal,
}

impl Quote {
    /// Create a new quote.
    pub fn new(bid: Decimal, ask: Decimal) -> Self {
        Self { bid, ask }
    }
}

/// One entry of the external quote feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// The quoted pair, e.g. `EURUSD`.
    #[serde(rename = "currencyPair")]
    pub currency_pair: CurrencyPair,
    /// Bid price.
    pub bid: Decimal,
    /// Ask price.
    pub ask: Decimal,
}

impl QuoteRecord {
    /// Create a new quote record.
    pub fn new(currency_pair: CurrencyPair, bid: Decimal, ask: Decimal) -> Self {
        Self {
            currency_pair,
            bid,
            ask,
        }
    }

    /// The bid/ask part of the record.
    pub fn quote(&self) -> Quote {
        Quote::new(self.bid, self.ask)
    }
}
