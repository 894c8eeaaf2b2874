//! Currency conversion types and operations.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use crossrate_common::{Currency, Quote};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::path::Path;

/// Which side of each quote to use.
///
/// The same side applies to every hop, including inverted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSide {
    /// Use bid price.
    Bid,
    /// Use ask price.
    Ask,
}

impl RateSide {
    /// Get the price for this side from a quote.
    pub fn price(&self, quote: &Quote) -> Decimal {
        match self {
            RateSide::Bid => quote.bid,
            RateSide::Ask => quote.ask,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RateSide::Bid => "bid",
            RateSide::Ask => "ask",
        }
    }
}

impl fmt::Display for RateSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bid" => Ok(RateSide::Bid),
            "ask" => Ok(RateSide::Ask),
            other => Err(format!("unknown rate side {other:?}, expected bid or ask")),
        }
    }
}

/// Request to perform a conversion.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Currency converted out of.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Amount in `from` currency.
    pub amount: Decimal,
    /// Quote side, ask unless changed.
    pub rate_side: RateSide,
}

impl ConversionRequest {
    /// Create a new conversion request at the ask.
    pub fn new(amount: Decimal, from: Currency, to: Currency) -> Self {
        Self {
            from,
            to,
            amount,
            rate_side: RateSide::Ask,
        }
    }

    /// Use bid rate.
    pub fn at_bid(mut self) -> Self {
        self.rate_side = RateSide::Bid;
        self
    }

    /// Use ask rate.
    pub fn at_ask(mut self) -> Self {
        self.rate_side = RateSide::Ask;
        self
    }
}

/// Represents a completed currency conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// Unique conversion ID.
    pub id: Uuid,
    pub from: Currency,
    pub to: Currency,
    /// Input amount.
    pub input: Decimal,
    /// Output amount, rounded.
    pub output: Decimal,
    /// Composite rate before rounding.
    pub rate: Decimal,
    pub rate_side: RateSide,
    /// Route the rate was composed along.
    pub path: Path,
    /// When the conversion was executed.
    pub executed_at: DateTime<Utc>,
}

impl Conversion {
    /// Create a new conversion record.
    pub fn new(
        request: ConversionRequest,
        output: Decimal,
        rate: Decimal,
        path: Path,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            from: request.from,
            to: request.to,
            input: request.amount,
            output,
            rate,
            rate_side: request.rate_side,
            path,
            executed_at: Utc::now(),
        }
    }

    /// Get the effective rate after rounding.
    pub fn effective_rate(&self) -> Decimal {
        if self.input.is_zero() {
            return Decimal::ZERO;
        }
        self.output / self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_side() {
        let quote = Quote::new(dec!(0.91), dec!(0.93));

        assert_eq!(RateSide::Bid.price(&quote), dec!(0.91));
        assert_eq!(RateSide::Ask.price(&quote), dec!(0.93));
    }

    #[test]
    fn test_rate_side_parse() {
        assert_eq!("bid".parse::<RateSide>().unwrap(), RateSide::Bid);
        assert_eq!("ASK".parse::<RateSide>().unwrap(), RateSide::Ask);
        assert!("mid".parse::<RateSide>().is_err());
        assert_eq!(RateSide::Ask.to_string(), "ask");
    }

    #[test]
    fn test_request_builder() {
        let request = ConversionRequest::new(dec!(1000), Currency::usd(), Currency::eur());
        assert_eq!(request.rate_side, RateSide::Ask);

        let request = request.at_bid();
        assert_eq!(request.amount, dec!(1000));
        assert_eq!(request.to, Currency::eur());
        assert_eq!(request.rate_side, RateSide::Bid);

        let request = request.at_ask();
        assert_eq!(request.rate_side, RateSide::Ask);
    }

    #[test]
    fn test_conversion_effective_rate() {
        let request = ConversionRequest::new(dec!(1000), Currency::usd(), Currency::eur());
        let conversion = Conversion::new(request, dec!(920), dec!(0.92), Path::default());

        assert_eq!(conversion.effective_rate(), dec!(0.92));
        assert_eq!(conversion.rate_side, RateSide::Ask);
    }

    #[test]
    fn test_conversion_serializes_side_lowercase() {
        let request = ConversionRequest::new(dec!(5), Currency::gbp(), Currency::usd()).at_bid();
        let conversion = Conversion::new(request, dec!(6.3), dec!(1.26), Path::default());

        let json = serde_json::to_value(&conversion).unwrap();

        assert_eq!(json["rate_side"], "bid");
        assert_eq!(json["from"], "GBP");
    }

    #[test]
    fn test_zero_input_effective_rate() {
        let request = ConversionRequest::new(dec!(0), Currency::usd(), Currency::eur());
        let conversion = Conversion::new(request, dec!(0), dec!(0.92), Path::default());

        assert_eq!(conversion.effective_rate(), Decimal::ZERO);
    }
}
