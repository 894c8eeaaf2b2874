//! Quote lookup by pair symbol.

use std::collections::HashMap;

use crossrate_common::{CurrencyPair, Quote, QuoteRecord};
use rust_decimal::Decimal;
use tracing::debug;

use crate::conversion::RateSide;
use crate::error::{FxError, FxResult};

/// Bid/ask quotes keyed by the pair exactly as it was listed.
#[derive(Debug, Clone, Default)]
pub struct QuoteIndex {
    quotes: HashMap<CurrencyPair, Quote>,
}

impl QuoteIndex {
    /// Build the index. A repeated pair keeps its last quote.
    pub fn load<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a QuoteRecord>,
    {
        let mut quotes = HashMap::new();
        for record in records {
            if let Some(previous) = quotes.insert(record.currency_pair.clone(), record.quote()) {
                debug!(pair = %record.currency_pair, ?previous, "Replacing earlier quote");
            }
        }
        Self { quotes }
    }

    /// Price of `pair` on the given side.
    pub fn lookup(&self, pair: &CurrencyPair, side: RateSide) -> FxResult<Decimal> {
        self.get(pair)
            .map(|quote| side.price(quote))
            .ok_or_else(|| FxError::UnknownPair(pair.clone()))
    }

    /// Full quote for `pair`, if loaded.
    pub fn get(&self, pair: &CurrencyPair) -> Option<&Quote> {
        self.quotes.get(pair)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(symbol: &str, bid: Decimal, ask: Decimal) -> QuoteRecord {
        QuoteRecord::new(symbol.parse().unwrap(), bid, ask)
    }

    #[test]
    fn test_lookup_both_sides() {
        let index = QuoteIndex::load(&[record("EURUSD", dec!(1.07), dec!(1.08))]);
        let pair: CurrencyPair = "EURUSD".parse().unwrap();

        assert_eq!(index.lookup(&pair, RateSide::Bid).unwrap(), dec!(1.07));
        assert_eq!(index.lookup(&pair, RateSide::Ask).unwrap(), dec!(1.08));
    }

    #[test]
    fn test_last_write_wins() {
        let index = QuoteIndex::load(&[
            record("USDTRY", dec!(27.0), dec!(27.1)),
            record("EURUSD", dec!(1.07), dec!(1.08)),
            record("USDTRY", dec!(27.4), dec!(27.5)),
        ]);
        let pair: CurrencyPair = "USDTRY".parse().unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&pair), Some(&Quote::new(dec!(27.4), dec!(27.5))));
    }

    #[test]
    fn test_unknown_pair() {
        let index = QuoteIndex::load(&[record("EURUSD", dec!(1.07), dec!(1.08))]);
        let inverse: CurrencyPair = "USDEUR".parse().unwrap();

        assert_eq!(index.get(&inverse), None);
        assert!(matches!(
            index.lookup(&inverse, RateSide::Ask),
            Err(FxError::UnknownPair(p)) if p == inverse
        ));
    }

    #[test]
    fn test_empty_index() {
        let index = QuoteIndex::load(&Vec::<QuoteRecord>::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
