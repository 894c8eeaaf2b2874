//! Undirected currency adjacency built from quoted pairs.

use std::collections::HashMap;

use crossrate_common::{Currency, CurrencyPair, QuoteRecord};
use serde::{Deserialize, Serialize};

use crate::error::{FxError, FxResult};

/// A traversable link to a neighbouring currency.
///
/// `pair` is always the symbol as quoted, whichever way the edge points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Currency reached by following the edge.
    pub currency: Currency,
    /// Quote that backs the edge.
    pub pair: CurrencyPair,
}

impl Edge {
    pub fn new(currency: Currency, pair: CurrencyPair) -> Self {
        Self { currency, pair }
    }
}

/// Currency graph with one edge per quote in each direction.
///
/// Adjacency order matters for path resolution: every base->quote edge is
/// inserted in feed order first, then every quote->base edge in feed order.
/// Duplicate quotes between the same currencies stay as separate edges.
#[derive(Debug, Clone, Default)]
pub struct CurrencyGraph {
    adjacency: HashMap<Currency, Vec<Edge>>,
}

impl CurrencyGraph {
    /// Build the graph from the quote feed.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a QuoteRecord>,
    {
        let pairs: Vec<&CurrencyPair> = records.into_iter().map(|r| &r.currency_pair).collect();
        let mut graph = Self::default();

        for pair in &pairs {
            graph.add_edge(&pair.base, Edge::new(pair.quote.clone(), (*pair).clone()));
        }
        for pair in &pairs {
            graph.add_edge(&pair.quote, Edge::new(pair.base.clone(), (*pair).clone()));
        }

        graph
    }

    fn add_edge(&mut self, from: &Currency, edge: Edge) {
        self.adjacency.entry(from.clone()).or_default().push(edge);
    }

    /// Edges leaving `currency`, in insertion order.
    pub fn neighbors(&self, currency: &Currency) -> FxResult<&[Edge]> {
        self.adjacency
            .get(currency)
            .map(Vec::as_slice)
            .ok_or_else(|| FxError::UnknownCurrency(currency.clone()))
    }

    /// Every quoted currency, sorted by code.
    pub fn currencies(&self) -> Vec<&Currency> {
        let mut currencies: Vec<&Currency> = self.adjacency.keys().collect();
        currencies.sort();
        currencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn records(symbols: &[&str]) -> Vec<QuoteRecord> {
        symbols
            .iter()
            .map(|s| QuoteRecord::new(s.parse().unwrap(), Decimal::ONE, Decimal::ONE))
            .collect()
    }

    fn ccy(code: &str) -> Currency {
        Currency::parse(code).unwrap()
    }

    #[test]
    fn test_edges_in_both_directions_keep_symbol() {
        let graph = CurrencyGraph::build(&records(&["EURUSD"]));

        let from_eur = graph.neighbors(&Currency::eur()).unwrap();
        let from_usd = graph.neighbors(&Currency::usd()).unwrap();

        assert_eq!(from_eur.len(), 1);
        assert_eq!(from_eur[0].currency, Currency::usd());
        assert_eq!(from_eur[0].pair.to_string(), "EURUSD");
        assert_eq!(from_usd[0].currency, Currency::eur());
        assert_eq!(from_usd[0].pair.to_string(), "EURUSD");
    }

    #[test]
    fn test_forward_edges_precede_reverse_edges() {
        let graph = CurrencyGraph::build(&records(&["USDTRY", "EURUSD", "USDCAD"]));

        let order: Vec<String> = graph
            .neighbors(&Currency::usd())
            .unwrap()
            .iter()
            .map(|e| e.currency.to_string())
            .collect();

        assert_eq!(order, vec!["TRY", "CAD", "EUR"]);
    }

    #[test]
    fn test_duplicates_are_retained() {
        let graph = CurrencyGraph::build(&records(&["EURUSD", "USDEUR", "EURUSD"]));

        assert_eq!(graph.neighbors(&Currency::eur()).unwrap().len(), 3);
        assert_eq!(graph.neighbors(&Currency::usd()).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_currency() {
        let graph = CurrencyGraph::build(&records(&["EURUSD"]));

        assert!(matches!(
            graph.neighbors(&Currency::gbp()),
            Err(FxError::UnknownCurrency(c)) if c == Currency::gbp()
        ));
    }

    #[test]
    fn test_currencies_sorted() {
        let graph = CurrencyGraph::build(&records(&["USDTRY", "EURCAD"]));
        let codes: Vec<&str> = graph.currencies().iter().map(|c| c.code()).collect();

        assert_eq!(codes, vec!["CAD", "EUR", "TRY", "USD"]);
        assert_eq!(graph.neighbors(&ccy("TRY")).unwrap().len(), 1);
    }
}
