//! Cross-rate converter.

use std::fmt;
use std::str::FromStr;

use crossrate_common::{Currency, CurrencyPair, QuoteRecord};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, instrument};

use crate::conversion::{Conversion, ConversionRequest, RateSide};
use crate::error::{FxError, FxResult};
use crate::graph::CurrencyGraph;
use crate::index::QuoteIndex;
use crate::path::{Path, PathResolver};

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_PLACES: u32 = 28;

/// How converted amounts are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Midpoints round away from zero (`0.0000005` -> `0.000001`).
    #[default]
    HalfUp,
    /// Midpoints round to the even neighbour.
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfUp => f.write_str("half-up"),
            RoundingMode::HalfEven => f.write_str("half-even"),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "half-up" | "half_up" => Ok(RoundingMode::HalfUp),
            "half-even" | "half_even" | "bankers" => Ok(RoundingMode::HalfEven),
            other => Err(format!("unknown rounding mode {other:?}")),
        }
    }
}

/// Configuration for the converter.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Decimal places of converted amounts.
    pub decimal_places: u32,
    /// Midpoint rounding rule.
    pub rounding: RoundingMode,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            decimal_places: 6,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl ConverterConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(format!(
                "Decimal places {} exceed maximum {}",
                self.decimal_places, MAX_DECIMAL_PLACES
            ));
        }
        Ok(())
    }
}

/// Converts amounts between any two currencies connected by quotes.
///
/// Built once from the quote feed and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Converter {
    index: QuoteIndex,
    graph: CurrencyGraph,
    config: ConverterConfig,
}

impl Converter {
    /// Build a converter with default configuration.
    pub fn new(records: &[QuoteRecord]) -> Self {
        Self::build(records, ConverterConfig::default())
    }

    /// Build a converter with custom configuration.
    pub fn with_config(records: &[QuoteRecord], config: ConverterConfig) -> FxResult<Self> {
        config.validate().map_err(FxError::Configuration)?;
        Ok(Self::build(records, config))
    }

    fn build(records: &[QuoteRecord], config: ConverterConfig) -> Self {
        let index = QuoteIndex::load(records);
        let graph = CurrencyGraph::build(records);
        debug!(
            quotes = index.len(),
            currencies = graph.currencies().len(),
            "Converter built"
        );
        Self {
            index,
            graph,
            config,
        }
    }

    /// Route used to convert `from` into `to`.
    pub fn path(&self, from: &Currency, to: &Currency) -> FxResult<Path> {
        PathResolver::new(&self.graph).resolve(from, to)
    }

    /// Composite rate from `from` to `to`. Self-conversion is exactly one.
    pub fn rate(&self, from: &Currency, to: &Currency, side: RateSide) -> FxResult<Decimal> {
        let path = self.path(from, to)?;
        self.compose(&path, side)
    }

    /// Convert `amount`, rounded to the configured decimal places.
    #[instrument(skip_all, fields(from = %from, to = %to, amount = %amount, side = %side))]
    pub fn convert(
        &self,
        from: &Currency,
        to: &Currency,
        amount: Decimal,
        side: RateSide,
    ) -> FxResult<Decimal> {
        let rate = self.rate(from, to, side)?;
        self.apply(rate, amount, from, to)
    }

    /// [`Converter::convert`] rendered with exactly the configured number of
    /// decimal places, e.g. `27.500000`.
    pub fn convert_formatted(
        &self,
        from: &Currency,
        to: &Currency,
        amount: Decimal,
        side: RateSide,
    ) -> FxResult<String> {
        let value = self.convert(from, to, amount, side)?;
        Ok(self.format(value))
    }

    /// Convert and return a full record of the conversion.
    pub fn execute(&self, request: ConversionRequest) -> FxResult<Conversion> {
        let path = self.path(&request.from, &request.to)?;
        let rate = self.compose(&path, request.rate_side)?;
        let output = self.apply(rate, request.amount, &request.from, &request.to)?;

        let conversion = Conversion::new(request, output, rate, path);

        info!(
            conversion_id = %conversion.id,
            from = %conversion.from,
            to = %conversion.to,
            hops = conversion.path.len(),
            effective_rate = %conversion.effective_rate(),
            "Conversion completed"
        );

        Ok(conversion)
    }

    /// Render an amount with exactly the configured decimal places.
    pub fn format(&self, value: Decimal) -> String {
        format!("{:.*}", self.config.decimal_places as usize, value)
    }

    /// Every currency that appears in a quote.
    pub fn currencies(&self) -> Vec<&Currency> {
        self.graph.currencies()
    }

    pub fn index(&self) -> &QuoteIndex {
        &self.index
    }

    pub fn graph(&self) -> &CurrencyGraph {
        &self.graph
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Fold each hop's factor into a running rate: direct hops multiply by the
    /// price, reversed hops divide by it.
    fn compose(&self, path: &Path, side: RateSide) -> FxResult<Decimal> {
        let mut rate = Decimal::ONE;

        for hop in path {
            let price = self.index.lookup(&hop.pair, side)?;
            let next = if hop.is_direct() {
                rate.checked_mul(price)
            } else {
                if price.is_zero() {
                    return Err(FxError::ZeroRate(hop.pair.clone()));
                }
                rate.checked_div(price)
            };
            rate = next.ok_or_else(|| FxError::Overflow(hop.pair.clone()))?;
        }

        Ok(rate)
    }

    fn apply(
        &self,
        rate: Decimal,
        amount: Decimal,
        from: &Currency,
        to: &Currency,
    ) -> FxResult<Decimal> {
        let value = rate
            .checked_mul(amount)
            .ok_or_else(|| FxError::Overflow(CurrencyPair::new(from.clone(), to.clone())))?;
        Ok(value.round_dp_with_strategy(self.config.decimal_places, self.config.rounding.strategy()))
    }
}
