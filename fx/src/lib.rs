//! Crossrate FX Engine
//!
//! Converts between currencies that have no direct quote by chaining the
//! quotes that do exist.
//!
//! # Features
//!
//! - Quote index keyed by strongly typed pair symbols
//! - Undirected currency graph, one edge per quote in each direction
//! - Route resolution with a revisit guard
//! - Bid or ask composition with inversion for reversed hops
//!
//! # Example
//!
//! ```rust,ignore
//! use crossrate_common::{Currency, QuoteRecord};
//! use crossrate_fx::{Converter, RateSide};
//!
//! let converter = Converter::new(&records);
//!
//! let cad = converter.convert_formatted(
//!     &"TRY".parse()?,
//!     &"CAD".parse()?,
//!     Decimal::ONE,
//!     RateSide::Ask,
//! )?;
//! ```

pub mod conversion;
pub mod converter;
pub mod error;
pub mod graph;
pub mod index;
pub mod path;

pub use conversion::{Conversion, ConversionRequest, RateSide};
pub use converter::{Converter, ConverterConfig, RoundingMode};
pub use error::{FxError, FxResult};
pub use graph::{CurrencyGraph, Edge};
pub use index::QuoteIndex;
pub use path::{Hop, Path, PathResolver};
