//! Crossrate Common Types
//!
//! Shared currency, pair and quote types used by the rate engine and the
//! command-line front end.

pub mod error;
pub mod monetary;

pub use error::*;
pub use monetary::*;
