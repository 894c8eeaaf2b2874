//! Quote file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use crossrate_common::QuoteRecord;
use tracing::info;

/// Parse a JSON array of `{currencyPair, bid, ask}` records.
pub fn parse_quotes(json: &str) -> Result<Vec<QuoteRecord>> {
    serde_json::from_str(json).context("Failed to parse quote records")
}

/// Read and parse a quote file.
pub fn load_quotes(path: &Path) -> Result<Vec<QuoteRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read quote file {}", path.display()))?;
    let records = parse_quotes(&contents)
        .with_context(|| format!("Invalid quote file {}", path.display()))?;

    info!(path = %path.display(), quotes = records.len(), "Loaded quotes");
    Ok(records)
}
