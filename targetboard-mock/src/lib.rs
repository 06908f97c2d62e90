//! Deterministic analyst price-target fixtures.
//!
//! The data here is static and hand-written so tests and demos can assert on
//! exact rankings. A few symbols are reserved for edge cases:
//!
//! - `EMPTY`: no coverage at all
//! - `JUNK`: only records without a usable price target
//! - `TSLA`: only available as a raw JSON payload with mixed-quality values
use targetboard_types::{PriceTargetRecord, TargetboardError, records_from_json};

mod fixtures;

pub use fixtures::builders::{ladder, record, values};

/// Symbols with fixture coverage, in a stable order.
pub const SYMBOLS: &[&str] = &["AAPL", "NVDA", "MSFT", "TSLA", "EMPTY", "JUNK"];

/// Static fixture catalog standing in for whatever backend the host uses.
pub struct MockFeed;

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeed {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Records for a symbol; unknown symbols have no coverage.
    ///
    /// # Errors
    /// Returns `Err(TargetboardError::Data)` if a raw JSON fixture fails to decode.
    pub fn records(&self, symbol: &str) -> Result<Vec<PriceTargetRecord>, TargetboardError> {
        if let Some(json) = fixtures::price_targets::json_by_symbol(symbol) {
            return records_from_json(json);
        }
        Ok(fixtures::price_targets::by_symbol(symbol).unwrap_or_default())
    }

    /// Raw JSON payload for symbols that ship as wire data.
    #[must_use]
    pub fn raw_json(&self, symbol: &str) -> Option<&'static str> {
        fixtures::price_targets::json_by_symbol(symbol)
    }
}
