use std::cell::Cell;

use targetboard::PriceTargetRecord;

pub use targetboard_mock::{MockFeed, ladder, record, values};

/// Common symbol constants used across tests.
pub const AAPL: &str = "AAPL";
pub const NVDA: &str = "NVDA";
#[allow(dead_code)]
pub const MSFT: &str = "MSFT";
#[allow(dead_code)]
pub const TSLA: &str = "TSLA";

/// Counts dismiss callback invocations.
#[derive(Default)]
pub struct DismissCounter(Cell<usize>);

impl DismissCounter {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// Load fixture records for a symbol without unwrap noise in tests.
pub fn fixture(symbol: &str) -> Vec<PriceTargetRecord> {
    MockFeed::new().records(symbol).expect("fixture decodes")
}
