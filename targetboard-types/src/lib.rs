//! Shared targetboard data types: analyst price-target records, display modes,
//! ranked entries, overlay labels, and the workspace error type.
#![warn(missing_docs)]

mod config;
mod error;
mod mode;
mod ranked;
mod record;

pub use config::OverlayLabels;
pub use error::TargetboardError;
pub use mode::DisplayMode;
pub use ranked::{MAX_ENTRIES, RankedEntry};
pub use record::{PriceTargetRecord, records_from_json};
