//! targetboard-core
//!
//! Pure building blocks for the analyst price-target overlay.
//!
//! - `ranking`: validate, order, truncate, and rank price-target records.
//! - `format`: locale-independent date and currency rendering.
//!
//! Nothing in this crate performs I/O or keeps state between calls; every
//! function is a deterministic function of its arguments.
#![warn(missing_docs)]

/// Locale-independent display formatting for dates and money.
pub mod format;
/// The selection pipeline that turns raw records into ranked entries.
pub mod ranking;
pub mod types;

pub use format::currency::format_currency;
pub use format::date::{INVALID_DATE, format_date, try_parse_date};
pub use ranking::{SelectionSummary, select, select_top, summarize, valid_price_target};
pub use types::*;
