//! Display formatters used by the overlay rows.
//!
//! - `date`: "Mon D, YYYY" rendering with a fixed sentinel for unparsable input
//! - `currency`: two-decimal grouped amounts with a leading symbol
/// Currency formatting.
pub mod currency;
/// Date parsing and formatting.
pub mod date;
