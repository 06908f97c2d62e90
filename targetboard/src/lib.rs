//! Stateless overlay listing the highest or lowest analyst price targets for
//! an instrument.
//!
//! Overview
//! - The caller owns everything: visibility, the record collection, the title,
//!   the ranking direction, and the dismiss callback. They arrive as
//!   [`OverlayProps`] on every render.
//! - [`render`] runs the `targetboard_core` selection pipeline (validate, sort,
//!   keep the top 10, rank) and formats each row's firm, value, and date.
//! - Hidden props render nothing; an empty ranking renders the empty-state
//!   message instead of a list.
//! - Clicks go through [`dispatch_click`]: the backdrop and dismiss button ask
//!   the caller to close, the content panel absorbs clicks.
//!
//! Example
//! ```rust
//! use std::cell::Cell;
//! use targetboard::{DisplayMode, OverlayProps, PriceTargetRecord, Region};
//!
//! let records = vec![
//!     PriceTargetRecord::new("1", Some(210.0), "2024-01-05").with_analyst_firm("Citi"),
//!     PriceTargetRecord::new("2", Some(180.0), "2024-01-08").with_analyst_firm("UBS"),
//! ];
//! let closed = Cell::new(0);
//! let close = || closed.set(closed.get() + 1);
//!
//! let props = OverlayProps::builder()
//!     .open(true)
//!     .title("AAPL")
//!     .records(&records)
//!     .mode(DisplayMode::Low)
//!     .on_dismiss(&close)
//!     .build()?;
//!
//! let view = props.render().expect("overlay is open");
//! assert_eq!(view.header.title, "AAPL Price Targets");
//! assert_eq!(view.body.rows()[0].firm, "UBS");
//!
//! props.click(Region::Panel);
//! assert_eq!(closed.get(), 0);
//! props.click(Region::Backdrop);
//! assert_eq!(closed.get(), 1);
//! # Ok::<(), targetboard::TargetboardError>(())
//! ```
#![warn(missing_docs)]

/// Click routing between backdrop, panel, and dismiss control.
pub mod interaction;
mod props;
mod render;
/// Owned view tree produced by a render.
pub mod view;

pub use interaction::{DismissOutcome, Handler, Propagation, Region, dispatch_click};
pub use props::{OverlayProps, OverlayPropsBuilder};
pub use render::render;
pub use view::{Body, EntryRow, Header, OverlayView};

// Re-export core types for convenience
pub use targetboard_core::{
    DisplayMode, INVALID_DATE, MAX_ENTRIES, OverlayLabels, PriceTargetRecord, RankedEntry,
    SelectionSummary, TargetboardError, format_currency, format_date, records_from_json, select,
    summarize,
};
