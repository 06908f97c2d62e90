//! Re-export of foundational types from `targetboard-types`.
// Consolidated re-exports so downstream crates can depend on `targetboard-core` only

pub use targetboard_types::{
    DisplayMode, MAX_ENTRIES, OverlayLabels, PriceTargetRecord, RankedEntry, TargetboardError,
    records_from_json,
};
