use core::cmp::Ordering;

use crate::{DisplayMode, MAX_ENTRIES, PriceTargetRecord, RankedEntry};

/// Return the record's price target if it may take part in ranking.
///
/// Missing values and non-finite values (NaN, ±inf) are rejected. This is a
/// filter, not a validation error: rejected records are silently skipped.
#[must_use]
pub fn valid_price_target(record: &PriceTargetRecord) -> Option<f64> {
    record.valid_price_target()
}

/// Rank up to [`MAX_ENTRIES`] records by price target.
///
/// - Records without a finite price target are dropped.
/// - `High` orders descending, `Low` ascending.
/// - Equal targets keep their relative input order in both modes.
/// - Ranks are 1-based and contiguous.
///
/// The input slice is only borrowed; callers can re-run the selection with the
/// other mode and observe the original data unchanged.
#[must_use]
pub fn select(records: &[PriceTargetRecord], mode: DisplayMode) -> Vec<RankedEntry<'_>> {
    select_top(records, mode, MAX_ENTRIES)
}

/// Same as [`select`] with a caller-chosen length.
///
/// `limit` is clamped to [`MAX_ENTRIES`]; a limit of zero yields an empty list.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "targetboard::ranking",
        level = "debug",
        skip(records, mode),
        fields(mode = %mode, input = records.len()),
    )
)]
#[must_use]
pub fn select_top(
    records: &[PriceTargetRecord],
    mode: DisplayMode,
    limit: usize,
) -> Vec<RankedEntry<'_>> {
    let limit = limit.min(MAX_ENTRIES);

    let mut candidates: Vec<(f64, &PriceTargetRecord)> = records
        .iter()
        .filter_map(|r| valid_price_target(r).map(|v| (v, r)))
        .collect();

    #[cfg(feature = "tracing")]
    {
        let dropped = records.len() - candidates.len();
        if dropped > 0 {
            tracing::debug!(
                target: "targetboard::ranking",
                dropped,
                "skipping price targets without a finite value"
            );
        }
    }

    // `sort_by` is stable, which is what keeps ties in input order.
    candidates.sort_by(|a, b| compare_targets(mode, a.0, b.0));

    candidates
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (price_target, record))| RankedEntry {
            rank: i + 1,
            price_target,
            record,
        })
        .collect()
}

fn compare_targets(mode: DisplayMode, a: f64, b: f64) -> Ordering {
    // Both sides are finite here, so `partial_cmp` always answers.
    let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    match mode {
        DisplayMode::High => ord.reverse(),
        DisplayMode::Low => ord,
    }
}

/// Counts describing how much of a collection a selection shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    /// Records supplied by the caller.
    pub total: usize,
    /// Records with a finite price target.
    pub valid: usize,
    /// Entries a full selection displays: `min(valid, MAX_ENTRIES)`.
    pub shown: usize,
}

impl SelectionSummary {
    /// True when there is nothing to list.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shown == 0
    }

    /// Records dropped for lacking a finite price target.
    #[must_use]
    pub const fn invalid(&self) -> usize {
        self.total - self.valid
    }
}

/// Summarize a collection without ranking it.
#[must_use]
pub fn summarize(records: &[PriceTargetRecord]) -> SelectionSummary {
    let valid = records.iter().filter(|r| r.is_rankable()).count();
    SelectionSummary {
        total: records.len(),
        valid,
        shown: valid.min(MAX_ENTRIES),
    }
}
