use crate::PriceTargetRecord;

/// Upper bound on the number of ranked entries ever produced.
pub const MAX_ENTRIES: usize = 10;

/// A validated record at its final position in a ranking.
///
/// Entries borrow from the caller's collection and are rebuilt on every
/// selection; they are never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a> {
    /// 1-based position in the output.
    pub rank: usize,
    /// The record's finite price target.
    pub price_target: f64,
    /// The source record.
    pub record: &'a PriceTargetRecord,
}
