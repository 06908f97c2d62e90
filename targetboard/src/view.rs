//! Rendered overlay tree.
//!
//! The view is plain owned data: hosts map it onto whatever widget toolkit they
//! use, and the [`fmt::Display`] impl gives a text rendering for terminals.

use std::fmt;

use targetboard_core::{DisplayMode, OverlayLabels, RankedEntry, format_currency, format_date};

/// A visible overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    /// Title bar with the dismiss control.
    pub header: Header,
    /// Ranked list or empty-state message.
    pub body: Body,
    /// "Showing N of M" line; absent when the body is empty.
    pub footer: Option<String>,
    /// Direction the body is ranked in.
    pub mode: DisplayMode,
}

/// Overlay title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Caller title plus the fixed suffix.
    pub title: String,
    /// Label of the dismiss control.
    pub dismiss_label: String,
}

/// Scrollable overlay content.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Nothing survived ranking.
    Empty {
        /// Message shown instead of the list.
        message: String,
    },
    /// Ranked rows in display order.
    List(Vec<EntryRow>),
}

impl Body {
    /// Rows in display order; empty for [`Body::Empty`].
    #[must_use]
    pub fn rows(&self) -> &[EntryRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::List(rows) => rows,
        }
    }

    /// True when the empty-state message is shown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// One ranked price target, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    /// Record id, for list identity.
    pub key: String,
    /// 1-based rank.
    pub rank: usize,
    /// Analyst firm, or the unknown-firm label.
    pub firm: String,
    /// Formatted price target, e.g. `$1,234.50`.
    pub value: String,
    /// Formatted publish date or the invalid-date sentinel.
    pub date: String,
    /// Raw finite price target behind `value`.
    pub price_target: f64,
}

impl EntryRow {
    /// Build a display row from a ranked entry.
    #[must_use]
    pub fn from_entry(entry: &RankedEntry<'_>, labels: &OverlayLabels) -> Self {
        let record = entry.record;
        Self {
            key: record.id.clone(),
            rank: entry.rank,
            firm: record
                .firm()
                .map_or_else(|| labels.unknown_firm.clone(), str::to_string),
            value: format_currency(entry.price_target, &labels.currency_symbol),
            date: format_date(&record.published_date),
            price_target: entry.price_target,
        }
    }
}

impl fmt::Display for OverlayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.header.title, self.header.dismiss_label)?;
        match &self.body {
            Body::Empty { message } => writeln!(f, "  {message}")?,
            Body::List(rows) => {
                let firm_w = rows.iter().map(|r| r.firm.chars().count()).max().unwrap_or(0);
                let value_w = rows.iter().map(|r| r.value.chars().count()).max().unwrap_or(0);
                let rank_w = rows.last().map_or(1, |r| r.rank.to_string().len());
                for r in rows {
                    writeln!(
                        f,
                        "  {rank:>rank_w$}. {firm:<firm_w$}  {value:>value_w$}  {date}",
                        rank = r.rank,
                        firm = r.firm,
                        value = r.value,
                        date = r.date,
                    )?;
                }
            }
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "  {footer}")?;
        }
        Ok(())
    }
}
