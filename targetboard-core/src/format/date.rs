use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Timestamp layouts without an offset, tried after RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, including the display layout itself.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Parse a date-like string into a calendar date.
///
/// Timestamps carrying an offset keep the calendar date as written in that
/// offset; the host time zone never participates.
#[must_use]
pub fn try_parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// Format a date-like string as `Mon D, YYYY` (e.g. `Jan 5, 2024`).
///
/// Month names are always English and the day is not zero-padded. Input that
/// does not describe a real calendar date renders as [`INVALID_DATE`].
#[must_use]
pub fn format_date(raw: &str) -> String {
    match try_parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "targetboard::format", raw, "unparsable published date");
            INVALID_DATE.to_string()
        }
    }
}
