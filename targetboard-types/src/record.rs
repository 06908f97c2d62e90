//! Analyst price-target records as supplied by the host application.

use core::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::TargetboardError;

/// A single analyst price target for an instrument.
///
/// Records are owned by the caller and only ever borrowed by the ranking and
/// rendering code. Nothing here is validated on construction: a record whose
/// `price_target` is missing or not finite is still a legal value, it is simply
/// skipped when ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PriceTargetRecord {
    /// List identity key. Carries no business meaning.
    #[serde(default)]
    pub id: String,
    /// Institution issuing the target. May be missing or blank.
    #[serde(default)]
    pub analyst_firm: Option<String>,
    /// Projected price. `None` when absent or non-numeric on the wire.
    #[serde(default, deserialize_with = "lenient_price_target")]
    pub price_target: Option<f64>,
    /// Date-like string describing when the target was published.
    #[serde(default)]
    pub published_date: String,
}

impl PriceTargetRecord {
    /// Create a record without an analyst firm.
    pub fn new(
        id: impl Into<String>,
        price_target: Option<f64>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            analyst_firm: None,
            price_target,
            published_date: published_date.into(),
        }
    }

    /// Attach the issuing firm.
    #[must_use]
    pub fn with_analyst_firm(mut self, firm: impl Into<String>) -> Self {
        self.analyst_firm = Some(firm.into());
        self
    }

    /// The price target if it is present and finite.
    ///
    /// This is the single validity rule used by ranking: NaN and infinities are
    /// treated the same as a missing value.
    #[must_use]
    pub fn valid_price_target(&self) -> Option<f64> {
        self.price_target.filter(|v| v.is_finite())
    }

    /// Whether the record takes part in ranking.
    #[must_use]
    pub fn is_rankable(&self) -> bool {
        self.valid_price_target().is_some()
    }

    /// The analyst firm with surrounding whitespace removed, if non-empty.
    #[must_use]
    pub fn firm(&self) -> Option<&str> {
        self.analyst_firm
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Decode an already-loaded JSON array of price-target records.
///
/// Individual `priceTarget` values never cause a failure (see
/// [`PriceTargetRecord::price_target`]); only a payload that is not an array of
/// objects is rejected.
///
/// # Errors
/// Returns `Err(TargetboardError::Data)` if `json` is not a JSON array of
/// record objects.
pub fn records_from_json(json: &str) -> Result<Vec<PriceTargetRecord>, TargetboardError> {
    let records: Vec<PriceTargetRecord> = serde_json::from_str(json)?;
    Ok(records)
}

fn lenient_price_target<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientNumber)
}

/// Accepts any value; only numbers survive.
struct LenientNumber;

impl<'de> Visitor<'de> for LenientNumber {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or any placeholder value")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    // "12.5" is text, not a number.
    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(Self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}
