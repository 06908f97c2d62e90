//! Display configuration for the price-target overlay.

use serde::{Deserialize, Serialize};

/// Fixed user-facing strings used when rendering the overlay.
///
/// Defaults match the stock English presentation. Hosts that localize or
/// restyle the overlay override individual fields and keep the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayLabels {
    /// Appended to the caller-supplied title in the header.
    pub title_suffix: String,
    /// Accessible label of the dismiss control.
    pub dismiss_label: String,
    /// Shown in place of the list when nothing survives ranking.
    pub empty_message: String,
    /// Shown when a record has no (or a blank) analyst firm.
    pub unknown_firm: String,
    /// Prefix for formatted price targets.
    pub currency_symbol: String,
}

impl Default for OverlayLabels {
    fn default() -> Self {
        Self {
            title_suffix: "Price Targets".to_string(),
            dismiss_label: "Close".to_string(),
            empty_message: "No price target data available.".to_string(),
            unknown_firm: "Unknown firm".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl OverlayLabels {
    /// Header text for a caller-supplied title.
    ///
    /// A blank title yields the suffix alone.
    #[must_use]
    pub fn heading(&self, title: &str) -> String {
        let title = title.trim();
        if title.is_empty() {
            self.title_suffix.clone()
        } else {
            format!("{title} {}", self.title_suffix)
        }
    }
}
