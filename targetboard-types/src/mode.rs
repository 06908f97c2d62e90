//! Ranking direction.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TargetboardError;

/// Which end of the price-target distribution to surface.
///
/// The mode only selects the sort direction; it never filters records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayMode {
    /// Largest targets first.
    #[default]
    High,
    /// Smallest targets first.
    Low,
}

impl DisplayMode {
    /// Canonical wire spelling (`"HIGH"` / `"LOW"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
        }
    }

    /// The opposite direction, used by hosts that toggle between the two views.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }

    /// Whether larger values rank first.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::High)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = TargetboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "highest" => Ok(Self::High),
            "low" | "lowest" => Ok(Self::Low),
            other => Err(TargetboardError::invalid_arg(format!(
                "unknown display mode: {other:?}"
            ))),
        }
    }
}
