use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the targetboard workspace.
///
/// The ranking and rendering paths never fail; this type only covers the
/// surrounding API surface (argument parsing, payload decoding, props builders).
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TargetboardError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with supplied data (payload shape, wrong JSON type, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// A required builder field was never set.
    #[error("missing field: {field}")]
    MissingField {
        /// Name of the builder field, e.g. "on_dismiss".
        field: String,
    },
}

impl TargetboardError {
    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build a `MissingField` error for a builder field name.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// A missing builder field is a programming error on the host side and is
    /// not something an end user can correct.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::MissingField { .. })
    }
}

impl From<serde_json::Error> for TargetboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
