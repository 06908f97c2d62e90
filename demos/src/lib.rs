//! Shared helpers for the runnable targetboard demos.
pub mod common;
