//! Benchmark setup error types.
//!
//! Aggregates the failures that may arise while preparing or measuring a
//! benchmark run so callers can propagate them with `?`.

use spanwood_core::MstError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup or measurement.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}

/// Error raised when a `NODESxEDGES` size string cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid graph size `{raw}`; expected NODESxEDGES, e.g. 100x500")]
pub struct ParseSizeError {
    /// The rejected input.
    pub raw: String,
}
