//! Error types for the data layer.
//!
//! This module provides:
//! - `DataError`: errors raised while loading price series or deriving
//!   return statistics

use thiserror::Error;

/// Data-layer errors.
///
/// Raised when a price series cannot be loaded or is too short to derive
/// return statistics from. Validation happens at the point of derivation and
/// is surfaced immediately; no partial results are produced.
#[derive(Debug, Error)]
pub enum DataError {
    /// Too few observations to derive the requested statistic.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations required.
        required: usize,
        /// Number of observations actually supplied.
        actual: usize,
    },

    /// Unreadable file or malformed CSV record in a price series file.
    #[error("failed to read price series: {0}")]
    Csv(#[from] csv::Error),

    /// Close price that cannot be log-transformed.
    #[error("non-positive close price {price} at row {row}")]
    InvalidPrice {
        /// Zero-based row index of the offending record.
        row: usize,
        /// The invalid price value.
        price: f64,
    },
}
