//! Log-return series and their statistics.
//!
//! A close-price series is consumed by the rest of the workspace only as a
//! derived log-return series `ln(price_t / price_{t-1})` together with its
//! mean and standard deviation. These feed the drift/volatility inputs of
//! the GBM model and value-at-risk; they play no part in the simulation
//! algorithm itself.

use crate::error::DataError;

/// Computes the log-return series `ln(price_t / price_{t-1})`.
///
/// The result has one fewer element than the input.
///
/// # Errors
///
/// - [`DataError::InsufficientData`] if fewer than 2 prices are supplied
/// - [`DataError::InvalidPrice`] if any price is non-positive
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, DataError> {
    if prices.len() < 2 {
        return Err(DataError::InsufficientData {
            required: 2,
            actual: prices.len(),
        });
    }
    for (row, &price) in prices.iter().enumerate() {
        if price <= 0.0 {
            return Err(DataError::InvalidPrice { row, price });
        }
    }

    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Mean and standard deviation of a return series.
///
/// The standard deviation is the population statistic (divisor `n`), matching
/// the convention used when the daily mean/volatility are plugged directly
/// into the n-day scaling rules of value-at-risk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnStatistics {
    /// Mean return per observation period.
    pub mean: f64,
    /// Population standard deviation of the returns.
    pub std_dev: f64,
}

impl ReturnStatistics {
    /// Computes statistics from a return series.
    ///
    /// # Errors
    ///
    /// [`DataError::InsufficientData`] if fewer than 2 returns are supplied.
    pub fn from_returns(returns: &[f64]) -> Result<Self, DataError> {
        if returns.len() < 2 {
            return Err(DataError::InsufficientData {
                required: 2,
                actual: returns.len(),
            });
        }

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}
