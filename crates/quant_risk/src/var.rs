//! Value-at-risk calculation.
//!
//! VaR is the loss amount not expected to be exceeded at a given confidence
//! level over a given horizon, expressed as a positive loss figure scaled by
//! the position. Inputs `mean`/`volatility` are per observation period
//! (typically daily log-return statistics); the horizon `n` is counted in
//! the same periods.
//!
//! Two estimators are provided:
//! - Closed form, assuming normally distributed returns:
//!   `VaR_n = position * (mu*n - sigma*sqrt(n) * z_(1-confidence))`
//! - Monte Carlo: simulate lognormal terminal values over the horizon, read
//!   the `(1-confidence)` percentile of the sorted values (linear
//!   interpolation) and subtract it from the position.

use quant_engine::{percentile, EngineRng};
use quant_models::analytical::distributions::inverse_norm_cdf;
use thiserror::Error;

/// Invalid-input errors for value-at-risk.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiskError {
    /// Confidence level outside the open interval (0, 1).
    #[error("invalid confidence level {confidence}: must be in (0, 1)")]
    InvalidConfidence {
        /// The invalid confidence level.
        confidence: f64,
    },

    /// Non-positive volatility.
    #[error("invalid volatility {volatility}: must be positive")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Non-positive horizon in days.
    #[error("invalid horizon {days}: must be positive")]
    InvalidHorizon {
        /// The invalid horizon value.
        days: f64,
    },

    /// Zero iterations requested for the Monte Carlo estimator.
    #[error("invalid iteration count {iterations}: must be at least 1")]
    InvalidIterations {
        /// The invalid iteration count.
        iterations: usize,
    },
}

/// Value-at-risk calculator for a single position.
///
/// Immutable once constructed; both estimators are pure given their
/// arguments (the Monte Carlo one is seeded explicitly).
///
/// # Examples
///
/// ```
/// use quant_risk::ValueAtRisk;
///
/// // 1,000,000 at stake, 95% confidence, zero mean, 2% daily volatility
/// let var = ValueAtRisk::new(1_000_000.0, 0.0, 0.02, 0.95).unwrap();
///
/// // 5-day closed-form VaR is about 73,563
/// let loss = var.analytic_ndays(5.0).unwrap();
/// assert!((loss - 73_563.0).abs() < 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueAtRisk {
    /// Position value at stake.
    position: f64,
    /// Mean return per period (mu).
    mean: f64,
    /// Return volatility per period (sigma).
    volatility: f64,
    /// Confidence level, e.g. 0.95.
    confidence: f64,
}

impl ValueAtRisk {
    /// Creates a VaR calculator.
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidConfidence`] unless `0 < confidence < 1`
    /// - [`RiskError::InvalidVolatility`] unless `volatility > 0`
    pub fn new(position: f64, mean: f64, volatility: f64, confidence: f64) -> Result<Self, RiskError> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(RiskError::InvalidConfidence { confidence });
        }
        if volatility <= 0.0 {
            return Err(RiskError::InvalidVolatility { volatility });
        }

        Ok(Self {
            position,
            mean,
            volatility,
            confidence,
        })
    }

    /// Returns the position value.
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the confidence level.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Closed-form VaR for the next period (`n = 1`):
    /// `position * (mu - sigma * z_(1-confidence))`.
    ///
    /// `z_(1-confidence)` is negative for confidence above 50%, so the
    /// result is a positive loss amount.
    pub fn analytic_1day(&self) -> f64 {
        let z = inverse_norm_cdf(1.0 - self.confidence);
        self.position * (self.mean - self.volatility * z)
    }

    /// Closed-form VaR over `days` periods:
    /// `position * (mu*n - sigma*sqrt(n) * z_(1-confidence))`.
    ///
    /// # Errors
    ///
    /// [`RiskError::InvalidHorizon`] unless `days > 0`.
    pub fn analytic_ndays(&self, days: f64) -> Result<f64, RiskError> {
        if days <= 0.0 {
            return Err(RiskError::InvalidHorizon { days });
        }

        let z = inverse_norm_cdf(1.0 - self.confidence);
        Ok(self.position * (self.mean * days - self.volatility * days.sqrt() * z))
    }

    /// Monte Carlo VaR over `days` periods.
    ///
    /// Simulates `iterations` lognormal terminal values
    /// `position * exp(n*(mu - sigma^2/2) + sigma*sqrt(n)*z)`, sorts them,
    /// reads the `(1-confidence)*100` percentile with linear interpolation
    /// and returns `position - percentile`.
    ///
    /// The percentile is taken over the simulated value distribution and
    /// subtracted from the position, mirroring the established convention
    /// for this estimator.
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidHorizon`] unless `days > 0`
    /// - [`RiskError::InvalidIterations`] unless `iterations >= 1`
    pub fn monte_carlo(&self, days: f64, iterations: usize, seed: u64) -> Result<f64, RiskError> {
        if days <= 0.0 {
            return Err(RiskError::InvalidHorizon { days });
        }
        if iterations == 0 {
            return Err(RiskError::InvalidIterations { iterations });
        }

        let log_drift = days * (self.mean - 0.5 * self.volatility * self.volatility);
        let log_vol = self.volatility * days.sqrt();

        let mut rng = EngineRng::from_seed(seed);
        let mut terminal_values: Vec<f64> = (0..iterations)
            .map(|_| {
                let z = rng.gen_normal();
                self.position * (log_drift + log_vol * z).exp()
            })
            .collect();

        terminal_values.sort_by(f64::total_cmp);
        let cutoff = percentile(&terminal_values, (1.0 - self.confidence) * 100.0);

        Ok(self.position - cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn standard_var() -> ValueAtRisk {
        ValueAtRisk::new(1_000_000.0, 0.0, 0.02, 0.95).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let var = standard_var();
        assert_eq!(var.position(), 1_000_000.0);
        assert_eq!(var.confidence(), 0.95);
    }

    #[test]
    fn test_new_invalid_confidence() {
        for confidence in [0.0, 1.0, -0.5, 1.5] {
            assert!(matches!(
                ValueAtRisk::new(1e6, 0.0, 0.02, confidence),
                Err(RiskError::InvalidConfidence { .. })
            ));
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        assert!(matches!(
            ValueAtRisk::new(1e6, 0.0, 0.0, 0.95),
            Err(RiskError::InvalidVolatility { .. })
        ));
        assert!(ValueAtRisk::new(1e6, 0.0, -0.02, 0.95).is_err());
    }

    #[test]
    fn test_analytic_1day_reference() {
        // 1e6 * (0 - 0.02 * (-1.6449)) approx 32,897
        let loss = standard_var().analytic_1day();
        assert_relative_eq!(loss, 1_000_000.0 * 0.02 * 1.6448536269514722, epsilon = 1.0);
    }

    #[test]
    fn test_analytic_ndays_reference() {
        // 1e6 * (0 - 0.02*sqrt(5)*(-1.6449)) approx 73,563
        let loss = standard_var().analytic_ndays(5.0).unwrap();
        assert_relative_eq!(loss, 73_563.0, epsilon = 5.0);
    }

    #[test]
    fn test_analytic_ndays_one_day_consistency() {
        let var = standard_var();
        assert_relative_eq!(
            var.analytic_ndays(1.0).unwrap(),
            var.analytic_1day(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_analytic_scales_with_sqrt_horizon() {
        // With zero mean the loss grows like sqrt(n)
        let var = standard_var();
        let var_1 = var.analytic_ndays(1.0).unwrap();
        let var_4 = var.analytic_ndays(4.0).unwrap();
        assert_relative_eq!(var_4, 2.0 * var_1, epsilon = 1e-6);
    }

    #[test]
    fn test_analytic_invalid_horizon() {
        assert!(standard_var().analytic_ndays(0.0).is_err());
        assert!(standard_var().analytic_ndays(-5.0).is_err());
    }

    #[test]
    fn test_higher_confidence_means_higher_var() {
        let var95 = ValueAtRisk::new(1e6, 0.0, 0.02, 0.95).unwrap();
        let var99 = ValueAtRisk::new(1e6, 0.0, 0.02, 0.99).unwrap();
        assert!(var99.analytic_1day() > var95.analytic_1day());
    }

    #[test]
    fn test_monte_carlo_close_to_analytic() {
        // The lognormal simulation and the normal closed form agree to a few
        // percent at these parameter scales.
        let var = standard_var();
        let analytic = var.analytic_ndays(5.0).unwrap();
        let mc = var.monte_carlo(5.0, 200_000, 42).unwrap();

        assert_relative_eq!(mc, analytic, max_relative = 0.05);
    }

    #[test]
    fn test_monte_carlo_reproducible() {
        let var = standard_var();
        let a = var.monte_carlo(5.0, 10_000, 42).unwrap();
        let b = var.monte_carlo(5.0, 10_000, 42).unwrap();
        assert_eq!(a, b);

        let c = var.monte_carlo(5.0, 10_000, 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_monte_carlo_invalid_inputs() {
        let var = standard_var();
        assert!(matches!(
            var.monte_carlo(0.0, 1000, 42),
            Err(RiskError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            var.monte_carlo(5.0, 0, 42),
            Err(RiskError::InvalidIterations { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = RiskError::InvalidConfidence { confidence: 1.2 };
        assert!(err.to_string().contains("1.2"));
    }
}
