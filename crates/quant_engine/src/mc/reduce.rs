//! Reductions from a path ensemble to a valuation figure.
//!
//! Three reduction policies cover the valuation use cases:
//! - [`discounted_integral`]: bond / short-rate pricing via the stochastic
//!   discount factor `E[exp(-∫ r dt)]`
//! - [`terminal_payoff`]: option / stock pricing via a discounted terminal
//!   payoff expectation
//! - [`percentile`]: the empirical-quantile building block for
//!   value-at-risk
//!
//! Each reducer borrows the ensemble read-only and consumes it exactly once
//! per valuation.

use serde::Serialize;

use super::path::PathEnsemble;
use super::payoff::Payoff;

/// Scalar outcome of one reduction.
///
/// # Examples
///
/// ```rust
/// use quant_engine::ValuationResult;
///
/// let result = ValuationResult {
///     estimate: 92.5,
///     std_error: 0.08,
///     n_paths: 10_000,
/// };
/// println!("price: {:.2} +/- {:.2}", result.estimate, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Monte Carlo estimate (price, expectation, or risk figure).
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Number of paths the estimate was reduced from.
    pub n_paths: usize,
}

impl ValuationResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Mean and standard error of a sample.
fn mean_and_std_error(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;

    if samples.len() < 2 {
        return (mean, 0.0);
    }

    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, (variance / n).sqrt())
}

/// Discounted time-integral reduction (bond / short-rate pricing).
///
/// For each path, the rectangle-rule integral `∫ r(t) dt` is the sum of the
/// path's values times `dt`; the stochastic discount factor is
/// `exp(-integral)`. The estimate is
/// `notional * mean_over_paths(exp(-integral))`, a Monte Carlo estimate of
/// `notional * E[exp(-∫ r dt)]`.
///
/// Negative simulated rates feed through unchanged (they simply produce a
/// discount factor above one).
pub fn discounted_integral(ensemble: &PathEnsemble, notional: f64) -> ValuationResult {
    let dt = ensemble.dt();
    let discount_factors: Vec<f64> = ensemble
        .paths()
        .map(|path| (-(path.iter().sum::<f64>() * dt)).exp())
        .collect();

    let (mean, std_error) = mean_and_std_error(&discount_factors);

    ValuationResult {
        estimate: notional * mean,
        std_error: notional * std_error,
        n_paths: ensemble.n_paths(),
    }
}

/// Terminal-payoff reduction (option / stock pricing).
///
/// The estimate is `exp(-rate * T) * mean_over_paths(payoff(S_T))` where `T`
/// is the ensemble horizon. Use [`Payoff::Terminal`] with `rate = 0` for an
/// undiscounted price forecast.
pub fn terminal_payoff(ensemble: &PathEnsemble, payoff: Payoff, rate: f64) -> ValuationResult {
    let payoffs: Vec<f64> = ensemble
        .terminal_values()
        .iter()
        .map(|&terminal| payoff.value(terminal))
        .collect();

    let (mean, std_error) = mean_and_std_error(&payoffs);
    let discount = (-rate * ensemble.horizon()).exp();

    ValuationResult {
        estimate: discount * mean,
        std_error: discount * std_error,
        n_paths: ensemble.n_paths(),
    }
}

/// Linear-interpolation percentile of an ascending-sorted sample.
///
/// `pct` is in percent (`5.0` = 5th percentile). Fractional ranks are
/// resolved by linear interpolation between the neighbouring order
/// statistics, so results match the textbook (and numpy default)
/// definition used for empirical value-at-risk.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    assert!(!sorted.is_empty(), "percentile of empty sample");

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let fraction = rank - lower as f64;

    if lower + 1 >= n {
        return sorted[n - 1];
    }

    sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::config::SimulationConfig;
    use crate::mc::ensemble::EnsembleGenerator;
    use approx::assert_relative_eq;
    use quant_models::models::vasicek::{VasicekModel, VasicekParams};

    fn flat_ensemble(rate: f64, n_paths: usize, n_steps: usize, dt: f64) -> PathEnsemble {
        let n_points = n_steps + 1;
        PathEnsemble::from_raw(vec![rate; n_paths * n_points], n_paths, n_points, dt)
    }

    #[test]
    fn test_valuation_result_confidence() {
        let result = ValuationResult {
            estimate: 10.0,
            std_error: 0.1,
            n_paths: 100,
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99(), 0.2576, epsilon = 1e-12);
    }

    #[test]
    fn test_discounted_integral_flat_rate() {
        // A deterministic flat path discounts at exp(-r * sum_dt); the
        // rectangle rule sums n_steps + 1 values.
        let ensemble = flat_ensemble(0.05, 10, 100, 0.01);
        let result = discounted_integral(&ensemble, 100.0);

        let expected = 100.0 * (-0.05 * 101.0 * 0.01_f64).exp();
        assert_relative_eq!(result.estimate, expected, epsilon = 1e-10);
        assert_relative_eq!(result.std_error, 0.0, epsilon = 1e-12);
        assert_eq!(result.n_paths, 10);
    }

    #[test]
    fn test_discounted_integral_negative_rate() {
        // Negative rates are valid and give a discount factor above one
        let ensemble = flat_ensemble(-0.02, 4, 10, 0.1);
        let result = discounted_integral(&ensemble, 1.0);
        assert!(result.estimate > 1.0);
    }

    #[test]
    fn test_discounted_integral_vasicek_sanity() {
        // Tight dynamics pinned at theta = r0: price approx exp(-r*T) * notional
        let params = VasicekParams::new(0.05, 5.0, 0.05, 1e-4).unwrap();
        let config = SimulationConfig::builder()
            .horizon(1.0)
            .n_steps(500)
            .n_paths(500)
            .seed(42)
            .build()
            .unwrap();
        let ensemble = EnsembleGenerator::new(config)
            .unwrap()
            .generate::<VasicekModel>(&params);

        let result = discounted_integral(&ensemble, 1000.0);
        let expected = 1000.0 * (-0.05_f64).exp();
        assert_relative_eq!(result.estimate, expected, max_relative = 1e-3);
    }

    #[test]
    fn test_terminal_payoff_call() {
        // Terminal value 1.2 everywhere, strike 1.0, no discounting
        let mut data = Vec::new();
        for _ in 0..5 {
            data.extend_from_slice(&[1.0, 1.1, 1.2]);
        }
        let ensemble = PathEnsemble::from_raw(data, 5, 3, 0.5);

        let result = terminal_payoff(&ensemble, Payoff::call(1.0), 0.0);
        assert_relative_eq!(result.estimate, 0.2, epsilon = 1e-12);
        assert_eq!(result.n_paths, 5);
    }

    #[test]
    fn test_terminal_payoff_discounting() {
        let ensemble = flat_ensemble(100.0, 5, 10, 0.1);
        // Horizon = 1.0; raw terminal forecast discounted at 7%
        let result = terminal_payoff(&ensemble, Payoff::Terminal, 0.07);
        assert_relative_eq!(result.estimate, 100.0 * (-0.07_f64).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_terminal_payoff_put_worthless_when_itm_forward() {
        let ensemble = flat_ensemble(100.0, 5, 10, 0.1);
        let result = terminal_payoff(&ensemble, Payoff::put(90.0), 0.0);
        assert_eq!(result.estimate, 0.0);
    }

    #[test]
    fn test_percentile_midpoints() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(percentile(&sorted, 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(percentile(&sorted, 50.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(percentile(&sorted, 100.0), 5.0, epsilon = 1e-12);
        // Fractional rank: 25% of (n-1) = rank 1.0 exactly
        assert_relative_eq!(percentile(&sorted, 25.0), 2.0, epsilon = 1e-12);
        // Rank 0.4 between the first two order statistics
        assert_relative_eq!(percentile(&sorted, 10.0), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [10.0, 20.0];
        assert_relative_eq!(percentile(&sorted, 50.0), 15.0, epsilon = 1e-12);
        assert_relative_eq!(percentile(&sorted, 75.0), 17.5, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_single_element() {
        assert_eq!(percentile(&[7.0], 30.0), 7.0);
    }

    #[test]
    #[should_panic(expected = "empty sample")]
    fn test_percentile_empty_panics() {
        percentile(&[], 50.0);
    }

    #[test]
    fn test_percentile_out_of_range_clamps() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(percentile(&sorted, -5.0), 1.0);
        assert_eq!(percentile(&sorted, 150.0), 3.0);
    }
}
