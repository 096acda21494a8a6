//! Vasicek / Ornstein-Uhlenbeck mean-reverting model.
//!
//! Short-rate dynamics described by:
//! ```text
//! dr(t) = kappa * (theta - r(t)) * dt + sigma * dW(t)
//! ```
//! where:
//! - r(t) = short rate at time t
//! - kappa = mean reversion speed (non-negative)
//! - theta = long-run mean level
//! - sigma = volatility (must be positive)
//! - dW(t) = Wiener process increment
//!
//! ## Key Properties
//!
//! - **Mean reversion**: the rate is pulled towards `theta` at speed `kappa`
//! - **Negative rates**: nothing forces positivity of the simulated value;
//!   negative short rates are a valid outcome, mirroring real markets
//! - With `kappa = 0` the dynamics degenerate to arithmetic Brownian motion,
//!   the plain Ornstein-Uhlenbeck limiting case

use num_traits::Float;

use super::stochastic::StochasticProcess;

/// Vasicek model parameters.
///
/// # Type Parameters
///
/// * `T` - Floating-point type
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VasicekParams<T: Float> {
    /// Initial short rate r(0). May be negative.
    pub initial_rate: T,
    /// Mean reversion speed (kappa >= 0).
    pub mean_reversion: T,
    /// Long-run mean level (theta).
    pub long_term_mean: T,
    /// Volatility of the short rate (sigma > 0).
    pub volatility: T,
}

impl<T: Float> VasicekParams<T> {
    /// Create new Vasicek parameters with validation.
    ///
    /// # Arguments
    ///
    /// * `initial_rate` - Initial short rate (any sign)
    /// * `mean_reversion` - Reversion speed (must be non-negative)
    /// * `long_term_mean` - Long-run mean level
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Returns
    ///
    /// `Some(VasicekParams)` if valid, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use quant_models::models::vasicek::VasicekParams;
    ///
    /// let params = VasicekParams::new(0.04_f64, 0.9, 0.045, 0.03);
    /// assert!(params.is_some());
    ///
    /// // Invalid: non-positive volatility
    /// let invalid = VasicekParams::new(0.04_f64, 0.9, 0.045, 0.0);
    /// assert!(invalid.is_none());
    /// ```
    pub fn new(initial_rate: T, mean_reversion: T, long_term_mean: T, volatility: T) -> Option<Self> {
        if mean_reversion < T::zero() || volatility <= T::zero() {
            return None;
        }

        Some(Self {
            initial_rate,
            mean_reversion,
            long_term_mean,
            volatility,
        })
    }
}

/// Vasicek mean-reverting short-rate model.
///
/// Uses the default Euler-Maruyama step:
/// ```text
/// r(t+dt) = r(t) + kappa * (theta - r(t)) * dt + sigma * sqrt(dt) * z
/// ```
#[derive(Clone, Debug, Default)]
pub struct VasicekModel;

impl<T: Float> StochasticProcess<T> for VasicekModel {
    type Params = VasicekParams<T>;

    fn initial_value(params: &Self::Params) -> T {
        params.initial_rate
    }

    fn drift(params: &Self::Params, x: T) -> T {
        params.mean_reversion * (params.long_term_mean - x)
    }

    fn diffusion(params: &Self::Params, _x: T) -> T {
        params.volatility
    }

    fn process_name() -> &'static str {
        "Vasicek"
    }
}
