//! Geometric Brownian Motion (GBM) model.
//!
//! Asset price dynamics described by:
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - mu = drift (expected growth rate)
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! The logarithm of S follows a drift-plus-noise random walk, so the exact
//! transition is available and is used instead of the raw Euler step:
//! ```text
//! S(t+dt) = S(t) * exp((mu - 0.5*sigma^2)*dt + sigma*sqrt(dt)*z)
//! ```
//! This is equivalent to accumulating scaled Wiener increments in log space
//! and exponentiating, and keeps simulated prices strictly positive.

use num_traits::Float;

use super::stochastic::StochasticProcess;

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams<T: Float> {
    /// Initial spot price (must be positive).
    pub spot: T,
    /// Drift per unit time (mu).
    pub drift: T,
    /// Volatility per sqrt unit time (sigma > 0).
    pub volatility: T,
}

impl<T: Float> GbmParams<T> {
    /// Create new GBM parameters with validation.
    ///
    /// # Arguments
    ///
    /// * `spot` - Initial spot price (must be positive)
    /// * `drift` - Drift rate (any sign)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Returns
    ///
    /// `Some(GbmParams)` if valid, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use quant_models::models::gbm::GbmParams;
    ///
    /// let params = GbmParams::new(100.0_f64, 0.07, 0.2);
    /// assert!(params.is_some());
    ///
    /// assert!(GbmParams::new(-100.0_f64, 0.07, 0.2).is_none());
    /// assert!(GbmParams::new(100.0_f64, 0.07, 0.0).is_none());
    /// ```
    pub fn new(spot: T, drift: T, volatility: T) -> Option<Self> {
        if spot <= T::zero() || volatility <= T::zero() {
            return None;
        }
        Some(Self {
            spot,
            drift,
            volatility,
        })
    }
}

/// Geometric Brownian Motion model.
///
/// Overrides [`StochasticProcess::evolve_step`] with the exact log-space
/// transition; `drift`/`diffusion` still describe the SDE terms for callers
/// that want the raw Euler decomposition.
#[derive(Clone, Debug, Default)]
pub struct GbmModel;

impl<T: Float> StochasticProcess<T> for GbmModel {
    type Params = GbmParams<T>;

    fn initial_value(params: &Self::Params) -> T {
        params.spot
    }

    fn drift(params: &Self::Params, x: T) -> T {
        params.drift * x
    }

    fn diffusion(params: &Self::Params, x: T) -> T {
        params.volatility * x
    }

    #[inline]
    fn evolve_step(x: T, dt: T, z: T, params: &Self::Params) -> T {
        // Exact solution: S(t+dt) = S(t) * exp((mu - 0.5*sigma^2)*dt + sigma*sqrt(dt)*z)
        let mu = params.drift;
        let sigma = params.volatility;

        let half = T::from(0.5).unwrap_or(T::zero());
        let log_drift = (mu - half * sigma * sigma) * dt;
        let log_diffusion = sigma * dt.sqrt() * z;

        x * (log_drift + log_diffusion).exp()
    }

    fn process_name() -> &'static str {
        "GBM"
    }
}
