//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: `C = S*N(d1) - K*exp(-rT)*N(d2)`
//! **Put Price**:  `P = K*exp(-rT)*N(-d2) - S*N(-d1)`
//!
//! Where:
//! - `d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma*sqrt(T))`
//! - `d2 = d1 - sigma*sqrt(T)`

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// A pure-value pricer: identical inputs always yield identical outputs,
/// which makes it usable as a reference against Monte Carlo estimates.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
///
/// # Examples
/// ```
/// use quant_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S).
    spot: T,
    /// Risk-free interest rate (r).
    rate: T,
    /// Volatility (sigma).
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes pricer.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - [`AnalyticalError::InvalidSpot`] if `spot <= 0`
    /// - [`AnalyticalError::InvalidVolatility`] if `volatility <= 0`
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// `d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma*sqrt(T))`
    ///
    /// Returns large positive/negative values for the `expiry -> 0` limit.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            // At expiry d1 diverges; the sign depends on moneyness
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                zero
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let growth = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + growth) / vol_sqrt_t
    }

    /// Computes the d2 term: `d2 = d1 - sigma*sqrt(T)`.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// `C = S*N(d1) - K*exp(-rT)*N(d2)`; at expiry this collapses to the
    /// intrinsic value `max(0, S - K)`.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put option price.
    ///
    /// `P = K*exp(-rT)*N(-d2) - S*N(-d1)`; at expiry this collapses to the
    /// intrinsic value `max(0, K - S)`.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let intrinsic = strike - self.spot;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }
}
