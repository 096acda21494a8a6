//! Time-value-of-money formulas.
//!
//! Discrete and continuous compounding in both directions:
//! ```text
//! FV_discrete   = x * (1 + r)^n          PV_discrete   = x * (1 + r)^-n
//! FV_continuous = x * exp(r * t)         PV_continuous = x * exp(-r * t)
//! ```
//!
//! All functions are pure and generic over `T: Float` so they compose with
//! the analytic pricers in `quant_models`. Rates are plain fractions
//! (`0.04` = 4%).

use num_traits::Float;

/// Future value of `x` after `n` periods at rate `r`, compounded once per period.
#[inline]
pub fn future_discrete_value<T: Float>(x: T, r: T, n: T) -> T {
    x * (T::one() + r).powf(n)
}

/// Future value of `x` after time `t` at rate `r`, compounded continuously.
#[inline]
pub fn future_continuous_value<T: Float>(x: T, r: T, t: T) -> T {
    x * (r * t).exp()
}

/// Present value of a cash flow `x` due in `n` periods at rate `r`,
/// discounted once per period.
#[inline]
pub fn present_discrete_value<T: Float>(x: T, r: T, n: T) -> T {
    x * (T::one() + r).powf(-n)
}

/// Present value of a cash flow `x` due at time `t` at rate `r`,
/// discounted continuously.
#[inline]
pub fn present_continuous_value<T: Float>(x: T, r: T, t: T) -> T {
    x * (-r * t).exp()
}
