//! # Quant Risk
//!
//! Value-at-risk measures: closed-form 1-day and n-day VaR from the inverse
//! normal CDF, and a Monte Carlo estimate from the empirical quantile of
//! simulated terminal values.

pub mod var;

pub use var::{RiskError, ValueAtRisk};
