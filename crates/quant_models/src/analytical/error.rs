//! Error types for analytical pricing operations.

use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised by the validating constructors of the closed-form pricers; the
/// pricing methods themselves are total once construction succeeds.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value.
        spot: f64,
    },

    /// Invalid principal (non-positive).
    #[error("invalid principal: {principal}")]
    InvalidPrincipal {
        /// The invalid principal value.
        principal: f64,
    },

    /// Invalid maturity (non-positive).
    #[error("invalid maturity: {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value.
        maturity: f64,
    },

    /// Invalid coupon rate (negative).
    #[error("invalid coupon rate: {rate}")]
    InvalidCouponRate {
        /// The invalid coupon rate value.
        rate: f64,
    },
}
