//! Closed-form bond pricing.
//!
//! Discrete-compounding present values for zero-coupon and fixed-coupon
//! bonds, with continuous-compounding variants. These are the analytic
//! counterparts of the Monte Carlo discounted-integral valuation in
//! `quant_engine`; for a flat deterministic rate the two agree.
//!
//! Rates are plain fractions (`0.04` = 4%).

use quant_core::money::{present_continuous_value, present_discrete_value};

use super::error::AnalyticalError;

/// A zero-coupon bond: a single principal repayment at maturity.
///
/// # Examples
/// ```
/// use quant_models::analytical::ZeroCouponBond;
///
/// let bond = ZeroCouponBond::new(100.0, 2.0, 0.04).unwrap();
/// // 100 / 1.04^2
/// assert!((bond.price() - 92.4556).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroCouponBond {
    /// Face value repaid at maturity.
    principal: f64,
    /// Years to maturity.
    maturity: f64,
    /// Market interest rate used for discounting.
    interest_rate: f64,
}

impl ZeroCouponBond {
    /// Creates a zero-coupon bond.
    ///
    /// # Errors
    /// - [`AnalyticalError::InvalidPrincipal`] if `principal <= 0`
    /// - [`AnalyticalError::InvalidMaturity`] if `maturity <= 0`
    pub fn new(principal: f64, maturity: f64, interest_rate: f64) -> Result<Self, AnalyticalError> {
        if principal <= 0.0 {
            return Err(AnalyticalError::InvalidPrincipal { principal });
        }
        if maturity <= 0.0 {
            return Err(AnalyticalError::InvalidMaturity { maturity });
        }

        Ok(Self {
            principal,
            maturity,
            interest_rate,
        })
    }

    /// Present value under annual discrete compounding.
    #[inline]
    pub fn price(&self) -> f64 {
        present_discrete_value(self.principal, self.interest_rate, self.maturity)
    }

    /// Present value under continuous compounding.
    #[inline]
    pub fn price_continuous(&self) -> f64 {
        present_continuous_value(self.principal, self.interest_rate, self.maturity)
    }
}

/// A fixed-coupon bond: annual coupons plus the principal at maturity.
///
/// # Examples
/// ```
/// use quant_models::analytical::CouponBond;
///
/// let bond = CouponBond::new(100.0, 0.10, 3, 0.04).unwrap();
/// assert!((bond.price() - 116.65).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CouponBond {
    /// Face value repaid at maturity.
    principal: f64,
    /// Annual coupon rate as a fraction of principal.
    coupon_rate: f64,
    /// Whole years to maturity; one coupon per year.
    maturity: u32,
    /// Market interest rate used for discounting.
    interest_rate: f64,
}

impl CouponBond {
    /// Creates a coupon bond.
    ///
    /// # Errors
    /// - [`AnalyticalError::InvalidPrincipal`] if `principal <= 0`
    /// - [`AnalyticalError::InvalidMaturity`] if `maturity == 0`
    /// - [`AnalyticalError::InvalidCouponRate`] if `coupon_rate < 0`
    pub fn new(
        principal: f64,
        coupon_rate: f64,
        maturity: u32,
        interest_rate: f64,
    ) -> Result<Self, AnalyticalError> {
        if principal <= 0.0 {
            return Err(AnalyticalError::InvalidPrincipal { principal });
        }
        if maturity == 0 {
            return Err(AnalyticalError::InvalidMaturity { maturity: 0.0 });
        }
        if coupon_rate < 0.0 {
            return Err(AnalyticalError::InvalidCouponRate { rate: coupon_rate });
        }

        Ok(Self {
            principal,
            coupon_rate,
            maturity,
            interest_rate,
        })
    }

    /// Present value under annual discrete compounding: each coupon
    /// discounted to today, plus the discounted principal.
    pub fn price(&self) -> f64 {
        let coupon = self.principal * self.coupon_rate;
        let mut price = 0.0;

        for t in 1..=self.maturity {
            price += present_discrete_value(coupon, self.interest_rate, f64::from(t));
        }

        price + present_discrete_value(self.principal, self.interest_rate, f64::from(self.maturity))
    }

    /// Present value under continuous compounding.
    pub fn price_continuous(&self) -> f64 {
        let coupon = self.principal * self.coupon_rate;
        let mut price = 0.0;

        for t in 1..=self.maturity {
            price += present_continuous_value(coupon, self.interest_rate, f64::from(t));
        }

        price
            + present_continuous_value(self.principal, self.interest_rate, f64::from(self.maturity))
    }
}
