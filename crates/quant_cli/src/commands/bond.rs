//! Closed-form bond pricing command.

use quant_models::analytical::{CouponBond, ZeroCouponBond};
use tracing::info;

use crate::{CliError, Result};

/// Run the bond command.
pub fn run(principal: f64, maturity: f64, rate: f64, coupon: Option<f64>) -> Result<()> {
    match coupon {
        None => {
            info!(principal, maturity, rate, "pricing zero-coupon bond");
            let bond = ZeroCouponBond::new(principal, maturity, rate)?;
            println!("Price of the zero-coupon bond: {:.2}", bond.price());
            println!(
                "Price with continuous discounting: {:.2}",
                bond.price_continuous()
            );
        }
        Some(coupon_rate) => {
            if maturity <= 0.0 || maturity.fract() != 0.0 {
                return Err(CliError::InvalidArgument(format!(
                    "coupon bonds need a whole number of years to maturity, got {}",
                    maturity
                )));
            }

            info!(principal, maturity, rate, coupon_rate, "pricing coupon bond");
            let bond = CouponBond::new(principal, coupon_rate, maturity as u32, rate)?;
            println!("Price of the coupon bond: {:.2}", bond.price());
            println!(
                "Price with continuous discounting: {:.2}",
                bond.price_continuous()
            );
        }
    }

    Ok(())
}
