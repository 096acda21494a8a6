//! Stochastic process models.
//!
//! All models implement [`stochastic::StochasticProcess`], so the Monte Carlo
//! engine runs the same time-stepping loop regardless of the dynamics being
//! simulated.

pub mod gbm;
pub mod stochastic;
pub mod vasicek;

pub use gbm::{GbmModel, GbmParams};
pub use stochastic::StochasticProcess;
pub use vasicek::{VasicekModel, VasicekParams};
