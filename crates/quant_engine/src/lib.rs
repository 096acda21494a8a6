//! # Quant Engine
//!
//! The Monte Carlo kernel of the quantmc workspace:
//! - Seedable random number generation with independent per-path streams
//! - Simulation configuration with fail-fast validation
//! - Euler–Maruyama path simulation over any
//!   [`quant_models::models::stochastic::StochasticProcess`]
//! - Parallel ensemble generation (rayon)
//! - Reductions from a path ensemble to a valuation figure: discounted
//!   time-integral expectation, terminal payoff expectation, and
//!   linear-interpolation percentiles
//!
//! ## Reproducibility
//!
//! Given a seed, every draw is derived deterministically from
//! `(seed, path_index)`, so a full ensemble is bit-for-bit reproducible and
//! any single path can be regenerated on its own, independent of how work
//! was scheduled across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::config::SimulationConfig;
pub use mc::ensemble::EnsembleGenerator;
pub use mc::error::SimulationError;
pub use mc::path::{Path, PathEnsemble};
pub use mc::payoff::Payoff;
pub use mc::reduce::{discounted_integral, percentile, terminal_payoff, ValuationResult};
pub use mc::simulator::simulate_path;
pub use rng::EngineRng;
