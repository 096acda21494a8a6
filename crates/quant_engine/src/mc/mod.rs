//! Monte Carlo simulation and valuation.
//!
//! Pipeline: a [`config::SimulationConfig`] plus model parameters feed
//! [`simulator::simulate_path`] (one path) or
//! [`ensemble::EnsembleGenerator`] (a parallel ensemble); the resulting
//! [`path::PathEnsemble`] is consumed once by one of the reducers in
//! [`reduce`] to yield a scalar [`reduce::ValuationResult`].

pub mod config;
pub mod ensemble;
pub mod error;
pub mod path;
pub mod payoff;
pub mod reduce;
pub mod simulator;
