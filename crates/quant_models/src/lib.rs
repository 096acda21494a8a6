//! # Quant Models
//!
//! Stochastic process models and closed-form pricers.
//!
//! This crate provides:
//! - The [`models::stochastic::StochasticProcess`] trait: one drift/diffusion
//!   abstraction feeding a single Euler–Maruyama simulation loop
//! - Mean-reverting short-rate dynamics ([`models::vasicek`]) and lognormal
//!   equity dynamics ([`models::gbm`])
//! - Analytic reference pricers ([`analytical`]): normal distribution
//!   functions, Black–Scholes, discrete/continuous bond pricing
//!
//! ## Design Principles
//!
//! - **Immutable parameter structs** passed explicitly into each call; no
//!   state is shared between simulation runs
//! - **Static dispatch** over process types via generics
//! - **Pure analytic functions** usable as sanity checks against Monte Carlo
//!   estimates

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
