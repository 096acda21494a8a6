//! quantmc - Command Line Operations for Monte Carlo Valuation
//!
//! Operational entry point for the quantmc workspace.
//!
//! # Commands
//!
//! - `quantmc bond` - Closed-form zero-coupon / coupon bond price
//! - `quantmc bond-mc` - Monte Carlo bond price from Vasicek short-rate paths
//! - `quantmc option` - Black-Scholes and Monte Carlo option prices
//! - `quantmc var` - Analytic and Monte Carlo value-at-risk
//! - `quantmc returns` - Log-return statistics from a close-price CSV

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// quantmc Monte Carlo valuation CLI
#[derive(Parser)]
#[command(name = "quantmc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a bond with closed-form discrete compounding
    Bond {
        /// Face value repaid at maturity
        #[arg(short, long)]
        principal: f64,

        /// Years to maturity
        #[arg(short, long)]
        maturity: f64,

        /// Market interest rate as a fraction (0.04 = 4%)
        #[arg(short, long)]
        rate: f64,

        /// Annual coupon rate as a fraction; omit for a zero-coupon bond
        #[arg(short, long)]
        coupon: Option<f64>,
    },

    /// Price a zero-coupon bond by Monte Carlo simulation of Vasicek short-rate paths
    BondMc {
        /// Notional to discount
        #[arg(short = 'x', long, default_value = "1000.0")]
        notional: f64,

        /// Initial short rate r(0)
        #[arg(long, default_value = "0.1")]
        r0: f64,

        /// Mean reversion speed (kappa)
        #[arg(short, long, default_value = "0.3")]
        kappa: f64,

        /// Long-run mean level (theta)
        #[arg(short, long, default_value = "0.3")]
        theta: f64,

        /// Short-rate volatility (sigma)
        #[arg(short, long, default_value = "0.03")]
        sigma: f64,

        /// Years to maturity
        #[arg(short, long, default_value = "1.0")]
        maturity: f64,

        /// Number of Monte Carlo paths
        #[arg(short, long, default_value = "1000")]
        paths: usize,

        /// Time steps per path
        #[arg(long, default_value = "200")]
        steps: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the valuation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price a European option: Black-Scholes and Monte Carlo side by side
    Option {
        /// Spot price of the underlying
        #[arg(long, default_value = "100.0")]
        spot: f64,

        /// Strike price
        #[arg(short = 'e', long, default_value = "100.0")]
        strike: f64,

        /// Years to expiry
        #[arg(short, long, default_value = "1.0")]
        maturity: f64,

        /// Risk-free rate
        #[arg(short, long, default_value = "0.07")]
        rate: f64,

        /// Volatility of the underlying
        #[arg(short, long, default_value = "0.2")]
        sigma: f64,

        /// Number of Monte Carlo paths
        #[arg(short, long, default_value = "1000000")]
        paths: usize,

        /// Price a put instead of a call
        #[arg(long)]
        put: bool,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the valuation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Value-at-risk for a position: analytic and Monte Carlo
    Var {
        /// Position value at stake
        #[arg(long, default_value = "1000000.0")]
        position: f64,

        /// Confidence level, e.g. 0.95
        #[arg(short, long, default_value = "0.95")]
        confidence: f64,

        /// Mean daily return
        #[arg(long, default_value = "0.0")]
        mu: f64,

        /// Daily return volatility
        #[arg(short, long, default_value = "0.02")]
        sigma: f64,

        /// Horizon in days
        #[arg(short = 'n', long, default_value = "5.0")]
        days: f64,

        /// Number of Monte Carlo iterations
        #[arg(short, long, default_value = "100000")]
        iterations: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Log-return statistics from a close-price CSV (date,close)
    Returns {
        /// Path to the CSV file
        #[arg(short, long)]
        file: String,

        /// Symbol label for the output
        #[arg(short, long, default_value = "UNKNOWN")]
        symbol: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Bond {
            principal,
            maturity,
            rate,
            coupon,
        } => commands::bond::run(principal, maturity, rate, coupon),
        Commands::BondMc {
            notional,
            r0,
            kappa,
            theta,
            sigma,
            maturity,
            paths,
            steps,
            seed,
            json,
        } => commands::bond_mc::run(notional, r0, kappa, theta, sigma, maturity, paths, steps, seed, json),
        Commands::Option {
            spot,
            strike,
            maturity,
            rate,
            sigma,
            paths,
            put,
            seed,
            json,
        } => commands::option::run(spot, strike, maturity, rate, sigma, paths, put, seed, json),
        Commands::Var {
            position,
            confidence,
            mu,
            sigma,
            days,
            iterations,
            seed,
        } => commands::var::run(position, confidence, mu, sigma, days, iterations, seed),
        Commands::Returns { file, symbol } => commands::returns::run(&file, &symbol),
    }
}
