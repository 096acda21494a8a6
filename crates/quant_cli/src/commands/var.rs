//! Value-at-risk command.

use quant_engine::EngineRng;
use quant_risk::ValueAtRisk;
use tracing::info;

use crate::Result;

/// Run the var command.
pub fn run(
    position: f64,
    confidence: f64,
    mu: f64,
    sigma: f64,
    days: f64,
    iterations: usize,
    seed: Option<u64>,
) -> Result<()> {
    let var = ValueAtRisk::new(position, mu, sigma, confidence)?;
    let percent = confidence * 100.0;

    println!(
        "Value at risk at {:.0} percent confidence: {:.2}",
        percent,
        var.analytic_ndays(days)?
    );

    info!(iterations, days, "running Monte Carlo value-at-risk");
    let seed = seed.unwrap_or_else(EngineRng::random_seed);
    println!(
        "Value at risk with Monte-Carlo simulation: {:.2}",
        var.monte_carlo(days, iterations, seed)?
    );

    Ok(())
}
