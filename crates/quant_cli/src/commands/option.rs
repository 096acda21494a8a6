//! Option pricing command: Black-Scholes and Monte Carlo side by side.

use quant_engine::{terminal_payoff, EnsembleGenerator, Payoff, SimulationConfig};
use quant_models::analytical::BlackScholes;
use quant_models::models::gbm::{GbmModel, GbmParams};
use tracing::info;

use crate::{CliError, Result};

/// Run the option command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    sigma: f64,
    paths: usize,
    put: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let kind = if put { "put" } else { "call" };

    // Closed form
    let bs = BlackScholes::new(spot, rate, sigma)?;
    let analytic = if put {
        bs.price_put(strike, maturity)
    } else {
        bs.price_call(strike, maturity)
    };
    println!(
        "The d1 and d2 parameters: {:.6}, {:.6}",
        bs.d1(strike, maturity),
        bs.d2(strike, maturity)
    );
    println!(
        "{} option price according to Black-Scholes model: {:.4}",
        capitalise(kind),
        analytic
    );

    // Monte Carlo under the risk-neutral drift; the log-space GBM step is
    // exact, so a single step to expiry prices a terminal payoff.
    let params = GbmParams::new(spot, rate, sigma).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "invalid GBM parameters: spot = {} (must be > 0), sigma = {} (must be > 0)",
            spot, sigma
        ))
    })?;

    let mut builder = SimulationConfig::builder()
        .horizon(maturity)
        .n_steps(1)
        .n_paths(paths);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    info!(paths, kind, "running Monte Carlo option valuation");
    let generator = EnsembleGenerator::new(config)?;
    let ensemble = generator.generate::<GbmModel>(&params);

    let payoff = if put {
        Payoff::put(strike)
    } else {
        Payoff::call(strike)
    };
    let result = terminal_payoff(&ensemble, payoff, rate);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} option price with Monte-Carlo approach: {:.4} (+/- {:.4} at 95%)",
            capitalise(kind),
            result.estimate,
            result.confidence_95()
        );
    }

    Ok(())
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
