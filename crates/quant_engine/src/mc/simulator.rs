//! Single-path Euler–Maruyama simulation.
//!
//! One loop serves every [`StochasticProcess`]: start from the model's
//! initial value and apply `n_steps` updates, each consuming one fresh
//! standard normal draw. Intermediate values are never clamped; a negative
//! short rate is a valid outcome.

use quant_models::models::stochastic::StochasticProcess;

use super::config::SimulationConfig;
use super::path::Path;
use crate::rng::EngineRng;

/// Fills `row` (length `n_steps + 1`) with one sample path.
///
/// Shared by the single-path API and the ensemble generator so both produce
/// identical paths for identical draw streams.
pub(crate) fn fill_path<P>(row: &mut [f64], params: &P::Params, dt: f64, rng: &mut EngineRng)
where
    P: StochasticProcess<f64>,
{
    row[0] = P::initial_value(params);
    for step in 1..row.len() {
        let z = rng.gen_normal();
        row[step] = P::evolve_step(row[step - 1], dt, z, params);
    }
}

/// Simulates one path of process `P` under `config`, drawing from `rng`.
///
/// Deterministic: for a fixed `rng` stream the output is bit-for-bit
/// reproducible. The returned [`Path`] holds `n_steps + 1` values with
/// index 0 equal to the model's initial value.
///
/// # Examples
///
/// ```rust
/// use quant_engine::{simulate_path, EngineRng, SimulationConfig};
/// use quant_models::models::vasicek::{VasicekModel, VasicekParams};
///
/// let params = VasicekParams::new(0.04, 0.9, 0.045, 0.03).unwrap();
/// let config = SimulationConfig::builder()
///     .horizon(1.0)
///     .n_steps(252)
///     .n_paths(1)
///     .build()
///     .unwrap();
///
/// let mut rng = EngineRng::from_seed(42);
/// let path = simulate_path::<VasicekModel>(&params, &config, &mut rng);
/// assert_eq!(path.len(), 253);
/// assert_eq!(path.initial(), 0.04);
/// ```
pub fn simulate_path<P>(params: &P::Params, config: &SimulationConfig, rng: &mut EngineRng) -> Path
where
    P: StochasticProcess<f64>,
{
    let dt = config.dt();
    let mut values = vec![0.0; config.n_steps() + 1];
    fill_path::<P>(&mut values, params, dt, rng);
    Path::new(values, dt)
}
