//! Structural and statistical properties of the simulation engine.
//!
//! - Path shape: every generated path holds `n_steps + 1` values starting
//!   at the model's initial value (property-tested over the parameter space)
//! - Determinism: identical configuration and seed give bit-identical output
//! - Independence: distinct paths of an ensemble show no increment
//!   correlation beyond sampling noise

use proptest::prelude::*;
use quant_engine::{simulate_path, EngineRng, EnsembleGenerator, SimulationConfig};
use quant_models::models::gbm::{GbmModel, GbmParams};
use quant_models::models::vasicek::{VasicekModel, VasicekParams};

proptest! {
    #[test]
    fn prop_vasicek_path_shape(
        r0 in -0.05_f64..0.15,
        kappa in 0.0_f64..2.0,
        theta in -0.05_f64..0.15,
        sigma in 0.001_f64..0.5,
        n_steps in 1_usize..500,
        seed in any::<u64>(),
    ) {
        let params = VasicekParams::new(r0, kappa, theta, sigma).unwrap();
        let config = SimulationConfig::builder()
            .horizon(1.0)
            .n_steps(n_steps)
            .n_paths(1)
            .build()
            .unwrap();

        let mut rng = EngineRng::from_seed(seed);
        let path = simulate_path::<VasicekModel>(&params, &config, &mut rng);

        prop_assert_eq!(path.len(), n_steps + 1);
        prop_assert_eq!(path.initial(), r0);
        prop_assert!(path.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn prop_gbm_path_shape_and_positivity(
        spot in 1.0_f64..500.0,
        mu in -0.2_f64..0.2,
        sigma in 0.01_f64..0.8,
        n_steps in 1_usize..300,
        seed in any::<u64>(),
    ) {
        let params = GbmParams::new(spot, mu, sigma).unwrap();
        let config = SimulationConfig::builder()
            .horizon(1.0)
            .n_steps(n_steps)
            .n_paths(1)
            .build()
            .unwrap();

        let mut rng = EngineRng::from_seed(seed);
        let path = simulate_path::<GbmModel>(&params, &config, &mut rng);

        prop_assert_eq!(path.len(), n_steps + 1);
        prop_assert_eq!(path.initial(), spot);
        prop_assert!(path.values().iter().all(|&v| v > 0.0));
    }
}

#[test]
fn test_ensembles_bit_identical_for_same_seed() {
    let params = VasicekParams::new(0.1, 0.3, 0.3, 0.03).unwrap();
    let config = SimulationConfig::builder()
        .horizon(1.0)
        .n_steps(100)
        .n_paths(200)
        .seed(987)
        .build()
        .unwrap();

    let e1 = EnsembleGenerator::new(config.clone())
        .unwrap()
        .generate::<VasicekModel>(&params);
    let e2 = EnsembleGenerator::new(config)
        .unwrap()
        .generate::<VasicekModel>(&params);

    for i in 0..e1.n_paths() {
        let (p1, p2) = (e1.path(i), e2.path(i));
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

/// Pearson correlation between two equal-length samples.
fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        cov += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

#[test]
fn test_path_increments_uncorrelated_across_ensembles() {
    // Estimate the correlation between the increment series of two paths of
    // the same ensemble, averaged over many independently seeded ensembles.
    // Independent paths drive the average towards zero.
    let params = VasicekParams::new(0.1, 0.3, 0.3, 0.05).unwrap();

    let n_ensembles = 200;
    let mut correlation_sum = 0.0;

    for seed in 0..n_ensembles {
        let config = SimulationConfig::builder()
            .horizon(1.0)
            .n_steps(100)
            .n_paths(2)
            .seed(seed)
            .build()
            .unwrap();
        let ensemble = EnsembleGenerator::new(config)
            .unwrap()
            .generate::<VasicekModel>(&params);

        let increments = |path: &[f64]| -> Vec<f64> {
            path.windows(2).map(|w| w[1] - w[0]).collect()
        };
        let a = increments(ensemble.path(0));
        let b = increments(ensemble.path(1));
        correlation_sum += correlation(&a, &b);
    }

    let mean_correlation = correlation_sum / n_ensembles as f64;
    // Per-ensemble correlation has std approx 1/sqrt(100); the mean over
    // 200 ensembles has std approx 0.007. 0.05 is a 7-sigma band.
    assert!(
        mean_correlation.abs() < 0.05,
        "mean pairwise correlation = {}",
        mean_correlation
    );
}

#[test]
fn test_terminal_values_uncorrelated_within_ensemble() {
    // Split one large ensemble's terminal values into pairs (path 2k,
    // path 2k+1); across pairs the two coordinates must be uncorrelated.
    let params = GbmParams::new(100.0, 0.05, 0.2).unwrap();
    let config = SimulationConfig::builder()
        .horizon(1.0)
        .n_steps(10)
        .n_paths(20_000)
        .seed(42)
        .build()
        .unwrap();

    let ensemble = EnsembleGenerator::new(config)
        .unwrap()
        .generate::<GbmModel>(&params);
    let terminals = ensemble.terminal_values();

    let evens: Vec<f64> = terminals.iter().step_by(2).copied().collect();
    let odds: Vec<f64> = terminals.iter().skip(1).step_by(2).copied().collect();

    let rho = correlation(&evens, &odds);
    // 10,000 pairs: sampling std approx 0.01
    assert!(rho.abs() < 0.05, "correlation = {}", rho);
}
