//! Benchmarks for ensemble generation and reduction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quant_engine::{discounted_integral, terminal_payoff, EnsembleGenerator, Payoff, SimulationConfig};
use quant_models::models::gbm::{GbmModel, GbmParams};
use quant_models::models::vasicek::{VasicekModel, VasicekParams};

fn bench_vasicek_ensemble(c: &mut Criterion) {
    let params = VasicekParams::new(0.1, 0.3, 0.3, 0.03).unwrap();
    let config = SimulationConfig::builder()
        .horizon(1.0)
        .n_steps(200)
        .n_paths(1_000)
        .seed(42)
        .build()
        .unwrap();
    let generator = EnsembleGenerator::new(config).unwrap();

    c.bench_function("vasicek_ensemble_1000x200", |b| {
        b.iter(|| black_box(generator.generate::<VasicekModel>(black_box(&params))))
    });
}

fn bench_gbm_ensemble_and_reduce(c: &mut Criterion) {
    let params = GbmParams::new(100.0, 0.07, 0.2).unwrap();
    let config = SimulationConfig::builder()
        .horizon(1.0)
        .n_steps(252)
        .n_paths(1_000)
        .seed(42)
        .build()
        .unwrap();
    let generator = EnsembleGenerator::new(config).unwrap();

    c.bench_function("gbm_ensemble_1000x252", |b| {
        b.iter(|| black_box(generator.generate::<GbmModel>(black_box(&params))))
    });

    let ensemble = generator.generate::<GbmModel>(&params);
    c.bench_function("terminal_payoff_reduce", |b| {
        b.iter(|| black_box(terminal_payoff(black_box(&ensemble), Payoff::call(100.0), 0.07)))
    });
    c.bench_function("discounted_integral_reduce", |b| {
        b.iter(|| black_box(discounted_integral(black_box(&ensemble), 100.0)))
    });
}

criterion_group!(benches, bench_vasicek_ensemble, bench_gbm_ensemble_and_reduce);
criterion_main!(benches);
