//! Criterion benchmarks for sampling, path generation and Monte Carlo valuation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::Date;
use pricer_models::instruments::{EquityOptionFactory, OptionType};
use pricer_models::models::GbmParams;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, StochasticEngine};
use pricer_pricing::rng::{PricerRng, Sampler, SubtractiveRng, UniformGenerator};

/// Benchmark raw uniform generation for both generators.
fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    let mut buffer = vec![0.0; 10_000];

    group.bench_function("subtractive_10k", |b| {
        let mut rng = SubtractiveRng::from_seed(1000);
        b.iter(|| rng.fill_uniform(black_box(&mut buffer)))
    });
    group.bench_function("stdrng_10k", |b| {
        let mut rng = PricerRng::from_seed(1000);
        b.iter(|| rng.fill_uniform(black_box(&mut buffer)))
    });

    group.finish();
}

/// Benchmark inverse-CDF normal sampling.
fn bench_sampler(c: &mut Criterion) {
    c.bench_function("sampler_standard_normal_10k", |b| {
        let mut sampler = Sampler::seeded(Some(1000));
        b.iter(|| sampler.standard_normal(black_box(10_000)))
    });
}

/// Benchmark geometric path generation by length.
fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometric_path");
    let gbm = GbmParams::new(0.05, 0.2).with_initial_value(100.0);

    for length in [21usize, 250, 2_500] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let mut engine = StochasticEngine::new(PricerRng::from_seed(42));
            b.iter(|| engine.geometric_brownian_path(&gbm, 1.0 / 250.0, black_box(length)))
        });
    }

    group.finish();
}

/// Benchmark a full parallel Monte Carlo valuation.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(10);

    let as_of = Date::from_ymd(2020, 5, 1).unwrap();
    let expiry = Date::from_ymd(2020, 6, 30).unwrap();
    let option = EquityOptionFactory::create(OptionType::EuropeanCall, "IDX", expiry, 100.0, "USD").unwrap();
    let gbm = GbmParams::new(0.04, 0.2).with_initial_value(100.0);

    for num_paths in [10_000usize, 100_000] {
        let config = MonteCarloConfig::builder()
            .num_paths(num_paths)
            .seed(42)
            .build()
            .unwrap();
        let pricer = MonteCarloPricer::new(config).unwrap();

        group.bench_with_input(BenchmarkId::new("european_call", num_paths), &pricer, |b, pricer| {
            b.iter(|| pricer.option_value(&option, black_box(as_of), &gbm, 0.99).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uniform, bench_sampler, bench_paths, bench_monte_carlo);
criterion_main!(benches);
