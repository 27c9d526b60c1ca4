//! Criterion benchmarks for pricer_core lookups.
//!
//! Measures bracketing search, curve discounting and surface lookups across
//! grid sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::{
    ContinuousCompoundingCurve, GridVolSurface, VolatilitySurface, YieldCurve,
};
use pricer_core::math::interpolators::prev_and_next_index;

fn generate_axis(n: usize) -> Vec<f64> {
    (0..n).map(|i| 0.25 + i as f64 * 0.25).collect()
}

/// Benchmark bracketing search over sorted axes.
fn bench_bracket_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("bracket_search");

    for size in [10, 100, 1000, 10000] {
        let xs = generate_axis(size);
        let mid = xs[size / 2] + 0.1;
        group.bench_with_input(BenchmarkId::new("prev_and_next_index", size), &xs, |b, xs| {
            b.iter(|| prev_and_next_index(black_box(xs), black_box(mid)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark discount factors from an interpolated curve.
fn bench_curve_discount(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_discount");

    for size in [4, 40, 400] {
        let tenors = generate_axis(size);
        let rates: Vec<f64> = tenors.iter().map(|t| 0.01 + 0.002 * t.ln_1p()).collect();
        let curve = ContinuousCompoundingCurve::linear(&tenors, &rates).unwrap();
        let t = tenors[size / 2] + 0.1;

        group.bench_with_input(BenchmarkId::new("discount_factor", size), &curve, |b, curve| {
            b.iter(|| curve.discount_factor(black_box(t)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark bilinear vol surface lookups.
fn bench_surface_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_lookup");

    for size in [4, 20, 100] {
        let tenors = generate_axis(size);
        let moneyness: Vec<f64> = (0..size).map(|j| 0.5 + j as f64 / size as f64).collect();
        let vols: Vec<Vec<f64>> = tenors
            .iter()
            .map(|&t| moneyness.iter().map(|&m| 0.2 + 0.05 * (m - 1.0).powi(2) + 0.01 * t).collect())
            .collect();
        let surface = GridVolSurface::linear(&tenors, &moneyness, vols).unwrap();

        group.bench_with_input(BenchmarkId::new("volatility", size), &surface, |b, surface| {
            b.iter(|| surface.volatility(black_box(1.1), black_box(0.95)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bracket_search,
    bench_curve_discount,
    bench_surface_lookup
);
criterion_main!(benches);
