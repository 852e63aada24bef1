//! Criterion benchmarks for the implied volatility solver and the Monte
//! Carlo estimator.
//!
//! Benchmarks cover:
//! - Implied volatility across moneyness (ATM, ITM, deep OTM)
//! - The Newton fallback path
//! - Monte Carlo estimation at 1K, 10K, 100K paths, with and without
//!   antithetic variates
//! - RNG batch generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{BlackScholesOracle, PricingOracle};
use pricer_models::instruments::{MarketParameters, OptionType};
use pricer_pricing::implied_vol::{ImpliedVolConfig, ImpliedVolSolver};
use pricer_pricing::mc::estimate;
use pricer_pricing::rng::PricerRng;

/// Benchmark implied volatility over strikes.
fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_vol");
    let solver = ImpliedVolSolver::with_defaults();

    for strike in [60.0, 100.0, 140.0] {
        let market = MarketParameters::new(100.0, strike, 0.03, 0.01, 0.5).unwrap();
        let price = BlackScholesOracle.price(&market, OptionType::Call, 0.25);

        group.bench_with_input(
            BenchmarkId::new("brent_call", strike as u32),
            &price,
            |b, &p| b.iter(|| solver.solve(black_box(p), &market, OptionType::Call)),
        );
    }

    // Initial bracket too narrow and no expansion: forces Newton
    let config = ImpliedVolConfig::builder()
        .sigma_hi(0.1)
        .max_expansions(0)
        .build()
        .unwrap();
    let newton = ImpliedVolSolver::new(config).unwrap();
    let market = MarketParameters::new(100.0, 100.0, 0.03, 0.0, 1.0).unwrap();
    let price = BlackScholesOracle.price(&market, OptionType::Call, 0.25);
    group.bench_function("newton_fallback", |b| {
        b.iter(|| newton.solve(black_box(price), &market, OptionType::Call))
    });

    group.finish();
}

/// Benchmark Monte Carlo estimation with varying path counts.
fn bench_mc_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_estimate");
    group.sample_size(30);

    let market = MarketParameters::new(100.0, 100.0, 0.05, 0.02, 1.0).unwrap();

    for n_paths in [1_000, 10_000, 100_000] {
        for antithetic in [false, true] {
            let id = if antithetic { "antithetic" } else { "plain" };
            group.bench_with_input(BenchmarkId::new(id, n_paths), &n_paths, |b, &n| {
                b.iter(|| {
                    estimate(
                        &market,
                        OptionType::Call,
                        black_box(0.2),
                        n,
                        antithetic,
                        Some(42),
                    )
                })
            });
        }
    }

    group.finish();
}

/// Benchmark batch normal generation.
fn bench_rng(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_implied_vol, bench_mc_estimate, bench_rng);
criterion_main!(benches);
