//! Criterion benchmarks for the knapsack solvers.
//!
//! Uses deterministic synthetic instances so runs are comparable across
//! machines and revisions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_metaheur::bco::{BcoConfig, BcoRunner};
use knapsack_metaheur::ga::{GaConfig, GaRunner};
use knapsack_metaheur::sa::{SaConfig, SaRunner};
use knapsack_metaheur::KnapsackInstance;

/// Deterministic instance with capacity at 40% of the total weight.
fn synthetic_instance(n: usize) -> KnapsackInstance {
    let weights: Vec<f64> = (0..n).map(|i| (5 + (i * 7) % 36) as f64).collect();
    let values: Vec<f64> = (0..n).map(|i| (10 + (i * 13) % 91) as f64).collect();
    let capacity = 0.4 * weights.iter().sum::<f64>();
    KnapsackInstance::new(&weights, &values, capacity).expect("synthetic instance is valid")
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    for &n in &[16usize, 64, 256] {
        let instance = synthetic_instance(n);
        let config = SaConfig::default().with_iteration_limit(2000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| SaRunner::run(black_box(&instance), &config));
        });
    }
    group.finish();
}

fn bench_bco(c: &mut Criterion) {
    let mut group = c.benchmark_group("bco");
    for &n in &[16usize, 64, 256] {
        let instance = synthetic_instance(n);
        let config = BcoConfig::default()
            .with_num_bees(30)
            .with_num_iterations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| BcoRunner::run(black_box(&instance), &config));
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    for &n in &[16usize, 64, 256] {
        let instance = synthetic_instance(n);
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| GaRunner::run(black_box(&instance), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sa, bench_bco, bench_ga);
criterion_main!(benches);
