//! Criterion benchmarks for the four N-Queens strategies.
//!
//! All stochastic runs are seeded so that iterations measure the same
//! trajectory.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_nqueens::board::count_conflicts;
use u_nqueens::dfs::{DfsConfig, DfsRunner};
use u_nqueens::ga::operators::pmx_crossover;
use u_nqueens::ga::{GaConfig, GaRunner};
use u_nqueens::hill::{HillConfig, HillRunner};
use u_nqueens::random::{create_rng, random_permutation};
use u_nqueens::sa::{SaConfig, SaRunner};

fn bench_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_conflicts");
    for n in [8, 50, 200] {
        let board = random_permutation(n, &mut create_rng(Some(42)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| count_conflicts(black_box(board)))
        });
    }
    group.finish();
}

fn bench_pmx(c: &mut Criterion) {
    let mut rng = create_rng(Some(42));
    let p1 = random_permutation(100, &mut rng);
    let p2 = random_permutation(100, &mut rng);
    c.bench_function("pmx_crossover/100", |b| {
        b.iter(|| pmx_crossover(black_box(&p1), black_box(&p2), &mut rng))
    });
}

fn bench_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs");
    for n in [8, 16, 24] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| DfsRunner::run(black_box(n), &DfsConfig::default()))
        });
    }
    group.finish();
}

fn bench_stochastic(c: &mut Criterion) {
    let mut group = c.benchmark_group("stochastic_n16");
    group.sample_size(20);

    group.bench_function("hill_climbing", |b| {
        let config = HillConfig::default().with_seed(42);
        b.iter(|| HillRunner::run(black_box(16), &config))
    });
    group.bench_function("simulated_annealing", |b| {
        let config = SaConfig::default().with_seed(42);
        b.iter(|| SaRunner::run(black_box(16), &config))
    });
    group.bench_function("genetic_algorithm", |b| {
        let config = GaConfig::default().with_seed(42);
        b.iter(|| GaRunner::run(black_box(16), &config))
    });
    group.finish();
}

criterion_group!(benches, bench_conflicts, bench_pmx, bench_dfs, bench_stochastic);
criterion_main!(benches);
