//! Criterion benchmarks for the shortest-path and TSP solvers.
//!
//! All graphs are complete, seeded, with integer weights in [1, 100].

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tourgraph::graph::{GraphGenerator, WeightedGraph};
use u_tourgraph::path::ShortestPath;
use u_tourgraph::tsp::{
    nearest_neighbor_tour, ExactTspSolver, LargeConfig, LargeTspHeuristic, MediumConfig,
    MediumTspHeuristic,
};

fn complete(n: usize) -> WeightedGraph<usize> {
    GraphGenerator::new(n)
        .with_weight_bounds(1, 100)
        .with_seed(42)
        .generate()
        .expect("valid generator")
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for &n in &[100usize, 300, 1000] {
        let g = complete(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| black_box(ShortestPath::find(black_box(g), &0, &(n - 1))))
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_exact");
    group.sample_size(10);

    for &n in &[8usize, 10, 12] {
        let g = complete(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| black_box(ExactTspSolver::solve(black_box(g), &0)))
        });
    }
    group.finish();
}

fn bench_medium(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_medium");
    group.sample_size(10);

    // A fixed kick budget keeps iterations comparable instead of timing the deadline.
    let config = MediumConfig::default()
        .with_max_kicks(200)
        .with_time_limit_ms(10_000);
    for &n in &[100usize, 300] {
        let g = complete(n);
        group.bench_with_input(
            BenchmarkId::new("kicks200", n),
            &(g, config.clone()),
            |b, (g, c)| {
                b.iter(|| black_box(MediumTspHeuristic::solve_with_config(black_box(g), &0, c)))
            },
        );
        group.bench_with_input(BenchmarkId::new("nearest_neighbor", n), &complete(n), |b, g| {
            b.iter(|| black_box(nearest_neighbor_tour(black_box(g), &0)))
        });
    }
    group.finish();
}

fn bench_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_large");
    group.sample_size(10);

    let g = complete(1000);
    for &polish_ms in &[0u64, 150] {
        let config = LargeConfig::default().with_polish_ms(polish_ms);
        group.bench_with_input(
            BenchmarkId::new("polish_ms", polish_ms),
            &config,
            |b, c| b.iter(|| black_box(LargeTspHeuristic::solve_with_config(black_box(&g), &0, c))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_shortest_path, bench_exact, bench_medium, bench_large);
criterion_main!(benches);
