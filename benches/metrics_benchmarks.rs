use campaign_network::graph::{Edge, Graph, Vertex};
use campaign_network::{algo, analyze, Deadline, MetricsConfig, PathWeighting};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random donation network with `size` candidates and ~4 donations each
fn donation_network(size: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let vertices = (0..size as u64).map(Vertex::new);
    let edges: Vec<Edge> = (0..size * 4)
        .map(|_| {
            let donor = rng.gen_range(0..size) as u64;
            let recipient = rng.gen_range(0..size) as u64;
            Edge::new(donor, recipient, rng.gen_range(1.0..10_000.0))
        })
        .collect();
    Graph::build(vertices, edges).unwrap()
}

fn seeded_config(max_landmarks: usize) -> MetricsConfig {
    let mut config = MetricsConfig::default();
    config.landmarks.seed = Some(7);
    config.landmarks.max_landmarks = max_landmarks;
    config
}

/// Benchmark graph construction from vertex and edge tables
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(donation_network(size)));
        });
    }
    group.finish();
}

/// Benchmark degree assortativity
fn bench_assortativity(c: &mut Criterion) {
    let mut group = c.benchmark_group("assortativity");

    for size in [1_000, 10_000, 100_000].iter() {
        let graph = donation_network(*size);
        let config = MetricsConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(algo::assortativity(&graph, &config)));
        });
    }
    group.finish();
}

/// Benchmark average clustering coefficient
fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");

    for size in [1_000, 10_000, 100_000].iter() {
        let graph = donation_network(*size);
        let config = MetricsConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                criterion::black_box(algo::average_clustering_coefficient(
                    &graph,
                    &config,
                    Deadline::none(),
                ))
            });
        });
    }
    group.finish();
}

/// Benchmark the landmark estimator by number of landmarks
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    group.sample_size(10);

    let graph = donation_network(20_000);
    for landmarks in [10, 100, 1_000].iter() {
        let hops = seeded_config(*landmarks);
        group.bench_with_input(BenchmarkId::new("hops", landmarks), landmarks, |b, _| {
            b.iter(|| {
                criterion::black_box(algo::average_shortest_path(&graph, &hops, Deadline::none()))
            });
        });

        let mut weighted = seeded_config(*landmarks);
        weighted.landmarks.weighting = PathWeighting::Weight;
        group.bench_with_input(BenchmarkId::new("weighted", landmarks), landmarks, |b, _| {
            b.iter(|| {
                criterion::black_box(algo::average_shortest_path(
                    &graph,
                    &weighted,
                    Deadline::none(),
                ))
            });
        });
    }
    group.finish();
}

/// Benchmark the full concurrent report
fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    group.sample_size(10);

    for size in [10_000, 50_000].iter() {
        let graph = donation_network(*size);
        let config = seeded_config(100);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(analyze(&graph, &config)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_assortativity,
    bench_clustering,
    bench_shortest_path,
    bench_report
);
criterion_main!(benches);
