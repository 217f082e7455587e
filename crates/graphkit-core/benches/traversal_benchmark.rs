//! Benchmarks for traversal and structural analysis.
//!
//! Measures:
//! - Iterative DFS and BFS over random sparse graphs
//! - BFS shortest path between far-apart vertices
//! - Connected components and cycle detection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphkit_core::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [u32; 3] = [1_000, 10_000, 50_000];
const AVG_DEGREE: u32 = 4;

/// Random undirected graph with a spanning path so every vertex is reachable.
fn random_sparse_graph(n: u32, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(false, false);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.add_unit_edge(v - 1, v);
    }
    for _ in 0..n * (AVG_DEGREE / 2) {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        graph.add_unit_edge(from, to);
    }
    graph
}

/// Directed layered DAG: edges only go from lower to higher ids.
fn random_dag(n: u32, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(true, false);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for _ in 0..n * AVG_DEGREE {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            graph.add_unit_edge(a.min(b), a.max(b));
        }
    }
    graph
}

// =============================================================================
// Traversal
// =============================================================================

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for n in SIZES {
        let graph = random_sparse_graph(n, 42);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("dfs", n), &graph, |b, g| {
            b.iter(|| black_box(g.dfs(&0)));
        });
        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| black_box(g.bfs(&0)));
        });
        group.bench_with_input(BenchmarkId::new("shortest_path_bfs", n), &graph, |b, g| {
            b.iter(|| black_box(g.find_shortest_path_bfs(&0, &(n - 1))));
        });
    }
    group.finish();
}

// =============================================================================
// Analysis
// =============================================================================

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    for n in SIZES {
        let graph = random_sparse_graph(n, 7);
        let dag = random_dag(n, 7);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("components", n), &graph, |b, g| {
            b.iter(|| black_box(g.find_connected_components()));
        });
        group.bench_with_input(BenchmarkId::new("has_cycle_directed", n), &dag, |b, g| {
            b.iter(|| black_box(g.has_cycle()));
        });
        group.bench_with_input(BenchmarkId::new("topological_sort", n), &dag, |b, g| {
            b.iter(|| black_box(g.topological_sort()));
        });
        group.bench_with_input(BenchmarkId::new("scc", n), &dag, |b, g| {
            b.iter(|| black_box(g.strongly_connected_components()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_analysis);
criterion_main!(benches);
