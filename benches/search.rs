//! Benchmarks for the graph container and search engines.
//!
//! Measures on seeded random graphs:
//! - Container construction and vertex removal (directed full scan vs undirected walk)
//! - BFS and DFS traversal
//! - Dijkstra, A* and the parallel batch variant
//! - Topological sort on a layered DAG

extern crate graphsearch;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphsearch::graph::{
    algorithms::{dijkstra_batch, topological_sort},
    Direction, RandomGraphConfig, SearchConfig, TraversalOptions, UnweightedGraph, VertexId,
    WeightedGraph,
};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn weighted(vertices: usize, direction: Direction) -> WeightedGraph<usize, u32> {
    let config = RandomGraphConfig::new(vertices)
        .with_edges(1, 6)
        .with_direction(direction)
        .with_seed(0x5eed);
    WeightedGraph::random_weighted(&config, 1..=100).unwrap()
}

/// Benchmark building random graphs of increasing size.
fn bench_random_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(weighted(size, Direction::Directed)));
        });
    }
    group.finish();
}

/// Benchmark vertex removal, where directed graphs scan every adjacency.
fn bench_remove_vertex(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_vertex");
    for direction in [Direction::Directed, Direction::Undirected] {
        let graph = weighted(1_000, direction);
        group.bench_function(direction.to_string(), |b| {
            b.iter_batched(
                || graph.clone(),
                |mut g| {
                    for i in (0..1_000).step_by(10) {
                        g.remove_vertex(VertexId::new(i));
                    }
                    g
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark full BFS and DFS traversals.
fn bench_traversal(c: &mut Criterion) {
    let config = RandomGraphConfig::new(10_000).with_edges(1, 4).with_seed(7);
    let graph = UnweightedGraph::random(&config).unwrap();
    let start = VertexId::new(0);

    c.bench_function("traverse_bfs_10k", |b| {
        b.iter(|| black_box(graph.traverse(start, &TraversalOptions::bfs()).unwrap()));
    });
    c.bench_function("traverse_dfs_10k", |b| {
        b.iter(|| black_box(graph.traverse(start, &TraversalOptions::dfs()).unwrap()));
    });
}

/// Benchmark single-source Dijkstra on increasing sizes.
fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for size in SIZES {
        let graph = weighted(size, Direction::Directed);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(graph.dijkstra(VertexId::new(0)).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark point-to-point search: Dijkstra early exit vs A* with a zero heuristic.
fn bench_point_to_point(c: &mut Criterion) {
    let graph = weighted(10_000, Direction::Undirected);
    let (start, target) = (VertexId::new(0), VertexId::new(9_999));

    c.bench_function("shortest_path_10k", |b| {
        b.iter(|| black_box(graph.shortest_path(start, target).unwrap()));
    });
    c.bench_function("a_star_zero_10k", |b| {
        b.iter(|| black_box(graph.a_star(start, target, |_, _| 0).unwrap()));
    });
}

/// Benchmark the rayon batch against sequential searches.
fn bench_batch(c: &mut Criterion) {
    let graph = weighted(2_000, Direction::Directed);
    let sources: Vec<VertexId> = (0..64).map(VertexId::new).collect();
    let config = SearchConfig::default();

    c.bench_function("dijkstra_sequential_64", |b| {
        b.iter(|| {
            for &s in &sources {
                black_box(graph.dijkstra(s).unwrap());
            }
        });
    });
    c.bench_function("dijkstra_batch_64", |b| {
        b.iter(|| {
            let all: Vec<_> =
                dijkstra_batch::<_, u32, _, _>(&graph, &graph, &sources, &config).unwrap();
            black_box(all)
        });
    });
}

/// Benchmark topological sort on a layered DAG.
fn bench_topological(c: &mut Criterion) {
    let mut graph: UnweightedGraph<usize> = UnweightedGraph::directed();
    let ids: Vec<VertexId> = (0..10_000).map(|i| graph.add_vertex(i)).collect();
    for (i, &from) in ids.iter().enumerate() {
        for step in [1, 7, 31] {
            if let Some(&to) = ids.get(i + step) {
                graph.add_edge(from, to, ()).unwrap();
            }
        }
    }

    c.bench_function("topological_sort_10k", |b| {
        b.iter(|| black_box(topological_sort(graph.vertices(), &graph).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_random_graph,
    bench_remove_vertex,
    bench_traversal,
    bench_dijkstra,
    bench_point_to_point,
    bench_batch,
    bench_topological
);
criterion_main!(benches);
