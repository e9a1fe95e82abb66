#![no_main]

use libfuzzer_sys::fuzz_target;
use graphsearch::graph::{
    algorithms, Direction, SearchConfig, TraversalOptions, VertexId, WeightedGraph,
};

// Interprets the input as a sequence of container mutations, checking the
// invariants after each one and running every engine over the final graph.
fuzz_target!(|data: &[u8]| {
    let Some((&mode, ops)) = data.split_first() else {
        return;
    };
    let direction = if mode & 1 == 0 {
        Direction::Directed
    } else {
        Direction::Undirected
    };

    let mut graph: WeightedGraph<u8, u16> = WeightedGraph::new(direction);
    for op in ops.chunks_exact(4) {
        let from = VertexId::new(usize::from(op[1] % 32));
        let to = VertexId::new(usize::from(op[2] % 32));
        let weight = u16::from(op[3]);
        match op[0] % 4 {
            0 => {
                graph.add_vertex(op[1]);
            }
            1 => {
                graph.remove_vertex(from);
            }
            2 => {
                let _ = graph.add_edge(from, to, weight);
            }
            _ => {
                let _ = graph.remove_edge(from, to, weight);
            }
        }
        assert!(graph.is_consistent());
    }

    let Some(start) = graph.vertices().first().copied() else {
        return;
    };
    let bfs = graph.traverse(start, &TraversalOptions::bfs()).unwrap();
    let dfs = graph.traverse(start, &TraversalOptions::dfs()).unwrap();
    assert_eq!(bfs.visited_count(), dfs.visited_count());

    let config = SearchConfig::unbounded().with_max_expansions(10_000);
    if let Ok(paths) = graph.dijkstra_with(start, &config) {
        assert_eq!(paths.len(), bfs.visited_count());
        for v in paths.reachable() {
            let path = paths.path_to(v);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&v));
        }
    }

    let _ = algorithms::topological_sort(graph.vertices(), &graph);
});
