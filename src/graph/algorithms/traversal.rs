//! Breadth-first and depth-first traversal.
//!
//! This module provides the two classic unweighted visitation orders over any
//! [`NeighborProvider`]:
//!
//! - [`traverse`] - Visit everything reachable from a start node
//! - [`traverse_until`] - Stop at the first node matching a predicate, optionally
//!   reconstructing the path to it
//!
//! # Guarantees
//!
//! | Mode | Frontier | Path to target |
//! |------|----------|----------------|
//! | BFS | FIFO queue | Minimum number of edges |
//! | DFS | Explicit stack | The branch currently being explored, no minimality |
//!
//! Both modes visit every reachable node exactly once. Neither uses recursion, so
//! traversal depth is bounded by available heap memory only.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt,
    hash::Hash,
};

use tracing::debug;

use crate::graph::{
    config::{TraversalMode, TraversalOptions},
    traits::NeighborProvider,
};

/// Outcome of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult<N> {
    /// Nodes in visitation order, starting with the start node.
    ///
    /// For an early-exit traversal this ends with the matched target.
    pub order: Vec<N>,

    /// Path from the start node to the matched target, both included.
    ///
    /// Empty unless a target was found and path reconstruction was requested.
    pub path: Vec<N>,

    /// Whether a node matching the target predicate was reached.
    pub target_found: bool,
}

impl<N> TraversalResult<N> {
    /// Returns the number of visited nodes.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of edges on the reconstructed path, if any.
    #[must_use]
    pub fn path_edges(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Visits every node reachable from `start`.
///
/// # Arguments
///
/// * `provider` - The neighbour capability to traverse
/// * `start` - The node to start from; it does not need to be registered anywhere,
///   a node without neighbours simply yields `order == [start]`
/// * `options` - Traversal mode; `return_path` has no effect without a target
///
/// # Start Node
///
/// `start` is owned by the caller and is never validated against `provider`.
/// It always appears first in `order`, even when it is a removed [`VertexId`]
/// of a [`Graph`] used as the provider. Use [`Graph::traverse`], which returns
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) for dead handles, when
/// the start handle may be stale.
///
/// [`VertexId`]: crate::graph::VertexId
/// [`Graph`]: crate::graph::Graph
/// [`Graph::traverse`]: crate::graph::Graph::traverse
///
/// # Complexity
///
/// - Time: O(V + E) for the reachable subgraph
/// - Space: O(V) for the visited set and frontier
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::{algorithms::traverse, TraversalOptions};
///
/// let neighbors = |n: u32| match n {
///     1 => vec![2, 3],
///     2 => vec![4],
///     3 => vec![4, 5],
///     _ => vec![],
/// };
///
/// let result = traverse(&neighbors, 1, &TraversalOptions::bfs());
/// assert_eq!(result.order, vec![1, 2, 3, 4, 5]);
/// assert_eq!(result.visited_count(), 5);
/// ```
pub fn traverse<N, P>(provider: &P, start: N, options: &TraversalOptions) -> TraversalResult<N>
where
    N: Copy + Eq + Hash + fmt::Debug,
    P: NeighborProvider<N> + ?Sized,
{
    traverse_until(provider, start, options, |_| false)
}

/// Traverses from `start` until a node satisfying `is_target` is visited.
///
/// The start node itself is tested first. When `options.return_path` is set and a
/// target is reached, [`TraversalResult::path`] holds the path from `start` to it:
///
/// - **BFS** tests nodes as they are dequeued, so the path has the minimum edge
///   count among all paths from `start`.
/// - **DFS** tests nodes as they are first reached, and the path is the branch
///   from `start` down to the target.
///
/// A target that is never reached is a normal outcome: `target_found` is `false`
/// and `path` is empty.
///
/// As with [`traverse`], `start` is echoed back unchecked; a removed vertex of a
/// `Graph` provider is visited as a node without neighbours.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::{algorithms::traverse_until, TraversalOptions};
///
/// let neighbors = |n: u32| if n < 10 { vec![n + 1, n + 2] } else { vec![] };
///
/// let result = traverse_until(&neighbors, 0, &TraversalOptions::bfs().with_path(), |n| n == 6);
/// assert!(result.target_found);
/// assert_eq!(result.path, vec![0, 2, 4, 6]);
/// ```
pub fn traverse_until<N, P, F>(
    provider: &P,
    start: N,
    options: &TraversalOptions,
    is_target: F,
) -> TraversalResult<N>
where
    N: Copy + Eq + Hash + fmt::Debug,
    P: NeighborProvider<N> + ?Sized,
    F: FnMut(N) -> bool,
{
    let result = match options.mode {
        TraversalMode::Bfs => bfs(provider, start, options.return_path, is_target),
        TraversalMode::Dfs => dfs(provider, start, options.return_path, is_target),
    };

    debug!(
        mode = %options.mode,
        start = ?start,
        visited = result.visited_count(),
        found = result.target_found,
        "traversal finished"
    );
    result
}

fn bfs<N, P, F>(provider: &P, start: N, return_path: bool, mut is_target: F) -> TraversalResult<N>
where
    N: Copy + Eq + Hash,
    P: NeighborProvider<N> + ?Sized,
    F: FnMut(N) -> bool,
{
    let mut order = Vec::new();
    let mut visited: HashSet<N> = HashSet::from([start]);
    let mut parent: HashMap<N, N> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        order.push(node);

        if is_target(node) {
            let path = if return_path {
                unwind(&parent, start, node)
            } else {
                Vec::new()
            };
            return TraversalResult {
                order,
                path,
                target_found: true,
            };
        }

        for next in provider.neighbors(node) {
            if visited.insert(next) {
                if return_path {
                    parent.insert(next, node);
                }
                queue.push_back(next);
            }
        }
    }

    TraversalResult {
        order,
        path: Vec::new(),
        target_found: false,
    }
}

fn dfs<N, P, F>(provider: &P, start: N, return_path: bool, mut is_target: F) -> TraversalResult<N>
where
    N: Copy + Eq + Hash,
    P: NeighborProvider<N> + ?Sized,
    F: FnMut(N) -> bool,
{
    let mut order = vec![start];
    let mut visited: HashSet<N> = HashSet::from([start]);

    if is_target(start) {
        return TraversalResult {
            order,
            path: if return_path { vec![start] } else { Vec::new() },
            target_found: true,
        };
    }

    // Each frame is a node on the current branch plus its unexplored neighbours
    let mut stack = vec![(start, provider.neighbors(start))];

    while let Some((_, successors)) = stack.last_mut() {
        let Some(next) = successors.find(|n| !visited.contains(n)) else {
            stack.pop();
            continue;
        };

        visited.insert(next);
        order.push(next);

        if is_target(next) {
            let path = if return_path {
                stack
                    .iter()
                    .map(|(node, _)| *node)
                    .chain(std::iter::once(next))
                    .collect()
            } else {
                Vec::new()
            };
            return TraversalResult {
                order,
                path,
                target_found: true,
            };
        }

        stack.push((next, provider.neighbors(next)));
    }

    TraversalResult {
        order,
        path: Vec::new(),
        target_found: false,
    }
}

/// Walks the BFS parent links back from `target` and returns the forward path.
fn unwind<N: Copy + Eq + Hash>(parent: &HashMap<N, N>, start: N, target: N) -> Vec<N> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnweightedGraph;
    use std::collections::HashMap;

    fn table(edges: &[(u32, &[u32])]) -> HashMap<u32, Vec<u32>> {
        edges.iter().map(|(n, succ)| (*n, succ.to_vec())).collect()
    }

    #[test]
    fn test_bfs_visits_level_by_level() {
        let adj = table(&[(1, &[2, 3]), (2, &[4]), (3, &[4, 5])]);
        let neighbors = |n: u32| adj.get(&n).cloned().unwrap_or_default();

        let result = traverse(&neighbors, 1, &TraversalOptions::bfs());
        assert_eq!(result.order, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.visited_count(), 5);
        assert!(!result.target_found);
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_dfs_explores_branch_first() {
        let adj = table(&[(1, &[2, 3]), (2, &[4]), (3, &[4, 5])]);
        let neighbors = |n: u32| adj.get(&n).cloned().unwrap_or_default();

        let result = traverse(&neighbors, 1, &TraversalOptions::dfs());
        assert_eq!(result.order, vec![1, 2, 4, 3, 5]);
    }

    #[test]
    fn test_removed_graph_vertex_is_echoed_unchecked() {
        let mut graph: UnweightedGraph<u32> = UnweightedGraph::directed();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(b, a, ()).unwrap();
        graph.remove_vertex(b);

        let result = traverse(&graph, b, &TraversalOptions::bfs());
        assert_eq!(result.order, vec![b]);

        let err = graph.traverse(b, &TraversalOptions::bfs()).unwrap_err();
        assert_eq!(err, crate::Error::UnknownVertex(b));
    }

    #[test]
    fn test_isolated_start() {
        let neighbors = |_: u32| Vec::<u32>::new();
        for options in [TraversalOptions::bfs(), TraversalOptions::dfs()] {
            let result = traverse(&neighbors, 42, &options);
            assert_eq!(result.order, vec![42]);
        }
    }

    #[test]
    fn test_bfs_path_is_shortest() {
        // 0 -> 1 -> 2 -> 3 -> 4, plus shortcut 0 -> 3
        let adj = table(&[(0, &[1, 3]), (1, &[2]), (2, &[3]), (3, &[4])]);
        let neighbors = |n: u32| adj.get(&n).cloned().unwrap_or_default();

        let options = TraversalOptions::bfs().with_path();
        let result = traverse_until(&neighbors, 0, &options, |n| n == 4);
        assert!(result.target_found);
        assert_eq!(result.path, vec![0, 3, 4]);
        assert_eq!(result.path_edges(), Some(2));
    }

    #[test]
    fn test_dfs_path_is_current_branch() {
        let adj = table(&[(0, &[1, 3]), (1, &[2]), (2, &[3]), (3, &[4])]);
        let neighbors = |n: u32| adj.get(&n).cloned().unwrap_or_default();

        let options = TraversalOptions::dfs().with_path();
        let result = traverse_until(&neighbors, 0, &options, |n| n == 4);
        assert!(result.target_found);
        assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
        assert_eq!(*result.order.last().unwrap(), 4);
    }

    #[test]
    fn test_target_not_found_path_is_empty() {
        let adj = table(&[(0, &[1]), (1, &[0])]);
        let neighbors = |n: u32| adj.get(&n).cloned().unwrap_or_default();

        for options in [
            TraversalOptions::bfs().with_path(),
            TraversalOptions::dfs().with_path(),
        ] {
            let result = traverse_until(&neighbors, 0, &options, |n| n == 99);
            assert!(!result.target_found);
            assert!(result.path.is_empty());
            assert_eq!(result.visited_count(), 2);
        }
    }

    #[test]
    fn test_start_is_target() {
        let neighbors = |n: u32| vec![n + 1];
        for options in [
            TraversalOptions::bfs().with_path(),
            TraversalOptions::dfs().with_path(),
        ] {
            let result = traverse_until(&neighbors, 7, &options, |n| n == 7);
            assert!(result.target_found);
            assert_eq!(result.path, vec![7]);
            assert_eq!(result.order, vec![7]);
        }
    }

    #[test]
    fn test_path_not_returned_without_flag() {
        let neighbors = |n: u32| if n < 3 { vec![n + 1] } else { vec![] };
        let result = traverse_until(&neighbors, 0, &TraversalOptions::bfs(), |n| n == 3);
        assert!(result.target_found);
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_cycles_and_repeated_neighbors() {
        // Repeated neighbour (parallel edges) and a cycle back to the start
        let adj = table(&[(0, &[1, 1, 2]), (1, &[0, 2]), (2, &[0])]);
        let neighbors = |n: u32| adj.get(&n).cloned().unwrap_or_default();

        for options in [TraversalOptions::bfs(), TraversalOptions::dfs()] {
            let result = traverse(&neighbors, 0, &options);
            assert_eq!(result.visited_count(), 3);
        }
    }

    #[test]
    fn test_deep_chain_dfs() {
        let neighbors = |n: u32| if n < 100_000 { vec![n + 1] } else { vec![] };
        let options = TraversalOptions::dfs().with_path();
        let result = traverse_until(&neighbors, 0, &options, |n| n == 100_000);
        assert!(result.target_found);
        assert_eq!(result.path.len(), 100_001);
    }
}
