//! Dijkstra's single-source shortest paths.
//!
//! This module provides label-setting shortest-path search for non-negative
//! edge weights over any [`NeighborProvider`] / [`WeightProvider`] pair:
//!
//! - [`dijkstra`] / [`dijkstra_with`] - Distances and predecessors for every node
//!   reachable from a start node
//! - [`dijkstra_path`] / [`dijkstra_path_with`] - The cheapest path to a single
//!   target, stopping as soon as the target is finalised
//!
//! The best-first loop shared with [`a_star`](super::a_star) also lives here.
//!
//! # Multi-edges
//!
//! Relaxation asks the [`WeightProvider`] for the weight of `u -> v`, which by
//! contract is the minimum over parallel edges. A neighbour yielded several times
//! is relaxed several times with the same weight, which is harmless.
//!
//! # Unreachable nodes
//!
//! Nodes that cannot be reached are simply absent from [`ShortestPaths`]. There is
//! no infinity sentinel.

use std::{collections::HashMap, fmt, hash::Hash};

use tracing::{debug, trace};

use crate::{
    graph::{
        algorithms::frontier::{PriorityFrontier, SearchBudget},
        config::SearchConfig,
        traits::{NeighborProvider, WeightProvider},
        weight::{self, Weight},
    },
    Error, Result,
};

/// Single-source shortest-path tree produced by [`dijkstra`].
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, W> {
    start: N,
    distances: HashMap<N, W>,
    predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Copy + Eq + Hash,
    W: Weight,
{
    /// Returns the start node of the search.
    #[must_use]
    pub fn start(&self) -> N {
        self.start
    }

    /// Returns the shortest distance from the start to `node`.
    ///
    /// `None` means `node` is unreachable.
    #[must_use]
    pub fn distance(&self, node: N) -> Option<W> {
        self.distances.get(&node).copied()
    }

    /// Returns `true` if `node` is reachable from the start.
    #[must_use]
    pub fn is_reachable(&self, node: N) -> bool {
        self.distances.contains_key(&node)
    }

    /// Returns the shortest path from the start to `node`, both included.
    ///
    /// Returns `[start]` for the start itself and an empty vector if `node` is
    /// unreachable. When several optimal paths exist, the one found first under
    /// the frontier's FIFO tie-break is returned.
    #[must_use]
    pub fn path_to(&self, node: N) -> Vec<N> {
        if !self.is_reachable(node) {
            return Vec::new();
        }
        reconstruct(&self.predecessors, self.start, node)
    }

    /// Returns the distance map. Unreachable nodes have no entry.
    #[must_use]
    pub fn distances(&self) -> &HashMap<N, W> {
        &self.distances
    }

    /// Returns the reachable nodes, start included, in arbitrary order.
    pub fn reachable(&self) -> impl Iterator<Item = N> + '_ {
        self.distances.keys().copied()
    }

    /// Returns the number of reachable nodes, start included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always `false`: the start is reachable from itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// A path between two nodes together with its cost.
///
/// An unreachable target is represented by an empty `nodes` vector and
/// `cost == None`, never by an error and never by `[start]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPath<N, W> {
    /// Nodes from start to target, both included.
    pub nodes: Vec<N>,
    /// Total weight of the path, `None` if the target is unreachable.
    pub cost: Option<W>,
}

impl<N, W> SearchPath<N, W> {
    pub(crate) fn unreachable() -> Self {
        SearchPath {
            nodes: Vec::new(),
            cost: None,
        }
    }

    /// Returns `true` if a path to the target exists.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.cost.is_some()
    }

    /// Returns the number of edges on the path, or `None` if there is no path.
    #[must_use]
    pub fn edge_count(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }
}

/// Computes shortest distances from `start` to every reachable node.
///
/// # Arguments
///
/// * `neighbors` - The neighbour capability
/// * `weights` - The weight capability; a `None` weight skips the edge
/// * `start` - The source node
///
/// # Returns
///
/// The [`ShortestPaths`] tree rooted at `start`.
///
/// # Errors
///
/// Returns [`Error::NegativeWeight`] if a negative edge weight is relaxed, and
/// [`Error::WeightOverflow`] if a path cost does not fit in `W`.
///
/// # Complexity
///
/// - Time: O((V + E) log E) with lazy deletion of stale frontier entries
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use graphsearch::graph::algorithms::dijkstra;
///
/// let edges: HashMap<u32, Vec<(u32, u32)>> = HashMap::from([
///     (1, vec![(2, 4), (3, 2)]),
///     (2, vec![(3, 2), (4, 7)]),
///     (3, vec![(4, 1)]),
/// ]);
/// let neighbors = |n: u32| {
///     edges.get(&n).into_iter().flatten().map(|&(t, _)| t).collect::<Vec<_>>()
/// };
/// let weights = |a: u32, b: u32| {
///     edges.get(&a)?.iter().filter(|&&(t, _)| t == b).map(|&(_, w)| w).min()
/// };
///
/// let paths = dijkstra(&neighbors, &weights, 1)?;
/// assert_eq!(paths.distance(4), Some(3));
/// assert_eq!(paths.path_to(4), vec![1, 3, 4]);
/// # Ok::<(), graphsearch::Error>(())
/// ```
pub fn dijkstra<N, W, P, C>(neighbors: &P, weights: &C, start: N) -> Result<ShortestPaths<N, W>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    W: Weight,
    P: NeighborProvider<N> + ?Sized,
    C: WeightProvider<N, W> + ?Sized,
{
    dijkstra_with(neighbors, weights, start, &SearchConfig::default())
}

/// [`dijkstra`] with resource limits.
///
/// # Errors
///
/// Returns [`Error::NegativeWeight`] for a negative edge weight,
/// [`Error::WeightOverflow`] when a path cost does not fit in `W`, and
/// [`Error::ExpansionLimit`] or [`Error::DeadlineExceeded`] when `config` is
/// bounded and the limit is hit.
pub fn dijkstra_with<N, W, P, C>(
    neighbors: &P,
    weights: &C,
    start: N,
    config: &SearchConfig,
) -> Result<ShortestPaths<N, W>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    W: Weight,
    P: NeighborProvider<N> + ?Sized,
    C: WeightProvider<N, W> + ?Sized,
{
    let explored = best_first(neighbors, weights, start, None, |_| W::zero(), config)?;
    Ok(ShortestPaths {
        start,
        distances: explored.distances,
        predecessors: explored.predecessors,
    })
}

/// Computes the cheapest path from `start` to `target`.
///
/// The search stops as soon as `target` is popped from the frontier, so only the
/// part of the graph closer than the target is explored.
///
/// # Errors
///
/// Returns [`Error::NegativeWeight`] if a negative edge weight is relaxed, and
/// [`Error::WeightOverflow`] if a path cost does not fit in `W`.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::algorithms::dijkstra_path;
///
/// // A line 0 - 1 - 2 - ... with unit weights
/// let neighbors = |n: u32| vec![n + 1];
/// let weights = |_: u32, _: u32| Some(1u32);
///
/// let path = dijkstra_path(&neighbors, &weights, 0, 3)?;
/// assert_eq!(path.nodes, vec![0, 1, 2, 3]);
/// assert_eq!(path.cost, Some(3));
/// # Ok::<(), graphsearch::Error>(())
/// ```
pub fn dijkstra_path<N, W, P, C>(
    neighbors: &P,
    weights: &C,
    start: N,
    target: N,
) -> Result<SearchPath<N, W>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    W: Weight,
    P: NeighborProvider<N> + ?Sized,
    C: WeightProvider<N, W> + ?Sized,
{
    dijkstra_path_with(neighbors, weights, start, target, &SearchConfig::default())
}

/// [`dijkstra_path`] with resource limits.
///
/// # Errors
///
/// See [`dijkstra_with`].
pub fn dijkstra_path_with<N, W, P, C>(
    neighbors: &P,
    weights: &C,
    start: N,
    target: N,
    config: &SearchConfig,
) -> Result<SearchPath<N, W>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    W: Weight,
    P: NeighborProvider<N> + ?Sized,
    C: WeightProvider<N, W> + ?Sized,
{
    let explored = best_first(neighbors, weights, start, Some(target), |_| W::zero(), config)?;
    Ok(explored.path_to(start, target))
}

/// Distances and predecessors left behind by [`best_first`].
pub(crate) struct Exploration<N, W> {
    pub(crate) distances: HashMap<N, W>,
    pub(crate) predecessors: HashMap<N, N>,
}

impl<N: Copy + Eq + Hash, W: Weight> Exploration<N, W> {
    pub(crate) fn path_to(&self, start: N, target: N) -> SearchPath<N, W> {
        match self.distances.get(&target) {
            Some(&cost) => SearchPath {
                nodes: reconstruct(&self.predecessors, start, target),
                cost: Some(cost),
            },
            None => SearchPath::unreachable(),
        }
    }
}

/// Best-first search ordered by `g(n) + estimate(n)`.
///
/// With a zero estimate this is Dijkstra. Entries are pushed on every strict
/// improvement and skipped at pop time when their cost is worse than the best
/// known distance. Without a target the whole reachable set is settled; with a
/// target the loop stops when the target is popped with its current best cost.
pub(crate) fn best_first<N, W, P, C, H>(
    neighbors: &P,
    weights: &C,
    start: N,
    target: Option<N>,
    estimate: H,
    config: &SearchConfig,
) -> Result<Exploration<N, W>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    W: Weight,
    P: NeighborProvider<N> + ?Sized,
    C: WeightProvider<N, W> + ?Sized,
    H: Fn(N) -> W,
{
    let mut budget = SearchBudget::new(config);
    let mut distances: HashMap<N, W> = HashMap::from([(start, W::zero())]);
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut frontier = PriorityFrontier::new();
    frontier.push(start, estimate(start), W::zero());

    debug!(start = ?start, target = ?target, "best-first search started");

    while let Some(entry) = frontier.pop() {
        budget.charge()?;

        let node = entry.node;
        let Some(&best) = distances.get(&node) else {
            continue;
        };
        if weight::compare(entry.cost, best).is_gt() {
            // stale
            continue;
        }
        if target == Some(node) {
            break;
        }

        for next in neighbors.neighbors(node) {
            let Some(w) = weights.weight(node, next) else {
                continue;
            };
            if weight::is_negative(w) {
                return Err(Error::NegativeWeight {
                    from: format!("{node:?}"),
                    to: format!("{next:?}"),
                });
            }

            let overflow = || Error::WeightOverflow {
                from: format!("{node:?}"),
                to: format!("{next:?}"),
            };
            let candidate = entry.cost.checked_sum(w).ok_or_else(overflow)?;
            let improves = distances
                .get(&next)
                .map_or(true, |&known| weight::compare(candidate, known).is_lt());
            if improves {
                trace!(from = ?node, to = ?next, distance = ?candidate, "relaxed");
                distances.insert(next, candidate);
                predecessors.insert(next, node);
                let priority = candidate.checked_sum(estimate(next)).ok_or_else(overflow)?;
                frontier.push(next, priority, candidate);
            }
        }
    }

    debug!(
        start = ?start,
        settled = distances.len(),
        expansions = budget.expansions(),
        "best-first search finished"
    );
    Ok(Exploration {
        distances,
        predecessors,
    })
}

/// Walks the predecessor map back from `target` and returns the forward path.
fn reconstruct<N: Copy + Eq + Hash>(predecessors: &HashMap<N, N>, start: N, target: N) -> Vec<N> {
    let mut path = vec![target];
    let mut current = target;
    // Strict improvements keep the predecessor map acyclic; the bound is a backstop
    while current != start && path.len() <= predecessors.len() + 1 {
        match predecessors.get(&current) {
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
    use crate::graph::{algorithms::a_star, WeightedGraph};

    type EdgeList = HashMap<u32, Vec<(u32, u32)>>;

    /// Graph `{1:[(2,4),(3,2)], 2:[(3,2),(4,7)], 3:[(4,1)], 4:[]}`
    fn create_weighted_graph() -> EdgeList {
        HashMap::from([
            (1, vec![(2, 4), (3, 2)]),
            (2, vec![(3, 2), (4, 7)]),
            (3, vec![(4, 1)]),
            (4, vec![]),
        ])
    }

    fn providers(
        edges: &EdgeList,
    ) -> (
        impl Fn(u32) -> Vec<u32> + '_,
        impl Fn(u32, u32) -> Option<u32> + '_,
    ) {
        let neighbors = move |n: u32| {
            edges
                .get(&n)
                .into_iter()
                .flatten()
                .map(|&(t, _)| t)
                .collect::<Vec<_>>()
        };
        let weights = move |a: u32, b: u32| {
            edges
                .get(&a)?
                .iter()
                .filter(|&&(t, _)| t == b)
                .map(|&(_, w)| w)
                .min()
        };
        (neighbors, weights)
    }

    #[test]
    fn test_dijkstra_distances() {
        let edges = create_weighted_graph();
        let (neighbors, weights) = providers(&edges);

        let paths = dijkstra(&neighbors, &weights, 1).unwrap();
        assert_eq!(paths.distance(1), Some(0));
        assert_eq!(paths.distance(2), Some(4));
        assert_eq!(paths.distance(3), Some(2));
        assert_eq!(paths.distance(4), Some(3));
        assert_eq!(paths.len(), 4);
        assert_eq!(paths.path_to(4), vec![1, 3, 4]);
        assert_eq!(paths.path_to(1), vec![1]);
    }

    #[test]
    fn test_dijkstra_unreachable_is_absent() {
        let edges = create_weighted_graph();
        let (neighbors, weights) = providers(&edges);

        let paths = dijkstra(&neighbors, &weights, 3).unwrap();
        assert_eq!(paths.distance(1), None);
        assert!(!paths.is_reachable(2));
        assert!(paths.path_to(1).is_empty());
        let mut reachable: Vec<u32> = paths.reachable().collect();
        reachable.sort_unstable();
        assert_eq!(reachable, vec![3, 4]);
    }

    #[test]
    fn test_dijkstra_parallel_edges_cheapest_wins() {
        let edges: EdgeList = HashMap::from([(0, vec![(1, 9), (1, 2), (1, 5)])]);
        let (neighbors, weights) = providers(&edges);

        let paths = dijkstra(&neighbors, &weights, 0).unwrap();
        assert_eq!(paths.distance(1), Some(2));
    }

    #[test]
    fn test_dijkstra_path_early_exit() {
        let edges = create_weighted_graph();
        let (neighbors, weights) = providers(&edges);

        let path = dijkstra_path(&neighbors, &weights, 1, 4).unwrap();
        assert_eq!(path.nodes, vec![1, 3, 4]);
        assert_eq!(path.cost, Some(3));
        assert_eq!(path.edge_count(), Some(2));

        let path = dijkstra_path(&neighbors, &weights, 4, 1).unwrap();
        assert!(!path.is_found());
        assert!(path.nodes.is_empty());
    }

    #[test]
    fn test_dijkstra_path_start_equals_target() {
        let edges = create_weighted_graph();
        let (neighbors, weights) = providers(&edges);

        let path = dijkstra_path(&neighbors, &weights, 2, 2).unwrap();
        assert_eq!(path.nodes, vec![2]);
        assert_eq!(path.cost, Some(0));
    }

    #[test]
    fn test_dijkstra_negative_weight_rejected() {
        let neighbors = |n: i32| if n == 0 { vec![1] } else { vec![] };
        let weights = |_: i32, _: i32| Some(-3i32);

        let err = dijkstra(&neighbors, &weights, 0).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeWeight {
                from: "0".into(),
                to: "1".into()
            }
        );
    }

    #[test]
    fn test_dijkstra_float_weights() {
        let neighbors = |n: u8| match n {
            0 => vec![1, 2],
            1 => vec![2],
            _ => vec![],
        };
        let weights = |a: u8, b: u8| match (a, b) {
            (0, 1) => Some(0.5f64),
            (0, 2) => Some(2.0),
            (1, 2) => Some(0.75),
            _ => None,
        };

        let paths = dijkstra(&neighbors, &weights, 0).unwrap();
        assert_eq!(paths.distance(2), Some(1.25));
    }

    #[test]
    fn test_dijkstra_expansion_limit() {
        // Infinite line graph
        let neighbors = |n: u64| vec![n + 1];
        let weights = |_: u64, _: u64| Some(1u64);

        let config = SearchConfig::unbounded().with_max_expansions(50);
        let err = dijkstra_with(&neighbors, &weights, 0, &config).unwrap_err();
        assert_eq!(err, Error::ExpansionLimit(50));
        assert!(err.is_limit());

        let path = dijkstra_path_with(&neighbors, &weights, 0, 10, &config).unwrap();
        assert_eq!(path.cost, Some(10));
    }

    #[test]
    fn test_dijkstra_weight_overflow_rejected() {
        let mut graph: WeightedGraph<(), u8> = WeightedGraph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge(a, b, 200).unwrap();
        graph.add_edge(b, c, 100).unwrap();

        let err = graph.dijkstra(a).unwrap_err();
        assert_eq!(
            err,
            Error::WeightOverflow {
                from: format!("{b:?}"),
                to: format!("{c:?}"),
            }
        );
        assert!(err.is_configuration());

        // Sums that fit exactly are still accepted
        graph.remove_edge(b, c, 100).unwrap();
        graph.add_edge(b, c, 55).unwrap();
        assert_eq!(graph.dijkstra(a).unwrap().distance(c), Some(255));
    }

    #[test]
    fn test_a_star_heuristic_overflow_rejected() {
        let neighbors = |n: u32| if n == 0 { vec![1] } else { vec![] };
        let weights = |_: u32, _: u32| Some(10u32);
        let heuristic = |n: u32, _: u32| if n == 1 { u32::MAX } else { 0 };

        let err = a_star(&neighbors, &weights, heuristic, 0, 1).unwrap_err();
        assert!(matches!(err, Error::WeightOverflow { .. }));
    }

    #[test]
    fn test_dijkstra_zero_weight_cycle() {
        let neighbors = |n: u32| vec![(n + 1) % 3];
        let weights = |_: u32, _: u32| Some(0u32);

        let paths = dijkstra(&neighbors, &weights, 0).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths.path_to(2), vec![0, 1, 2]);
    }
}
