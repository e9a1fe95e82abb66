//! A* heuristic shortest-path search.
//!
//! A* orders its frontier by `g(n) + h(n, target)`, where `g` is the cheapest
//! known distance from the start and `h` is a caller-supplied estimate of the
//! remaining cost.
//!
//! # Heuristic contract
//!
//! The result is guaranteed optimal only if `h` never overestimates the true
//! remaining cost (admissibility). The engine cannot verify this; an
//! inadmissible heuristic still terminates but may return a suboptimal path.
//! Nodes are re-expanded when a cheaper route to them is found, so admissible
//! heuristics that are not consistent still yield optimal paths.
//!
//! A heuristic that always returns zero makes A* behave exactly like
//! [`dijkstra_path`](super::dijkstra_path).

use std::{fmt, hash::Hash};

use crate::{
    graph::{
        algorithms::dijkstra::{best_first, SearchPath},
        config::SearchConfig,
        traits::{NeighborProvider, WeightProvider},
        weight::Weight,
    },
    Result,
};

/// Finds the cheapest path from `start` to `target` guided by `heuristic`.
///
/// # Arguments
///
/// * `neighbors` - The neighbour capability
/// * `weights` - The weight capability; a `None` weight skips the edge
/// * `heuristic` - Estimate `h(node, target)` of the remaining cost
/// * `start` - The source node
/// * `target` - The destination node
///
/// # Returns
///
/// A [`SearchPath`] with the nodes from `start` to `target`. If `target` is
/// unreachable the path is empty and `cost` is `None`. If `start == target` the
/// path is `[start]` with cost zero.
///
/// # Errors
///
/// Returns [`Error::NegativeWeight`](crate::Error::NegativeWeight) if a negative
/// edge weight is relaxed, and [`Error::WeightOverflow`](crate::Error::WeightOverflow)
/// if a path cost plus its heuristic estimate does not fit in `W`.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::algorithms::a_star;
///
/// // 10x10 grid, 4-connected, unit weights, Manhattan heuristic
/// let neighbors = |(x, y): (i32, i32)| {
///     [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
///         .into_iter()
///         .filter(|&(nx, ny)| (0..10).contains(&nx) && (0..10).contains(&ny))
///         .collect::<Vec<_>>()
/// };
/// let weights = |_: (i32, i32), _: (i32, i32)| Some(1u32);
/// let manhattan = |a: (i32, i32), b: (i32, i32)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1);
///
/// let path = a_star(&neighbors, &weights, manhattan, (0, 0), (9, 9))?;
/// assert_eq!(path.cost, Some(18));
/// assert_eq!(path.nodes.len(), 19);
/// # Ok::<(), graphsearch::Error>(())
/// ```
pub fn a_star<N, W, P, C, H>(
    neighbors: &P,
    weights: &C,
    heuristic: H,
    start: N,
    target: N,
) -> Result<SearchPath<N, W>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    W: Weight,
    P: NeighborProvider<N> + ?Sized,
    C: WeightProvider<N, W> + ?Sized,
    H: Fn(N, N) -> W,
{
    a_star_with(
        neighbors,
        weights,
        heuristic,
        start,
        target,
        &SearchConfig::default(),
    )
}

/// [`a_star`] with resource limits.
///
/// # Errors
///
/// Returns [`Error::NegativeWeight`](crate::Error::NegativeWeight) for a negative
/// edge weight, [`Error::WeightOverflow`](crate::Error::WeightOverflow) when a
/// priority does not fit in `W`, and [`Error::ExpansionLimit`](crate::Error::ExpansionLimit) or
/// [`Error::DeadlineExceeded`](crate::Error::DeadlineExceeded) when `config` is
/// bounded and the limit is hit.
pub fn a_star_with<N, W, P, C, H>(
    neighbors: &P,
    weights: &C,
    heuristic: H,
    start: N,
    target: N,
    config: &SearchConfig,
) -> Result<SearchPath<N, W>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    W: Weight,
    P: NeighborProvider<N> + ?Sized,
    C: WeightProvider<N, W> + ?Sized,
    H: Fn(N, N) -> W,
{
    let explored = best_first(
        neighbors,
        weights,
        start,
        Some(target),
        |node| heuristic(node, target),
        config,
    )?;
    Ok(explored.path_to(start, target))
}
