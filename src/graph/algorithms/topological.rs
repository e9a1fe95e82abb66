//! Topological sorting for directed acyclic graphs (DAGs).
//!
//! This module provides a depth-first topological sort with cycle detection. A
//! topological ordering is a linear ordering of nodes such that for every
//! directed edge `(u, v)`, `u` comes before `v`.
//!
//! # Use Cases
//!
//! - Dependency resolution (build systems, package managers)
//! - Task scheduling with precedence constraints
//! - Evaluation order of derived values

use std::{collections::HashMap, fmt, hash::Hash};

use tracing::{debug, warn};

use crate::{graph::traits::NeighborProvider, Error, Result};

/// Visitation state of a node during the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS branch
    InProgress,
    /// All descendants emitted
    Finished,
}

/// Computes a topological ordering of `nodes` and everything reachable from them.
///
/// Every node in `nodes` is used as a DFS root in the given order, so
/// disconnected components are all covered. Each node is marked in-progress while
/// its descendants are explored and finished afterwards; reaching an in-progress
/// node again means the input has a cycle. The result is the reverse of the
/// finishing order.
///
/// # Arguments
///
/// * `nodes` - All nodes to order; nodes reachable from them are included too
/// * `neighbors` - The neighbour capability describing the edges
///
/// # Returns
///
/// The nodes in topological order. For a fixed `nodes` order and neighbour order
/// the result is deterministic, but it is only one of possibly many valid orders.
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] if a cycle is reachable from `nodes`. The
/// whole sort is aborted; there is no partial result.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the marks and the explicit stack
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::algorithms::topological_sort;
///
/// // A -> B -> D, A -> C -> D
/// let neighbors = |n: char| match n {
///     'A' => vec!['B', 'C'],
///     'B' | 'C' => vec!['D'],
///     _ => vec![],
/// };
///
/// let order = topological_sort(['A', 'B', 'C', 'D'], &neighbors)?;
/// assert_eq!(order.first(), Some(&'A'));
/// assert_eq!(order.last(), Some(&'D'));
/// # Ok::<(), graphsearch::Error>(())
/// ```
///
/// # Cyclic Graph Example
///
/// ```rust
/// use graphsearch::{graph::algorithms::topological_sort, Error};
///
/// let neighbors = |n: u32| match n {
///     1 => vec![2],
///     2 => vec![3],
///     3 => vec![1],
///     _ => vec![],
/// };
///
/// let err = topological_sort([1, 2, 3], &neighbors).unwrap_err();
/// assert_eq!(err, Error::CycleDetected { cycle: "1 -> 2 -> 3 -> 1".into() });
/// ```
pub fn topological_sort<N, I, P>(nodes: I, neighbors: &P) -> Result<Vec<N>>
where
    N: Copy + Eq + Hash + fmt::Debug,
    I: IntoIterator<Item = N>,
    P: NeighborProvider<N> + ?Sized,
{
    let mut marks: HashMap<N, Mark> = HashMap::new();
    let mut finished: Vec<N> = Vec::new();

    for root in nodes {
        if marks.contains_key(&root) {
            continue;
        }

        marks.insert(root, Mark::InProgress);
        let mut stack = vec![(root, neighbors.neighbors(root))];

        while let Some((node, successors)) = stack.last_mut() {
            let node = *node;
            match successors.next() {
                Some(next) => match marks.get(&next) {
                    None => {
                        marks.insert(next, Mark::InProgress);
                        stack.push((next, neighbors.neighbors(next)));
                    }
                    Some(Mark::InProgress) => {
                        let cycle = render_cycle(stack.iter().map(|(n, _)| *n), next);
                        warn!(%cycle, "cycle detected during topological sort");
                        return Err(Error::CycleDetected { cycle });
                    }
                    Some(Mark::Finished) => {}
                },
                None => {
                    marks.insert(node, Mark::Finished);
                    finished.push(node);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    debug!(nodes = finished.len(), "topological sort finished");
    Ok(finished)
}

/// Renders the cycle closed by an edge back to `entry`, e.g. `1 -> 2 -> 3 -> 1`.
///
/// `branch` is the current DFS branch from the root; the cycle is its suffix
/// starting at `entry`.
fn render_cycle<N: PartialEq + fmt::Debug>(branch: impl Iterator<Item = N>, entry: N) -> String {
    let mut parts: Vec<String> = branch
        .skip_while(|n| *n != entry)
        .map(|n| format!("{n:?}"))
        .collect();
    parts.push(format!("{entry:?}"));
    parts.join(" -> ")
}
