//! Capability traits consumed by the search engines.
//!
//! The traversal, shortest-path and topological engines never see a concrete
//! graph type. They are written against two small capabilities:
//!
//! - [`NeighborProvider`] - enumerate the out-neighbours of a node
//! - [`WeightProvider`] - resolve the weight of the edge between two nodes
//!
//! Both are implemented by [`Graph`](crate::graph::Graph) and by plain closures,
//! so the engines work equally over a `Graph`, over a `HashMap` adjacency table
//! or over an implicit graph computed on the fly.
//!
//! # Closures
//!
//! Any `Fn(N) -> I` where `I: IntoIterator<Item = N>` is a [`NeighborProvider`],
//! and any `Fn(N, N) -> Option<W>` is a [`WeightProvider`]. Because the engines
//! are generic over the capability rather than over `Fn`, closure parameters need
//! explicit type annotations:
//!
//! ```rust
//! use std::collections::HashMap;
//! use graphsearch::graph::NeighborProvider;
//!
//! let adjacency: HashMap<u32, Vec<u32>> = HashMap::from([(1, vec![2, 3]), (2, vec![3])]);
//! let neighbors = |n: u32| adjacency.get(&n).cloned().unwrap_or_default();
//!
//! let succ: Vec<u32> = neighbors.neighbors(1).collect();
//! assert_eq!(succ, vec![2, 3]);
//! ```

/// Trait for anything that can enumerate the out-neighbours of a node.
///
/// # Required Methods
///
/// - [`neighbors`](NeighborProvider::neighbors) - Returns an iterator over the out-neighbours
///
/// # Contract
///
/// The iterator may yield a neighbour more than once (parallel edges); engines
/// treat repeats as a single neighbour. Unknown nodes should yield an empty
/// iterator rather than panic, so engines can be pointed at any start node.
pub trait NeighborProvider<N> {
    /// Returns an iterator over the out-neighbours of `node`.
    ///
    /// For a directed edge `(u, v)`, `v` is a neighbour of `u`. In an undirected
    /// graph both endpoints are neighbours of each other.
    fn neighbors(&self, node: N) -> impl Iterator<Item = N>;
}

/// Trait for anything that can report the weight of an edge.
///
/// # Required Methods
///
/// - [`weight`](WeightProvider::weight) - Returns the weight of the edge `from -> to`
///
/// # Contract
///
/// When several parallel edges connect `from` to `to`, implementations return
/// the **minimum** of their weights: the cheapest parallel edge wins. `None`
/// means there is no such edge; engines skip the neighbour in that case.
pub trait WeightProvider<N, W> {
    /// Returns the (minimum) weight of the edge from `from` to `to`.
    fn weight(&self, from: N, to: N) -> Option<W>;
}

impl<N, F, I> NeighborProvider<N> for F
where
    F: Fn(N) -> I,
    I: IntoIterator<Item = N>,
{
    fn neighbors(&self, node: N) -> impl Iterator<Item = N> {
        self(node).into_iter()
    }
}

impl<N, W, F> WeightProvider<N, W> for F
where
    F: Fn(N, N) -> Option<W>,
{
    fn weight(&self, from: N, to: N) -> Option<W> {
        self(from, to)
    }
}
