//! Graph search algorithms.
//!
//! Every algorithm in this module is written against the capability traits
//! [`NeighborProvider`](crate::graph::NeighborProvider) and
//! [`WeightProvider`](crate::graph::WeightProvider) only. They run unchanged over
//! a [`Graph`](crate::graph::Graph), over caller-owned adjacency tables, or over
//! graphs computed on the fly by closures.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`traverse`] - Breadth-first or depth-first visitation
//! - [`traverse_until`] - Visitation with early exit and optional path reconstruction
//!
//! ## Shortest Paths
//!
//! - [`dijkstra`] / [`dijkstra_with`] - Single-source distances for non-negative weights
//! - [`dijkstra_path`] / [`dijkstra_path_with`] - Cheapest path to one target
//! - [`a_star`] / [`a_star_with`] - Heuristic-guided cheapest path
//! - [`dijkstra_batch`] - Parallel multi-source distances
//!
//! ## Topological Ordering
//!
//! - [`topological_sort`] - Dependency order with cycle detection
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS/DFS | O(V + E) | Reachability, fewest-hops paths (BFS) |
//! | Dijkstra | O((V + E) log E) | Weighted distances from one source |
//! | A* | O((V + E) log E) worst case | Weighted point-to-point with a good heuristic |
//! | Topological Sort | O(V + E) | Dependency ordering |
//!
//! # Examples
//!
//! ```rust
//! use graphsearch::graph::{algorithms, TraversalOptions};
//!
//! let neighbors = |n: u32| match n {
//!     1 => vec![2, 3],
//!     2 => vec![4],
//!     _ => vec![],
//! };
//! let weights = |_: u32, _: u32| Some(1u32);
//!
//! let visited = algorithms::traverse(&neighbors, 1, &TraversalOptions::dfs());
//! assert_eq!(visited.order, vec![1, 2, 4, 3]);
//!
//! let paths = algorithms::dijkstra(&neighbors, &weights, 1)?;
//! assert_eq!(paths.distance(4), Some(2));
//!
//! let order = algorithms::topological_sort([1, 2, 3, 4], &neighbors)?;
//! assert_eq!(order[0], 1);
//! # Ok::<(), graphsearch::Error>(())
//! ```

mod astar;
mod batch;
mod dijkstra;
mod frontier;
mod topological;
mod traversal;

pub use astar::{a_star, a_star_with};
pub use batch::dijkstra_batch;
pub use dijkstra::{
    dijkstra, dijkstra_path, dijkstra_path_with, dijkstra_with, SearchPath, ShortestPaths,
};
pub use frontier::{FrontierEntry, PriorityFrontier};
pub use topological::topological_sort;
pub use traversal::{traverse, traverse_until, TraversalResult};
