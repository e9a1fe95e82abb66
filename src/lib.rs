// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphsearch
//!
//! A generic graph representation with the classic search algorithms on top of it.
//! `graphsearch` provides a vertex arena supporting directed and undirected,
//! weighted and unweighted multigraphs, and search engines that work over any
//! graph-like structure through two small capability traits.
//!
//! ## Features
//!
//! - **Arena storage** - Stable [`VertexId`](graph::VertexId) handles, no reference cycles
//! - **Compile-time weighting** - [`UnweightedGraph`](graph::UnweightedGraph) or
//!   [`WeightedGraph`](graph::WeightedGraph) with parallel edges
//! - **Enforced invariants** - Mirrored edges in undirected graphs, no dangling handles
//! - **Storage-agnostic engines** - BFS/DFS, Dijkstra, A* and topological sort over
//!   closures as well as over [`Graph`](graph::Graph)
//! - **Bounded searches** - Optional deadline and expansion limits per search
//! - **Parallel batches** - Multi-source Dijkstra over the rayon thread pool
//!
//! ## Quick Start
//!
//! Add `graphsearch` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! graphsearch = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphsearch::prelude::*;
//!
//! let mut graph: WeightedGraph<&str, u32> = WeightedGraph::undirected();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! graph.add_edge(a, b, 1)?;
//! graph.add_edge(b, c, 1)?;
//! graph.add_edge(a, c, 5)?;
//!
//! let paths = graph.dijkstra(a)?;
//! assert_eq!(paths.distance(c), Some(2));
//! # Ok::<(), graphsearch::Error>(())
//! ```
//!
//! ### Searching Without a Graph
//!
//! The engines only need a neighbour function and, for weighted searches, a
//! weight function:
//!
//! ```rust
//! use graphsearch::graph::{algorithms::a_star, TraversalOptions};
//!
//! // Number line where every step costs one
//! let neighbors = |n: i64| vec![n - 1, n + 1];
//! let weights = |_: i64, _: i64| Some(1u64);
//! let distance = |a: i64, b: i64| a.abs_diff(b);
//!
//! let path = a_star(&neighbors, &weights, distance, 0, 5)?;
//! assert_eq!(path.cost, Some(5));
//! # Ok::<(), graphsearch::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ### Model and Container
//!
//! - [`graph::Graph`] - Vertex arena with a fixed [`Direction`](graph::Direction)
//! - [`graph::Adjacency`] - Per-vertex edge storage, selected by type parameter
//! - [`graph::RandomGraphConfig`] - Seeded random graphs for tests and benchmarks
//!
//! ### Engines
//!
//! - [`graph::algorithms`] - Traversal, shortest paths and topological ordering,
//!   written against [`NeighborProvider`](graph::NeighborProvider) and
//!   [`WeightProvider`](graph::WeightProvider)
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). An unreachable
//! target is not an error; it is reported as an empty path or a missing distance:
//!
//! ```rust
//! use graphsearch::{graph::UnweightedGraph, Error};
//!
//! let mut graph: UnweightedGraph<u32> = UnweightedGraph::directed();
//! let a = graph.add_vertex(1);
//! let b = graph.add_vertex(2);
//! graph.add_edge(a, b, ())?;
//!
//! let path = graph.shortest_path(b, a)?;
//! assert!(path.nodes.is_empty());
//!
//! graph.add_edge(b, a, ())?;
//! match graph.topological_sort() {
//!     Ok(order) => println!("order: {order:?}"),
//!     Err(Error::CycleDetected { cycle }) => println!("cycle: {cycle}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! # Ok::<(), graphsearch::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` when a
//! search starts or finishes and when a vertex is removed, `trace` for every edge
//! relaxation, `warn` when a topological sort hits a cycle. Install any tracing
//! subscriber to see them.
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run graph_ops --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphsearch::prelude::*;
///
/// let mut graph: UnweightedGraph<u8> = UnweightedGraph::directed();
/// let a = graph.add_vertex(1);
/// let result = graph.traverse(a, &TraversalOptions::dfs())?;
/// assert_eq!(result.order, vec![a]);
/// # Ok::<(), graphsearch::Error>(())
/// ```
pub mod prelude;

/// Graph model, container and search algorithms.
pub mod graph;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use graphsearch::{graph::UnweightedGraph, Result};
///
/// fn chain(len: usize) -> Result<UnweightedGraph<usize>> {
///     let mut graph = UnweightedGraph::directed();
///     let ids: Vec<_> = (0..len).map(|i| graph.add_vertex(i)).collect();
///     for pair in ids.windows(2) {
///         graph.add_edge(pair[0], pair[1], ())?;
///     }
///     Ok(graph)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphsearch` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust
/// use graphsearch::{graph::TraversalMode, Error};
///
/// match TraversalMode::parse("sideways") {
///     Ok(mode) => println!("mode: {mode}"),
///     Err(Error::UnknownTraversalMode(name)) => println!("no such mode: {name}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
pub use error::Error;
