//! Graph representation and search engine.
//!
//! This module provides the vertex/edge model, the [`Graph`] container and the
//! capability traits the search algorithms are written against.
//!
//! # Architecture
//!
//! The module is split into three layers:
//!
//! - **Model**: [`VertexId`] handles, the [`Weight`] bound and the per-vertex
//!   [`Adjacency`] representations [`NeighborSet`] and [`WeightMap`]
//! - **Container**: [`Graph`], an arena of vertices that upholds the mirrored-edge
//!   and no-dangling-handle invariants, plus seeded random generation
//! - **Engines**: [`algorithms`], which only see [`NeighborProvider`] and
//!   [`WeightProvider`] and therefore also run over closures and foreign graphs
//!
//! # Key Components
//!
//! - [`Graph`] / [`UnweightedGraph`] / [`WeightedGraph`] - The container
//! - [`NeighborProvider`] / [`WeightProvider`] - Capabilities consumed by the engines
//! - [`TraversalOptions`] / [`SearchConfig`] - Options for traversals and searches
//! - [`RandomGraphConfig`] - Seeded random graph generation
//!
//! # Examples
//!
//! ```rust
//! use graphsearch::graph::{TraversalOptions, WeightedGraph};
//!
//! let mut graph: WeightedGraph<&str, u32> = WeightedGraph::directed();
//! let home = graph.add_vertex("home");
//! let work = graph.add_vertex("work");
//! let gym = graph.add_vertex("gym");
//!
//! graph.add_edge(home, work, 10)?;
//! graph.add_edge(home, gym, 3)?;
//! graph.add_edge(gym, work, 4)?;
//!
//! let path = graph.shortest_path(home, work)?;
//! assert_eq!(path.nodes, vec![home, gym, work]);
//! assert_eq!(path.cost, Some(7));
//!
//! let visited = graph.traverse(home, &TraversalOptions::bfs())?;
//! assert_eq!(visited.visited_count(), 3);
//! # Ok::<(), graphsearch::Error>(())
//! ```

mod adjacency;
pub mod algorithms;
mod config;
mod container;
mod random;
mod search;
mod traits;
mod vertex;
mod weight;

pub use adjacency::{Adjacency, NeighborSet, WeightMap};
pub use config::{SearchConfig, TraversalMode, TraversalOptions};
pub use container::{Direction, Graph, UnweightedGraph, WeightedGraph};
pub use random::RandomGraphConfig;
pub use traits::{NeighborProvider, WeightProvider};
pub use vertex::VertexId;
pub use weight::Weight;
