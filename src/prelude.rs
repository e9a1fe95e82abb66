//! # graphsearch Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphsearch library. Import this module to get quick access to the container,
//! the capability traits and the search entry points.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphsearch operations
pub use crate::Error;

/// The result type used throughout graphsearch
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Vertex arena and its common instantiations
pub use crate::graph::{Direction, Graph, UnweightedGraph, VertexId, WeightedGraph};

/// Per-vertex adjacency representations and the weight bound
pub use crate::graph::{Adjacency, NeighborSet, Weight, WeightMap};

/// Seeded random graph generation
pub use crate::graph::RandomGraphConfig;

// ================================================================================================
// Capabilities
// ================================================================================================

/// Capability traits consumed by the search engines
pub use crate::graph::{NeighborProvider, WeightProvider};

// ================================================================================================
// Search Engines
// ================================================================================================

/// Traversal and search configuration
pub use crate::graph::{SearchConfig, TraversalMode, TraversalOptions};

/// Free-standing search algorithms over capability providers
pub use crate::graph::algorithms::{
    a_star, dijkstra, dijkstra_batch, dijkstra_path, topological_sort, traverse,
    traverse_until,
};

/// Search results
pub use crate::graph::algorithms::{SearchPath, ShortestPaths, TraversalResult};
