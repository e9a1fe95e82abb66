//! Vertex handle implementation for graph containers.
//!
//! This module provides the [`VertexId`] type, the stable identity of a vertex
//! inside a [`Graph`](crate::graph::Graph). The newtype wrapper keeps vertex
//! handles apart from plain integers and from payload values.

use std::fmt;

/// A stable, strongly-typed handle for a vertex stored in a [`Graph`](crate::graph::Graph).
///
/// `VertexId` wraps the index of the vertex's slot in the graph arena. Handles are
/// assigned sequentially starting from 0 when vertices are added, and a handle is
/// **never reused or renumbered**: removing a vertex leaves its slot empty, so a
/// stale handle can be detected instead of silently aliasing a newer vertex.
///
/// Equality is identity. Two vertices carrying equal payloads still have distinct
/// handles; algorithms that need payload equality go through a comparator.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::{UnweightedGraph, VertexId};
///
/// let mut graph: UnweightedGraph<&str> = UnweightedGraph::directed();
/// let a: VertexId = graph.add_vertex("A");
/// let b: VertexId = graph.add_vertex("A");
///
/// // Same payload, different identity
/// assert_ne!(a, b);
///
/// use std::collections::HashMap;
/// let mut data: HashMap<VertexId, i32> = HashMap::new();
/// data.insert(a, 42);
/// ```
///
/// # Thread Safety
///
/// `VertexId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw slot index.
    ///
    /// This constructor is intended for tests and for callers that keep
    /// per-vertex side tables. Normal usage obtains handles from
    /// [`Graph::add_vertex`](crate::graph::Graph::add_vertex); a handle built by hand
    /// is only meaningful if the corresponding slot is live.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw slot index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw slot index of this handle.
    ///
    /// The index is suitable for indexing dense per-vertex vectors sized to
    /// [`Graph::capacity_hint`](crate::graph::Graph::capacity_hint).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
