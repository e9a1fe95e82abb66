//! Core graph container.
//!
//! This module provides [`Graph`], the vertex arena every other part of the crate
//! builds on. Vertices live in slots addressed by [`VertexId`]; adjacency is
//! stored as handles only, never as references, so there are no ownership cycles
//! between vertices and their neighbours.
//!
//! # Invariants
//!
//! `Graph` upholds the following at all times, not just after construction:
//!
//! - **Mirroring**: in an [`Direction::Undirected`] graph, `a -> b` (with label `w`)
//!   exists if and only if `b -> a` (with label `w`) exists.
//! - **No dangling handles**: [`remove_vertex`](Graph::remove_vertex) retracts every
//!   edge pointing at the removed vertex before it returns.
//! - **Stable identity**: handles are never reused or renumbered.

use std::fmt;

use strum::Display;
use tracing::debug;

use crate::{
    graph::{
        adjacency::{Adjacency, NeighborSet, WeightMap},
        traits::{NeighborProvider, WeightProvider},
        vertex::VertexId,
        weight::Weight,
    },
    Error, Result,
};

/// Edge direction mode of a [`Graph`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Edges are one-way.
    #[default]
    Directed,
    /// Every edge is stored together with its mirror.
    Undirected,
}

/// Internal storage for one vertex.
#[derive(Debug, Clone)]
struct VertexSlot<T, A> {
    /// User-provided payload
    value: T,
    /// Outgoing edges
    adjacency: A,
}

/// A graph of payload-carrying vertices with a compile-time adjacency representation.
///
/// `Graph<T, A>` stores:
///
/// - a payload of type `T` per vertex
/// - an adjacency structure `A` per vertex: [`NeighborSet`] for unweighted graphs,
///   [`WeightMap<W>`] for weighted multigraphs
/// - a [`Direction`] flag, fixed when the graph is created
///
/// The aliases [`UnweightedGraph`] and [`WeightedGraph`] name the two common
/// instantiations.
///
/// # Memory Layout
///
/// Vertices live in a `Vec` of optional slots indexed by [`VertexId`]. Removing a
/// vertex empties its slot instead of shifting later slots, which keeps every other
/// handle valid. Slots are not recycled.
///
/// # Performance Characteristics
///
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | O(1) amortized | Appends a slot |
/// | `remove_vertex` (directed) | O(V · degree) | Scans every adjacency for incoming edges |
/// | `remove_vertex` (undirected) | O(degree²) | Walks only the mirrored neighbours |
/// | `add_edge` / `remove_edge` | O(degree) | Linear scan of the adjacency |
/// | `vertices` | O(V) | Snapshot |
///
/// # Thread Safety
///
/// `Graph` is [`Send`] and [`Sync`] when `T` and `A` are. Mutation requires
/// `&mut self`, so the borrow checker rules out mutating a graph while any
/// traversal or search is reading it.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::{WeightedGraph, Direction};
///
/// let mut graph: WeightedGraph<&str, u32> = WeightedGraph::undirected();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
///
/// assert!(graph.add_edge(a, b, 4)?);
/// assert!(graph.add_edge(a, b, 2)?);   // parallel edge, different weight
/// assert!(!graph.add_edge(a, b, 4)?);  // duplicate
///
/// // Undirected: the mirror exists too
/// assert!(graph.has_edge_with(b, a, 2));
/// assert_eq!(graph.direction(), Direction::Undirected);
/// # Ok::<(), graphsearch::Error>(())
/// ```
#[derive(Clone)]
pub struct Graph<T, A: Adjacency = NeighborSet> {
    /// Vertex arena, `None` marks a removed vertex
    slots: Vec<Option<VertexSlot<T, A>>>,
    /// Number of live vertices
    live: usize,
    /// Direction mode
    direction: Direction,
}

/// A graph whose edges carry no weight.
pub type UnweightedGraph<T> = Graph<T, NeighborSet>;

/// A weighted multigraph: parallel edges with distinct weights are retained.
pub type WeightedGraph<T, W> = Graph<T, WeightMap<W>>;

impl<T, A: Adjacency> Default for Graph<T, A> {
    fn default() -> Self {
        Self::new(Direction::Directed)
    }
}

impl<T: fmt::Debug, A: Adjacency> fmt::Debug for Graph<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (id, slot) in self.live_slots() {
            map.entry(&id, &(&slot.value, &slot.adjacency));
        }
        map.finish()
    }
}

impl<T, A: Adjacency> Graph<T, A> {
    /// Creates a new empty graph with the given direction mode.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Graph {
            slots: Vec::new(),
            live: 0,
            direction,
        }
    }

    /// Creates a new empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Creates a new empty graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(direction: Direction, vertex_capacity: usize) -> Self {
        Graph {
            slots: Vec::with_capacity(vertex_capacity),
            live: 0,
            direction,
        }
    }

    /// Returns the direction mode chosen at construction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` for undirected graphs.
    #[must_use]
    pub fn is_undirected(&self) -> bool {
        self.direction == Direction::Undirected
    }

    /// Adds a new vertex carrying `value` and returns its handle.
    ///
    /// Handles are assigned sequentially and never reused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphsearch::graph::{UnweightedGraph, VertexId};
    ///
    /// let mut graph: UnweightedGraph<&str> = UnweightedGraph::directed();
    /// let first = graph.add_vertex("first");
    /// let second = graph.add_vertex("second");
    ///
    /// assert_eq!(first, VertexId::new(0));
    /// assert_eq!(second, VertexId::new(1));
    /// ```
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.slots.len());
        self.slots.push(Some(VertexSlot {
            value,
            adjacency: A::default(),
        }));
        self.live += 1;
        id
    }

    /// Removes a vertex together with every edge that touches it.
    ///
    /// Returns the payload of the removed vertex, or `None` if `vertex` was not live.
    ///
    /// Incoming edges are retracted before this call returns, so no later query or
    /// algorithm can observe the removed handle:
    ///
    /// - **Directed** graphs scan every vertex's adjacency, because incoming edges
    ///   may come from vertices the removed vertex has no link to.
    /// - **Undirected** graphs only visit the removed vertex's own neighbours; the
    ///   mirroring invariant guarantees those are the only vertices pointing back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphsearch::graph::UnweightedGraph;
    ///
    /// let mut graph: UnweightedGraph<&str> = UnweightedGraph::directed();
    /// let a = graph.add_vertex("A");
    /// let b = graph.add_vertex("B");
    /// graph.add_edge(a, b, ())?;
    ///
    /// assert_eq!(graph.remove_vertex(b), Some("B"));
    /// assert!(!graph.has_edge(a, b));
    /// assert_eq!(graph.remove_vertex(b), None);
    /// # Ok::<(), graphsearch::Error>(())
    /// ```
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Option<T> {
        let slot = self.slots.get_mut(vertex.index())?.take()?;
        self.live -= 1;

        let mut retracted = 0usize;
        match self.direction {
            Direction::Undirected => {
                for neighbor in slot.adjacency.neighbors() {
                    if let Some(Some(other)) = self.slots.get_mut(neighbor.index()) {
                        retracted += other.adjacency.retract(vertex);
                    }
                }
            }
            Direction::Directed => {
                for other in self.slots.iter_mut().flatten() {
                    retracted += other.adjacency.retract(vertex);
                }
            }
        }

        debug!(
            %vertex,
            outgoing = slot.adjacency.edge_count(),
            incoming = retracted,
            "removed vertex"
        );
        Some(slot.value)
    }

    /// Returns `true` if `vertex` is a live vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        matches!(self.slots.get(vertex.index()), Some(Some(_)))
    }

    /// Returns the payload of `vertex`, or `None` if it is not live.
    #[must_use]
    pub fn value(&self, vertex: VertexId) -> Option<&T> {
        self.slot(vertex).ok().map(|slot| &slot.value)
    }

    /// Returns a mutable reference to the payload of `vertex`.
    pub fn value_mut(&mut self, vertex: VertexId) -> Option<&mut T> {
        self.slot_mut(vertex).ok().map(|slot| &mut slot.value)
    }

    /// Returns a snapshot of all live vertex handles in ascending order.
    ///
    /// The snapshot is independent of the graph: mutating the graph afterwards does
    /// not affect the returned vector.
    #[must_use]
    pub fn vertices(&self) -> Vec<VertexId> {
        self.live_slots().map(|(id, _)| id).collect()
    }

    /// Returns an iterator over all live vertices with their payloads.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.live_slots().map(|(id, slot)| (id, &slot.value))
    }

    /// Returns the number of live vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.live
    }

    /// Returns `true` if the graph has no live vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns one past the highest handle index ever issued.
    ///
    /// Useful for sizing dense per-vertex side tables indexed by
    /// [`VertexId::index`].
    #[must_use]
    pub fn capacity_hint(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of edges.
    ///
    /// Parallel weighted edges are counted individually. In an undirected graph an
    /// edge and its mirror count once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let arcs: usize = self
            .live_slots()
            .map(|(_, slot)| slot.adjacency.edge_count())
            .sum();
        match self.direction {
            Direction::Directed => arcs,
            Direction::Undirected => {
                let loops: usize = self
                    .live_slots()
                    .map(|(id, slot)| slot.adjacency.labels(id).count())
                    .sum();
                (arcs + loops) / 2
            }
        }
    }

    /// Returns the number of distinct out-neighbours of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `vertex` is not live.
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.slot(vertex)?.adjacency.degree())
    }

    /// Adds an edge from `from` to `to` with the given label.
    ///
    /// The label is `()` for unweighted graphs and the edge weight for weighted
    /// graphs. The operation is idempotent: it returns `false` when an edge to `to`
    /// already exists (unweighted) or already exists with exactly this weight
    /// (weighted). A different weight to the same neighbour adds a parallel edge.
    ///
    /// In an undirected graph the mirrored edge `to -> from` is inserted as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either endpoint is not live.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphsearch::graph::UnweightedGraph;
    ///
    /// let mut graph: UnweightedGraph<char> = UnweightedGraph::directed();
    /// let a = graph.add_vertex('A');
    /// let b = graph.add_vertex('B');
    ///
    /// assert!(graph.add_edge(a, b, ())?);
    /// assert!(!graph.add_edge(a, b, ())?);
    /// assert!(!graph.has_edge(b, a));
    /// # Ok::<(), graphsearch::Error>(())
    /// ```
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, label: A::Label) -> Result<bool> {
        match self.direction {
            Direction::Directed => {
                self.check(to)?;
                Ok(self.slot_mut(from)?.adjacency.insert(to, label))
            }
            Direction::Undirected => self.add_mirrored_edge(from, to, label),
        }
    }

    /// Adds an edge together with its mirror, regardless of the direction mode.
    ///
    /// This is the per-call undirected insertion for directed graphs. The mirrored
    /// insertion is performed exactly once and never mirrors back again.
    ///
    /// Returns `true` if either direction was inserted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either endpoint is not live.
    pub fn add_mirrored_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        label: A::Label,
    ) -> Result<bool> {
        self.check(from)?;
        self.check(to)?;

        let forward = self.slot_mut(from)?.adjacency.insert(to, label);
        let mirror = from != to && self.slot_mut(to)?.adjacency.insert(from, label);
        Ok(forward || mirror)
    }

    /// Removes one edge from `from` to `to` matching `label`.
    ///
    /// For weighted graphs exactly one weight entry is removed; the neighbour is
    /// dropped from the adjacency only once its last weight is gone. In an
    /// undirected graph the mirror is removed as well.
    ///
    /// Returns `false` if no matching edge exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either endpoint is not live.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId, label: A::Label) -> Result<bool> {
        match self.direction {
            Direction::Directed => {
                self.check(to)?;
                Ok(self.slot_mut(from)?.adjacency.remove(to, label))
            }
            Direction::Undirected => self.remove_mirrored_edge(from, to, label),
        }
    }

    /// Removes an edge together with its mirror, regardless of the direction mode.
    ///
    /// Returns `true` if either direction was removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either endpoint is not live.
    pub fn remove_mirrored_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        label: A::Label,
    ) -> Result<bool> {
        self.check(from)?;
        self.check(to)?;

        let forward = self.slot_mut(from)?.adjacency.remove(to, label);
        let mirror = from != to && self.slot_mut(to)?.adjacency.remove(from, label);
        Ok(forward || mirror)
    }

    /// Returns `true` if at least one edge leads from `from` to `to`.
    ///
    /// Returns `false` when either handle is not live.
    #[must_use]
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.slot(from)
            .is_ok_and(|slot| slot.adjacency.contains(to))
    }

    /// Returns `true` if an edge from `from` to `to` with exactly `label` exists.
    #[must_use]
    pub fn has_edge_with(&self, from: VertexId, to: VertexId, label: A::Label) -> bool {
        self.slot(from)
            .is_ok_and(|slot| slot.adjacency.contains_label(to, label))
    }

    /// Returns a snapshot of the outgoing edges of `vertex`.
    ///
    /// For unweighted graphs each item is a neighbour handle, for weighted graphs
    /// a `(neighbour, weights)` pair. The snapshot is not a live view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `vertex` is not live.
    pub fn edges(&self, vertex: VertexId) -> Result<Vec<A::Edge>> {
        Ok(self.slot(vertex)?.adjacency.edges())
    }

    /// Returns the vertices with an edge pointing at `vertex`.
    ///
    /// This scans the whole graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `vertex` is not live.
    pub fn in_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.check(vertex)?;
        Ok(self
            .live_slots()
            .filter(|(_, slot)| slot.adjacency.contains(vertex))
            .map(|(id, _)| id)
            .collect())
    }

    /// Returns the vertices without outgoing edges.
    pub fn exit_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.live_slots()
            .filter(|(_, slot)| slot.adjacency.degree() == 0)
            .map(|(id, _)| id)
    }

    /// Verifies the container invariants.
    ///
    /// Returns `true` when no adjacency references a removed vertex and, for
    /// undirected graphs, every edge has a mirror carrying the same labels. The
    /// check is O(V · degree²) and meant for tests and debugging.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.live_slots().all(|(id, slot)| {
            slot.adjacency.neighbors().all(|n| {
                let Ok(other) = self.slot(n) else {
                    return false;
                };
                if !self.is_undirected() {
                    return true;
                }
                slot.adjacency
                    .labels(n)
                    .all(|label| other.adjacency.contains_label(id, label))
            })
        })
    }

    fn live_slots(&self) -> impl Iterator<Item = (VertexId, &VertexSlot<T, A>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (VertexId::new(i), s)))
    }

    fn slot(&self, vertex: VertexId) -> Result<&VertexSlot<T, A>> {
        self.slots
            .get(vertex.index())
            .and_then(Option::as_ref)
            .ok_or(Error::UnknownVertex(vertex))
    }

    fn slot_mut(&mut self, vertex: VertexId) -> Result<&mut VertexSlot<T, A>> {
        self.slots
            .get_mut(vertex.index())
            .and_then(Option::as_mut)
            .ok_or(Error::UnknownVertex(vertex))
    }

    pub(crate) fn check(&self, vertex: VertexId) -> Result<()> {
        self.slot(vertex).map(|_| ())
    }
}

impl<T, W: Weight> Graph<T, WeightMap<W>> {
    /// Returns the weights of all parallel edges from `from` to `to`.
    ///
    /// Returns an empty vector when there is no such edge or a handle is not live.
    #[must_use]
    pub fn weights(&self, from: VertexId, to: VertexId) -> Vec<W> {
        self.slot(from)
            .ok()
            .and_then(|slot| slot.adjacency.weights(to))
            .map(<[W]>::to_vec)
            .unwrap_or_default()
    }
}

impl<T, A: Adjacency> NeighborProvider<VertexId> for Graph<T, A> {
    fn neighbors(&self, node: VertexId) -> impl Iterator<Item = VertexId> {
        self.slots
            .get(node.index())
            .and_then(Option::as_ref)
            .into_iter()
            .flat_map(|slot| slot.adjacency.neighbors())
    }
}

impl<T, W: Weight> WeightProvider<VertexId, W> for Graph<T, WeightMap<W>> {
    fn weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.slot(from).ok()?.adjacency.min_weight(to)
    }
}

// Unweighted edges count as one unit each, so searches measure hop counts.
impl<T, W: Weight> WeightProvider<VertexId, W> for Graph<T, NeighborSet> {
    fn weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.has_edge(from, to).then(W::one)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            container::{Direction, UnweightedGraph, WeightedGraph},
            traits::{NeighborProvider, WeightProvider},
            vertex::VertexId,
        },
        Error,
    };

    /// Creates a diamond graph: A -> B, A -> C, B -> D, C -> D
    fn create_diamond_graph() -> UnweightedGraph<&'static str> {
        let mut graph = UnweightedGraph::directed();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        let d = graph.add_vertex("D");
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();
        graph.add_edge(b, d, ()).unwrap();
        graph.add_edge(c, d, ()).unwrap();
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: UnweightedGraph<()> = UnweightedGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.direction(), Direction::Directed);
    }

    #[test]
    fn test_add_vertex_sequential_handles() {
        let mut graph: UnweightedGraph<&str> = UnweightedGraph::directed();
        assert_eq!(graph.add_vertex("A"), VertexId::new(0));
        assert_eq!(graph.add_vertex("B"), VertexId::new(1));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertices(), vec![VertexId::new(0), VertexId::new(1)]);
    }

    #[test]
    fn test_value_access() {
        let mut graph: UnweightedGraph<String> = UnweightedGraph::directed();
        let a = graph.add_vertex(String::from("hello"));

        if let Some(value) = graph.value_mut(a) {
            value.push_str(" world");
        }
        assert_eq!(graph.value(a).map(String::as_str), Some("hello world"));
        assert_eq!(graph.value(VertexId::new(99)), None);
    }

    #[test]
    fn test_add_edge_unknown_vertex() {
        let mut graph: UnweightedGraph<()> = UnweightedGraph::directed();
        let a = graph.add_vertex(());

        let err = graph.add_edge(a, VertexId::new(9), ()).unwrap_err();
        assert_eq!(err, Error::UnknownVertex(VertexId::new(9)));

        let err = graph.add_edge(VertexId::new(7), a, ()).unwrap_err();
        assert_eq!(err, Error::UnknownVertex(VertexId::new(7)));
    }

    #[test]
    fn test_unweighted_edge_is_idempotent() {
        let mut graph: UnweightedGraph<()> = UnweightedGraph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());

        assert!(graph.add_edge(a, b, ()).unwrap());
        assert!(!graph.add_edge(a, b, ()).unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
    }

    #[test]
    fn test_weighted_parallel_edges() {
        let mut graph: WeightedGraph<(), u32> = WeightedGraph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());

        assert!(graph.add_edge(a, b, 7).unwrap());
        assert!(graph.add_edge(a, b, 3).unwrap());
        assert!(!graph.add_edge(a, b, 7).unwrap());

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weights(a, b), vec![7, 3]);
        let cheapest: Option<u32> = graph.weight(a, b);
        assert_eq!(cheapest, Some(3));
        assert_eq!(graph.edges(a).unwrap(), vec![(b, vec![7, 3])]);
    }

    #[test]
    fn test_weighted_remove_edge_one_entry() {
        let mut graph: WeightedGraph<(), u32> = WeightedGraph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge(a, b, 7).unwrap();
        graph.add_edge(a, b, 3).unwrap();

        assert!(graph.remove_edge(a, b, 7).unwrap());
        assert!(graph.has_edge(a, b));
        assert!(!graph.remove_edge(a, b, 7).unwrap());

        assert!(graph.remove_edge(a, b, 3).unwrap());
        assert!(!graph.has_edge(a, b));
        assert!(graph.edges(a).unwrap().is_empty());
    }

    #[test]
    fn test_undirected_mirrors_edges() {
        let mut graph: WeightedGraph<(), i32> = WeightedGraph::undirected();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());

        assert!(graph.add_edge(a, b, 5).unwrap());
        assert!(graph.has_edge_with(a, b, 5));
        assert!(graph.has_edge_with(b, a, 5));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.is_consistent());

        assert!(graph.remove_edge(b, a, 5).unwrap());
        assert!(!graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph: UnweightedGraph<()> = UnweightedGraph::undirected();
        let a = graph.add_vertex(());

        assert!(graph.add_edge(a, a, ()).unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(a).unwrap(), 1);
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_mirrored_edge_on_directed_graph() {
        let mut graph: UnweightedGraph<()> = UnweightedGraph::directed();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());

        assert!(graph.add_mirrored_edge(a, b, ()).unwrap());
        assert!(graph.has_edge(a, b));
        assert!(graph.has_edge(b, a));
        assert_eq!(graph.edge_count(), 2);

        assert!(graph.remove_mirrored_edge(a, b, ()).unwrap());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_vertex_directed_retracts_incoming() {
        let mut graph = create_diamond_graph();
        let (a, b, c, d) = (
            VertexId::new(0),
            VertexId::new(1),
            VertexId::new(2),
            VertexId::new(3),
        );

        // D has no outgoing edges, its incoming edges come from B and C
        assert_eq!(graph.remove_vertex(d), Some("D"));
        assert!(!graph.contains_vertex(d));
        assert!(!graph.has_edge(b, d));
        assert!(!graph.has_edge(c, d));
        assert!(graph.has_edge(a, b));
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_remove_vertex_undirected() {
        let mut graph: UnweightedGraph<u8> = UnweightedGraph::undirected();
        let hub = graph.add_vertex(0);
        let spokes: Vec<VertexId> = (1..=4).map(|i| graph.add_vertex(i)).collect();
        for &spoke in &spokes {
            graph.add_edge(hub, spoke, ()).unwrap();
        }

        assert_eq!(graph.remove_vertex(hub), Some(0));
        for &spoke in &spokes {
            assert!(graph.neighbors(spoke).next().is_none());
        }
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_removed_handles_are_not_reused() {
        let mut graph: UnweightedGraph<&str> = UnweightedGraph::directed();
        let a = graph.add_vertex("A");
        graph.remove_vertex(a);
        let b = graph.add_vertex("B");

        assert_ne!(a, b);
        assert_eq!(graph.value(a), None);
        assert_eq!(graph.vertices(), vec![b]);
        assert_eq!(graph.capacity_hint(), 2);
        assert!(matches!(graph.edges(a), Err(Error::UnknownVertex(_))));
    }

    #[test]
    fn test_vertices_is_a_snapshot() {
        let mut graph = create_diamond_graph();
        let snapshot = graph.vertices();
        graph.remove_vertex(VertexId::new(0));

        assert_eq!(snapshot.len(), 4);
        assert_eq!(graph.vertices().len(), 3);
    }

    #[test]
    fn test_in_neighbors_and_exits() {
        let graph = create_diamond_graph();
        let d = VertexId::new(3);

        let preds = graph.in_neighbors(d).unwrap();
        assert_eq!(preds, vec![VertexId::new(1), VertexId::new(2)]);
        assert_eq!(graph.exit_vertices().collect::<Vec<_>>(), vec![d]);
    }

    #[test]
    fn test_unweighted_weight_provider_counts_hops() {
        let graph = create_diamond_graph();
        let w: Option<u32> = graph.weight(VertexId::new(0), VertexId::new(1));
        assert_eq!(w, Some(1));
        let w: Option<u32> = graph.weight(VertexId::new(1), VertexId::new(0));
        assert_eq!(w, None);
    }

    #[test]
    fn test_neighbors_of_removed_vertex_is_empty() {
        let mut graph = create_diamond_graph();
        let a = VertexId::new(0);
        graph.remove_vertex(a);
        assert_eq!(graph.neighbors(a).count(), 0);
        assert_eq!(graph.neighbors(VertexId::new(42)).count(), 0);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Directed.to_string(), "directed");
        assert_eq!(Direction::Undirected.to_string(), "undirected");
    }
}
