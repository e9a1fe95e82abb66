//! Per-vertex adjacency storage.
//!
//! A [`Graph`](crate::graph::Graph) is parameterized over the adjacency structure
//! of its vertices, which fixes at compile time whether the graph is weighted:
//!
//! - [`NeighborSet`] - unweighted, an insertion-ordered set of neighbour handles
//! - [`WeightMap`] - weighted, neighbour handle to an ordered list of weights,
//!   supporting parallel edges with distinct weights
//!
//! Both keep neighbours in insertion order so that traversal order, and with it
//! every algorithm result, is reproducible.

use std::fmt;

use crate::graph::{
    vertex::VertexId,
    weight::{self, Weight},
};

/// Adjacency structure of a single vertex.
///
/// The trait is implemented by [`NeighborSet`] and [`WeightMap`]. All mutation
/// goes through [`Graph`](crate::graph::Graph), which is responsible for the
/// mirrored-edge and dangling-reference invariants; an `Adjacency` only manages
/// the outgoing edges of one vertex.
pub trait Adjacency: Default + Clone + fmt::Debug {
    /// Per-edge label: `()` for unweighted edges, the weight for weighted ones.
    type Label: Copy + PartialEq + fmt::Debug;

    /// Snapshot item returned by [`edges`](Adjacency::edges).
    type Edge: Clone + fmt::Debug;

    /// Inserts an edge to `target`.
    ///
    /// Returns `false` if an identical edge is already present (same target for
    /// unweighted adjacency, same target and weight for weighted adjacency).
    fn insert(&mut self, target: VertexId, label: Self::Label) -> bool;

    /// Removes exactly one edge to `target` matching `label`.
    ///
    /// Returns `false` if no such edge exists.
    fn remove(&mut self, target: VertexId, label: Self::Label) -> bool;

    /// Removes every edge to `target`, returning how many edges were dropped.
    fn retract(&mut self, target: VertexId) -> usize;

    /// Returns `true` if at least one edge to `target` exists.
    fn contains(&self, target: VertexId) -> bool;

    /// Returns `true` if an edge to `target` with exactly `label` exists.
    fn contains_label(&self, target: VertexId, label: Self::Label) -> bool;

    /// Iterates the distinct neighbours in insertion order.
    fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Iterates the labels of all edges to `target` (empty if none).
    fn labels(&self, target: VertexId) -> impl Iterator<Item = Self::Label> + '_;

    /// Returns an owned snapshot of all outgoing edges.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Returns the number of distinct neighbours.
    fn degree(&self) -> usize;

    /// Returns the number of edges, counting parallel edges individually.
    fn edge_count(&self) -> usize;
}

/// Unweighted adjacency: a set of neighbour handles kept in insertion order.
///
/// Membership checks are linear in the out-degree, which keeps iteration order
/// stable and storage compact for the sparse graphs this crate targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborSet {
    targets: Vec<VertexId>,
}

impl NeighborSet {
    /// Creates an empty neighbour set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Adjacency for NeighborSet {
    type Label = ();
    type Edge = VertexId;

    fn insert(&mut self, target: VertexId, _label: ()) -> bool {
        if self.targets.contains(&target) {
            return false;
        }
        self.targets.push(target);
        true
    }

    fn remove(&mut self, target: VertexId, _label: ()) -> bool {
        self.retract(target) > 0
    }

    fn retract(&mut self, target: VertexId) -> usize {
        match self.targets.iter().position(|&t| t == target) {
            Some(pos) => {
                self.targets.remove(pos);
                1
            }
            None => 0,
        }
    }

    fn contains(&self, target: VertexId) -> bool {
        self.targets.contains(&target)
    }

    fn contains_label(&self, target: VertexId, _label: ()) -> bool {
        self.contains(target)
    }

    fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.targets.iter().copied()
    }

    fn labels(&self, target: VertexId) -> impl Iterator<Item = ()> + '_ {
        self.contains(target).then_some(()).into_iter()
    }

    fn edges(&self) -> Vec<VertexId> {
        self.targets.clone()
    }

    fn degree(&self) -> usize {
        self.targets.len()
    }

    fn edge_count(&self) -> usize {
        self.targets.len()
    }
}

/// Weighted adjacency supporting parallel edges.
///
/// Each neighbour maps to the list of weights of the edges leading to it, in
/// insertion order. Two edges to the same neighbour are both retained when
/// their weights differ; inserting an edge with an existing weight is a no-op.
///
/// # Invariant
///
/// A neighbour is never present with an empty weight list: removing the last
/// weight removes the neighbour entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMap<W> {
    entries: Vec<(VertexId, Vec<W>)>,
}

impl<W> Default for WeightMap<W> {
    fn default() -> Self {
        WeightMap {
            entries: Vec::new(),
        }
    }
}

impl<W: Weight> WeightMap<W> {
    /// Creates an empty weight map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cheapest weight among all parallel edges to `target`.
    #[must_use]
    pub fn min_weight(&self, target: VertexId) -> Option<W> {
        self.weights(target).and_then(|ws| weight::min_weight(ws.iter().copied()))
    }

    /// Returns all weights of edges to `target`, in insertion order.
    #[must_use]
    pub fn weights(&self, target: VertexId) -> Option<&[W]> {
        self.entries
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, ws)| ws.as_slice())
    }

    fn position(&self, target: VertexId) -> Option<usize> {
        self.entries.iter().position(|(t, _)| *t == target)
    }
}

impl<W: Weight> Adjacency for WeightMap<W> {
    type Label = W;
    type Edge = (VertexId, Vec<W>);

    fn insert(&mut self, target: VertexId, label: W) -> bool {
        match self.position(target) {
            Some(pos) => {
                let weights = &mut self.entries[pos].1;
                if weights.contains(&label) {
                    return false;
                }
                weights.push(label);
                true
            }
            None => {
                self.entries.push((target, vec![label]));
                true
            }
        }
    }

    fn remove(&mut self, target: VertexId, label: W) -> bool {
        let Some(pos) = self.position(target) else {
            return false;
        };
        let weights = &mut self.entries[pos].1;
        let Some(wpos) = weights.iter().position(|w| *w == label) else {
            return false;
        };
        weights.remove(wpos);
        if weights.is_empty() {
            self.entries.remove(pos);
        }
        true
    }

    fn retract(&mut self, target: VertexId) -> usize {
        match self.position(target) {
            Some(pos) => self.entries.remove(pos).1.len(),
            None => 0,
        }
    }

    fn contains(&self, target: VertexId) -> bool {
        self.position(target).is_some()
    }

    fn contains_label(&self, target: VertexId, label: W) -> bool {
        self.weights(target).is_some_and(|ws| ws.contains(&label))
    }

    fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    fn labels(&self, target: VertexId) -> impl Iterator<Item = W> + '_ {
        self.weights(target).unwrap_or(&[]).iter().copied()
    }

    fn edges(&self) -> Vec<(VertexId, Vec<W>)> {
        self.entries.clone()
    }

    fn degree(&self) -> usize {
        self.entries.len()
    }

    fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, ws)| ws.len()).sum()
    }
}
