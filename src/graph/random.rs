//! Seeded random graph generation.
//!
//! Random graphs are used by the property tests, the benchmarks and the fuzz
//! target. Generation is driven by a [`RandomGraphConfig`] and is fully
//! deterministic: the same configuration, seed included, always produces the
//! same graph.
//!
//! # Shape
//!
//! `vertex_count` vertices are created first, payload `i` for the `i`-th vertex.
//! Then every vertex draws a uniform edge count in `[min_edges, max_edges]` and
//! connects to that many uniformly chosen targets. Self-loops and duplicate
//! targets are valid outcomes; duplicates collapse through the idempotent
//! [`add_edge`](crate::graph::Graph::add_edge), so the realised out-degree can be
//! lower than the drawn count.

use std::ops::RangeInclusive;

use rand::{distributions::uniform::SampleUniform, rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::{
    graph::{
        container::{Direction, UnweightedGraph, WeightedGraph},
        vertex::VertexId,
        weight::Weight,
    },
    Result,
};

/// Parameters of a random graph.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::{RandomGraphConfig, UnweightedGraph};
///
/// let config = RandomGraphConfig::new(50).with_edges(1, 4).with_seed(7);
/// let first = UnweightedGraph::random(&config)?;
/// let second = UnweightedGraph::random(&config)?;
///
/// assert_eq!(first.vertex_count(), 50);
/// assert_eq!(first.edge_count(), second.edge_count());
/// # Ok::<(), graphsearch::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphConfig {
    /// Number of vertices to create (default: 16).
    pub vertex_count: usize,

    /// Minimum number of edges drawn per vertex (default: 0).
    pub min_edges: usize,

    /// Maximum number of edges drawn per vertex (default: 3).
    pub max_edges: usize,

    /// Direction mode of the generated graph (default: directed).
    pub direction: Direction,

    /// RNG seed (default: 0).
    pub seed: u64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertex_count: 16,
            min_edges: 0,
            max_edges: 3,
            direction: Direction::Directed,
            seed: 0,
        }
    }
}

impl RandomGraphConfig {
    /// Creates a configuration with `vertex_count` vertices and default edge bounds.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    /// Sparse preset: every vertex has at most one outgoing edge.
    #[must_use]
    pub fn sparse(vertex_count: usize) -> Self {
        Self::new(vertex_count).with_edges(0, 1)
    }

    /// Dense preset: every vertex draws between 4 and 8 edges.
    #[must_use]
    pub fn dense(vertex_count: usize) -> Self {
        Self::new(vertex_count).with_edges(4, 8)
    }

    /// Sets the per-vertex edge bounds.
    #[must_use]
    pub fn with_edges(mut self, min_edges: usize, max_edges: usize) -> Self {
        self.min_edges = min_edges;
        self.max_edges = max_edges;
        self
    }

    /// Sets the direction mode.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if
    /// `min_edges > max_edges`, or if edges are requested for a graph without
    /// vertices.
    pub fn validate(&self) -> Result<()> {
        if self.min_edges > self.max_edges {
            return Err(config_error!(
                "min_edges {} exceeds max_edges {}",
                self.min_edges,
                self.max_edges
            ));
        }
        if self.vertex_count == 0 && self.min_edges > 0 {
            return Err(config_error!(
                "{} edges per vertex requested for a graph without vertices",
                self.min_edges
            ));
        }
        Ok(())
    }

    /// Draws the edge list `(from, to)` for this configuration.
    fn draw_edges(&self, rng: &mut StdRng) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        if self.vertex_count == 0 {
            return edges;
        }
        for from in 0..self.vertex_count {
            let count = rng.gen_range(self.min_edges..=self.max_edges);
            for _ in 0..count {
                edges.push((from, rng.gen_range(0..self.vertex_count)));
            }
        }
        edges
    }
}

impl UnweightedGraph<usize> {
    /// Generates a random unweighted graph.
    ///
    /// Vertex `i` carries payload `i` and has handle `VertexId::new(i)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// configuration is contradictory, see [`RandomGraphConfig::validate`].
    pub fn random(config: &RandomGraphConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut graph = Self::with_capacity(config.direction, config.vertex_count);
        for i in 0..config.vertex_count {
            graph.add_vertex(i);
        }
        for (from, to) in config.draw_edges(&mut rng) {
            graph.add_edge(VertexId::new(from), VertexId::new(to), ())?;
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            seed = config.seed,
            "generated random graph"
        );
        Ok(graph)
    }
}

impl<W: Weight + SampleUniform> WeightedGraph<usize, W> {
    /// Generates a random weighted graph with weights drawn uniformly from `weights`.
    ///
    /// Two draws of the same target with different weights produce parallel
    /// edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// configuration is contradictory or `weights` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphsearch::graph::{RandomGraphConfig, WeightedGraph};
    ///
    /// let config = RandomGraphConfig::dense(20).with_seed(42);
    /// let graph: WeightedGraph<usize, u32> = WeightedGraph::random_weighted(&config, 1..=10)?;
    /// assert_eq!(graph.vertex_count(), 20);
    /// # Ok::<(), graphsearch::Error>(())
    /// ```
    pub fn random_weighted(config: &RandomGraphConfig, weights: RangeInclusive<W>) -> Result<Self> {
        config.validate()?;
        if weights.is_empty() {
            return Err(config_error!(
                "empty weight range {:?}..={:?}",
                weights.start(),
                weights.end()
            ));
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut graph = Self::with_capacity(config.direction, config.vertex_count);
        for i in 0..config.vertex_count {
            graph.add_vertex(i);
        }
        for (from, to) in config.draw_edges(&mut rng) {
            let weight = rng.gen_range(weights.clone());
            graph.add_edge(VertexId::new(from), VertexId::new(to), weight)?;
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            seed = config.seed,
            "generated random weighted graph"
        );
        Ok(graph)
    }
}
