//! Parallel multi-source shortest paths.
//!
//! Independent single-source searches over the same immutable providers are
//! embarrassingly parallel. [`dijkstra_batch`] fans them out over the rayon
//! thread pool. The providers are only borrowed, so the graph cannot be mutated
//! while a batch is running.

use std::{fmt, hash::Hash};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    graph::{
        algorithms::dijkstra::{dijkstra_with, ShortestPaths},
        config::SearchConfig,
        traits::{NeighborProvider, WeightProvider},
        weight::Weight,
    },
    Result,
};

/// Runs [`dijkstra`](super::dijkstra) from every node in `sources` in parallel.
///
/// The result vector is in the same order as `sources`.
///
/// # Errors
///
/// Returns the first error any of the searches produced, see
/// [`dijkstra_with`](super::dijkstra_with).
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::{algorithms::dijkstra_batch, SearchConfig};
///
/// // Directed ring 0 -> 1 -> ... -> 9 -> 0
/// let neighbors = |n: u32| vec![(n + 1) % 10];
/// let weights = |_: u32, _: u32| Some(1u32);
///
/// let all = dijkstra_batch(&neighbors, &weights, &[0, 5], &SearchConfig::default())?;
/// assert_eq!(all[0].distance(9), Some(9));
/// assert_eq!(all[1].distance(4), Some(9));
/// # Ok::<(), graphsearch::Error>(())
/// ```
pub fn dijkstra_batch<N, W, P, C>(
    neighbors: &P,
    weights: &C,
    sources: &[N],
    config: &SearchConfig,
) -> Result<Vec<ShortestPaths<N, W>>>
where
    N: Copy + Eq + Hash + fmt::Debug + Send + Sync,
    W: Weight + Send,
    P: NeighborProvider<N> + Sync + ?Sized,
    C: WeightProvider<N, W> + Sync + ?Sized,
{
    debug!(sources = sources.len(), "batch shortest-path search started");
    sources
        .par_iter()
        .map(|&source| dijkstra_with(neighbors, weights, source, config))
        .collect()
}
