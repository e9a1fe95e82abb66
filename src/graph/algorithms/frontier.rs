//! Min-priority frontier and search budget shared by Dijkstra and A*.
//!
//! [`PriorityFrontier`] wraps [`BinaryHeap`] (a max-heap) with a reversed entry
//! ordering so that the smallest priority pops first. Entries with equal
//! priority pop in insertion order, which makes every search reproducible for a
//! fixed neighbour order.
//!
//! The frontier does not support decrease-key. An improved tentative distance is
//! pushed as a new entry and the outdated one is discarded when it surfaces (see
//! [`FrontierEntry::cost`]).

use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

use crate::{
    graph::{
        config::SearchConfig,
        weight::{self, Weight},
    },
    Error, Result,
};

/// An entry popped from a [`PriorityFrontier`].
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry<N, W> {
    /// The discovered node.
    pub node: N,
    /// Ordering key: the tentative distance, plus the heuristic estimate for A*.
    pub priority: W,
    /// Tentative distance from the start at the time the entry was pushed.
    ///
    /// If this is worse than the best distance currently known for `node`, the
    /// entry is stale and must be skipped.
    pub cost: W,
    seq: u64,
}

impl<N, W: Weight> PartialEq for FrontierEntry<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: Weight> Eq for FrontierEntry<N, W> {}

impl<N, W: Weight> PartialOrd for FrontierEntry<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: Weight> Ord for FrontierEntry<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: lowest priority first, then oldest first
        weight::compare(other.priority, self.priority).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue of discovered but not yet finalised nodes.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::algorithms::PriorityFrontier;
///
/// let mut frontier = PriorityFrontier::new();
/// frontier.push('b', 3u32, 3);
/// frontier.push('a', 1, 1);
/// frontier.push('c', 3, 3);
///
/// let order: Vec<char> = std::iter::from_fn(|| frontier.pop().map(|e| e.node)).collect();
/// assert_eq!(order, vec!['a', 'b', 'c']);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityFrontier<N, W> {
    heap: BinaryHeap<FrontierEntry<N, W>>,
    next_seq: u64,
}

impl<N, W: Weight> Default for PriorityFrontier<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W: Weight> PriorityFrontier<N, W> {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Pushes `node` with the given ordering key and tentative distance.
    pub fn push(&mut self, node: N, priority: W, cost: W) {
        self.heap.push(FrontierEntry {
            node,
            priority,
            cost,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Removes and returns the entry with the lowest priority.
    ///
    /// Among equal priorities the entry pushed first is returned.
    pub fn pop(&mut self) -> Option<FrontierEntry<N, W>> {
        self.heap.pop()
    }

    /// Returns the number of entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the frontier holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Tracks the resources spent by one search against its [`SearchConfig`].
#[derive(Debug)]
pub(crate) struct SearchBudget {
    config: SearchConfig,
    started: Instant,
    expansions: usize,
}

impl SearchBudget {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        SearchBudget {
            config: *config,
            started: Instant::now(),
            expansions: 0,
        }
    }

    /// Accounts for one frontier pop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpansionLimit`] or [`Error::DeadlineExceeded`] once the
    /// corresponding limit is exceeded.
    pub(crate) fn charge(&mut self) -> Result<()> {
        self.expansions += 1;

        if let Some(limit) = self.config.max_expansions {
            if self.expansions > limit {
                return Err(Error::ExpansionLimit(limit));
            }
        }

        if let Some(deadline) = self.config.deadline {
            let elapsed = self.started.elapsed();
            if elapsed > deadline {
                return Err(Error::DeadlineExceeded {
                    elapsed_ms: elapsed.as_millis(),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn expansions(&self) -> usize {
        self.expansions
    }
}
