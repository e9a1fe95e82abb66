//! Configuration for traversals and shortest-path searches.
//!
//! This module provides the option types accepted by the search engines. All of
//! them are small `Copy` values with a `Default` that reproduces the unbounded,
//! classic behaviour of each algorithm, plus a few preset constructors.

use std::{str::FromStr, time::Duration};

use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result};

/// Frontier discipline used by a traversal.
///
/// Parses case-insensitively from `"bfs"` / `"breadth-first"` and
/// `"dfs"` / `"depth-first"`. Use [`TraversalMode::parse`] to obtain the crate's
/// [`Error::UnknownTraversalMode`] for anything else.
///
/// # Examples
///
/// ```rust
/// use graphsearch::graph::TraversalMode;
///
/// assert_eq!(TraversalMode::parse("BFS")?, TraversalMode::Bfs);
/// assert_eq!(TraversalMode::Dfs.to_string(), "dfs");
/// assert!(TraversalMode::parse("zigzag").is_err());
/// # Ok::<(), graphsearch::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum TraversalMode {
    /// Breadth-first: FIFO frontier, hop-count shortest paths.
    #[default]
    #[strum(to_string = "bfs", serialize = "breadth-first")]
    Bfs,
    /// Depth-first: explores one branch fully before backtracking.
    #[strum(to_string = "dfs", serialize = "depth-first")]
    Dfs,
}

impl TraversalMode {
    /// Parses a traversal mode name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTraversalMode`] if `name` is not a known mode.
    pub fn parse(name: &str) -> Result<Self> {
        TraversalMode::from_str(name.trim())
            .map_err(|_| Error::UnknownTraversalMode(name.to_string()))
    }
}

/// Options for [`traverse`](crate::graph::algorithms::traverse) and
/// [`traverse_until`](crate::graph::algorithms::traverse_until).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalOptions {
    /// Frontier discipline (default: BFS).
    pub mode: TraversalMode,

    /// Reconstruct the path to the target when one is found (default: false).
    /// Without a target this option has no effect.
    pub return_path: bool,
}

impl TraversalOptions {
    /// Breadth-first traversal without path reconstruction.
    #[must_use]
    pub fn bfs() -> Self {
        Self {
            mode: TraversalMode::Bfs,
            return_path: false,
        }
    }

    /// Depth-first traversal without path reconstruction.
    #[must_use]
    pub fn dfs() -> Self {
        Self {
            mode: TraversalMode::Dfs,
            return_path: false,
        }
    }

    /// Enables path reconstruction.
    #[must_use]
    pub fn with_path(mut self) -> Self {
        self.return_path = true;
        self
    }
}

/// Resource limits for Dijkstra and A*.
///
/// Limits are checked each time an entry is popped from the frontier. The
/// default configuration is unbounded and never fails, so bounded searches are
/// an opt-in layer over the classic algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Wall-clock budget for the whole search (default: none).
    pub deadline: Option<Duration>,

    /// Maximum number of frontier pops (default: none).
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Creates an unbounded configuration.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates a configuration suited to interactive callers: 100ms budget.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            deadline: Some(Duration::from_millis(100)),
            max_expansions: None,
        }
    }

    /// Sets the wall-clock budget.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the frontier expansion budget.
    #[must_use]
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Returns `true` if neither limit is set.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.deadline.is_none() && self.max_expansions.is_none()
    }
}
