use thiserror::Error;

use crate::graph::VertexId;

macro_rules! config_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Configuration {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Configuration {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Errors fall into a small number of categories. A target that cannot be reached is
/// **not** an error: searches report it through an empty path or an absent distance entry,
/// because an unreachable target is a normal outcome the caller branches on.
///
/// # Error Categories
///
/// ## Configuration Errors
/// Caller contract violations, detected eagerly:
/// - [`Error::Configuration`] - Invalid parameters (e.g. `min_edges > max_edges`)
/// - [`Error::UnknownTraversalMode`] - A traversal mode string that is neither BFS nor DFS
/// - [`Error::NegativeWeight`] - A negative edge weight reached a shortest-path engine
/// - [`Error::WeightOverflow`] - A path cost does not fit in the integer weight type
///
/// ## Structural Errors
/// Fatal for the whole call, no partial result is produced:
/// - [`Error::CycleDetected`] - The input of a topological sort is not a DAG
///
/// ## Lookup Errors
/// - [`Error::UnknownVertex`] - A handle that was removed or belongs to another graph
///
/// ## Search Limits
/// Only produced when a bounded [`SearchConfig`](crate::graph::SearchConfig) is used:
/// - [`Error::DeadlineExceeded`] - The search ran past its deadline
/// - [`Error::ExpansionLimit`] - The search popped more frontier entries than allowed
///
/// # Examples
///
/// ```rust
/// use graphsearch::{graph::algorithms::topological_sort, Error};
///
/// let neighbors = |n: u32| match n {
///     1 => vec![2],
///     2 => vec![3],
///     3 => vec![1],
///     _ => vec![],
/// };
///
/// match topological_sort([1, 2, 3], &neighbors) {
///     Ok(order) => println!("order: {order:?}"),
///     Err(Error::CycleDetected { cycle }) => println!("not a DAG: {cycle}"),
///     Err(e) => println!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration or arguments.
    ///
    /// The error includes the source location where the violation was detected
    /// for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Description of what was invalid
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid configuration - {file}:{line}: {message}")]
    Configuration {
        /// The message to be printed for the Configuration error
        message: String,
        /// The source file in which this error occurred
        file: &'static str,
        /// The source line in which this error occurred
        line: u32,
    },

    /// The given string does not name a traversal mode.
    ///
    /// Accepted values are `bfs` and `dfs` (case insensitive), plus the long
    /// forms `breadth-first` and `depth-first`.
    #[error("Unknown traversal mode '{0}', expected 'bfs' or 'dfs'")]
    UnknownTraversalMode(String),

    /// A shortest-path engine relaxed an edge with a negative weight.
    ///
    /// Dijkstra and A* are only correct for non-negative weights. The endpoints
    /// are rendered with their `Debug` representation.
    #[error("Negative edge weight on {from} -> {to}")]
    NegativeWeight {
        /// Source of the offending edge
        from: String,
        /// Target of the offending edge
        to: String,
    },

    /// A path cost or search priority does not fit in the weight type.
    ///
    /// Raised when relaxing the edge `from -> to` would overflow an integer
    /// weight. The endpoints are rendered with their `Debug` representation.
    #[error("Path cost overflows the weight type on {from} -> {to}")]
    WeightOverflow {
        /// Source of the edge being relaxed
        from: String,
        /// Target of the edge being relaxed
        to: String,
    },

    /// The input of a topological sort contains a cycle.
    ///
    /// A cyclic graph has no topological order, so the whole operation is
    /// aborted. The offending cycle is rendered as `a -> b -> ... -> a`.
    #[error("Graph is not a DAG, cycle detected: {cycle}")]
    CycleDetected {
        /// The cycle that was found, rendered for display
        cycle: String,
    },

    /// The vertex handle does not refer to a live vertex of this graph.
    #[error("Vertex {0} does not exist in this graph")]
    UnknownVertex(VertexId),

    /// The search exceeded the deadline configured in its `SearchConfig`.
    #[error("Search deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded {
        /// Milliseconds spent before the search was aborted
        elapsed_ms: u128,
    },

    /// The search exceeded the frontier expansion budget configured in its `SearchConfig`.
    #[error("Search exceeded the expansion limit of {0}")]
    ExpansionLimit(usize),
}

impl Error {
    /// Returns `true` for caller contract violations.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. }
                | Error::UnknownTraversalMode(_)
                | Error::NegativeWeight { .. }
                | Error::WeightOverflow { .. }
        )
    }

    /// Returns `true` for errors caused by the shape of the input graph.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::CycleDetected { .. })
    }

    /// Returns `true` for errors caused by a bounded `SearchConfig`.
    #[must_use]
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Error::DeadlineExceeded { .. } | Error::ExpansionLimit(_)
        )
    }
}
