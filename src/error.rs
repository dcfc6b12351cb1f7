//! Error types for graph construction and coloring.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised by [`Graph`](crate::graph::Graph) mutation and lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The queried node is not a member of the graph.
    #[error("node {0} not in graph")]
    UnknownNode(NodeId),

    /// A node with the same identifier was already added.
    #[error("node {0} already exists in the graph")]
    DuplicateNode(NodeId),

    /// An edge from a node to itself was requested.
    #[error("self-loops are not allowed (node {0})")]
    SelfLoop(NodeId),
}

/// Errors raised by the coloring solvers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColoringError {
    /// The solver cannot be built over the given graph.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A graph query failed while coloring.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The exact search tried every `k` up to the bound without finding a
    /// coloring. Unreachable for a well-formed graph.
    #[error("search exhausted all color counts up to {upper_bound} without a valid coloring")]
    SearchExhausted {
        /// Largest color count that was attempted.
        upper_bound: usize,
    },
}
