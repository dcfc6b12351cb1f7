//! Coloring checks against a graph.

use thiserror::Error;

use super::types::Coloring;
use crate::graph::{Graph, NodeId};

/// A single way in which a coloring fails to be proper and complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColoringViolation {
    /// A graph node has no color.
    #[error("node {0} has no color assigned")]
    Uncolored(NodeId),

    /// Two adjacent nodes share a color.
    #[error("adjacent nodes {a} and {b} both have color {color}")]
    Conflict {
        /// Endpoint with the smaller id.
        a: NodeId,
        /// Endpoint with the larger id.
        b: NodeId,
        /// The shared color.
        color: usize,
    },
}

/// Whether every edge of `graph` has both endpoints colored differently.
///
/// Nodes without incident edges need not appear in `coloring`; use
/// [`validate_coloring`] to check completeness as well.
pub fn is_valid_coloring(graph: &Graph, coloring: &Coloring) -> bool {
    graph.iter_adjacency().all(|(u, neighbors)| {
        neighbors
            .iter()
            .filter(|v| u.id < v.id)
            .all(|v| match (coloring.get(u), coloring.get(v)) {
                (Some(cu), Some(cv)) => cu != cv,
                _ => false,
            })
    })
}

/// Lists every violation of `coloring` on `graph`.
///
/// Uncolored nodes are reported first, in graph order, followed by
/// conflicting edges in [`Graph::edges`] order. An empty result means the
/// coloring is complete and proper.
///
/// # Examples
///
/// ```
/// use u_graphcolor::coloring::{validate_coloring, Coloring, ColoringViolation};
/// use u_graphcolor::graph::generators;
///
/// let (graph, nodes) = generators::path(3).unwrap();
/// let mut coloring = Coloring::new();
/// coloring.insert(nodes[0].clone(), 1);
/// coloring.insert(nodes[1].clone(), 1);
///
/// let violations = validate_coloring(&graph, &coloring);
/// assert_eq!(violations.len(), 2);
/// assert!(matches!(violations[0], ColoringViolation::Uncolored(_)));
/// ```
pub fn validate_coloring(graph: &Graph, coloring: &Coloring) -> Vec<ColoringViolation> {
    let mut violations: Vec<ColoringViolation> = graph
        .iter_nodes()
        .filter(|node| !coloring.contains_key(*node))
        .map(|node| ColoringViolation::Uncolored(node.id.clone()))
        .collect();

    for (u, v) in graph.edges() {
        if let (Some(&cu), Some(&cv)) = (coloring.get(&u), coloring.get(&v)) {
            if cu == cv {
                violations.push(ColoringViolation::Conflict {
                    a: u.id,
                    b: v.id,
                    color: cu,
                });
            }
        }
    }
    violations
}
