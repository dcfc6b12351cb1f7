//! Graph model consumed by the coloring solvers.
//!
//! - [`Node`] / [`NodeId`]: vertices with identity by id
//! - [`Graph`]: undirected simple graph with deterministic enumeration
//! - [`generators`]: cycles, cliques, stars, bipartite, Petersen, random

pub mod generators;
mod model;
mod node;

pub use model::Graph;
pub use node::{Node, NodeId};
