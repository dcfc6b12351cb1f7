//! Vertex coloring for undirected graphs.
//!
//! Three interchangeable solvers behind one trait, from slowest and exact to
//! fastest and heuristic:
//!
//! - **Exact** ([`ExactColoring`]): iterative deepening backtracking that
//!   returns a coloring with the chromatic number of colors. Exponential;
//!   keep graphs small.
//! - **Welsh-Powell** ([`WelshPowellColoring`]): first-fit over nodes sorted
//!   by degree descending, ties broken by id.
//! - **Greedy** ([`GreedyColoring`]): first-fit over a fixed order (ids
//!   ascending by default).
//!
//! All of them implement [`GraphColoring`](coloring::GraphColoring), which
//! times each run and provides validation, color counts, and id-keyed views
//! of the result.
//!
//! # Color numbering
//!
//! The exact solver assigns colors from 0, the heuristics from 1. See
//! [`ColorBase`](coloring::ColorBase).
//!
//! # Supporting modules
//!
//! - [`graph`]: the graph model and generators for common families
//! - [`compare`]: runs several solvers on one graph and reports the results
//!
//! # Example
//!
//! ```
//! use u_graphcolor::coloring::GraphColoring;
//! use u_graphcolor::graph::{Graph, Node};
//! use u_graphcolor::ExactColoring;
//!
//! let mut graph = Graph::new();
//! let nodes: Vec<Node> = ["a", "b", "c"].into_iter().map(Node::new).collect();
//! for node in &nodes {
//!     graph.add_node(node.clone()).unwrap();
//! }
//! graph.add_edge(&nodes[0], &nodes[1]).unwrap();
//! graph.add_edge(&nodes[1], &nodes[2]).unwrap();
//!
//! let mut exact = ExactColoring::new(&graph).unwrap();
//! exact.color().unwrap();
//! assert_eq!(exact.chromatic_count(), 2);
//! ```

pub mod coloring;
pub mod compare;
pub mod error;
pub mod exact;
pub mod graph;
pub mod greedy;
pub mod welsh_powell;

pub use error::{ColoringError, GraphError};
pub use exact::ExactColoring;
pub use greedy::GreedyColoring;
pub use welsh_powell::WelshPowellColoring;
