//! Side-by-side comparison of the solvers on one graph.
//!
//! [`CompareRunner`] colors the same graph with each selected solver and
//! reports colors used, elapsed time and validity. The exact solver is
//! skipped above [`CompareConfig::exact_node_limit`].

mod config;
mod runner;

pub use config::{CompareConfig, SolverKind};
pub use runner::{CompareResult, CompareRunner, SolverReport};
