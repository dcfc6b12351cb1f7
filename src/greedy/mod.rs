//! Greedy first-fit coloring.
//!
//! Visits nodes once in a fixed order and gives each the smallest color not
//! already used by a neighbor. Fast, with no optimality guarantee.

mod config;
mod solver;

pub use config::{GreedyConfig, OrderStrategy};
pub use solver::GreedyColoring;
