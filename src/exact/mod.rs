//! Exact minimum coloring.
//!
//! Iterative deepening over the color count `k` with a depth-first search
//! per `k`. Returns a coloring that uses exactly the chromatic number of
//! colors, at exponential worst-case cost.

mod config;
mod solver;

pub use config::{ExactConfig, SearchOrder};
pub use solver::{ExactColoring, SearchStats};
