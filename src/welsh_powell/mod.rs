//! Welsh-Powell coloring.
//!
//! First-fit coloring over nodes sorted by degree descending. The two
//! building blocks are public so they can be tested and reused on their own:
//!
//! - [`sorted_nodes_by_degree`]: the deterministic degree ordering
//! - [`first_available_color`]: smallest positive color not yet forbidden
//!
//! # References
//!
//! - Welsh, D. J. A. & Powell, M. B. (1967), *The Computer Journal* 10(1), 85-86.

mod ordering;
mod solver;

pub use crate::coloring::first_fit::first_available_color;
pub use ordering::sorted_nodes_by_degree;
pub use solver::{welsh_powell_coloring, WelshPowellColoring};
