//! Coloring contract shared by all solvers.
//!
//! # Key Components
//!
//! - [`GraphColoring`]: the sealed solver trait (template method around
//!   each solver's core step)
//! - [`Coloring`], [`ColorBase`], [`ColoringRecord`]: result types
//! - [`is_valid_coloring`], [`validate_coloring`]: checks against a graph
//!
//! # Color numbering
//!
//! [`ExactColoring`](crate::ExactColoring) assigns colors from 0;
//! [`GreedyColoring`](crate::GreedyColoring) and
//! [`WelshPowellColoring`](crate::WelshPowellColoring) assign colors from 1.
//! Both conventions are reported through [`GraphColoring::color_base`].

mod contract;
pub(crate) mod first_fit;
mod types;
mod validation;

pub(crate) use contract::private::ColoringCore;
pub use contract::GraphColoring;
pub use types::{color_classes, color_count, coloring_by_id, ColorBase, Coloring, ColoringRecord};
pub use validation::{is_valid_coloring, validate_coloring, ColoringViolation};
