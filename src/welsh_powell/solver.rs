//! Welsh-Powell solver.
//!
//! # Algorithm
//!
//! 1. Sort nodes by degree descending, ties by ascending id
//! 2. Apply first-fit coloring in that order
//!
//! High-degree nodes have the fewest free colors left late in the pass, so
//! they go first. `O(n log n)` for the sort plus `O(n + m)` for coloring.
//!
//! # Reference
//!
//! Welsh, D. J. A. & Powell, M. B. (1967). "An upper bound for the chromatic
//! number of a graph and its application to timetabling problems",
//! *The Computer Journal* 10(1), 85-86.

use super::ordering::sorted_nodes_by_degree;
use crate::coloring::first_fit::first_fit;
use crate::coloring::{ColorBase, Coloring, ColoringCore, ColoringRecord, GraphColoring};
use crate::error::ColoringError;
use crate::graph::Graph;

/// Welsh-Powell coloring. Colors start at 1.
///
/// # Examples
///
/// ```
/// use u_graphcolor::coloring::GraphColoring;
/// use u_graphcolor::graph::generators;
/// use u_graphcolor::WelshPowellColoring;
///
/// let (graph, nodes) = generators::star(6).unwrap();
/// let mut wp = WelshPowellColoring::new(&graph).unwrap();
/// let coloring = wp.color().unwrap();
/// assert_eq!(coloring[&nodes[0]], 1);
/// assert_eq!(wp.chromatic_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct WelshPowellColoring<'g> {
    graph: &'g Graph,
    record: ColoringRecord,
}

impl<'g> WelshPowellColoring<'g> {
    /// Binds a solver to `graph`.
    ///
    /// Fails with [`ColoringError::InvalidInput`] if the graph has no nodes.
    pub fn new(graph: &'g Graph) -> Result<Self, ColoringError> {
        if graph.is_empty() {
            return Err(ColoringError::InvalidInput("graph cannot be empty".into()));
        }
        Ok(Self {
            graph,
            record: ColoringRecord::default(),
        })
    }
}

impl ColoringCore for WelshPowellColoring<'_> {
    fn solver_name(&self) -> &'static str {
        "welsh-powell"
    }

    fn numbering(&self) -> ColorBase {
        ColorBase::One
    }

    fn bound_graph(&self) -> &Graph {
        self.graph
    }

    fn record(&self) -> &ColoringRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut ColoringRecord {
        &mut self.record
    }

    fn color_graph_impl(&mut self) -> Result<Coloring, ColoringError> {
        let order = sorted_nodes_by_degree(self.graph)?;
        Ok(first_fit(self.graph, &order)?)
    }
}

/// Colors `graph` with Welsh-Powell in one call.
///
/// Returns the coloring and the elapsed time in seconds.
pub fn welsh_powell_coloring(graph: &Graph) -> Result<(Coloring, f64), ColoringError> {
    let mut solver = WelshPowellColoring::new(graph)?;
    let coloring = solver.color()?.clone();
    Ok((coloring, solver.elapsed_time()))
}
