//! The [`GraphColoring`] trait implemented by every solver.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::debug;

use super::types::{self, ColorBase, Coloring};
use super::validation::is_valid_coloring;
use crate::error::ColoringError;
use crate::graph::{Graph, NodeId};

pub(crate) mod private {
    use crate::coloring::{ColorBase, Coloring, ColoringRecord};
    use crate::error::ColoringError;
    use crate::graph::Graph;

    /// Per-solver hooks behind [`GraphColoring`](super::GraphColoring).
    ///
    /// Unreachable outside the crate, so the timed entry point and the
    /// stored record cannot be bypassed or overwritten by callers.
    pub trait ColoringCore {
        fn solver_name(&self) -> &'static str;

        fn numbering(&self) -> ColorBase;

        fn bound_graph(&self) -> &Graph;

        fn record(&self) -> &ColoringRecord;

        fn record_mut(&mut self) -> &mut ColoringRecord;

        /// Must return a complete coloring of
        /// [`bound_graph`](ColoringCore::bound_graph).
        fn color_graph_impl(&mut self) -> Result<Coloring, ColoringError>;
    }
}

use private::ColoringCore;

/// Common interface of the coloring solvers.
///
/// Each solver supplies only its core step; everything here (timing,
/// storing the result, validation, color counting) is shared and cannot be
/// overridden. The trait is sealed: it is implemented for the solvers of
/// this crate and nothing else.
///
/// A solver is bound to one graph at construction. Calling [`color`] again
/// recomputes from scratch and overwrites the stored result and timing.
///
/// # Examples
///
/// ```
/// use u_graphcolor::coloring::GraphColoring;
/// use u_graphcolor::graph::generators;
/// use u_graphcolor::{ExactColoring, GreedyColoring, WelshPowellColoring};
///
/// let (graph, _) = generators::cycle(5).unwrap();
/// let mut solvers: Vec<Box<dyn GraphColoring + '_>> = vec![
///     Box::new(GreedyColoring::new(&graph).unwrap()),
///     Box::new(WelshPowellColoring::new(&graph).unwrap()),
///     Box::new(ExactColoring::new(&graph).unwrap()),
/// ];
/// for solver in &mut solvers {
///     solver.color().unwrap();
///     assert!(solver.validate(None));
///     assert_eq!(solver.chromatic_count(), 3);
/// }
/// ```
///
/// The core step is not callable directly:
///
/// ```compile_fail
/// use u_graphcolor::coloring::GraphColoring;
/// use u_graphcolor::graph::generators;
/// use u_graphcolor::ExactColoring;
///
/// let (graph, _) = generators::complete(4).unwrap();
/// let mut exact = ExactColoring::new(&graph).unwrap();
/// let _ = exact.color_graph_impl();
/// ```
///
/// Neither is the stored record:
///
/// ```compile_fail
/// use u_graphcolor::coloring::GraphColoring;
/// use u_graphcolor::graph::generators;
/// use u_graphcolor::ExactColoring;
///
/// let (graph, _) = generators::complete(4).unwrap();
/// let mut exact = ExactColoring::new(&graph).unwrap();
/// exact.record_mut().runs = 7;
/// ```
///
/// [`color`]: GraphColoring::color
pub trait GraphColoring: ColoringCore {
    /// Short solver name used in logs and reports.
    fn name(&self) -> &'static str {
        self.solver_name()
    }

    /// Numbering convention of the colors this solver assigns.
    fn color_base(&self) -> ColorBase {
        self.numbering()
    }

    /// The graph this solver is bound to.
    fn graph(&self) -> &Graph {
        self.bound_graph()
    }

    /// Colors the graph, records the elapsed time, and returns the result.
    ///
    /// On error the previously stored result is left untouched.
    fn color(&mut self) -> Result<&Coloring, ColoringError> {
        let solver = self.solver_name();
        let node_count = self.bound_graph().node_count();
        debug!(solver, node_count, "coloring started");

        let start = Instant::now();
        let coloring = self.color_graph_impl()?;
        let elapsed = start.elapsed();

        let colors = types::color_count(&coloring);
        self.record_mut().store(coloring, elapsed);
        debug!(
            solver,
            colors,
            elapsed_s = elapsed.as_secs_f64(),
            "coloring finished"
        );
        Ok(&self.record().coloring)
    }

    /// Whether every edge has both endpoints colored differently.
    ///
    /// Checks `coloring` when given, otherwise the last stored result.
    fn validate(&self, coloring: Option<&Coloring>) -> bool {
        let coloring = coloring.unwrap_or(&self.record().coloring);
        is_valid_coloring(self.bound_graph(), coloring)
    }

    /// Number of distinct colors in the last stored coloring, 0 before the
    /// first run.
    ///
    /// For the heuristics this is the number of colors used, not a proven
    /// chromatic number.
    fn chromatic_count(&self) -> usize {
        types::color_count(&self.record().coloring)
    }

    /// Duration of the most recent [`color`](GraphColoring::color) call, in
    /// seconds.
    fn elapsed_time(&self) -> f64 {
        self.record().elapsed.as_secs_f64()
    }

    /// Completed [`color`](GraphColoring::color) calls.
    fn runs(&self) -> usize {
        self.record().runs
    }

    /// The last stored coloring.
    fn coloring(&self) -> &Coloring {
        &self.record().coloring
    }

    /// The last stored coloring keyed by node id.
    fn coloring_by_id(&self) -> BTreeMap<NodeId, usize> {
        types::coloring_by_id(&self.record().coloring)
    }

    /// Node ids grouped by assigned color.
    fn color_classes(&self) -> BTreeMap<usize, Vec<NodeId>> {
        types::color_classes(&self.record().coloring)
    }
}

impl<T: ColoringCore> GraphColoring for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::ColoringRecord;
    use crate::graph::{generators, Node};
    use crate::ExactColoring;

    /// Returns the same fixed coloring on every run.
    struct Fixed<'g> {
        graph: &'g Graph,
        answer: Coloring,
        record: ColoringRecord,
    }

    impl ColoringCore for Fixed<'_> {
        fn solver_name(&self) -> &'static str {
            "fixed"
        }

        fn numbering(&self) -> ColorBase {
            ColorBase::Zero
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
            Ok(self.answer.clone())
        }
    }

    #[test]
    fn test_color_stores_and_counts_runs() {
        let (g, nodes) = generators::path(3).unwrap();
        let answer: Coloring = nodes.iter().cloned().zip([0, 1, 0]).collect();
        let mut solver = Fixed {
            graph: &g,
            answer: answer.clone(),
            record: ColoringRecord::default(),
        };
        assert_eq!(solver.runs(), 0);
        assert!(solver.coloring().is_empty());

        assert_eq!(solver.color().unwrap(), &answer);
        assert_eq!(solver.runs(), 1);
        assert_eq!(solver.chromatic_count(), 2);
        assert!(solver.validate(None));
        assert_eq!(solver.name(), "fixed");
        assert_eq!(solver.graph().node_count(), 3);

        solver.color().unwrap();
        assert_eq!(solver.runs(), 2);
    }

    #[test]
    fn test_validate_external_coloring_leaves_record() {
        let (g, _) = generators::complete(4).unwrap();
        let mut exact = ExactColoring::new(&g).unwrap();
        exact.color().unwrap();

        let all_zero: Coloring = g.iter_nodes().map(|n: &Node| (n.clone(), 0)).collect();
        assert!(!exact.validate(Some(&all_zero)));
        assert!(exact.validate(None));
        assert_eq!(exact.chromatic_count(), 4);
        assert_eq!(exact.runs(), 1);
    }
}
