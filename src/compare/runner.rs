//! Runs several solvers over one graph and collects their results.

use tracing::warn;

use super::config::{CompareConfig, SolverKind};
use crate::coloring::{ColorBase, GraphColoring};
use crate::error::ColoringError;
use crate::graph::Graph;
use crate::{ExactColoring, GreedyColoring, WelshPowellColoring};

/// Outcome of one solver on the compared graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverReport {
    /// Which solver produced this report.
    pub kind: SolverKind,
    /// Distinct colors used.
    pub colors: usize,
    /// Wall-clock time of the coloring call, in seconds.
    pub elapsed: f64,
    /// Whether the coloring passed validation.
    pub valid: bool,
    /// Numbering convention of the solver.
    pub color_base: ColorBase,
}

/// Result of a comparison run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareResult {
    /// Nodes in the compared graph.
    pub node_count: usize,
    /// Edges in the compared graph.
    pub edge_count: usize,
    /// One report per solver that ran, in configuration order.
    pub reports: Vec<SolverReport>,
    /// Solvers that were selected but not run (exact over the node limit).
    pub skipped: Vec<SolverKind>,
}

impl CompareResult {
    /// The report for `kind`, if that solver ran.
    pub fn report(&self, kind: SolverKind) -> Option<&SolverReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    /// The report with the fewest colors; earlier reports win ties.
    pub fn best(&self) -> Option<&SolverReport> {
        self.reports
            .iter()
            .reduce(|best, r| if r.colors < best.colors { r } else { best })
    }
}

/// Comparison harness.
pub struct CompareRunner;

impl CompareRunner {
    /// Runs every configured solver on `graph`.
    ///
    /// Fails if the configuration is invalid or any solver fails; the
    /// heuristic solvers reject empty graphs.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graphcolor::compare::{CompareConfig, CompareRunner, SolverKind};
    /// use u_graphcolor::graph::generators;
    ///
    /// let (graph, _) = generators::cycle(5).unwrap();
    /// let result = CompareRunner::run(&graph, &CompareConfig::default()).unwrap();
    /// assert_eq!(result.report(SolverKind::Exact).unwrap().colors, 3);
    /// assert!(result.reports.iter().all(|r| r.valid));
    /// ```
    pub fn run(graph: &Graph, config: &CompareConfig) -> Result<CompareResult, ColoringError> {
        config.validate().map_err(ColoringError::InvalidInput)?;

        let mut selected = Vec::with_capacity(config.solvers.len());
        let mut skipped = Vec::new();
        for &kind in &config.solvers {
            if kind == SolverKind::Exact && graph.node_count() > config.exact_node_limit {
                warn!(
                    node_count = graph.node_count(),
                    limit = config.exact_node_limit,
                    "skipping exact solver: graph too large"
                );
                skipped.push(kind);
            } else {
                selected.push(kind);
            }
        }

        let reports = if config.parallel {
            run_parallel(graph, &selected)?
        } else {
            run_sequential(graph, &selected)?
        };

        Ok(CompareResult {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            reports,
            skipped,
        })
    }
}

fn run_one(graph: &Graph, kind: SolverKind) -> Result<SolverReport, ColoringError> {
    let mut solver: Box<dyn GraphColoring + '_> = match kind {
        SolverKind::Greedy => Box::new(GreedyColoring::new(graph)?),
        SolverKind::WelshPowell => Box::new(WelshPowellColoring::new(graph)?),
        SolverKind::Exact => Box::new(ExactColoring::new(graph)?),
    };
    solver.color()?;
    Ok(SolverReport {
        kind,
        colors: solver.chromatic_count(),
        elapsed: solver.elapsed_time(),
        valid: solver.validate(None),
        color_base: solver.color_base(),
    })
}

fn run_sequential(
    graph: &Graph,
    kinds: &[SolverKind],
) -> Result<Vec<SolverReport>, ColoringError> {
    kinds.iter().map(|&kind| run_one(graph, kind)).collect()
}

#[cfg(feature = "parallel")]
fn run_parallel(
    graph: &Graph,
    kinds: &[SolverKind],
) -> Result<Vec<SolverReport>, ColoringError> {
    use rayon::prelude::*;
    kinds.par_iter().map(|&kind| run_one(graph, kind)).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(
    graph: &Graph,
    kinds: &[SolverKind],
) -> Result<Vec<SolverReport>, ColoringError> {
    run_sequential(graph, kinds)
}
