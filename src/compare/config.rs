//! Comparison harness configuration.

use std::fmt;

/// The available solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverKind {
    /// [`GreedyColoring`](crate::GreedyColoring) in natural order.
    Greedy,
    /// [`WelshPowellColoring`](crate::WelshPowellColoring).
    WelshPowell,
    /// [`ExactColoring`](crate::ExactColoring).
    Exact,
}

impl SolverKind {
    /// All solvers, fastest first.
    pub const ALL: [SolverKind; 3] = [
        SolverKind::Greedy,
        SolverKind::WelshPowell,
        SolverKind::Exact,
    ];

    /// Display name, matching [`GraphColoring::name`](crate::coloring::GraphColoring::name).
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Greedy => "greedy",
            SolverKind::WelshPowell => "welsh-powell",
            SolverKind::Exact => "exact",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for [`CompareRunner`](super::CompareRunner).
///
/// # Examples
///
/// ```
/// use u_graphcolor::compare::{CompareConfig, SolverKind};
///
/// let config = CompareConfig::default()
///     .with_solvers(vec![SolverKind::WelshPowell, SolverKind::Exact])
///     .with_exact_node_limit(15);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.exact_node_limit, 15);
/// ```
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Solvers to run, in report order.
    pub solvers: Vec<SolverKind>,
    /// The exact solver is skipped on graphs with more nodes than this.
    pub exact_node_limit: usize,
    /// Run the solvers on separate rayon tasks (requires the `parallel`
    /// feature; ignored otherwise).
    pub parallel: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            solvers: SolverKind::ALL.to_vec(),
            exact_node_limit: 12,
            parallel: false,
        }
    }
}

impl CompareConfig {
    /// Sets the solvers to run.
    pub fn with_solvers(mut self, solvers: Vec<SolverKind>) -> Self {
        self.solvers = solvers;
        self
    }

    /// Sets the node count above which the exact solver is skipped.
    pub fn with_exact_node_limit(mut self, limit: usize) -> Self {
        self.exact_node_limit = limit;
        self
    }

    /// Enables or disables running solvers in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.solvers.is_empty() {
            return Err("at least one solver must be selected".into());
        }
        for (i, kind) in self.solvers.iter().enumerate() {
            if self.solvers[..i].contains(kind) {
                return Err(format!("solver {kind} selected more than once"));
            }
        }
        Ok(())
    }
}
