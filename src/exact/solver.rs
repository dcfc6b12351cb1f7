//! Exact backtracking solver.
//!
//! # Algorithm
//!
//! 1. Upper bound `min(Δ + 1, n)` (Brooks' theorem, and never more colors
//!    than nodes)
//! 2. For `k = 1, 2, ..., bound`:
//!    a. Depth-first over a fixed node order, trying colors `0..k` ascending
//!    b. A color is safe if no earlier (already colored) neighbor has it
//!    c. Recurse on success, undo and try the next color on failure
//! 3. The first `k` with a complete assignment is the chromatic number
//!
//! Worst case `O(k^n · m)`. Callers should keep `n` small (≈ 20 nodes); the
//! search has no internal time limit.
//!
//! # Reference
//!
//! Brooks, R. L. (1941). "On colouring the nodes of a network",
//! *Proc. Cambridge Philosophical Society* 37(2), 194-197.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::config::{ExactConfig, SearchOrder};
use crate::coloring::{ColorBase, Coloring, ColoringCore, ColoringRecord};
use crate::error::{ColoringError, GraphError};
use crate::graph::{Graph, Node, NodeId};
use crate::welsh_powell::sorted_nodes_by_degree;

/// Counters collected during the last exact run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Upper bound on the color count for this graph.
    pub upper_bound: usize,
    /// Number of color counts `k` attempted.
    pub k_attempts: usize,
    /// Candidate colors tested for safety.
    pub assignments: u64,
    /// Positions at which every candidate color failed.
    pub backtracks: u64,
}

/// Exact minimum coloring by iterative deepening backtracking.
///
/// Colors start at 0. The returned coloring uses exactly the chromatic
/// number of colors.
///
/// Unlike the heuristic solvers, construction over an empty graph succeeds;
/// coloring it yields an empty map.
///
/// # Examples
///
/// ```
/// use u_graphcolor::coloring::GraphColoring;
/// use u_graphcolor::graph::generators;
/// use u_graphcolor::ExactColoring;
///
/// let (graph, _) = generators::petersen().unwrap();
/// let mut exact = ExactColoring::new(&graph).unwrap();
/// exact.color().unwrap();
/// assert_eq!(exact.chromatic_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ExactColoring<'g> {
    graph: &'g Graph,
    config: ExactConfig,
    record: ColoringRecord,
    stats: SearchStats,
}

impl<'g> ExactColoring<'g> {
    /// Binds a solver with the default configuration to `graph`.
    pub fn new(graph: &'g Graph) -> Result<Self, ColoringError> {
        Self::with_config(graph, ExactConfig::default())
    }

    /// Binds a solver with an explicit configuration to `graph`.
    pub fn with_config(graph: &'g Graph, config: ExactConfig) -> Result<Self, ColoringError> {
        Ok(Self {
            graph,
            config,
            record: ColoringRecord::default(),
            stats: SearchStats::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ExactConfig {
        &self.config
    }

    /// Counters from the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// `min(max_degree + 1, node_count)`; 0 for an empty graph.
    pub fn upper_bound(&self) -> usize {
        (self.graph.max_degree() + 1).min(self.graph.node_count())
    }

    fn search_order(&self) -> Result<Vec<Node>, GraphError> {
        match self.config.search_order {
            SearchOrder::DegreeDescending => sorted_nodes_by_degree(self.graph),
            SearchOrder::Insertion => Ok(self.graph.nodes()),
        }
    }

    /// For each position in `order`, the positions of neighbors that come
    /// before it. Only those can conflict when the position is colored.
    fn earlier_neighbors(&self, order: &[Node]) -> Result<Vec<Vec<usize>>, GraphError> {
        let position: HashMap<&NodeId, usize> = order
            .iter()
            .enumerate()
            .map(|(i, node)| (&node.id, i))
            .collect();

        order
            .iter()
            .enumerate()
            .map(|(i, node)| -> Result<Vec<usize>, GraphError> {
                let mut earlier = Vec::new();
                for neighbor in self.graph.adjacent(node)? {
                    let j = *position
                        .get(&neighbor.id)
                        .ok_or_else(|| GraphError::UnknownNode(neighbor.id.clone()))?;
                    if j < i {
                        earlier.push(j);
                    }
                }
                Ok(earlier)
            })
            .collect()
    }
}

impl ColoringCore for ExactColoring<'_> {
    fn solver_name(&self) -> &'static str {
        "exact"
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
        let upper_bound = self.upper_bound();
        self.stats = SearchStats {
            upper_bound,
            ..SearchStats::default()
        };
        if self.graph.is_empty() {
            return Ok(Coloring::new());
        }

        let order = self.search_order()?;
        let earlier = self.earlier_neighbors(&order)?;
        let mut search = Search {
            earlier: &earlier,
            colors: vec![None; order.len()],
            symmetry_breaking: self.config.symmetry_breaking,
            stats: &mut self.stats,
        };

        for k in 1..=upper_bound {
            search.stats.k_attempts += 1;
            trace!(k, upper_bound, "trying color count");
            if search.extend(0, k, 0) {
                let stats = *search.stats;
                debug!(
                    k,
                    assignments = stats.assignments,
                    backtracks = stats.backtracks,
                    "exact coloring found"
                );
                return order
                    .iter()
                    .zip(&search.colors)
                    .map(|(node, &color)| {
                        color
                            .map(|c| (node.clone(), c))
                            .ok_or(ColoringError::SearchExhausted { upper_bound })
                    })
                    .collect();
            }
        }

        Err(ColoringError::SearchExhausted { upper_bound })
    }
}

/// Working state of one depth-first search.
struct Search<'a> {
    earlier: &'a [Vec<usize>],
    colors: Vec<Option<usize>>,
    symmetry_breaking: bool,
    stats: &'a mut SearchStats,
}

impl Search<'_> {
    /// Tries to color positions `pos..` with colors `0..k`.
    ///
    /// `used` is one past the highest color assigned to positions `..pos`.
    fn extend(&mut self, pos: usize, k: usize, used: usize) -> bool {
        if pos == self.colors.len() {
            return true;
        }

        let limit = if self.symmetry_breaking {
            k.min(used + 1)
        } else {
            k
        };

        for color in 0..limit {
            self.stats.assignments += 1;
            let safe = self.earlier[pos]
                .iter()
                .all(|&j| self.colors[j] != Some(color));
            if !safe {
                continue;
            }

            self.colors[pos] = Some(color);
            if self.extend(pos + 1, k, used.max(color + 1)) {
                return true;
            }
            self.colors[pos] = None;
        }

        self.stats.backtracks += 1;
        false
    }
}
