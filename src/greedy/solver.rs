//! Greedy first-fit solver.
//!
//! # Algorithm
//!
//! 1. Arrange the nodes according to the configured [`OrderStrategy`]
//! 2. For each node, collect the colors of neighbors colored earlier
//! 3. Assign the smallest positive color not in that set
//!
//! Assignments are final. The number of colors depends entirely on the
//! order; runtime is `O(n + m)` after sorting.

use super::config::{GreedyConfig, OrderStrategy};
use crate::coloring::first_fit::first_fit;
use crate::coloring::{ColorBase, Coloring, ColoringCore, ColoringRecord};
use crate::error::ColoringError;
use crate::graph::{Graph, Node};
use crate::welsh_powell::sorted_nodes_by_degree;

/// Greedy first-fit coloring. Colors start at 1.
///
/// # Examples
///
/// ```
/// use u_graphcolor::coloring::GraphColoring;
/// use u_graphcolor::graph::generators;
/// use u_graphcolor::GreedyColoring;
///
/// let (graph, _) = generators::complete_bipartite(3, 3).unwrap();
/// let mut greedy = GreedyColoring::new(&graph).unwrap();
/// greedy.color().unwrap();
/// assert_eq!(greedy.chromatic_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyColoring<'g> {
    graph: &'g Graph,
    config: GreedyConfig,
    record: ColoringRecord,
}

impl<'g> GreedyColoring<'g> {
    /// Binds a solver with the default (natural) order to `graph`.
    ///
    /// Fails with [`ColoringError::InvalidInput`] if the graph has no nodes.
    pub fn new(graph: &'g Graph) -> Result<Self, ColoringError> {
        Self::with_config(graph, GreedyConfig::default())
    }

    /// Binds a solver with an explicit configuration to `graph`.
    pub fn with_config(graph: &'g Graph, config: GreedyConfig) -> Result<Self, ColoringError> {
        if graph.is_empty() {
            return Err(ColoringError::InvalidInput(
                "graph must contain at least one node".into(),
            ));
        }
        Ok(Self {
            graph,
            config,
            record: ColoringRecord::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Nodes in the order they will be colored.
    pub fn visit_order(&self) -> Result<Vec<Node>, ColoringError> {
        match self.config.order {
            OrderStrategy::Natural => {
                let mut nodes = self.graph.nodes();
                nodes.sort();
                Ok(nodes)
            }
            OrderStrategy::Degree => Ok(sorted_nodes_by_degree(self.graph)?),
        }
    }
}

impl ColoringCore for GreedyColoring<'_> {
    fn solver_name(&self) -> &'static str {
        "greedy"
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
        let order = self.visit_order()?;
        Ok(first_fit(self.graph, &order)?)
    }
}
