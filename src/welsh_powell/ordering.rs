//! Degree ordering used by Welsh-Powell.

use crate::error::GraphError;
use crate::graph::{Graph, Node};

/// All nodes sorted by degree descending, ties broken by ascending id.
///
/// The tie-break makes the order, and therefore every coloring derived from
/// it, reproducible across runs.
///
/// # Examples
///
/// ```
/// use u_graphcolor::graph::generators;
/// use u_graphcolor::welsh_powell::sorted_nodes_by_degree;
///
/// let (graph, _) = generators::star(4).unwrap();
/// let order = sorted_nodes_by_degree(&graph).unwrap();
/// let ids: Vec<&str> = order.iter().map(|n| n.id.as_str()).collect();
/// assert_eq!(ids, ["center", "leaf0", "leaf1", "leaf2"]);
/// ```
pub fn sorted_nodes_by_degree(graph: &Graph) -> Result<Vec<Node>, GraphError> {
    let mut keyed = graph
        .iter_nodes()
        .map(|node| -> Result<(usize, &Node), GraphError> {
            Ok((graph.degree(node)?, node))
        })
        .collect::<Result<Vec<(usize, &Node)>, GraphError>>()?;
    keyed.sort_by(|(da, a), (db, b)| db.cmp(da).then_with(|| a.id.cmp(&b.id)));
    Ok(keyed.into_iter().map(|(_, node)| node.clone()).collect())
}
