//! First-fit assignment shared by the greedy heuristics.

use std::collections::HashSet;

use super::types::Coloring;
use crate::error::GraphError;
use crate::graph::{Graph, Node};

/// Smallest positive integer not contained in `forbidden`.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use u_graphcolor::welsh_powell::first_available_color;
///
/// assert_eq!(first_available_color(&HashSet::from([1, 2, 4])), 3);
/// assert_eq!(first_available_color(&HashSet::new()), 1);
/// assert_eq!(first_available_color(&HashSet::from([1, 2, 3])), 4);
/// ```
pub fn first_available_color(forbidden: &HashSet<usize>) -> usize {
    let mut color = 1;
    while forbidden.contains(&color) {
        color += 1;
    }
    color
}

/// Colors `order` one node at a time with the first color not used by an
/// already-colored neighbor. Colors start at 1 and are never revised.
pub(crate) fn first_fit<'a, I>(graph: &Graph, order: I) -> Result<Coloring, GraphError>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut coloring = Coloring::with_capacity(graph.node_count());
    let mut forbidden = HashSet::new();
    for node in order {
        forbidden.clear();
        forbidden.extend(
            graph
                .adjacent(node)?
                .iter()
                .filter_map(|neighbor| coloring.get(neighbor).copied()),
        );
        coloring.insert(node.clone(), first_available_color(&forbidden));
    }
    Ok(coloring)
}
