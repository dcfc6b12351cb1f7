//! Builders for well-known graph families.
//!
//! Each generator returns the graph together with its nodes in creation
//! order. Node ids carry a family prefix (`v`, `k`, `leaf`, ...).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::Graph;
use super::node::Node;
use crate::error::GraphError;

fn with_nodes(ids: impl IntoIterator<Item = String>) -> Result<(Graph, Vec<Node>), GraphError> {
    let mut graph = Graph::new();
    let mut nodes = Vec::new();
    for id in ids {
        let node = Node::new(id);
        graph.add_node(node.clone())?;
        nodes.push(node);
    }
    Ok((graph, nodes))
}

/// Cycle `C_n`: `v0 - v1 - ... - v{n-1} - v0`.
///
/// For `n < 3` the closing edge would be a duplicate or a self-loop, so
/// `n = 2` yields a single edge and `n = 1` an isolated node.
pub fn cycle(n: usize) -> Result<(Graph, Vec<Node>), GraphError> {
    let (mut graph, nodes) = with_nodes((0..n).map(|i| format!("v{i}")))?;
    for i in 0..n {
        let j = (i + 1) % n;
        if i != j {
            graph.add_edge(&nodes[i], &nodes[j])?;
        }
    }
    Ok((graph, nodes))
}

/// Complete graph `K_n`.
pub fn complete(n: usize) -> Result<(Graph, Vec<Node>), GraphError> {
    let (mut graph, nodes) = with_nodes((0..n).map(|i| format!("k{i}")))?;
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(&nodes[i], &nodes[j])?;
        }
    }
    Ok((graph, nodes))
}

/// Star on `n` nodes: one `center` and `n - 1` leaves. The center is
/// returned first; `n = 0` yields an empty graph.
pub fn star(n: usize) -> Result<(Graph, Vec<Node>), GraphError> {
    if n == 0 {
        return Ok((Graph::new(), Vec::new()));
    }
    let ids = std::iter::once("center".to_string())
        .chain((0..n - 1).map(|i| format!("leaf{i}")));
    let (mut graph, nodes) = with_nodes(ids)?;
    for leaf in nodes.iter().skip(1) {
        graph.add_edge(&nodes[0], leaf)?;
    }
    Ok((graph, nodes))
}

/// Complete bipartite graph `K_{n1,n2}` with sides `a*` and `b*`.
pub fn complete_bipartite(n1: usize, n2: usize) -> Result<(Graph, Vec<Node>), GraphError> {
    let ids = (0..n1)
        .map(|i| format!("a{i}"))
        .chain((0..n2).map(|i| format!("b{i}")));
    let (mut graph, nodes) = with_nodes(ids)?;
    let (side_a, side_b) = nodes.split_at(n1);
    for a in side_a {
        for b in side_b {
            graph.add_edge(a, b)?;
        }
    }
    Ok((graph, nodes))
}

/// Path `P_n`: `p0 - p1 - ... - p{n-1}`.
pub fn path(n: usize) -> Result<(Graph, Vec<Node>), GraphError> {
    let (mut graph, nodes) = with_nodes((0..n).map(|i| format!("p{i}")))?;
    for pair in nodes.windows(2) {
        graph.add_edge(&pair[0], &pair[1])?;
    }
    Ok((graph, nodes))
}

/// Wheel: a `hub` joined to every node of a rim cycle of `n - 1` nodes.
pub fn wheel(n: usize) -> Result<(Graph, Vec<Node>), GraphError> {
    let (rim_graph, rim) = cycle(n.saturating_sub(1))?;
    let mut graph = rim_graph;
    let hub = Node::new("hub");
    graph.add_node(hub.clone())?;
    for node in &rim {
        graph.add_edge(&hub, node)?;
    }
    let mut nodes = vec![hub];
    nodes.extend(rim);
    Ok((graph, nodes))
}

/// Edgeless graph on `n` nodes.
pub fn empty(n: usize) -> Result<(Graph, Vec<Node>), GraphError> {
    with_nodes((0..n).map(|i| format!("e{i}")))
}

/// Petersen graph: outer 5-cycle `o*`, inner pentagram `i*`, spokes between.
///
/// 10 nodes, 15 edges, 3-regular, chromatic number 3.
pub fn petersen() -> Result<(Graph, Vec<Node>), GraphError> {
    let ids = (0..5)
        .map(|i| format!("o{i}"))
        .chain((0..5).map(|i| format!("i{i}")));
    let (mut graph, nodes) = with_nodes(ids)?;
    let (outer, inner) = nodes.split_at(5);
    for i in 0..5 {
        graph.add_edge(&outer[i], &outer[(i + 1) % 5])?;
        graph.add_edge(&inner[i], &inner[(i + 2) % 5])?;
        graph.add_edge(&outer[i], &inner[i])?;
    }
    Ok((graph, nodes))
}

/// Erdős–Rényi `G(n, p)` graph with a fixed seed.
///
/// Every unordered pair is joined independently with probability `p`
/// (clamped to `[0, 1]`, NaN treated as 0).
pub fn random(n: usize, p: f64, seed: u64) -> Result<(Graph, Vec<Node>), GraphError> {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut graph, nodes) = with_nodes((0..n).map(|i| format!("r{i}")))?;
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                graph.add_edge(&nodes[i], &nodes[j])?;
            }
        }
    }
    Ok((graph, nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_shape() {
        let (g, nodes) = cycle(5).unwrap();
        assert_eq!(nodes.len(), 5);
        assert_eq!(g.edge_count(), 5);
        assert!(nodes.iter().all(|n| g.degree(n).unwrap() == 2));

        let (g, _) = cycle(2).unwrap();
        assert_eq!(g.edge_count(), 1);
        let (g, _) = cycle(1).unwrap();
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_complete_shape() {
        let (g, _) = complete(6).unwrap();
        assert_eq!(g.edge_count(), 15);
        assert_eq!(g.max_degree(), 5);
    }

    #[test]
    fn test_star_shape() {
        let (g, nodes) = star(5).unwrap();
        assert_eq!(nodes[0].id.as_str(), "center");
        assert_eq!(g.degree(&nodes[0]).unwrap(), 4);
        assert!(nodes[1..].iter().all(|n| g.degree(n).unwrap() == 1));
    }

    #[test]
    fn test_star_small_sizes() {
        let (g, nodes) = star(0).unwrap();
        assert!(g.is_empty());
        assert!(nodes.is_empty());

        let (g, nodes) = star(1).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(nodes[0].id.as_str(), "center");
    }

    #[test]
    fn test_bipartite_shape() {
        let (g, nodes) = complete_bipartite(2, 3).unwrap();
        assert_eq!(nodes.len(), 5);
        assert_eq!(g.edge_count(), 6);
        assert!(!g.has_edge(&nodes[0], &nodes[1]).unwrap());
    }

    #[test]
    fn test_path_and_wheel_shape() {
        let (g, _) = path(4).unwrap();
        assert_eq!(g.edge_count(), 3);

        let (g, nodes) = wheel(6).unwrap();
        assert_eq!(nodes.len(), 6);
        assert_eq!(g.edge_count(), 10);
        assert_eq!(g.degree(&nodes[0]).unwrap(), 5);
    }

    #[test]
    fn test_petersen_shape() {
        let (g, nodes) = petersen().unwrap();
        assert_eq!(nodes.len(), 10);
        assert_eq!(g.edge_count(), 15);
        assert!(nodes.iter().all(|n| g.degree(n).unwrap() == 3));
    }

    #[test]
    fn test_random_is_seeded() {
        let (g1, _) = random(12, 0.4, 7).unwrap();
        let (g2, _) = random(12, 0.4, 7).unwrap();
        assert_eq!(g1.edges(), g2.edges());

        let (full, _) = random(6, 1.0, 1).unwrap();
        assert_eq!(full.edge_count(), 15);
        let (none, _) = random(6, 0.0, 1).unwrap();
        assert_eq!(none.edge_count(), 0);
    }
}
