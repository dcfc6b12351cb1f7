//! Undirected simple graph backed by an adjacency list.

use std::fmt;

use indexmap::IndexMap;

use super::node::{Node, NodeId};
use crate::error::GraphError;

/// An undirected simple graph.
///
/// Nodes keep their insertion order and each adjacency list keeps the order
/// edges were added, so every enumeration is deterministic.
///
/// Invariants maintained by the mutating operations:
///
/// - no self-loops,
/// - adjacency is symmetric,
/// - no duplicate edges (re-adding an edge is a no-op),
/// - every neighbor is itself a node of the graph.
///
/// # Examples
///
/// ```
/// use u_graphcolor::graph::{Graph, Node};
///
/// let mut graph = Graph::new();
/// let a = Node::new("a");
/// let b = Node::new("b");
/// graph.add_node(a.clone()).unwrap();
/// graph.add_node(b.clone()).unwrap();
/// graph.add_edge(&a, &b).unwrap();
///
/// assert_eq!(graph.degree(&a).unwrap(), 1);
/// assert_eq!(graph.edges().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: IndexMap<Node, Vec<Node>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Fails if a node with the same id already exists.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.adjacency.insert(node, Vec::new());
        Ok(())
    }

    /// Connects two existing nodes with an undirected edge.
    ///
    /// Adding an edge that already exists is a no-op.
    pub fn add_edge(&mut self, a: &Node, b: &Node) -> Result<(), GraphError> {
        self.ensure(a)?;
        self.ensure(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a.id.clone()));
        }

        let (a_key, a_list) = self
            .adjacency
            .get_key_value(a)
            .ok_or_else(|| GraphError::UnknownNode(a.id.clone()))?;
        if a_list.contains(b) {
            return Ok(());
        }
        let a_key = a_key.clone();
        let b_key = self
            .adjacency
            .get_key_value(b)
            .map(|(k, _)| k.clone())
            .ok_or_else(|| GraphError::UnknownNode(b.id.clone()))?;

        if let Some(list) = self.adjacency.get_mut(&a_key) {
            list.push(b_key.clone());
        }
        if let Some(list) = self.adjacency.get_mut(&b_key) {
            list.push(a_key);
        }
        Ok(())
    }

    /// Returns a copy of the neighbors of `node`.
    pub fn neighbors(&self, node: &Node) -> Result<Vec<Node>, GraphError> {
        self.adjacent(node).map(<[Node]>::to_vec)
    }

    /// Borrowed view of the neighbors of `node`, in insertion order.
    pub fn adjacent(&self, node: &Node) -> Result<&[Node], GraphError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode(node.id.clone()))
    }

    /// Number of neighbors of `node`.
    pub fn degree(&self, node: &Node) -> Result<usize, GraphError> {
        self.adjacent(node).map(<[Node]>::len)
    }

    /// Whether `a` and `b` are connected. Both must be in the graph.
    pub fn has_edge(&self, a: &Node, b: &Node) -> Result<bool, GraphError> {
        self.ensure(b)?;
        Ok(self.adjacent(a)?.contains(b))
    }

    /// Whether `node` is a member of the graph.
    pub fn contains(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Looks up the stored node with the given id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.adjacency
            .get_key_value(&NodeId::from(id))
            .map(|(node, _)| node)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> Vec<Node> {
        self.adjacency.keys().cloned().collect()
    }

    /// Iterates over the nodes without cloning.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> {
        self.adjacency.keys()
    }

    /// Each node with its neighbor list, in insertion order.
    pub(crate) fn iter_adjacency(&self) -> impl Iterator<Item = (&Node, &[Node])> {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| (node, neighbors.as_slice()))
    }

    /// All edges, each undirected pair reported once.
    ///
    /// The first endpoint of each pair has the smaller id under string
    /// comparison, and pairs are grouped by that endpoint in ascending id
    /// order.
    pub fn edges(&self) -> Vec<(Node, Node)> {
        let mut sorted: Vec<(&Node, &Vec<Node>)> = self.adjacency.iter().collect();
        sorted.sort_by(|a, b| a.0.id.cmp(&b.0.id));

        let mut edges = Vec::new();
        for (node, neighbors) in sorted {
            for neighbor in neighbors {
                if node.id < neighbor.id {
                    edges.push((node.clone(), neighbor.clone()));
                }
            }
        }
        edges
    }

    /// Largest degree over all nodes, 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn ensure(&self, node: &Node) -> Result<(), GraphError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node.id.clone()))
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph(nodes={}, edges={})",
            self.node_count(),
            self.edge_count()
        )
    }
}
