//! Vertex identity types.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque vertex identifier.
///
/// Identifiers are compared as strings. Integer identifiers are stored in
/// their decimal form, so `NodeId::from(10) < NodeId::from(2)`.
///
/// # Examples
///
/// ```
/// use u_graphcolor::graph::NodeId;
///
/// assert_eq!(NodeId::from(42), NodeId::from("42"));
/// assert!(NodeId::from(10) < NodeId::from(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

macro_rules! node_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NodeId {
                fn from(id: $t) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

node_id_from_int!(i32, i64, u32, u64, usize);

/// A graph vertex.
///
/// Equality, ordering and hashing use only [`Node::id`]; the optional
/// `data` payload is carried for callers and ignored by every algorithm.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Unique identifier within a graph.
    pub id: NodeId,
    /// Caller payload.
    pub data: Option<String>,
}

impl Node {
    /// Creates a node without payload.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            data: None,
        }
    }

    /// Attaches a payload to the node.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

// Hash and Eq above delegate to `id`, which keeps map lookups by `&NodeId` consistent.
impl Borrow<NodeId> for Node {
    fn borrow(&self) -> &NodeId {
        &self.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "Node({}, data={})", self.id, data),
            None => write!(f, "Node({})", self.id),
        }
    }
}
