//! Coloring result types shared by every solver.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

use crate::graph::{Node, NodeId};

/// Assignment of a color index to each node.
pub type Coloring = HashMap<Node, usize>;

/// First color index a solver hands out.
///
/// The exact solver numbers colors from 0 while the greedy heuristics start
/// at 1. Consumers that compare colorings across solvers should read the base
/// from [`GraphColoring::color_base`](super::GraphColoring::color_base)
/// instead of assuming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorBase {
    /// Colors are `0, 1, 2, ...`.
    Zero,
    /// Colors are `1, 2, 3, ...`.
    One,
}

impl ColorBase {
    /// The smallest color index under this convention.
    pub fn first(self) -> usize {
        match self {
            ColorBase::Zero => 0,
            ColorBase::One => 1,
        }
    }
}

/// State kept by a solver between `color` calls.
#[derive(Debug, Clone, Default)]
pub struct ColoringRecord {
    /// Result of the most recent successful run (empty before the first).
    pub coloring: Coloring,
    /// Wall-clock duration of the most recent run.
    pub elapsed: Duration,
    /// Number of completed runs.
    pub runs: usize,
}

impl ColoringRecord {
    /// Replaces the stored result with a fresh run.
    pub fn store(&mut self, coloring: Coloring, elapsed: Duration) {
        self.coloring = coloring;
        self.elapsed = elapsed;
        self.runs += 1;
    }
}

/// Number of distinct colors used by `coloring`.
pub fn color_count(coloring: &Coloring) -> usize {
    coloring.values().collect::<HashSet<_>>().len()
}

/// Re-keys a coloring by node id.
pub fn coloring_by_id(coloring: &Coloring) -> BTreeMap<NodeId, usize> {
    coloring
        .iter()
        .map(|(node, &color)| (node.id.clone(), color))
        .collect()
}

/// Groups node ids by color. Ids inside each class are sorted.
pub fn color_classes(coloring: &Coloring) -> BTreeMap<usize, Vec<NodeId>> {
    let mut classes: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
    for (node, &color) in coloring {
        classes.entry(color).or_default().push(node.id.clone());
    }
    for ids in classes.values_mut() {
        ids.sort();
    }
    classes
}
