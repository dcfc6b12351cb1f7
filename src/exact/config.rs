//! Exact solver configuration.

/// Fixed node order used by the backtracking search.
///
/// Correctness does not depend on the order; only the amount of search does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Degree descending, ties by ascending id. Constrained nodes first,
    /// which fails early on infeasible `k`.
    #[default]
    DegreeDescending,
    /// Graph insertion order.
    Insertion,
}

/// Configuration for [`ExactColoring`](super::ExactColoring).
///
/// # Examples
///
/// ```
/// use u_graphcolor::exact::{ExactConfig, SearchOrder};
///
/// let config = ExactConfig::default()
///     .with_search_order(SearchOrder::Insertion)
///     .with_symmetry_breaking(false);
/// assert_eq!(config.search_order, SearchOrder::Insertion);
/// assert!(!config.symmetry_breaking);
/// ```
#[derive(Debug, Clone)]
pub struct ExactConfig {
    /// Node order for the depth-first search.
    pub search_order: SearchOrder,
    /// Skip colors above the highest color used so far plus one.
    ///
    /// Unused colors are interchangeable, so trying more than one of them at
    /// a position only revisits relabelled copies of the same subtree. The
    /// first coloring found is the same either way.
    pub symmetry_breaking: bool,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            search_order: SearchOrder::default(),
            symmetry_breaking: true,
        }
    }
}

impl ExactConfig {
    /// Sets the search order.
    pub fn with_search_order(mut self, order: SearchOrder) -> Self {
        self.search_order = order;
        self
    }

    /// Enables or disables symmetry breaking on unused colors.
    pub fn with_symmetry_breaking(mut self, enabled: bool) -> Self {
        self.symmetry_breaking = enabled;
        self
    }
}
