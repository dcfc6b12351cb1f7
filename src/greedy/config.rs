//! Greedy solver configuration.

/// Order in which the greedy solver visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStrategy {
    /// Ascending node id (string comparison).
    #[default]
    Natural,
    /// Degree descending, ties broken by ascending id.
    Degree,
}

/// Configuration for [`GreedyColoring`](super::GreedyColoring).
///
/// # Examples
///
/// ```
/// use u_graphcolor::greedy::{GreedyConfig, OrderStrategy};
///
/// let config = GreedyConfig::default().with_order(OrderStrategy::Degree);
/// assert_eq!(config.order, OrderStrategy::Degree);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyConfig {
    /// Node visiting order.
    pub order: OrderStrategy,
}

impl GreedyConfig {
    /// Sets the node visiting order.
    pub fn with_order(mut self, order: OrderStrategy) -> Self {
        self.order = order;
        self
    }
}
