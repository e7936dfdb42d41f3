//! Search driver configuration.

/// Configuration for [`bt_search`](super::bt_search).
///
/// # Examples
///
/// ```
/// use fdcsp::search::SearchConfig;
///
/// let config = SearchConfig::default().with_node_limit(10_000).with_seed(42);
/// assert_eq!(config.node_limit, 10_000);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of assignments to try. `0` means unlimited.
    pub node_limit: usize,
    /// Seed for the random variable ordering (`None` for a fixed
    /// default seed; search stays deterministic either way).
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Sets the assignment budget (`0` = unlimited).
    pub fn with_node_limit(mut self, n: usize) -> Self {
        self.node_limit = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
