//! Engine-level configuration.

/// Configuration for a single `iterate` call that is not owned by any
/// particular selection/acceptance/stopping strategy.
#[derive(Debug, Clone)]
pub struct AlnsConfig {
    /// Random seed for reproducibility.
    pub seed: u64,

    /// Whether to record per-iteration objective history in
    /// [`crate::Statistics`]. Per-operator outcome counts are always
    /// recorded regardless of this flag. Default `true`.
    pub collect_statistics: bool,

    /// If `true`, a non-finite candidate objective propagates as
    /// [`crate::AlnsError::InvalidObjective`] instead of being silently
    /// rejected. Default `false`.
    pub strict_mode: bool,
}

impl Default for AlnsConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            collect_statistics: true,
            strict_mode: false,
        }
    }
}

impl AlnsConfig {
    /// Sets the random seed, builder-style.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Toggles per-iteration statistics collection, builder-style.
    pub fn with_collect_statistics(mut self, collect: bool) -> Self {
        self.collect_statistics = collect;
        self
    }

    /// Toggles strict mode, builder-style.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }
}
