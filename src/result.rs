//! The immutable record returned at termination.

use crate::statistics::Statistics;

/// Outcome of an `iterate` call.
///
/// `best.objective() == best_objective` always holds.
#[derive(Debug, Clone)]
pub struct AlnsResult<S: Clone> {
    /// The best solution found.
    pub best_state: S,

    /// Objective of `best_state`.
    pub best_objective: f64,

    /// Number of iterations actually executed.
    pub iterations: usize,

    /// Full statistics recorded during the run.
    pub statistics: Statistics,
}

impl<S: Clone> AlnsResult<S> {
    /// Best objective sampled at the end of each iteration, in order —
    /// the series a caller would plot to see search progress.
    ///
    /// Empty if [`crate::AlnsConfig::collect_statistics`] was disabled.
    pub fn best_objective_history(&self) -> Vec<f64> {
        self.statistics.iterations().iter().map(|r| r.best).collect()
    }

    /// Candidate objective sampled at the end of each iteration, in
    /// order — useful for plotting search volatility.
    ///
    /// Empty if [`crate::AlnsConfig::collect_statistics`] was disabled.
    pub fn candidate_objective_history(&self) -> Vec<f64> {
        self.statistics.iterations().iter().map(|r| r.candidate).collect()
    }
}
