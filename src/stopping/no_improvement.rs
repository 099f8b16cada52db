//! Stagnation-based stopping criterion.

use super::StoppingCriterion;
use rand::RngCore;

/// Stops when `best_objective` has not strictly decreased for
/// `max_iters` consecutive calls.
#[derive(Debug, Clone, Copy)]
pub struct NoImprovement {
    max_iters: usize,
    iters_since_improvement: usize,
    last_best: Option<f64>,
}

impl NoImprovement {
    /// Builds a criterion that tolerates `max_iters` consecutive
    /// non-improving iterations before stopping.
    pub fn new(max_iters: usize) -> Self {
        Self {
            max_iters,
            iters_since_improvement: 0,
            last_best: None,
        }
    }
}

impl StoppingCriterion for NoImprovement {
    fn stop(&mut self, _rng: &mut dyn RngCore, best: f64, _current: f64) -> bool {
        match self.last_best {
            Some(last) if best < last => {
                self.iters_since_improvement = 0;
            }
            Some(_) => {
                self.iters_since_improvement += 1;
            }
            None => {
                self.iters_since_improvement = 0;
            }
        }
        self.last_best = Some(best);
        self.iters_since_improvement >= self.max_iters
    }
}
