//! Wall-clock stopping criterion.

use super::StoppingCriterion;
use rand::RngCore;
use std::time::{Duration, Instant};

/// Stops once wall-clock elapsed since the first call exceeds a budget.
#[derive(Debug, Clone, Copy)]
pub struct MaxRuntime {
    budget: Duration,
    started_at: Option<Instant>,
}

impl MaxRuntime {
    /// Builds a criterion with a `seconds`-long budget. The clock starts
    /// on the first call to [`StoppingCriterion::stop`], not at
    /// construction time.
    pub fn new(seconds: f64) -> Self {
        Self {
            budget: Duration::from_secs_f64(seconds.max(0.0)),
            started_at: None,
        }
    }
}

impl StoppingCriterion for MaxRuntime {
    fn stop(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64) -> bool {
        let start = *self.started_at.get_or_insert_with(Instant::now);
        start.elapsed() >= self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn stops_after_budget_elapses() {
        let mut rng = create_rng(0);
        let mut s = MaxRuntime::new(0.01);
        assert!(!s.stop(&mut rng, 0.0, 0.0));
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(s.stop(&mut rng, 0.0, 0.0));
    }

    #[test]
    fn clock_starts_on_first_call() {
        let mut rng = create_rng(0);
        let mut s = MaxRuntime::new(1000.0);
        assert!(!s.stop(&mut rng, 0.0, 0.0));
        assert!(s.started_at.is_some());
    }
}
