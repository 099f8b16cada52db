//! Criteria with no internal state.

use super::AcceptanceCriterion;
use rand::RngCore;

/// Accepts every candidate it is asked about.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl AcceptanceCriterion for Always {
    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64, _candidate: f64) -> bool {
        true
    }
}

/// Accepts iff the candidate is no worse than current.
///
/// Equal objectives count as acceptable (`<=`, not `<`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbing;

impl AcceptanceCriterion for HillClimbing {
    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, current: f64, candidate: f64) -> bool {
        candidate <= current
    }
}
