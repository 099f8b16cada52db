//! Logical combinators over acceptance criteria.

use super::AcceptanceCriterion;
use rand::RngCore;

/// Accepts iff every sub-criterion accepts.
///
/// `All([c])` is behaviorally equal to `c`.
pub struct All {
    criteria: Vec<Box<dyn AcceptanceCriterion>>,
}

impl All {
    /// Builds a conjunction of `criteria`.
    pub fn new(criteria: Vec<Box<dyn AcceptanceCriterion>>) -> Self {
        Self { criteria }
    }
}

impl AcceptanceCriterion for All {
    fn accept(
        &mut self,
        rng: &mut dyn RngCore,
        best: f64,
        current: f64,
        candidate: f64,
    ) -> bool {
        // Evaluate every sub-criterion (not short-circuiting) so each one's
        // internal state observes this candidate exactly once per iteration,
        // same as it would standalone.
        let mut all_accept = true;
        for c in &mut self.criteria {
            if !c.accept(rng, best, current, candidate) {
                all_accept = false;
            }
        }
        all_accept
    }

    fn notify_iteration_end(&mut self, best: f64, current: f64, candidate: f64) {
        for c in &mut self.criteria {
            c.notify_iteration_end(best, current, candidate);
        }
    }
}

/// Accepts iff at least one sub-criterion accepts.
///
/// `Any([HillClimbing, Always])` is equivalent to `Always`.
pub struct Any {
    criteria: Vec<Box<dyn AcceptanceCriterion>>,
}

impl Any {
    /// Builds a disjunction of `criteria`.
    pub fn new(criteria: Vec<Box<dyn AcceptanceCriterion>>) -> Self {
        Self { criteria }
    }
}

impl AcceptanceCriterion for Any {
    fn accept(
        &mut self,
        rng: &mut dyn RngCore,
        best: f64,
        current: f64,
        candidate: f64,
    ) -> bool {
        let mut any_accept = false;
        for c in &mut self.criteria {
            if c.accept(rng, best, current, candidate) {
                any_accept = true;
            }
        }
        any_accept
    }

    fn notify_iteration_end(&mut self, best: f64, current: f64, candidate: f64) {
        for c in &mut self.criteria {
            c.notify_iteration_end(best, current, candidate);
        }
    }
}
