//! Late Acceptance Hill Climbing.
//!
//! # References
//!
//! Burke & Bykov (2008), "A Late Acceptance Strategy in Hill-Climbing
//! for Exam Timetabling Problems"

use super::AcceptanceCriterion;
use rand::RngCore;

/// Accepts a candidate iff it beats the objective recorded `length`
/// iterations ago, optionally also requiring it to beat current.
///
/// The history buffer is a ring of size `length`, initialized to the
/// initial solution's objective everywhere. Two variants exist for how
/// the slot just consulted is updated afterward:
///
/// - `greedy = true`: always records the candidate's objective (the
///   classic "greedy" LAHC variant — the history tracks every value
///   seen, not just accepted ones).
/// - `greedy = false`: records whatever current becomes after this
///   iteration's decision (candidate if accepted, unchanged otherwise).
#[derive(Debug, Clone)]
pub struct LateAcceptance {
    history: Vec<f64>,
    cursor: usize,
    better_history: bool,
    greedy: bool,
}

impl LateAcceptance {
    /// Builds a late-acceptance criterion with a history of `length`
    /// slots, all initialized to `initial_objective`.
    ///
    /// # Panics
    /// Panics if `length` is zero.
    pub fn new(initial_objective: f64, length: usize) -> Self {
        assert!(length > 0, "history length must be positive");
        Self {
            history: vec![initial_objective; length],
            cursor: 0,
            better_history: false,
            greedy: false,
        }
    }

    /// Additionally requires the candidate to beat current, not just
    /// the `length`-old history entry.
    pub fn with_better_history(mut self, better_history: bool) -> Self {
        self.better_history = better_history;
        self
    }

    /// Selects the greedy history-update variant (see type docs).
    pub fn with_greedy(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }
}

impl AcceptanceCriterion for LateAcceptance {
    fn accept(
        &mut self,
        _rng: &mut dyn RngCore,
        _best_objective: f64,
        current_objective: f64,
        candidate_objective: f64,
    ) -> bool {
        let idx = self.cursor % self.history.len();
        candidate_objective < self.history[idx]
            && (!self.better_history || candidate_objective < current_objective)
    }

    fn notify_iteration_end(
        &mut self,
        _best_objective: f64,
        current_objective: f64,
        candidate_objective: f64,
    ) {
        // Always advances, regardless of outcome — `accept` is skipped
        // entirely on BEST/BETTER iterations, so the ring buffer must
        // move forward here or its cursor falls behind the true
        // iteration count.
        let idx = self.cursor % self.history.len();
        self.history[idx] = if self.greedy {
            candidate_objective
        } else {
            current_objective
        };
        self.cursor += 1;
    }
}
