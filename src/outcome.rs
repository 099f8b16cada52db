//! Outcome classification and score vectors.

/// The four mutually exclusive results of considering a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeCategory {
    /// Candidate strictly improved on the global best.
    Best,
    /// Candidate strictly improved on current but not on best.
    Better,
    /// Candidate did not improve, but the acceptance criterion let it
    /// replace current anyway.
    Accept,
    /// Candidate was discarded.
    Reject,
}

impl OutcomeCategory {
    /// All four categories, in the canonical `ScoreVector` order.
    pub const ALL: [OutcomeCategory; 4] = [
        OutcomeCategory::Best,
        OutcomeCategory::Better,
        OutcomeCategory::Accept,
        OutcomeCategory::Reject,
    ];

    /// Index of this category within a [`ScoreVector`] / count table.
    pub fn index(self) -> usize {
        match self {
            OutcomeCategory::Best => 0,
            OutcomeCategory::Better => 1,
            OutcomeCategory::Accept => 2,
            OutcomeCategory::Reject => 3,
        }
    }
}

/// Credit assigned to each outcome category, indexed by
/// [`OutcomeCategory::index`].
///
/// Typically non-increasing (`BEST >= BETTER >= ACCEPT >= REJECT`), but
/// the engine only requires non-negativity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreVector([f64; 4]);

impl ScoreVector {
    /// Builds a score vector from explicit per-category scores.
    ///
    /// # Panics
    /// Panics if any score is negative.
    pub fn new(best: f64, better: f64, accept: f64, reject: f64) -> Self {
        let v = [best, better, accept, reject];
        assert!(
            v.iter().all(|s| *s >= 0.0),
            "ScoreVector entries must be non-negative, got {v:?}"
        );
        ScoreVector(v)
    }

    /// Looks up the score credited to `outcome`.
    pub fn score_for(&self, outcome: OutcomeCategory) -> f64 {
        self.0[outcome.index()]
    }
}

impl Default for ScoreVector {
    /// Ropke & Pisinger (2006) suggested defaults.
    fn default() -> Self {
        ScoreVector::new(33.0, 9.0, 13.0, 0.0)
    }
}

/// Classifies a candidate against the current best/current objectives.
///
/// Pure function: the acceptance criterion's own decision (`accepted`)
/// is folded in only for the non-improving case, matching the engine
/// loop where `accept(..)` is invoked exclusively when the candidate is
/// no better than current.
pub fn classify(
    candidate_objective: f64,
    current_objective: f64,
    best_objective: f64,
    accepted_by_criterion: bool,
) -> OutcomeCategory {
    if candidate_objective < best_objective {
        OutcomeCategory::Best
    } else if candidate_objective < current_objective {
        OutcomeCategory::Better
    } else if accepted_by_criterion {
        OutcomeCategory::Accept
    } else {
        OutcomeCategory::Reject
    }
}
