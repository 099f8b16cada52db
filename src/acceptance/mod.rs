//! Acceptance criteria.
//!
//! An [`AcceptanceCriterion`] decides whether a non-improving candidate
//! replaces current. The engine only calls [`AcceptanceCriterion::accept`]
//! for candidates that are no better than current (never for BEST or
//! BETTER outcomes), but calls [`AcceptanceCriterion::notify_iteration_end`]
//! unconditionally once per iteration, so threshold/temperature decay
//! keeps advancing even on improving iterations. See `DESIGN.md` for why
//! these are split.

mod combinators;
mod decay;
mod late_acceptance;
mod simple;
mod threshold;

pub use combinators::{All, Any};
pub use decay::{DecayMethod, DecaySchedule};
pub use late_acceptance::LateAcceptance;
pub use simple::{Always, HillClimbing};
pub use threshold::{
    GreatDeluge, NonLinearGreatDeluge, RecordToRecordTravel, SimulatedAnnealing,
    ThresholdAccepting,
};

use rand::RngCore;

/// Decides whether a non-improving candidate replaces current.
pub trait AcceptanceCriterion: Send {
    /// Returns `true` if `candidate_objective` should replace current.
    ///
    /// Only ever invoked when `candidate_objective >= current_objective`
    /// (strictly non-improving), i.e. never for BEST/BETTER outcomes.
    fn accept(
        &mut self,
        rng: &mut dyn RngCore,
        best_objective: f64,
        current_objective: f64,
        candidate_objective: f64,
    ) -> bool;

    /// Advances any internal threshold/temperature/water-level schedule,
    /// and (for history-based criteria) records this iteration's result.
    ///
    /// Called by the engine once per iteration regardless of outcome,
    /// after `current`/`best` have been updated for this iteration.
    /// `current_objective` and `candidate_objective` reflect the state
    /// after that update, so a criterion that needs to know what the
    /// candidate was (e.g. [`LateAcceptance`]) sees it even on
    /// BEST/BETTER iterations, where [`AcceptanceCriterion::accept`] is
    /// never called.
    fn notify_iteration_end(
        &mut self,
        _best_objective: f64,
        _current_objective: f64,
        _candidate_objective: f64,
    ) {
    }
}
