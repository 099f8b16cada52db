//! Operator selection schemes.
//!
//! A selection scheme chooses a `(destroy, repair)` pair each iteration
//! and updates its internal state from the observed outcome. All
//! variants share the [`SelectionScheme`] trait.

mod alpha_ucb;
mod mab;
mod roulette;

pub use alpha_ucb::AlphaUcb;
pub use mab::{BanditPolicy, EpsilonGreedyBandit, LinearContextualBandit, MabSelector};
pub use roulette::{RouletteWheel, SegmentedRouletteWheel};

use crate::operator::OperatorPair;
use crate::outcome::OutcomeCategory;
use rand::RngCore;

/// Chooses and adapts `(destroy, repair)` operator pairs.
///
/// Construction takes the number of registered destroy/repair operators;
/// the engine fails with [`crate::AlnsError::Configuration`] before the
/// first iteration if a scheme's internal operator counts disagree with
/// what was actually registered (see [`SelectionScheme::operator_counts`]).
pub trait SelectionScheme: Send {
    /// Number of destroy/repair operators this scheme was built for.
    fn operator_counts(&self) -> (usize, usize);

    /// Whether this scheme needs [`crate::SolutionState::context`] to be
    /// `Some` on every state it sees.
    fn requires_context(&self) -> bool {
        false
    }

    /// Chooses a `(destroy, repair)` pair for this iteration.
    fn choose(
        &mut self,
        rng: &mut dyn RngCore,
        best_objective: f64,
        current_objective: f64,
        context: Option<&[f64]>,
    ) -> OperatorPair;

    /// Updates internal state from the observed outcome of the pair
    /// chosen this iteration.
    fn update(
        &mut self,
        candidate_objective: f64,
        pair: OperatorPair,
        outcome: OutcomeCategory,
        context: Option<&[f64]>,
    );
}

/// Samples an index from non-negative weights proportional to their
/// value, falling back to a uniform draw when every weight is zero.
///
/// Shared by [`RouletteWheel`] and [`SegmentedRouletteWheel`].
fn weighted_choice(weights: &[f64], rng: &mut dyn RngCore) -> usize {
    use rand::Rng;

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || weights.is_empty() {
        return rng.random_range(0..weights.len().max(1));
    }

    let mut roll = rng.random_range(0.0..total);
    for (i, &w) in weights.iter().enumerate() {
        roll -= w;
        if roll <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}
