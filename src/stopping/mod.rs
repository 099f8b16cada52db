//! Stopping criteria.

mod max_iterations;
mod max_runtime;
mod no_improvement;

pub use max_iterations::MaxIterations;
pub use max_runtime::MaxRuntime;
pub use no_improvement::NoImprovement;

use rand::RngCore;

/// Decides when `iterate` should stop.
///
/// Called at the top of each iteration. Each criterion is stateful and
/// single-use per `iterate` call; the engine never resets it.
pub trait StoppingCriterion: Send {
    /// Returns `true` if the search should stop before running another
    /// iteration.
    fn stop(&mut self, rng: &mut dyn RngCore, best_objective: f64, current_objective: f64) -> bool;
}
