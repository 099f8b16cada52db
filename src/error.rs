//! Error kinds surfaced by the engine.
//!
//! Configuration failures are rejected before the first iteration, and
//! non-finite objectives are recovered from locally unless strict mode
//! is enabled. Destroy/repair operators and `on_best` callbacks are
//! infallible by signature; a user implementation that needs to fail
//! fatally does so with an ordinary Rust panic, which unwinds out of
//! `iterate` uncaught rather than being wrapped in an `AlnsError`
//! variant.

use thiserror::Error;

/// Errors raised by the ALNS engine.
#[derive(Debug, Error)]
pub enum AlnsError {
    /// Registration, parameter, or criterion misconfiguration detected at
    /// or before the first iteration.
    #[error("ALNS configuration error: {message}")]
    Configuration {
        /// Human-readable description of what is wrong.
        message: String,
    },

    /// A candidate objective was not a finite real number and strict mode
    /// is enabled, so the error propagates instead of being swallowed.
    #[error(
        "non-finite candidate objective {value} at iteration {iteration} \
         (destroy={destroy_name}, repair={repair_name})"
    )]
    InvalidObjective {
        /// Iteration at which the non-finite objective was observed.
        iteration: usize,
        /// The offending objective value (`NaN`, `+inf`, or `-inf`).
        value: f64,
        /// Name of the destroy operator used this iteration.
        destroy_name: String,
        /// Name of the repair operator used this iteration.
        repair_name: String,
    },
}

impl AlnsError {
    /// Builds a [`AlnsError::Configuration`] error.
    pub fn configuration(message: impl Into<String>) -> Self {
        AlnsError::Configuration {
            message: message.into(),
        }
    }
}
