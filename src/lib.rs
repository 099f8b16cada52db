//! Domain-agnostic Adaptive Large Neighborhood Search (ALNS).
//!
//! ALNS repeatedly destroys part of the current solution and repairs it
//! back into a complete candidate, picking the `(destroy, repair)` pair
//! adaptively from how well each has performed so far, and deciding
//! whether to keep a non-improving candidate via a pluggable acceptance
//! criterion. See Ropke & Pisinger (2006) for the original algorithm.
//!
//! This crate contains no domain-specific concepts — routing, packing,
//! scheduling, etc. are all defined by the caller via [`SolutionState`]
//! and the destroy/repair operators they register.
//!
//! # Usage
//!
//! ```
//! use alns_engine::acceptance::HillClimbing;
//! use alns_engine::selection::RouletteWheel;
//! use alns_engine::stopping::MaxIterations;
//! use alns_engine::{AlnsConfig, AlnsEngine, DestroyOperator, Params, RepairOperator, ScoreVector, SolutionState};
//! use rand::RngCore;
//!
//! #[derive(Clone)]
//! struct Subset(Vec<bool>);
//!
//! impl SolutionState for Subset {
//!     fn objective(&self) -> f64 {
//!         -(self.0.iter().filter(|&&b| b).count() as f64)
//!     }
//! }
//!
//! struct DropSome;
//! impl DestroyOperator<Subset> for DropSome {
//!     fn name(&self) -> &str { "drop_some" }
//!     fn destroy(&self, s: &Subset, rng: &mut dyn RngCore, _p: &Params) -> Subset {
//!         use rand::Rng;
//!         Subset(s.0.iter().map(|&b| b && rng.random_range(0.0..1.0) > 0.2).collect())
//!     }
//! }
//!
//! struct FillAll;
//! impl RepairOperator<Subset> for FillAll {
//!     fn name(&self) -> &str { "fill_all" }
//!     fn repair(&self, s: &Subset, _rng: &mut dyn RngCore, _p: &Params) -> Subset {
//!         Subset(vec![true; s.0.len()])
//!     }
//! }
//!
//! let mut engine: AlnsEngine<Subset> = AlnsEngine::new(AlnsConfig::default().with_seed(1));
//! engine.add_destroy_operator(DropSome);
//! engine.add_repair_operator(FillAll);
//!
//! let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
//! let mut accept = HillClimbing;
//! let mut stop = MaxIterations::new(100);
//!
//! let result = engine
//!     .iterate(Subset(vec![false; 10]), &mut select, &mut accept, &mut stop, &Params::new())
//!     .unwrap();
//! assert_eq!(result.best_objective, -10.0);
//! ```

pub mod acceptance;
pub mod config;
pub mod engine;
pub mod error;
pub mod operator;
pub mod outcome;
pub mod params;
pub mod random;
pub mod result;
pub mod selection;
pub mod state;
pub mod statistics;
pub mod stopping;

pub use config::AlnsConfig;
pub use engine::AlnsEngine;
pub use error::AlnsError;
pub use operator::{DestroyOperator, OperatorPair, RepairOperator};
pub use outcome::{OutcomeCategory, ScoreVector};
pub use params::{ParamValue, Params};
pub use random::create_rng;
pub use result::AlnsResult;
pub use state::SolutionState;
pub use statistics::{IterationRecord, OutcomeCounts, Statistics};
