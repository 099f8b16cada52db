//! Destroy/repair operator contracts.
//!
//! # References
//!
//! Ropke & Pisinger (2006), "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows"

use crate::params::Params;
use rand::RngCore;

/// A destroy operator removes elements from a solution.
///
/// `&mut dyn RngCore` (rather than a generic `R: Rng`) keeps the trait
/// object-safe, since the engine stores a heterogeneous collection of
/// registered operators behind `Box<dyn DestroyOperator<S>>`.
pub trait DestroyOperator<S>: Send + Sync {
    /// A human-readable, within-kind-unique name for this operator.
    fn name(&self) -> &str;

    /// Partially disassembles `solution`, forwarding `params` verbatim.
    fn destroy(&self, solution: &S, rng: &mut dyn RngCore, params: &Params) -> S;
}

/// A repair operator reconstructs a (partially destroyed) solution.
pub trait RepairOperator<S>: Send + Sync {
    /// A human-readable, within-kind-unique name for this operator.
    fn name(&self) -> &str;

    /// Completes `solution` into a full candidate, forwarding `params`
    /// verbatim.
    fn repair(&self, solution: &S, rng: &mut dyn RngCore, params: &Params) -> S;
}

/// The pair of operator indices used in a single iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorPair {
    /// Index into the registered destroy operators.
    pub destroy_idx: usize,
    /// Index into the registered repair operators.
    pub repair_idx: usize,
}

impl OperatorPair {
    /// Builds an operator pair from explicit indices.
    pub fn new(destroy_idx: usize, repair_idx: usize) -> Self {
        Self {
            destroy_idx,
            repair_idx,
        }
    }
}

/// Blanket impl so plain closures can be registered without a named type
/// when a caller only needs one-off operators (e.g. in tests).
impl<S, F> DestroyOperator<S> for (&'static str, F)
where
    F: Fn(&S, &mut dyn RngCore, &Params) -> S + Send + Sync,
{
    fn name(&self) -> &str {
        self.0
    }

    fn destroy(&self, solution: &S, rng: &mut dyn RngCore, params: &Params) -> S {
        (self.1)(solution, rng, params)
    }
}

impl<S, F> RepairOperator<S> for (&'static str, F)
where
    F: Fn(&S, &mut dyn RngCore, &Params) -> S + Send + Sync,
{
    fn name(&self) -> &str {
        self.0
    }

    fn repair(&self, solution: &S, rng: &mut dyn RngCore, params: &Params) -> S {
        (self.1)(solution, rng, params)
    }
}
