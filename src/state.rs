//! Capability contract for caller-supplied solutions.

/// A solution representation owned and defined by the caller.
///
/// The engine never inspects the payload; it only needs an objective
/// value, independent-copy semantics, and — for contextual selection
/// schemes only — a fixed-dimensionality feature vector.
///
/// # Examples
///
/// ```
/// use alns_engine::SolutionState;
///
/// #[derive(Clone)]
/// struct Tour(Vec<usize>);
///
/// impl SolutionState for Tour {
///     fn objective(&self) -> f64 {
///         self.0.len() as f64
///     }
/// }
/// ```
pub trait SolutionState: Clone + Send {
    /// Computes the objective of this solution. Lower is better
    /// (minimization); callers wanting maximization negate their
    /// objective before returning it here.
    ///
    /// Must be deterministic for a given state.
    fn objective(&self) -> f64;

    /// Returns a fixed-dimensionality feature vector describing this
    /// state, for contextual bandit selection schemes.
    ///
    /// The default implementation returns `None`, meaning this state
    /// does not support contextual schemes. A scheme that requires a
    /// context will cause [`crate::AlnsError::Configuration`] if paired
    /// with a state that returns `None`.
    fn context(&self) -> Option<Vec<f64>> {
        None
    }
}
