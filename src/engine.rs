//! The ALNS iteration engine.

use crate::acceptance::AcceptanceCriterion;
use crate::config::AlnsConfig;
use crate::error::AlnsError;
use crate::operator::{DestroyOperator, OperatorPair, RepairOperator};
use crate::outcome::classify;
use crate::params::Params;
use crate::random::create_rng;
use crate::result::AlnsResult;
use crate::selection::SelectionScheme;
use crate::state::SolutionState;
use crate::statistics::{IterationRecord, Statistics};
use crate::stopping::StoppingCriterion;
use rand::rngs::StdRng;
use std::time::Instant;

type OnBestCallback<S> = Box<dyn FnMut(&S, &mut StdRng) -> Option<S> + Send>;

/// Orchestrates the destroy/repair/select/accept/stop loop.
///
/// Owns the registered operators, the random source, and the list of
/// `on_best` callbacks for the lifetime of the engine. A single engine
/// instance is meant for one `iterate` call at a time — concurrent
/// `iterate` calls on the same instance are not supported.
pub struct AlnsEngine<S: SolutionState> {
    destroy_ops: Vec<Box<dyn DestroyOperator<S>>>,
    repair_ops: Vec<Box<dyn RepairOperator<S>>>,
    on_best_callbacks: Vec<OnBestCallback<S>>,
    rng: StdRng,
    config: AlnsConfig,
}

impl<S: SolutionState> AlnsEngine<S> {
    /// Constructs an engine seeded per `config`.
    pub fn new(config: AlnsConfig) -> Self {
        Self {
            destroy_ops: Vec::new(),
            repair_ops: Vec::new(),
            on_best_callbacks: Vec::new(),
            rng: create_rng(config.seed),
            config,
        }
    }

    /// Registers a destroy operator. Operator names need not be unique
    /// across calls, but a caller relying on [`Statistics`] indexing by
    /// registration order should keep them distinct for readability.
    pub fn add_destroy_operator<D: DestroyOperator<S> + 'static>(&mut self, op: D) {
        self.destroy_ops.push(Box::new(op));
    }

    /// Registers a repair operator.
    pub fn add_repair_operator<R: RepairOperator<S> + 'static>(&mut self, op: R) {
        self.repair_ops.push(Box::new(op));
    }

    /// Registers a callback invoked whenever a new global best is found.
    /// A non-`None` return that strictly improves on the new best
    /// replaces both best and current. Callbacks run synchronously, in
    /// registration order, each at most once per iteration.
    pub fn on_best<F>(&mut self, callback: F)
    where
        F: FnMut(&S, &mut StdRng) -> Option<S> + Send + 'static,
    {
        self.on_best_callbacks.push(Box::new(callback));
    }

    /// Runs the search until `stop` signals termination.
    ///
    /// # Errors
    ///
    /// Returns [`AlnsError::Configuration`] if no destroy/repair operator
    /// is registered, if `select`'s operator counts disagree with what
    /// was registered, or if `select` requires a context and `initial`
    /// does not provide one. Returns [`AlnsError::InvalidObjective`] if
    /// [`AlnsConfig::strict_mode`] is set and a non-finite candidate
    /// objective is produced.
    pub fn iterate<SEL, ACC, STOP>(
        &mut self,
        initial: S,
        select: &mut SEL,
        accept: &mut ACC,
        stop: &mut STOP,
        params: &Params,
    ) -> Result<AlnsResult<S>, AlnsError>
    where
        SEL: SelectionScheme,
        ACC: AcceptanceCriterion,
        STOP: StoppingCriterion,
    {
        if self.destroy_ops.is_empty() {
            return Err(AlnsError::configuration("no destroy operator registered"));
        }
        if self.repair_ops.is_empty() {
            return Err(AlnsError::configuration("no repair operator registered"));
        }
        let (expected_destroy, expected_repair) = select.operator_counts();
        if (expected_destroy, expected_repair) != (self.destroy_ops.len(), self.repair_ops.len()) {
            return Err(AlnsError::configuration(format!(
                "selection scheme was built for {expected_destroy} destroy / \
                 {expected_repair} repair operators, but {} / {} are registered",
                self.destroy_ops.len(),
                self.repair_ops.len()
            )));
        }
        if select.requires_context() && initial.context().is_none() {
            return Err(AlnsError::configuration(
                "selection scheme requires a context vector, but the initial state's \
                 context() returned None",
            ));
        }

        let mut current = initial;
        let mut current_objective = current.objective();
        let mut best = current.clone();
        let mut best_objective = current_objective;

        let mut statistics =
            Statistics::new(self.destroy_ops.len(), self.repair_ops.len(), self.config.collect_statistics);
        let mut iterations = 0usize;

        while !stop.stop(&mut self.rng, best_objective, current_objective) {
            let iteration_start = Instant::now();

            let context = if select.requires_context() {
                current.context()
            } else {
                None
            };
            let pair = select.choose(&mut self.rng, best_objective, current_objective, context.as_deref());
            debug_assert!(pair.destroy_idx < self.destroy_ops.len());
            debug_assert!(pair.repair_idx < self.repair_ops.len());

            let destroyed = self.destroy_ops[pair.destroy_idx].destroy(&current, &mut self.rng, params);
            let candidate = self.repair_ops[pair.repair_idx].repair(&destroyed, &mut self.rng, params);
            let candidate_objective = candidate.objective();

            if !candidate_objective.is_finite() {
                log::warn!(
                    "ALNS: non-finite candidate objective {candidate_objective} at iteration \
                     {iterations} (destroy={}, repair={}), rejecting",
                    self.destroy_ops[pair.destroy_idx].name(),
                    self.repair_ops[pair.repair_idx].name(),
                );
                if self.config.strict_mode {
                    return Err(AlnsError::InvalidObjective {
                        iteration: iterations,
                        value: candidate_objective,
                        destroy_name: self.destroy_ops[pair.destroy_idx].name().to_string(),
                        repair_name: self.repair_ops[pair.repair_idx].name().to_string(),
                    });
                }
                accept.notify_iteration_end(best_objective, current_objective, candidate_objective);
                select.update(candidate_objective, pair, crate::OutcomeCategory::Reject, context.as_deref());
                statistics.record(
                    pair.destroy_idx,
                    pair.repair_idx,
                    crate::OutcomeCategory::Reject,
                    IterationRecord {
                        best: best_objective,
                        current: current_objective,
                        candidate: candidate_objective,
                        runtime: iteration_start.elapsed(),
                    },
                );
                iterations += 1;
                continue;
            }

            let outcome = if candidate_objective < best_objective {
                best = candidate.clone();
                best_objective = candidate_objective;
                current = candidate;
                current_objective = candidate_objective;
                self.fire_on_best_callbacks(&mut best, &mut best_objective, &mut current, &mut current_objective);
                crate::OutcomeCategory::Best
            } else if candidate_objective < current_objective {
                current = candidate;
                current_objective = candidate_objective;
                crate::OutcomeCategory::Better
            } else {
                let accepted =
                    accept.accept(&mut self.rng, best_objective, current_objective, candidate_objective);
                let outcome = classify(candidate_objective, current_objective, best_objective, accepted);
                if accepted {
                    current = candidate;
                    current_objective = candidate_objective;
                }
                outcome
            };

            accept.notify_iteration_end(best_objective, current_objective, candidate_objective);
            select.update(candidate_objective, pair, outcome, context.as_deref());
            statistics.record(
                pair.destroy_idx,
                pair.repair_idx,
                outcome,
                IterationRecord {
                    best: best_objective,
                    current: current_objective,
                    candidate: candidate_objective,
                    runtime: iteration_start.elapsed(),
                },
            );
            iterations += 1;
        }

        Ok(AlnsResult {
            best_state: best,
            best_objective,
            iterations,
            statistics,
        })
    }

    fn fire_on_best_callbacks(
        &mut self,
        best: &mut S,
        best_objective: &mut f64,
        current: &mut S,
        current_objective: &mut f64,
    ) {
        for callback in &mut self.on_best_callbacks {
            if let Some(replacement) = callback(best, &mut self.rng) {
                let replacement_objective = replacement.objective();
                if replacement_objective < *best_objective {
                    *best = replacement.clone();
                    *best_objective = replacement_objective;
                    *current = replacement;
                    *current_objective = replacement_objective;
                }
            }
        }
    }
}

/// Convenience for tests/examples: builds an `OperatorPair` without
/// going through a [`SelectionScheme`].
#[cfg(test)]
pub(crate) fn pair(d: usize, r: usize) -> OperatorPair {
    OperatorPair::new(d, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acceptance::{Always, HillClimbing};
    use crate::params::Params;
    use crate::selection::RouletteWheel;
    use crate::stopping::MaxIterations;
    use crate::{OutcomeCategory, ScoreVector};
    use rand::Rng;
    use rand::RngCore;

    #[derive(Clone, Debug)]
    struct Bits(Vec<bool>);

    impl SolutionState for Bits {
        fn objective(&self) -> f64 {
            -(self.0.iter().filter(|&&b| b).count() as f64)
        }
    }

    struct RandomDestroy;
    impl DestroyOperator<Bits> for RandomDestroy {
        fn name(&self) -> &str {
            "random"
        }
        fn destroy(&self, solution: &Bits, rng: &mut dyn RngCore, _params: &Params) -> Bits {
            let mut bits = solution.0.clone();
            for b in &mut bits {
                if *b && rng.random_range(0.0..1.0) < 0.3 {
                    *b = false;
                }
            }
            Bits(bits)
        }
    }

    struct FullRepair;
    impl RepairOperator<Bits> for FullRepair {
        fn name(&self) -> &str {
            "full"
        }
        fn repair(&self, solution: &Bits, _rng: &mut dyn RngCore, _params: &Params) -> Bits {
            let mut bits = solution.0.clone();
            bits.fill(true);
            Bits(bits)
        }
    }

    #[test]
    fn rejects_missing_operators() {
        let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default());
        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
        let mut accept = HillClimbing;
        let mut stop = MaxIterations::new(10);
        let err = engine
            .iterate(Bits(vec![false; 5]), &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap_err();
        assert!(matches!(err, AlnsError::Configuration { .. }));
    }

    #[test]
    fn rejects_mismatched_operator_counts() {
        let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default());
        engine.add_destroy_operator(RandomDestroy);
        engine.add_repair_operator(FullRepair);
        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 2, 1);
        let mut accept = HillClimbing;
        let mut stop = MaxIterations::new(10);
        let err = engine
            .iterate(Bits(vec![false; 5]), &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap_err();
        assert!(matches!(err, AlnsError::Configuration { .. }));
    }

    #[test]
    fn max_iterations_zero_runs_no_operator() {
        let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default());
        engine.add_destroy_operator(RandomDestroy);
        engine.add_repair_operator(FullRepair);
        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
        let mut accept = HillClimbing;
        let mut stop = MaxIterations::new(0);

        let initial = Bits(vec![false, false, true]);
        let result = engine
            .iterate(initial.clone(), &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.best_objective, initial.objective());
        assert_eq!(result.statistics.total_iterations(), 0);
    }

    #[test]
    fn best_objective_is_monotonically_non_increasing() {
        let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default().with_seed(42));
        engine.add_destroy_operator(RandomDestroy);
        engine.add_repair_operator(FullRepair);
        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
        let mut accept = HillClimbing;
        let mut stop = MaxIterations::new(500);

        let initial = Bits((0..20).map(|i| i % 2 == 0).collect());
        let result = engine
            .iterate(initial, &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap();

        let history = result.best_objective_history();
        for window in history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        // FullRepair always fills every bit, so the true optimum (-20) is reachable.
        assert!(result.best_objective <= -15.0);
        assert_eq!(result.statistics.total_iterations(), 500);
    }

    #[test]
    fn deterministic_given_fixed_seed() {
        let run = || {
            let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default().with_seed(7));
            engine.add_destroy_operator(RandomDestroy);
            engine.add_repair_operator(FullRepair);
            let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
            let mut accept = HillClimbing;
            let mut stop = MaxIterations::new(200);
            let initial = Bits((0..15).map(|i| i % 3 == 0).collect());
            engine
                .iterate(initial, &mut select, &mut accept, &mut stop, &Params::new())
                .unwrap()
                .best_objective_history()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn on_best_callback_can_polish_the_new_best() {
        let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default().with_seed(1));
        engine.add_destroy_operator(RandomDestroy);
        engine.add_repair_operator(FullRepair);
        engine.on_best(|state: &Bits, _rng| {
            // "Polish": if not all true yet, force it — always strictly better
            // or equal, so this never regresses the objective.
            if state.0.iter().any(|&b| !b) {
                Some(Bits(vec![true; state.0.len()]))
            } else {
                None
            }
        });

        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
        let mut accept = HillClimbing;
        let mut stop = MaxIterations::new(50);
        let initial = Bits(vec![false; 10]);

        let result = engine
            .iterate(initial, &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap();

        assert_eq!(result.best_objective, -10.0);
    }

    #[test]
    fn strict_mode_propagates_non_finite_objective() {
        struct NanRepair;
        impl RepairOperator<Bits> for NanRepair {
            fn name(&self) -> &str {
                "nan"
            }
            fn repair(&self, solution: &Bits, _rng: &mut dyn RngCore, _params: &Params) -> Bits {
                solution.clone()
            }
        }

        #[derive(Clone, Debug)]
        struct NanState;
        impl SolutionState for NanState {
            fn objective(&self) -> f64 {
                f64::NAN
            }
        }

        struct NoOpDestroy;
        impl DestroyOperator<NanState> for NoOpDestroy {
            fn name(&self) -> &str {
                "noop"
            }
            fn destroy(&self, solution: &NanState, _rng: &mut dyn RngCore, _params: &Params) -> NanState {
                solution.clone()
            }
        }
        struct NoOpRepair;
        impl RepairOperator<NanState> for NoOpRepair {
            fn name(&self) -> &str {
                "noop"
            }
            fn repair(&self, solution: &NanState, _rng: &mut dyn RngCore, _params: &Params) -> NanState {
                solution.clone()
            }
        }

        let mut engine: AlnsEngine<NanState> =
            AlnsEngine::new(AlnsConfig::default().with_strict_mode(true));
        engine.add_destroy_operator(NoOpDestroy);
        engine.add_repair_operator(NoOpRepair);
        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
        let mut accept = Always;
        let mut stop = MaxIterations::new(10);

        let err = engine
            .iterate(NanState, &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap_err();
        assert!(matches!(err, AlnsError::InvalidObjective { .. }));
    }

    #[test]
    fn non_strict_mode_rejects_non_finite_and_continues() {
        #[derive(Clone)]
        struct FlakyState(bool);
        impl SolutionState for FlakyState {
            fn objective(&self) -> f64 {
                if self.0 {
                    f64::INFINITY
                } else {
                    1.0
                }
            }
        }
        struct FlakyDestroy;
        impl DestroyOperator<FlakyState> for FlakyDestroy {
            fn name(&self) -> &str {
                "flaky"
            }
            fn destroy(&self, _solution: &FlakyState, rng: &mut dyn RngCore, _params: &Params) -> FlakyState {
                FlakyState(rng.random_bool(0.5))
            }
        }
        struct FlakyRepair;
        impl RepairOperator<FlakyState> for FlakyRepair {
            fn name(&self) -> &str {
                "flaky"
            }
            fn repair(&self, solution: &FlakyState, _rng: &mut dyn RngCore, _params: &Params) -> FlakyState {
                solution.clone()
            }
        }

        let mut engine: AlnsEngine<FlakyState> = AlnsEngine::new(AlnsConfig::default().with_seed(3));
        engine.add_destroy_operator(FlakyDestroy);
        engine.add_repair_operator(FlakyRepair);
        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
        let mut accept = Always;
        let mut stop = MaxIterations::new(200);

        let result = engine
            .iterate(FlakyState(false), &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap();
        assert_eq!(result.iterations, 200);
        assert_eq!(result.statistics.total_iterations(), 200);
        assert!(result.best_objective.is_finite());
    }

    #[test]
    fn requires_context_without_state_support_is_configuration_error() {
        use crate::selection::{EpsilonGreedyBandit, MabSelector};

        let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default());
        engine.add_destroy_operator(RandomDestroy);
        engine.add_repair_operator(FullRepair);

        struct AlwaysContextual(EpsilonGreedyBandit);
        impl crate::selection::BanditPolicy for AlwaysContextual {
            fn requires_context(&self) -> bool {
                true
            }
            fn predict(&self, arm_count: usize, context: Option<&[f64]>, rng: &mut dyn RngCore) -> usize {
                self.0.predict(arm_count, context, rng)
            }
            fn partial_fit(&mut self, arm: usize, reward: f64, context: Option<&[f64]>) {
                self.0.partial_fit(arm, reward, context)
            }
        }

        let mut select = MabSelector::new(
            AlwaysContextual(EpsilonGreedyBandit::new(1, 0.1)),
            ScoreVector::default(),
            1,
            1,
        );
        let mut accept = HillClimbing;
        let mut stop = MaxIterations::new(10);

        let err = engine
            .iterate(Bits(vec![false; 5]), &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap_err();
        assert!(matches!(err, AlnsError::Configuration { .. }));
    }

    #[test]
    fn operator_counts_sum_to_iterations() {
        let mut engine: AlnsEngine<Bits> = AlnsEngine::new(AlnsConfig::default().with_seed(9));
        engine.add_destroy_operator(RandomDestroy);
        engine.add_repair_operator(FullRepair);
        let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
        let mut accept = HillClimbing;
        let mut stop = MaxIterations::new(77);

        let result = engine
            .iterate(Bits(vec![false; 8]), &mut select, &mut accept, &mut stop, &Params::new())
            .unwrap();

        let total: u64 = result
            .statistics
            .destroy_counts()
            .iter()
            .map(|c| {
                c.get(OutcomeCategory::Best)
                    + c.get(OutcomeCategory::Better)
                    + c.get(OutcomeCategory::Accept)
                    + c.get(OutcomeCategory::Reject)
            })
            .sum();
        assert_eq!(total, 77);
    }
}
