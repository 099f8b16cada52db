//! Threshold- and temperature-based acceptance criteria.

use super::decay::{DecayMethod, DecaySchedule};
use super::AcceptanceCriterion;
use crate::error::AlnsError;
use rand::RngCore;

/// Accepts iff `f(candidate) - f(best) <= T_t`, with `T_t` decaying
/// toward `end` per [`DecaySchedule`].
#[derive(Debug, Clone)]
pub struct RecordToRecordTravel {
    threshold: DecaySchedule,
}

impl RecordToRecordTravel {
    /// Builds an RRT criterion from an explicit decay schedule.
    pub fn new(start: f64, end: f64, step: f64, method: DecayMethod) -> Result<Self, AlnsError> {
        Ok(Self {
            threshold: DecaySchedule::new(start, end, step, method)?,
        })
    }

    /// Current threshold value.
    pub fn threshold(&self) -> f64 {
        self.threshold.value()
    }

    /// Derives `(start, end=0, step)` so that a candidate `worse * 100%`
    /// worse than `initial_objective` is, at the first iteration,
    /// exactly at the acceptance boundary; `step` decays the threshold
    /// to 0 over `num_iters` iterations.
    ///
    /// # References
    ///
    /// Santini, Ropke & Hvattum (2018), "A comparison of acceptance
    /// criteria for the adaptive large neighbourhood search metaheuristic"
    pub fn autofit(
        initial_objective: f64,
        worse: f64,
        num_iters: usize,
        method: DecayMethod,
    ) -> Result<Self, AlnsError> {
        if num_iters == 0 {
            return Err(AlnsError::configuration("autofit requires num_iters > 0"));
        }
        let start = worse * initial_objective.abs();
        let end = 0.0;
        let step = match method {
            DecayMethod::Linear => (start - end) / num_iters as f64,
            DecayMethod::Exponential => {
                return Err(AlnsError::configuration(
                    "RRT autofit requires end > 0 for exponential decay; use linear \
                     or construct RecordToRecordTravel::new directly",
                ))
            }
        };
        Self::new(start, end, step, method)
    }
}

impl AcceptanceCriterion for RecordToRecordTravel {
    fn accept(&mut self, _rng: &mut dyn RngCore, best: f64, _current: f64, candidate: f64) -> bool {
        candidate - best <= self.threshold.value()
    }

    fn notify_iteration_end(&mut self, _best: f64, _current: f64, _candidate: f64) {
        self.threshold.tick();
    }
}

/// Accepts iff `f(candidate) - f(current) <= T_t`.
#[derive(Debug, Clone)]
pub struct ThresholdAccepting {
    threshold: DecaySchedule,
}

impl ThresholdAccepting {
    /// Builds a threshold-accepting criterion from an explicit decay
    /// schedule.
    pub fn new(start: f64, end: f64, step: f64, method: DecayMethod) -> Result<Self, AlnsError> {
        Ok(Self {
            threshold: DecaySchedule::new(start, end, step, method)?,
        })
    }

    /// Current threshold value.
    pub fn threshold(&self) -> f64 {
        self.threshold.value()
    }
}

impl AcceptanceCriterion for ThresholdAccepting {
    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, current: f64, candidate: f64) -> bool {
        candidate - current <= self.threshold.value()
    }

    fn notify_iteration_end(&mut self, _best: f64, _current: f64, _candidate: f64) {
        self.threshold.tick();
    }
}

/// Metropolis acceptance: `exp((f(current) - f(candidate)) / T_t) >= U`,
/// `U ~ Uniform[0, 1)`.
///
/// With `start == end` the temperature never moves and this degenerates
/// to a fixed-temperature Metropolis criterion.
///
/// # References
///
/// Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
/// Annealing"
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    temperature: DecaySchedule,
}

impl SimulatedAnnealing {
    /// Builds an SA criterion from an explicit decay schedule.
    pub fn new(start: f64, end: f64, step: f64, method: DecayMethod) -> Result<Self, AlnsError> {
        Ok(Self {
            temperature: DecaySchedule::new(start, end, step, method)?,
        })
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature.value()
    }

    /// Derives `(start, end=1, step)` so a candidate `worse * 100%`
    /// worse than `initial_objective` is accepted with probability
    /// `accept_prob` at the first iteration:
    ///
    /// ```text
    /// T_start = -worse * |f_0| / ln(accept_prob)
    /// ```
    ///
    /// `step` decays `T` from `T_start` to `end = 1` over `num_iters`
    /// iterations (`exponential: step = (end / start)^(1 / num_iters)`,
    /// `linear: step = (start - end) / num_iters`).
    ///
    /// # Errors
    ///
    /// Returns [`AlnsError::Configuration`] if `accept_prob` is not in
    /// `(0, 1)`, or (for `exponential`) the derived `start` is not
    /// strictly positive.
    pub fn autofit(
        initial_objective: f64,
        worse: f64,
        accept_prob: f64,
        num_iters: usize,
        method: DecayMethod,
    ) -> Result<Self, AlnsError> {
        if !(accept_prob > 0.0 && accept_prob < 1.0) {
            return Err(AlnsError::configuration(format!(
                "accept_prob must be in (0, 1), got {accept_prob}"
            )));
        }
        if num_iters == 0 {
            return Err(AlnsError::configuration("autofit requires num_iters > 0"));
        }
        let start = -worse * initial_objective.abs() / accept_prob.ln();
        let end = 1.0;
        let step = match method {
            DecayMethod::Linear => (start - end) / num_iters as f64,
            DecayMethod::Exponential => {
                if start <= 0.0 {
                    return Err(AlnsError::configuration(
                        "exponential autofit requires a positive derived start temperature",
                    ));
                }
                (end / start).powf(1.0 / num_iters as f64).clamp(f64::MIN_POSITIVE, 1.0)
            }
        };
        Self::new(start, end, step, method)
    }
}

impl AcceptanceCriterion for SimulatedAnnealing {
    fn accept(&mut self, rng: &mut dyn RngCore, _best: f64, current: f64, candidate: f64) -> bool {
        use rand::Rng;
        let t = self.temperature.value();
        if t <= 0.0 {
            return candidate <= current;
        }
        let acceptance_probability = ((current - candidate) / t).exp();
        let u: f64 = rng.random_range(0.0..1.0);
        acceptance_probability >= u
    }

    fn notify_iteration_end(&mut self, _best: f64, _current: f64, _candidate: f64) {
        self.temperature.tick();
    }
}

/// Accepts iff `f(candidate) < B_t`, where the "water level" `B_t`
/// decreases geometrically toward the best objective seen so far:
/// `B_t <- best + (B_t - best) * decay_rate`.
///
/// # References
///
/// Dueck (1993), "New Optimization Heuristics: The Great Deluge
/// Algorithm and the Record-to-Record Travel"
#[derive(Debug, Clone)]
pub struct GreatDeluge {
    level: f64,
    decay_rate: f64,
}

impl GreatDeluge {
    /// Builds a great-deluge criterion with an initial water `level`
    /// and a per-iteration `decay_rate` in `(0, 1)` controlling how
    /// quickly the level falls toward best.
    ///
    /// # Panics
    /// Panics if `decay_rate` is outside `(0, 1)`.
    pub fn new(level: f64, decay_rate: f64) -> Self {
        assert!(decay_rate > 0.0 && decay_rate < 1.0, "decay_rate must be in (0, 1)");
        Self { level, decay_rate }
    }

    /// Current water level.
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl AcceptanceCriterion for GreatDeluge {
    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64, candidate: f64) -> bool {
        candidate < self.level
    }

    fn notify_iteration_end(&mut self, best: f64, _current: f64, _candidate: f64) {
        self.level = best + (self.level - best) * self.decay_rate;
    }
}

/// As [`GreatDeluge`], but applies a steeper (squared) decay factor
/// whenever the level is updated following an iteration, which drains
/// the water level faster once the search has been running a while.
///
/// # References
///
/// Dueck (1993); non-linear deluge-rate variants are discussed in
/// Santini, Ropke & Hvattum (2018), Section 3.
#[derive(Debug, Clone)]
pub struct NonLinearGreatDeluge {
    level: f64,
    decay_rate: f64,
    iteration: u64,
}

impl NonLinearGreatDeluge {
    /// Builds a non-linear great-deluge criterion.
    ///
    /// # Panics
    /// Panics if `decay_rate` is outside `(0, 1)`.
    pub fn new(level: f64, decay_rate: f64) -> Self {
        assert!(decay_rate > 0.0 && decay_rate < 1.0, "decay_rate must be in (0, 1)");
        Self {
            level,
            decay_rate,
            iteration: 0,
        }
    }

    /// Current water level.
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl AcceptanceCriterion for NonLinearGreatDeluge {
    fn accept(&mut self, _rng: &mut dyn RngCore, _best: f64, _current: f64, candidate: f64) -> bool {
        candidate < self.level
    }

    fn notify_iteration_end(&mut self, best: f64, _current: f64, _candidate: f64) {
        self.iteration += 1;
        // Effective rate approaches decay_rate^2 as the run progresses,
        // draining the level toward best faster than plain GreatDeluge
        // over time.
        let progress = 1.0 - 1.0 / (1.0 + self.iteration as f64 / 1000.0);
        let effective_rate = self.decay_rate.powf(1.0 + progress);
        self.level = best + (self.level - best) * effective_rate;
    }
}
