//! Contextual bandit bridge.
//!
//! `MabSelector` wraps an external (or built-in) bandit policy so the
//! engine can delegate operator-pair selection to it. Every
//! `(destroy, repair)` pair is flattened into a single arm index.

use super::SelectionScheme;
use crate::operator::OperatorPair;
use crate::outcome::{OutcomeCategory, ScoreVector};
use rand::RngCore;

/// A pluggable bandit policy consulted by [`MabSelector`].
///
/// Implement this to bridge in an external bandit library; the engine
/// ships two built-ins ([`EpsilonGreedyBandit`], non-contextual, and
/// [`LinearContextualBandit`], contextual) so selection works without
/// one.
pub trait BanditPolicy: Send {
    /// Whether this policy needs a context vector on every `predict`.
    fn requires_context(&self) -> bool;

    /// Chooses an arm in `0..arm_count`.
    fn predict(&self, arm_count: usize, context: Option<&[f64]>, rng: &mut dyn RngCore) -> usize;

    /// Updates the policy from an observed reward for `arm`.
    fn partial_fit(&mut self, arm: usize, reward: f64, context: Option<&[f64]>);
}

/// Non-contextual epsilon-greedy bandit: explores uniformly with
/// probability `epsilon`, otherwise plays the arm with the highest
/// running mean reward.
#[derive(Debug, Clone)]
pub struct EpsilonGreedyBandit {
    epsilon: f64,
    plays: Vec<u64>,
    mean_reward: Vec<f64>,
}

impl EpsilonGreedyBandit {
    /// Builds an epsilon-greedy bandit over `arm_count` arms.
    ///
    /// # Panics
    /// Panics if `epsilon` is outside `[0, 1]` or `arm_count` is zero.
    pub fn new(arm_count: usize, epsilon: f64) -> Self {
        assert!(arm_count > 0, "arm_count must be positive");
        assert!((0.0..=1.0).contains(&epsilon), "epsilon must be in [0, 1]");
        Self {
            epsilon,
            plays: vec![0; arm_count],
            mean_reward: vec![0.0; arm_count],
        }
    }
}

impl BanditPolicy for EpsilonGreedyBandit {
    fn requires_context(&self) -> bool {
        false
    }

    fn predict(&self, arm_count: usize, _context: Option<&[f64]>, rng: &mut dyn RngCore) -> usize {
        use rand::Rng;
        if let Some(unplayed) = self.plays.iter().position(|&n| n == 0) {
            return unplayed;
        }
        if rng.random_range(0.0..1.0) < self.epsilon {
            return rng.random_range(0..arm_count);
        }
        self.mean_reward
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn partial_fit(&mut self, arm: usize, reward: f64, _context: Option<&[f64]>) {
        self.plays[arm] += 1;
        let n = self.plays[arm] as f64;
        self.mean_reward[arm] += (reward - self.mean_reward[arm]) / n;
    }
}

/// A simplified contextual bandit: one linear model per arm, updated by
/// online gradient descent toward the observed reward, with an
/// exploration bonus that shrinks as an arm accumulates plays.
///
/// This is not a full LinUCB (no covariance matrix, no confidence
/// ellipsoid); it is a lightweight linear bandit that still lets
/// [`MabSelector`] exercise the contextual code path end-to-end without
/// depending on an external crate.
#[derive(Debug, Clone)]
pub struct LinearContextualBandit {
    weights: Vec<Vec<f64>>,
    plays: Vec<u64>,
    context_dim: usize,
    learning_rate: f64,
    exploration: f64,
}

impl LinearContextualBandit {
    /// Builds a linear contextual bandit over `arm_count` arms, each
    /// scoring a context vector of dimensionality `context_dim`.
    ///
    /// # Panics
    /// Panics if `arm_count` or `context_dim` is zero.
    pub fn new(arm_count: usize, context_dim: usize, learning_rate: f64, exploration: f64) -> Self {
        assert!(arm_count > 0 && context_dim > 0, "arm_count and context_dim must be positive");
        Self {
            weights: vec![vec![0.0; context_dim]; arm_count],
            plays: vec![0; arm_count],
            context_dim,
            learning_rate,
            exploration,
        }
    }

    fn score(&self, arm: usize, context: &[f64]) -> f64 {
        self.weights[arm]
            .iter()
            .zip(context)
            .map(|(w, x)| w * x)
            .sum()
    }
}

impl BanditPolicy for LinearContextualBandit {
    fn requires_context(&self) -> bool {
        true
    }

    fn predict(&self, arm_count: usize, context: Option<&[f64]>, rng: &mut dyn RngCore) -> usize {
        use rand::Rng;
        let context = context.expect("LinearContextualBandit requires a context vector");
        assert_eq!(context.len(), self.context_dim, "context dimensionality mismatch");

        if let Some(unplayed) = self.plays.iter().position(|&n| n == 0) {
            return unplayed;
        }

        let mut best_arm = 0;
        let mut best_value = f64::NEG_INFINITY;
        for arm in 0..arm_count {
            let bonus = self.exploration / (self.plays[arm] as f64).sqrt();
            let jitter = rng.random_range(0.0..1e-9);
            let value = self.score(arm, context) + bonus + jitter;
            if value > best_value {
                best_value = value;
                best_arm = arm;
            }
        }
        best_arm
    }

    fn partial_fit(&mut self, arm: usize, reward: f64, context: Option<&[f64]>) {
        let context = context.expect("LinearContextualBandit requires a context vector");
        self.plays[arm] += 1;
        let predicted = self.score(arm, context);
        let error = reward - predicted;
        for (w, x) in self.weights[arm].iter_mut().zip(context) {
            *w += self.learning_rate * error * x;
        }
    }
}

/// Selection scheme that delegates to an injected [`BanditPolicy`].
///
/// If the policy requires a context and the solution state does not
/// provide one, the engine fails fast with
/// [`crate::AlnsError::Configuration`] before the first iteration.
pub struct MabSelector<P: BanditPolicy> {
    policy: P,
    num_destroy: usize,
    num_repair: usize,
    scores: ScoreVector,
}

impl<P: BanditPolicy> MabSelector<P> {
    /// Wraps `policy`, flattening the `num_destroy x num_repair` grid
    /// into arms in row-major (destroy-major) order.
    pub fn new(policy: P, scores: ScoreVector, num_destroy: usize, num_repair: usize) -> Self {
        assert!(num_destroy > 0 && num_repair > 0, "need >= 1 operator of each kind");
        Self {
            policy,
            num_destroy,
            num_repair,
            scores,
        }
    }

    fn arm_index(&self, pair: OperatorPair) -> usize {
        pair.destroy_idx * self.num_repair + pair.repair_idx
    }

    fn pair_for_arm(&self, arm: usize) -> OperatorPair {
        OperatorPair::new(arm / self.num_repair, arm % self.num_repair)
    }
}

impl<P: BanditPolicy> SelectionScheme for MabSelector<P> {
    fn operator_counts(&self) -> (usize, usize) {
        (self.num_destroy, self.num_repair)
    }

    fn requires_context(&self) -> bool {
        self.policy.requires_context()
    }

    fn choose(
        &mut self,
        rng: &mut dyn RngCore,
        _best_objective: f64,
        _current_objective: f64,
        context: Option<&[f64]>,
    ) -> OperatorPair {
        let arm = self
            .policy
            .predict(self.num_destroy * self.num_repair, context, rng);
        self.pair_for_arm(arm)
    }

    fn update(
        &mut self,
        _candidate_objective: f64,
        pair: OperatorPair,
        outcome: OutcomeCategory,
        context: Option<&[f64]>,
    ) {
        let arm = self.arm_index(pair);
        let reward = self.scores.score_for(outcome);
        self.policy.partial_fit(arm, reward, context);
    }
}
