//! UCB1-style bandit selection over the destroy x repair arm grid.

use super::SelectionScheme;
use crate::operator::OperatorPair;
use crate::outcome::{OutcomeCategory, ScoreVector};
use rand::RngCore;

/// Treats each `(destroy, repair)` pair as an arm of a multi-armed
/// bandit and chooses via an upper-confidence-bound rule.
///
/// For arm `a` with play count `n_a` and empirical mean reward `mu_a`:
///
/// ```text
/// argmax_a [ mu_a + alpha * sqrt((1 + ln(1 + T)) / n_a) ]
/// ```
///
/// where `T = sum(n_a)`. Unplayed arms are chosen first (in index
/// order), so every arm is played at least once before any arm is
/// played a second time.
#[derive(Debug, Clone)]
pub struct AlphaUcb {
    num_repair: usize,
    plays: Vec<u64>,
    mean_reward: Vec<f64>,
    alpha: f64,
    scores: ScoreVector,
    total_plays: u64,
}

impl AlphaUcb {
    /// Builds an `AlphaUCB` scheme over `num_destroy * num_repair` arms.
    ///
    /// `alpha` controls exploration, typically around 0.05, and must be
    /// in `(0, 1]`.
    ///
    /// # Panics
    /// Panics if `num_destroy`/`num_repair` is zero or `alpha` is
    /// outside `(0, 1]`.
    pub fn new(scores: ScoreVector, alpha: f64, num_destroy: usize, num_repair: usize) -> Self {
        assert!(num_destroy > 0 && num_repair > 0, "need >= 1 operator of each kind");
        assert!(alpha > 0.0 && alpha <= 1.0, "alpha must be in (0, 1], got {alpha}");
        let arms = num_destroy * num_repair;
        Self {
            num_repair,
            plays: vec![0; arms],
            mean_reward: vec![0.0; arms],
            alpha,
            scores,
            total_plays: 0,
        }
    }

    fn arm_index(&self, pair: OperatorPair) -> usize {
        pair.destroy_idx * self.num_repair + pair.repair_idx
    }

    fn pair_for_arm(&self, arm: usize) -> OperatorPair {
        OperatorPair::new(arm / self.num_repair, arm % self.num_repair)
    }

    /// Current empirical mean reward per arm, in `destroy * num_repair +
    /// repair` order.
    pub fn mean_rewards(&self) -> &[f64] {
        &self.mean_reward
    }

    /// Current play counts per arm, in the same order as
    /// [`AlphaUcb::mean_rewards`].
    pub fn plays(&self) -> &[u64] {
        &self.plays
    }
}

impl SelectionScheme for AlphaUcb {
    fn operator_counts(&self) -> (usize, usize) {
        (self.plays.len() / self.num_repair, self.num_repair)
    }

    fn choose(
        &mut self,
        rng: &mut dyn RngCore,
        _best_objective: f64,
        _current_objective: f64,
        _context: Option<&[f64]>,
    ) -> OperatorPair {
        use rand::Rng;

        if let Some(unplayed) = self.plays.iter().position(|&n| n == 0) {
            return self.pair_for_arm(unplayed);
        }

        let log_term = (1.0 + (1.0 + self.total_plays as f64).ln()).max(0.0);
        let mut best_arm = 0;
        let mut best_index = f64::NEG_INFINITY;
        for arm in 0..self.plays.len() {
            let n = self.plays[arm] as f64;
            let bonus = self.alpha * (log_term / n).sqrt();
            // tiny random jitter breaks ties deterministically per-seed
            // rather than always favoring the lowest index.
            let jitter = rng.random_range(0.0..1e-9);
            let index = self.mean_reward[arm] + bonus + jitter;
            if index > best_index {
                best_index = index;
                best_arm = arm;
            }
        }
        self.pair_for_arm(best_arm)
    }

    fn update(
        &mut self,
        _candidate_objective: f64,
        pair: OperatorPair,
        outcome: OutcomeCategory,
        _context: Option<&[f64]>,
    ) {
        let arm = self.arm_index(pair);
        let reward = self.scores.score_for(outcome);
        self.plays[arm] += 1;
        self.total_plays += 1;
        let n = self.plays[arm] as f64;
        self.mean_reward[arm] += (reward - self.mean_reward[arm]) / n;
    }
}
