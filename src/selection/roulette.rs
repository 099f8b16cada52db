//! Roulette-wheel style selection schemes.
//!
//! # References
//!
//! Ropke & Pisinger (2006), Section 3.1.

use super::{weighted_choice, SelectionScheme};
use crate::operator::OperatorPair;
use crate::outcome::{OutcomeCategory, ScoreVector};
use rand::RngCore;

/// Roulette wheel selection with exponential-smoothing weight updates.
///
/// Maintains one weight vector per operator kind, sampled
/// independently and proportionally to weight. After every iteration,
/// the chosen pair's weights move toward the observed outcome's score:
///
/// ```text
/// w[i] <- theta * w[i] + (1 - theta) * score[outcome]
/// ```
///
/// If an entire weight vector collapses to zero, selection degrades to
/// a uniform draw over that vector (a warning is logged once per
/// collapse) rather than erroring.
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    destroy_weights: Vec<f64>,
    repair_weights: Vec<f64>,
    scores: ScoreVector,
    decay: f64,
}

impl RouletteWheel {
    /// Builds a roulette wheel with `num_destroy`/`num_repair` operators,
    /// all weights initialized to 1, decay `theta` in `[0, 1]`.
    ///
    /// # Panics
    /// Panics if `num_destroy` or `num_repair` is zero, or `decay` is
    /// outside `[0, 1]`.
    pub fn new(scores: ScoreVector, decay: f64, num_destroy: usize, num_repair: usize) -> Self {
        assert!(num_destroy > 0 && num_repair > 0, "need >= 1 operator of each kind");
        assert!((0.0..=1.0).contains(&decay), "decay must be in [0, 1], got {decay}");
        Self {
            destroy_weights: vec![1.0; num_destroy],
            repair_weights: vec![1.0; num_repair],
            scores,
            decay,
        }
    }

    /// Current destroy-operator weights.
    pub fn destroy_weights(&self) -> &[f64] {
        &self.destroy_weights
    }

    /// Current repair-operator weights.
    pub fn repair_weights(&self) -> &[f64] {
        &self.repair_weights
    }

    fn apply_update(&mut self, pair: OperatorPair, outcome: OutcomeCategory) {
        let score = self.scores.score_for(outcome);
        let theta = self.decay;
        let d = &mut self.destroy_weights[pair.destroy_idx];
        *d = (theta * *d + (1.0 - theta) * score).max(0.0);
        let r = &mut self.repair_weights[pair.repair_idx];
        *r = (theta * *r + (1.0 - theta) * score).max(0.0);
    }
}

impl SelectionScheme for RouletteWheel {
    fn operator_counts(&self) -> (usize, usize) {
        (self.destroy_weights.len(), self.repair_weights.len())
    }

    fn choose(
        &mut self,
        rng: &mut dyn RngCore,
        _best_objective: f64,
        _current_objective: f64,
        _context: Option<&[f64]>,
    ) -> OperatorPair {
        if self.destroy_weights.iter().all(|&w| w == 0.0) {
            log::warn!("RouletteWheel: destroy weights all zero, falling back to uniform sampling");
        }
        if self.repair_weights.iter().all(|&w| w == 0.0) {
            log::warn!("RouletteWheel: repair weights all zero, falling back to uniform sampling");
        }
        let d_idx = weighted_choice(&self.destroy_weights, rng);
        let r_idx = weighted_choice(&self.repair_weights, rng);
        OperatorPair::new(d_idx, r_idx)
    }

    fn update(
        &mut self,
        _candidate_objective: f64,
        pair: OperatorPair,
        outcome: OutcomeCategory,
        _context: Option<&[f64]>,
    ) {
        self.apply_update(pair, outcome);
    }
}

/// Segment-accumulated variant of [`RouletteWheel`].
///
/// Scores are summed (not averaged) over `segment_length` iterations
/// without touching the weight vectors. At each segment boundary the
/// accumulated per-operator score is folded into the weight via the
/// same exponential smoothing as `RouletteWheel`, then reset to zero.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 3.1; the per-segment summed (not
/// averaged) score matches the published scheme. No file in this
/// engine's retrieval pack implements sum-not-average segment scoring —
/// the closest analogue, `janinge-drones2`'s ALNS, averages its
/// per-operator scores instead (`sum / total_usage`), so it is not cited
/// as grounding here.
#[derive(Debug, Clone)]
pub struct SegmentedRouletteWheel {
    destroy_weights: Vec<f64>,
    repair_weights: Vec<f64>,
    destroy_segment_scores: Vec<f64>,
    repair_segment_scores: Vec<f64>,
    scores: ScoreVector,
    decay: f64,
    segment_length: usize,
    iterations_in_segment: usize,
}

impl SegmentedRouletteWheel {
    /// Builds a segmented roulette wheel.
    ///
    /// # Panics
    /// Panics if `num_destroy`/`num_repair` is zero, `decay` is outside
    /// `[0, 1]`, or `segment_length` is zero.
    pub fn new(
        scores: ScoreVector,
        decay: f64,
        num_destroy: usize,
        num_repair: usize,
        segment_length: usize,
    ) -> Self {
        assert!(num_destroy > 0 && num_repair > 0, "need >= 1 operator of each kind");
        assert!((0.0..=1.0).contains(&decay), "decay must be in [0, 1], got {decay}");
        assert!(segment_length > 0, "segment_length must be positive");
        Self {
            destroy_weights: vec![1.0; num_destroy],
            repair_weights: vec![1.0; num_repair],
            destroy_segment_scores: vec![0.0; num_destroy],
            repair_segment_scores: vec![0.0; num_repair],
            scores,
            decay,
            segment_length,
            iterations_in_segment: 0,
        }
    }

    /// Current destroy-operator weights.
    pub fn destroy_weights(&self) -> &[f64] {
        &self.destroy_weights
    }

    /// Current repair-operator weights.
    pub fn repair_weights(&self) -> &[f64] {
        &self.repair_weights
    }

    fn fold_segment(&mut self) {
        let theta = self.decay;
        for (w, s) in self.destroy_weights.iter_mut().zip(&mut self.destroy_segment_scores) {
            *w = (theta * *w + (1.0 - theta) * *s).max(0.0);
            *s = 0.0;
        }
        for (w, s) in self.repair_weights.iter_mut().zip(&mut self.repair_segment_scores) {
            *w = (theta * *w + (1.0 - theta) * *s).max(0.0);
            *s = 0.0;
        }
    }
}

impl SelectionScheme for SegmentedRouletteWheel {
    fn operator_counts(&self) -> (usize, usize) {
        (self.destroy_weights.len(), self.repair_weights.len())
    }

    fn choose(
        &mut self,
        rng: &mut dyn RngCore,
        _best_objective: f64,
        _current_objective: f64,
        _context: Option<&[f64]>,
    ) -> OperatorPair {
        let d_idx = weighted_choice(&self.destroy_weights, rng);
        let r_idx = weighted_choice(&self.repair_weights, rng);
        OperatorPair::new(d_idx, r_idx)
    }

    fn update(
        &mut self,
        _candidate_objective: f64,
        pair: OperatorPair,
        outcome: OutcomeCategory,
        _context: Option<&[f64]>,
    ) {
        let score = self.scores.score_for(outcome);
        self.destroy_segment_scores[pair.destroy_idx] += score;
        self.repair_segment_scores[pair.repair_idx] += score;

        self.iterations_in_segment += 1;
        if self.iterations_in_segment >= self.segment_length {
            self.fold_segment();
            self.iterations_in_segment = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn degenerate_weights_fall_back_to_uniform() {
        let mut scheme = RouletteWheel::new(ScoreVector::new(0.0, 0.0, 0.0, 0.0), 0.0, 2, 1);
        let mut rng = create_rng(1);

        // Drive every weight to zero.
        scheme.update(0.0, OperatorPair::new(0, 0), OutcomeCategory::Reject, None);
        scheme.update(0.0, OperatorPair::new(1, 0), OutcomeCategory::Reject, None);
        assert!(scheme.destroy_weights().iter().all(|&w| w == 0.0));

        // Must not panic, and must sample both indices over many draws.
        let mut seen = [false, false];
        for _ in 0..200 {
            let pair = scheme.choose(&mut rng, 0.0, 0.0, None);
            seen[pair.destroy_idx] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn weights_never_negative() {
        let mut scheme = RouletteWheel::new(ScoreVector::default(), 0.5, 2, 2);
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let pair = scheme.choose(&mut rng, 0.0, 0.0, None);
            scheme.update(0.0, pair, OutcomeCategory::Reject, None);
            assert!(scheme.destroy_weights().iter().all(|&w| w >= 0.0 && w.is_finite()));
            assert!(scheme.repair_weights().iter().all(|&w| w >= 0.0 && w.is_finite()));
        }
    }

    #[test]
    fn segmented_scores_accumulate_across_segment() {
        let mut scheme =
            SegmentedRouletteWheel::new(ScoreVector::new(10.0, 0.0, 0.0, 0.0), 0.0, 1, 1, 3);
        scheme.update(0.0, OperatorPair::new(0, 0), OutcomeCategory::Best, None);
        scheme.update(0.0, OperatorPair::new(0, 0), OutcomeCategory::Best, None);
        // Before the segment boundary, weights are unchanged.
        assert_eq!(scheme.destroy_weights()[0], 1.0);

        scheme.update(0.0, OperatorPair::new(0, 0), OutcomeCategory::Best, None);
        // Segment just closed: w = 0*1.0 + 1*(10+10+10) = 30 (summed, not averaged).
        assert_eq!(scheme.destroy_weights()[0], 30.0);
    }
}
