//! Per-iteration and per-operator statistics.

use crate::outcome::OutcomeCategory;
use std::time::Duration;

/// Objective values observed during a single iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Best objective after this iteration.
    pub best: f64,
    /// Current objective after this iteration.
    pub current: f64,
    /// Candidate objective produced this iteration (before classification).
    pub candidate: f64,
    /// Wall-clock time spent on this iteration.
    #[cfg_attr(feature = "serde", serde(with = "duration_secs"))]
    pub runtime: Duration,
}

#[cfg(feature = "serde")]
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_secs_f64().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs_f64(f64::deserialize(d)?))
    }
}

/// Per-operator counts, one entry per [`OutcomeCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeCounts([u64; 4]);

impl OutcomeCounts {
    /// Count recorded for `outcome`.
    pub fn get(&self, outcome: OutcomeCategory) -> u64 {
        self.0[outcome.index()]
    }

    fn record(&mut self, outcome: OutcomeCategory) {
        self.0[outcome.index()] += 1;
    }

    /// Total iterations recorded across all outcomes.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// Accumulates per-iteration and per-operator statistics for one
/// `iterate` call.
///
/// Recording can be disabled via [`crate::AlnsConfig::with_collect_statistics`]
/// for maximum throughput; in that mode, [`Statistics::iterations`] stays
/// empty but operator counts are still tracked (they are O(1) per
/// operator, not O(iterations)).
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    iterations: Vec<IterationRecord>,
    destroy_counts: Vec<OutcomeCounts>,
    repair_counts: Vec<OutcomeCounts>,
    collect_iterations: bool,
}

impl Statistics {
    pub(crate) fn new(num_destroy: usize, num_repair: usize, collect_iterations: bool) -> Self {
        Self {
            iterations: Vec::new(),
            destroy_counts: vec![OutcomeCounts::default(); num_destroy],
            repair_counts: vec![OutcomeCounts::default(); num_repair],
            collect_iterations,
        }
    }

    pub(crate) fn record(
        &mut self,
        destroy_idx: usize,
        repair_idx: usize,
        outcome: OutcomeCategory,
        record: IterationRecord,
    ) {
        self.destroy_counts[destroy_idx].record(outcome);
        self.repair_counts[repair_idx].record(outcome);
        if self.collect_iterations {
            self.iterations.push(record);
        }
    }

    /// Per-iteration objective/runtime records, in iteration order.
    /// Empty if statistics collection was disabled.
    pub fn iterations(&self) -> &[IterationRecord] {
        &self.iterations
    }

    /// Per-outcome counts for each registered destroy operator, indexed
    /// the same way the operators were registered.
    pub fn destroy_counts(&self) -> &[OutcomeCounts] {
        &self.destroy_counts
    }

    /// Per-outcome counts for each registered repair operator, indexed
    /// the same way the operators were registered.
    pub fn repair_counts(&self) -> &[OutcomeCounts] {
        &self.repair_counts
    }

    /// Total number of iterations recorded (sum of any operator's
    /// outcome counts — every iteration uses exactly one destroy and
    /// one repair operator).
    pub fn total_iterations(&self) -> u64 {
        self.destroy_counts.iter().map(|c| c.total()).sum()
    }
}
