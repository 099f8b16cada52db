//! Criterion benchmarks for the ALNS engine.
//!
//! Uses a synthetic bit-subset problem (maximize number of set bits) to
//! measure pure engine overhead independent of any domain.

use alns_engine::acceptance::SimulatedAnnealing;
use alns_engine::selection::RouletteWheel;
use alns_engine::stopping::MaxIterations;
use alns_engine::{AlnsConfig, AlnsEngine, DestroyOperator, Params, RepairOperator, ScoreVector, SolutionState};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, RngCore};

#[derive(Clone)]
struct BitSet(Vec<bool>);

impl SolutionState for BitSet {
    fn objective(&self) -> f64 {
        -(self.0.iter().filter(|&&b| b).count() as f64)
    }
}

struct RandomDrop {
    fraction: f64,
}

impl DestroyOperator<BitSet> for RandomDrop {
    fn name(&self) -> &str {
        "random_drop"
    }

    fn destroy(&self, solution: &BitSet, rng: &mut dyn RngCore, _params: &Params) -> BitSet {
        let mut bits = solution.0.clone();
        for b in &mut bits {
            if *b && rng.random_range(0.0..1.0) < self.fraction {
                *b = false;
            }
        }
        BitSet(bits)
    }
}

struct GreedyFill;

impl RepairOperator<BitSet> for GreedyFill {
    fn name(&self) -> &str {
        "greedy_fill"
    }

    fn repair(&self, solution: &BitSet, rng: &mut dyn RngCore, _params: &Params) -> BitSet {
        let mut bits = solution.0.clone();
        for b in &mut bits {
            if !*b && rng.random_range(0.0..1.0) < 0.9 {
                *b = true;
            }
        }
        BitSet(bits)
    }
}

fn bench_alns_bitset(c: &mut Criterion) {
    let mut group = c.benchmark_group("alns_bitset");
    group.sample_size(20);

    for &size in &[32usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut engine: AlnsEngine<BitSet> = AlnsEngine::new(AlnsConfig::default().with_seed(42));
                engine.add_destroy_operator(RandomDrop { fraction: 0.3 });
                engine.add_repair_operator(GreedyFill);

                let mut select = RouletteWheel::new(ScoreVector::default(), 0.8, 1, 1);
                let mut accept =
                    SimulatedAnnealing::autofit(size as f64, 0.05, 0.5, 500, alns_engine::acceptance::DecayMethod::Exponential)
                        .unwrap();
                let mut stop = MaxIterations::new(500);

                let initial = BitSet(vec![false; size]);
                let result = engine
                    .iterate(initial, &mut select, &mut accept, &mut stop, &Params::new())
                    .unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_alns_bitset);
criterion_main!(benches);
