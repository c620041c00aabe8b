//! Benchmarks for merging per-instrument event lists.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion};
use subway_sequencer::sequencing::{emit_window, Sequence, SequenceEvent};

use crate::catalog;

pub fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/merge");

    for &count in &[4usize, 16, 64] {
        let shelf = catalog(count, 667);
        let runs: Vec<Vec<SequenceEvent>> = shelf
            .iter()
            .map(|instrument| emit_window(instrument, 120_000, 0, 667))
            .collect();

        group.bench_with_input(BenchmarkId::new("instruments", count), &count, |b, _| {
            b.iter_batched(
                || runs.clone(),
                |runs| Sequence::merge(black_box(runs)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
