//! Benchmarks for budget allocation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use subway_sequencer::engine::Assignment;

use crate::catalog;

pub fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/allocate");

    for &size in &[16usize, 64, 256] {
        let shelf = catalog(size, 667);
        // budget large enough to buy the whole shelf
        let budget = shelf.iter().map(|i| f64::from(i.price)).sum::<f64>() + 1.0;

        group.bench_with_input(BenchmarkId::new("whole_shelf", size), &size, |b, _| {
            b.iter(|| Assignment::purchase(black_box(&shelf), black_box(budget)))
        });
        group.bench_with_input(BenchmarkId::new("first_two", size), &size, |b, _| {
            b.iter(|| Assignment::purchase(black_box(&shelf), black_box(16.0)))
        });
    }

    group.finish();
}
