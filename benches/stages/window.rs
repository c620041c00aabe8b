//! Benchmarks for emitting one instrument's events over a window.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use subway_sequencer::sequencing::emit_window;

use crate::catalog;

pub fn bench_emit_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/emit_window");
    let shelf = catalog(4, 667);

    for &window_ms in &[10_000u64, 60_000, 600_000] {
        // tempo factor 4.0: the densest instrument
        let fast = &shelf[3];
        group.bench_with_input(BenchmarkId::new("fast", window_ms), &window_ms, |b, &w| {
            b.iter(|| emit_window(black_box(fast), black_box(w), 0, 667))
        });

        let slow = &shelf[0];
        group.bench_with_input(BenchmarkId::new("slow", window_ms), &window_ms, |b, &w| {
            b.iter(|| emit_window(black_box(slow), black_box(w), 0, 667))
        });
    }

    group.finish();
}
