//! Benchmarks for rendering output tables in memory.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use subway_sequencer::io::export::{render_sequence, render_summary};
use subway_sequencer::pipeline::sequence_route;
use subway_sequencer::sequencing::{Tempo, Timeline};

use crate::{catalog, route, ROUTE_SIZES};

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/render");
    let tempo = Tempo::new(90.0, 40.0);
    let shelf = catalog(16, tempo.beat_ms);

    for &size in ROUTE_SIZES {
        let timeline = Timeline::build(route(size), &shelf, &tempo);
        let sequence = sequence_route(&shelf, &timeline.stops, tempo.beat_ms);

        group.bench_with_input(BenchmarkId::new("sequence", size), &size, |b, _| {
            b.iter(|| render_sequence(black_box(&sequence)))
        });
        group.bench_with_input(BenchmarkId::new("summary", size), &size, |b, _| {
            b.iter(|| render_summary(black_box(&timeline.stops), black_box(&shelf)))
        });
    }

    group.finish();
}
