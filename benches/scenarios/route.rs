//! Benchmarks for timeline + sequencing over synthetic routes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use subway_sequencer::pipeline::sequence_route;
use subway_sequencer::sequencing::{Tempo, Timeline};

use crate::{catalog, route, ROUTE_SIZES};

pub fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/route");
    let tempo = Tempo::new(90.0, 40.0);

    for &size in ROUTE_SIZES {
        let stations = route(size);

        // === SMALL SHELF ===
        // a handful of instruments, most stations afford all of them
        let small = catalog(6, tempo.beat_ms);
        group.bench_with_input(BenchmarkId::new("small_shelf", size), &size, |b, _| {
            b.iter(|| {
                let timeline = Timeline::build(black_box(stations.clone()), &small, &tempo);
                sequence_route(&small, &timeline.stops, tempo.beat_ms)
            })
        });

        // === FULL SHELF ===
        // more instruments than any budget covers, so assignments churn
        let full = catalog(40, tempo.beat_ms);
        group.bench_with_input(BenchmarkId::new("full_shelf", size), &size, |b, _| {
            b.iter(|| {
                let timeline = Timeline::build(black_box(stations.clone()), &full, &tempo);
                sequence_route(&full, &timeline.stops, tempo.beat_ms)
            })
        });
    }

    group.finish();
}
