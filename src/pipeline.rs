//! Batch pipeline: read tables -> route timeline -> merged sequence -> write tables
//!
//! Each stage owns its output and hands it to the next. Nothing is written
//! until every table has been rendered.

use std::path::PathBuf;

use crate::catalog::{load_instruments, load_stations, Instrument, InstrumentOptions};
use crate::config::Config;
use crate::error::Result;
use crate::io::export::Rendered;
use crate::sequencing::{sequence_instrument, Sequence, Stop, Timeline};

/// Everything computed from the inputs, before anything is written
#[derive(Debug, Clone)]
pub struct Composition {
    pub catalog: Vec<Instrument>,
    pub timeline: Timeline,
    pub sequence: Sequence,
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub instruments: usize,
    pub stations: usize,
    pub events: usize,
    /// Time of the last event (ms)
    pub duration_ms: u64,
    pub written: Vec<PathBuf>,
}

/// Load both input tables and compute the timeline and sequence.
pub fn compose(config: &Config) -> Result<Composition> {
    config.validate()?;
    let tempo = config.tempo();
    tracing::info!(
        bpm = tempo.bpm,
        beat_ms = tempo.beat_ms,
        meters_per_beat = tempo.meters_per_beat,
        "tempo"
    );

    let options = InstrumentOptions {
        instruments_dir: &config.input.instruments_dir,
        global_beat_ms: tempo.beat_ms,
    };
    let catalog = load_instruments(&config.input.instruments, options)?;
    tracing::info!(count = catalog.len(), path = %config.input.instruments.display(), "loaded instruments");

    let stations = load_stations(&config.input.stations)?;
    tracing::info!(count = stations.len(), path = %config.input.stations.display(), "loaded stations");

    let timeline = Timeline::build(stations, &catalog, &tempo);
    timeline.stats.log();

    let sequence = sequence_route(&catalog, &timeline.stops, tempo.beat_ms);
    tracing::info!(events = sequence.len(), duration_ms = sequence.duration_ms(), "sequence merged");

    Ok(Composition {
        catalog,
        timeline,
        sequence,
    })
}

/// Sequence every instrument over the route and merge the results.
pub fn sequence_route(catalog: &[Instrument], stops: &[Stop], global_beat_ms: u64) -> Sequence {
    Sequence::merge(
        catalog
            .iter()
            .map(|instrument| sequence_instrument(instrument, stops, global_beat_ms).events),
    )
}

/// Run the whole pipeline and write the configured outputs.
pub fn run(config: &Config) -> Result<RunReport> {
    let composition = compose(config)?;
    let rendered = Rendered::new(
        &config.output,
        &composition.catalog,
        &composition.timeline.stops,
        &composition.sequence,
    );
    rendered.write()?;

    Ok(RunReport {
        instruments: composition.catalog.len(),
        stations: composition.timeline.stops.len(),
        events: composition.sequence.len(),
        duration_ms: composition.sequence.duration_ms(),
        written: rendered.tables.into_iter().map(|table| table.path).collect(),
    })
}
