//! Comma-delimited output tables for the playback engine.
//!
//! Every table is rendered to a string first; files are only touched once
//! all of them rendered, so a run writes all configured outputs or none.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Instrument;
use crate::config::OutputConfig;
use crate::error::{PipelineError, Result};
use crate::sequencing::tempo::format_mm_ss;
use crate::sequencing::{Sequence, Stop};

pub const SUMMARY_HEADER: [&str; 6] = ["Time", "Name", "Distance", "Duration", "Beats", "Instruments"];

/// A rendered table and where it goes
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub path: PathBuf,
    pub contents: String,
}

/// The full set of tables a run produces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub tables: Vec<OutputTable>,
}

impl Rendered {
    /// Render whichever tables `output` enables
    pub fn new(output: &OutputConfig, catalog: &[Instrument], stops: &[Stop], sequence: &Sequence) -> Self {
        let mut tables = Vec::new();
        if output.write_sequence {
            tables.push(OutputTable {
                path: output.instruments.clone(),
                contents: render_instruments(catalog),
            });
            tables.push(OutputTable {
                path: output.sequence.clone(),
                contents: render_sequence(sequence),
            });
        }
        if output.write_summary {
            tables.push(OutputTable {
                path: output.summary.clone(),
                contents: render_summary(stops, catalog),
            });
        }
        Self { tables }
    }

    /// Write every table, creating parent directories as needed
    pub fn write(&self) -> Result<()> {
        for table in &self.tables {
            write_file(&table.path, &table.contents)?;
            tracing::info!(path = %table.path.display(), bytes = table.contents.len(), "wrote table");
        }
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

/// Two rows per instrument: its index, then its sample path
pub fn render_instruments(catalog: &[Instrument]) -> String {
    let rows = catalog.iter().flat_map(|instrument| {
        [
            instrument.index.to_string(),
            csv_field(&instrument.file).into_owned(),
        ]
    });
    join_rows(rows)
}

/// Five rows per event: index, position, gain, rate, delta ms
pub fn render_sequence(sequence: &Sequence) -> String {
    let rows = sequence.events.iter().flat_map(|event| {
        [
            event.instrument_index.to_string(),
            event.position.to_string(),
            format_float(event.gain),
            event.rate.to_string(),
            event.delta_ms.to_string(),
        ]
    });
    join_rows(rows)
}

/// One row per station with the running clock, leg and instrument names
pub fn render_summary(stops: &[Stop], catalog: &[Instrument]) -> String {
    let mut rows = vec![SUMMARY_HEADER.join(",")];
    let mut elapsed_s = 0u64;
    for stop in stops {
        let leg_s = stop.duration_ms() / 1000;
        let (distance, beats) = match stop.leg {
            Some(leg) => (format_float(leg.distance_m), leg.beats),
            None => ("0".to_string(), 0),
        };
        let names: Vec<&str> = stop
            .instruments
            .indices()
            .iter()
            .filter_map(|&index| catalog.get(index))
            .map(|instrument| instrument.name.as_str())
            .collect();

        let fields = [
            format_mm_ss(elapsed_s),
            csv_field(&stop.station.name).into_owned(),
            distance,
            format_mm_ss(leg_s),
            beats.to_string(),
            csv_field(&names.join(" ")).into_owned(),
        ];
        rows.push(fields.join(","));
        elapsed_s += leg_s;
    }
    join_rows(rows)
}

/// Rows separated by `\n`, no newline after the last one
fn join_rows<I: IntoIterator<Item = String>>(rows: I) -> String {
    let mut out = String::new();
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&row);
    }
    out
}

/// Quote a field if it holds a delimiter, quote or line break
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Shortest round-trip form that always shows a decimal point.
///
/// # Example
/// ```
/// use subway_sequencer::io::export::format_float;
/// assert_eq!(format_float(1.0), "1.0");
/// assert_eq!(format_float(0.35), "0.35");
/// ```
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
