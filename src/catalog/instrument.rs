use std::path::Path;

use crate::error::Result;
use crate::io::table::{Record, Table};
use crate::sequencing::tempo;

/// Column layout of the instrument table
pub const INSTRUMENT_COLUMNS: [&str; 10] = [
    "name",
    "type",
    "price",
    "file",
    "gain_min",
    "gain_max",
    "tempo",
    "beats_per_phase",
    "borough",
    "active",
];

/// One playable entry in the catalog. Built once at load, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Position in load order (dense, 0-based, skipped rows excluded)
    pub index: usize,
    pub name: String,
    /// Lower-case, spaces replaced with underscores
    pub category: String,
    pub price: u32,
    /// Sample path: instruments dir + file column
    pub file: String,
    pub gain_min: f64,
    pub gain_max: f64,
    /// Multiplier on the global tempo (>0)
    pub tempo_factor: f64,
    /// Beats per gain swell (≥1)
    pub beats_per_phase: u32,
    pub borough: String,
    /// Own beat interval: round(global_beat_ms / tempo_factor)
    pub beat_ms: u64,
}

/// Options that shape how raw rows become instruments
#[derive(Debug, Clone, Copy)]
pub struct InstrumentOptions<'a> {
    pub instruments_dir: &'a str,
    pub global_beat_ms: u64,
}

/// Load the instrument catalog from a tab-delimited file
pub fn load_instruments(path: &Path, options: InstrumentOptions<'_>) -> Result<Vec<Instrument>> {
    let table = Table::read(path, '\t')?;
    parse_instruments(&table, options)
}

/// Build the catalog from an already-read table.
///
/// Rows with an empty `file` or an `active` of 0 are dropped and never
/// consume an index.
pub fn parse_instruments(table: &Table, options: InstrumentOptions<'_>) -> Result<Vec<Instrument>> {
    let mut instruments = Vec::new();
    for record in table.records() {
        record.expect_columns(&INSTRUMENT_COLUMNS)?;

        let file = record.text(3).trim();
        if file.is_empty() {
            tracing::debug!(line = record.line(), name = record.text(0), "skipping instrument without file");
            continue;
        }
        let active: i64 = record.parse(9, "active")?;
        if active == 0 {
            tracing::debug!(line = record.line(), name = record.text(0), "skipping inactive instrument");
            continue;
        }

        let index = instruments.len();
        instruments.push(parse_row(&record, index, file, options)?);
    }
    Ok(instruments)
}

fn parse_row(
    record: &Record<'_>,
    index: usize,
    file: &str,
    options: InstrumentOptions<'_>,
) -> Result<Instrument> {
    let price: u32 = record.parse(2, "price")?;
    let mut gain_min = round_tenths(record.parse(4, "gain_min")?);
    let mut gain_max = round_tenths(record.parse(5, "gain_max")?);
    if !(gain_min.is_finite() && gain_max.is_finite()) {
        return Err(record.error("columns 5-6 (gain_min, gain_max): gains must be finite"));
    }
    if gain_min > gain_max {
        std::mem::swap(&mut gain_min, &mut gain_max);
    }

    let tempo_factor: f64 = record.parse(6, "tempo")?;
    if !(tempo_factor.is_finite() && tempo_factor > 0.0) {
        return Err(record.error(format!("column 7 (tempo): must be positive, got {tempo_factor}")));
    }
    let beat_ms = tempo::scaled_beat_ms(options.global_beat_ms, tempo_factor);
    if beat_ms == 0 {
        return Err(record.error(format!(
            "column 7 (tempo): {tempo_factor} leaves less than 1 ms per beat"
        )));
    }

    let beats_per_phase: u32 = record.parse(7, "beats_per_phase")?;
    if beats_per_phase == 0 {
        return Err(record.error("column 8 (beats_per_phase): must be at least 1"));
    }

    Ok(Instrument {
        index,
        name: record.text(0).trim().to_string(),
        category: normalize_category(record.text(1)),
        price,
        file: format!("{}{}", options.instruments_dir, file),
        gain_min,
        gain_max,
        tempo_factor,
        beats_per_phase,
        borough: record.text(8).trim().to_lowercase(),
        beat_ms,
    })
}

/// "Wind Chime" -> "wind_chime"
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Round the stored value to one decimal place.
///
/// The exact binary value is rounded, so `0.15` (stored just below) goes
/// down to `0.1`. Exact ties, the odd multiples of `0.25`, go to the even
/// tenth.
fn round_tenths(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let below = (value * 10.0).floor();
        let tenths = if below % 2.0 == 0.0 { below } else { below + 1.0 };
        return tenths / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    const HEADER: &str = "name\ttype\tprice\tfile\tgain_min\tgain_max\ttempo\tbeats_per_phase\tborough\tactive\n";

    fn options() -> InstrumentOptions<'static> {
        InstrumentOptions {
            instruments_dir: "instruments/",
            global_beat_ms: 667,
        }
    }

    fn parse(body: &str) -> Result<Vec<Instrument>> {
        let table = Table::from_text("instruments.tsv", format!("{HEADER}{body}"), '\t');
        parse_instruments(&table, options())
    }

    #[test]
    fn test_parse_basic_instrument() {
        let instruments = parse("Kick\tBass Drum\t30\tkick.wav\t0.2\t0.8\t2\t4\tManhattan\t1\n").unwrap();
        assert_eq!(instruments.len(), 1);
        let kick = &instruments[0];
        assert_eq!(kick.index, 0);
        assert_eq!(kick.name, "Kick");
        assert_eq!(kick.category, "bass_drum");
        assert_eq!(kick.price, 30);
        assert_eq!(kick.file, "instruments/kick.wav");
        assert_eq!(kick.borough, "manhattan");
        assert_eq!(kick.beats_per_phase, 4);
        // round(667 / 2) = round(333.5) = 334
        assert_eq!(kick.beat_ms, 334);
    }

    #[test]
    fn test_skipped_rows_do_not_consume_index() {
        let instruments = parse(
            "A\tpad\t10\t\t0.1\t0.5\t1\t4\tbronx\t1\n\
             B\tpad\t10\tb.wav\t0.1\t0.5\t1\t4\tbronx\t0\n\
             C\tpad\t10\tc.wav\t0.1\t0.5\t1\t4\tbronx\t1\n\
             D\tpad\t10\td.wav\t0.1\t0.5\t1\t4\tbronx\t1\n",
        )
        .unwrap();
        let names: Vec<_> = instruments.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["C", "D"]);
        assert_eq!(instruments[0].index, 0);
        assert_eq!(instruments[1].index, 1);
    }

    #[test]
    fn test_empty_file_skips_before_active_is_read() {
        // "yes" would be a parse error, but the row is dropped first
        let instruments = parse("A\tpad\t10\t\t0.1\t0.5\t1\t4\tbronx\tyes\n").unwrap();
        assert!(instruments.is_empty());
    }

    #[test]
    fn test_gain_bounds_rounded_and_swapped() {
        let instruments = parse("A\tpad\t10\ta.wav\t0.86\t0.24\t1\t4\tbronx\t1\n").unwrap();
        assert_eq!(instruments[0].gain_min, 0.2);
        assert_eq!(instruments[0].gain_max, 0.9);
    }

    #[test]
    fn test_gain_rounding_uses_stored_value() {
        // 0.15 and 0.35 are stored just below the half
        let instruments = parse("A\tpad\t10\ta.wav\t0.15\t0.35\t1\t4\tbronx\t1\n").unwrap();
        assert_eq!(instruments[0].gain_min, 0.1);
        assert_eq!(instruments[0].gain_max, 0.3);

        assert_eq!(round_tenths(0.85), 0.8);
        assert_eq!(round_tenths(1.45), 1.4);
        assert_eq!(round_tenths(0.64), 0.6);
        assert_eq!(round_tenths(0.26), 0.3);
        assert_eq!(round_tenths(0.5), 0.5);
        assert_eq!(round_tenths(2.0), 2.0);
    }

    #[test]
    fn test_gain_rounding_exact_ties_go_to_even() {
        assert_eq!(round_tenths(0.25), 0.2);
        assert_eq!(round_tenths(0.75), 0.8);
        assert_eq!(round_tenths(1.25), 1.2);
        assert_eq!(round_tenths(-0.25), -0.2);
    }

    #[test]
    fn test_malformed_price_is_data_format_error() {
        let result = parse("A\tpad\tcheap\ta.wav\t0.1\t0.5\t1\t4\tbronx\t1\n");
        match result {
            Err(PipelineError::DataFormat { line, message, .. }) => {
                assert_eq!(line, 2);
                assert!(message.contains("price"), "{message}");
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_column_count() {
        let result = parse("A\tpad\t10\ta.wav\n");
        assert!(matches!(result, Err(PipelineError::DataFormat { .. })));
    }

    #[test]
    fn test_non_positive_tempo_rejected() {
        assert!(parse("A\tpad\t10\ta.wav\t0.1\t0.5\t0\t4\tbronx\t1\n").is_err());
        assert!(parse("A\tpad\t10\ta.wav\t0.1\t0.5\t-2\t4\tbronx\t1\n").is_err());
    }

    #[test]
    fn test_zero_beats_per_phase_rejected() {
        assert!(parse("A\tpad\t10\ta.wav\t0.1\t0.5\t1\t0\tbronx\t1\n").is_err());
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category(" Wind Chime "), "wind_chime");
        assert_eq!(normalize_category("Glass Harp Lead"), "glass_harp_lead");
    }
}
