use crate::config::TempoConfig;

/*
Beats, Meters and Milliseconds
==============================

Everything downstream counts time in whole milliseconds. Three conversions
get us there, and all of them round half away from zero (`f64::round`):

    global beat     beat_ms = round(60000 / bpm)          90 BPM -> 667 ms
    instrument      round(beat_ms / tempo_factor)          667 / 2 -> 334 ms
    leg length      beats = round(meters / meters_per_beat)
                    duration_ms = beats * beat_ms

The global beat is rounded before anything uses it (667, not 666.67), so
every leg duration is an exact multiple of it.
*/

/// Global tempo, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tempo {
    pub bpm: f64,
    pub meters_per_beat: f64,
    /// Milliseconds per global beat
    pub beat_ms: u64,
}

impl Tempo {
    pub fn new(bpm: f64, meters_per_beat: f64) -> Self {
        Self {
            bpm,
            meters_per_beat,
            beat_ms: beat_interval_ms(bpm),
        }
    }

    pub fn from_config(config: &TempoConfig) -> Self {
        Self::new(config.bpm, config.meters_per_beat)
    }

    /// Quantize a distance to whole beats
    pub fn beats_for_distance(&self, meters: f64) -> u64 {
        (meters / self.meters_per_beat).round() as u64
    }

    /// Saturates instead of overflowing on absurd distances
    pub fn beats_to_ms(&self, beats: u64) -> u64 {
        beats.saturating_mul(self.beat_ms)
    }
}

/// Milliseconds per beat at `bpm`, rounded to the nearest millisecond.
///
/// # Example
/// ```
/// use subway_sequencer::sequencing::tempo::beat_interval_ms;
/// assert_eq!(beat_interval_ms(90.0), 667);
/// assert_eq!(beat_interval_ms(120.0), 500);
/// ```
#[inline]
pub fn beat_interval_ms(bpm: f64) -> u64 {
    (60.0 / bpm * 1000.0).round() as u64
}

/// An instrument's own beat interval from the global one and its tempo factor
#[inline]
pub fn scaled_beat_ms(global_beat_ms: u64, tempo_factor: f64) -> u64 {
    (global_beat_ms as f64 / tempo_factor).round() as u64
}

/// Whole seconds as zero-padded `MM:SS` of a clock; minutes wrap at the hour.
///
/// # Example
/// ```
/// use subway_sequencer::sequencing::tempo::format_mm_ss;
/// assert_eq!(format_mm_ss(66), "01:06");
/// assert_eq!(format_mm_ss(3725), "02:05");
/// ```
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", (seconds / 60) % 60, seconds % 60)
}
