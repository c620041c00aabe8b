use crate::catalog::{Instrument, Station};
use crate::engine::Assignment;
use crate::geo;

use super::tempo::{format_mm_ss, Tempo};

/// Travel from one station to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub distance_m: f64,
    pub beats: u64,
    pub duration_ms: u64,
}

/// A station with its instruments and the leg that leaves it.
/// The last stop on the route has no leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub station: Station,
    pub instruments: Assignment,
    pub leg: Option<Leg>,
}

impl Stop {
    /// Leg duration, 0 for the last stop
    #[inline]
    pub fn duration_ms(&self) -> u64 {
        self.leg.map_or(0, |leg| leg.duration_ms)
    }
}

/// Route-wide totals for reporting
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineStats {
    pub leg_count: usize,
    pub total_distance_m: f64,
    /// Shortest leg, `None` when the route has no legs
    pub min_distance_m: Option<f64>,
    pub max_distance_m: Option<f64>,
    pub total_beats: u64,
    pub total_duration_ms: u64,
}

impl TimelineStats {
    fn record(&mut self, leg: &Leg) {
        self.leg_count += 1;
        self.total_distance_m += leg.distance_m;
        self.total_beats = self.total_beats.saturating_add(leg.beats);
        self.total_duration_ms = self.total_duration_ms.saturating_add(leg.duration_ms);
        self.min_distance_m = Some(self.min_distance_m.map_or(leg.distance_m, |m| m.min(leg.distance_m)));
        self.max_distance_m = Some(self.max_distance_m.map_or(leg.distance_m, |m| m.max(leg.distance_m)));
    }

    /// Whole seconds, truncated
    pub fn total_seconds(&self) -> u64 {
        self.total_duration_ms / 1000
    }

    pub fn average_beats_per_leg(&self) -> Option<f64> {
        (self.leg_count > 0).then(|| self.total_beats as f64 / self.leg_count as f64)
    }

    /// Whole seconds per leg, truncated. Reporting only.
    pub fn seconds_per_station(&self) -> Option<u64> {
        (self.leg_count > 0).then(|| self.total_seconds() / self.leg_count as u64)
    }

    /// Log the route report at info level
    pub fn log(&self) {
        tracing::info!(
            meters = self.total_distance_m.round(),
            "total distance"
        );
        if let (Some(min), Some(max)) = (self.min_distance_m, self.max_distance_m) {
            tracing::info!(min_m = min, max_m = max, "distance range");
        }
        tracing::info!(beats = self.total_beats, "total beats");
        if let Some(avg) = self.average_beats_per_leg() {
            tracing::info!(beats = avg, "average beats per station");
        }
        tracing::info!(
            time = %format_mm_ss(self.total_seconds()),
            seconds = self.total_seconds(),
            "total time"
        );
        if let Some(secs) = self.seconds_per_station() {
            tracing::info!(time = %format_mm_ss(secs), "average time per station");
        }
    }
}

/// Stations in route order with legs and instruments filled in
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub stops: Vec<Stop>,
    pub stats: TimelineStats,
}

impl Timeline {
    /// Allocate instruments to every station and measure each leg.
    ///
    /// Legs come from a pairwise scan of (station, next station); nothing
    /// is back-filled in place.
    pub fn build(stations: Vec<Station>, catalog: &[Instrument], tempo: &Tempo) -> Self {
        let legs: Vec<Option<Leg>> = stations
            .iter()
            .zip(stations.iter().skip(1))
            .map(|(current, next)| Some(measure_leg(current, next, tempo)))
            .chain(std::iter::once(None))
            .take(stations.len())
            .collect();

        let mut stats = TimelineStats::default();
        let stops = stations
            .into_iter()
            .zip(legs)
            .map(|(station, leg)| {
                if let Some(leg) = &leg {
                    stats.record(leg);
                }
                let instruments = Assignment::purchase(catalog, station.budget);
                Stop {
                    station,
                    instruments,
                    leg,
                }
            })
            .collect();

        Self { stops, stats }
    }

    /// Sum of all leg durations
    pub fn total_duration_ms(&self) -> u64 {
        self.stats.total_duration_ms
    }
}

/// Distance, beats and duration from `current` to `next`
pub fn measure_leg(current: &Station, next: &Station, tempo: &Tempo) -> Leg {
    let distance_m = geo::distance(next.lat, next.lng, current.lat, current.lng);
    let beats = tempo.beats_for_distance(distance_m);
    Leg {
        distance_m,
        beats,
        duration_ms: tempo.beats_to_ms(beats),
    }
}
