//! Sequencer - turns station windows into per-instrument note events
//!
//! Each instrument is walked across the route independently and returns its
//! own events plus where its clock ended up. Merging happens afterwards in
//! `Sequence::merge`; there is no shared clock or shared event list.

use crate::catalog::Instrument;

use super::easing::{phase_gain, step_ms};
use super::sequence::SequenceEvent;
use super::timeline::Stop;

/// One instrument's pass over the route
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentRun {
    pub events: Vec<SequenceEvent>,
    /// Clock position after the last stop (ms)
    pub clock_ms: u64,
}

/// Walk the stops for one instrument.
///
/// Consecutive stops where the instrument is assigned build up a pending
/// window. The first stop without it flushes the window and moves the clock
/// past the window; that stop's own leg is not added. A stop without the
/// instrument and with nothing pending just advances the clock by its leg.
/// Whatever is pending after the last stop is flushed at the end.
pub fn sequence_instrument(instrument: &Instrument, stops: &[Stop], global_beat_ms: u64) -> InstrumentRun {
    let mut run = InstrumentRun::default();
    let mut pending_ms = 0u64;

    for stop in stops {
        let present = stop.instruments.contains(instrument.index);
        if present {
            pending_ms = pending_ms.saturating_add(stop.duration_ms());
        } else if pending_ms > 0 {
            run.events
                .extend(emit_window(instrument, pending_ms, run.clock_ms, global_beat_ms));
            run.clock_ms = run.clock_ms.saturating_add(pending_ms);
            pending_ms = 0;
        } else {
            run.clock_ms = run.clock_ms.saturating_add(stop.duration_ms());
        }
    }

    if pending_ms > 0 {
        run.events
            .extend(emit_window(instrument, pending_ms, run.clock_ms, global_beat_ms));
        run.clock_ms = run.clock_ms.saturating_add(pending_ms);
    }

    tracing::debug!(
        instrument = %instrument.name,
        index = instrument.index,
        events = run.events.len(),
        "sequenced instrument"
    );
    run
}

/// Emit events across one window of `window_ms` starting at `start_ms`.
///
/// Steps ease from the faster of the instrument/global beat up to the slower
/// one mid-window and back. Each event is stamped at the end of its step,
/// truncated to whole ms. The loop stops once less than the fast step is
/// left, so a window shorter than that emits nothing.
pub fn emit_window(
    instrument: &Instrument,
    window_ms: u64,
    start_ms: u64,
    global_beat_ms: u64,
) -> Vec<SequenceEvent> {
    let own = instrument.beat_ms as f64;
    let global = global_beat_ms as f64;
    let fast = own.min(global);
    let slow = own.max(global);
    let window = window_ms as f64;

    let mut events = Vec::new();
    if instrument.beat_ms == 0 || global_beat_ms == 0 {
        return events;
    }

    let mut remaining = window;
    let mut elapsed = 0.0;
    let mut clock = start_ms as f64;
    while remaining >= fast {
        let step = step_ms(elapsed, window, fast, slow);
        let at_ms = (clock + step) as u64;
        let beat = at_ms / instrument.beat_ms;
        let gain = phase_gain(beat, instrument.beats_per_phase, instrument.gain_min, instrument.gain_max);
        events.push(SequenceEvent::new(instrument.index, gain, at_ms));

        remaining -= step;
        elapsed += step;
        clock += step;
    }
    events
}
