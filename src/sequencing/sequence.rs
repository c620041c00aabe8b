/// A single note in the playback sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceEvent {
    /// Which instrument plays (catalog index)
    pub instrument_index: usize,
    /// Stereo placement, reserved (always 0)
    pub position: i32,
    /// Amplitude, within the instrument's [gain_min, gain_max]
    pub gain: f64,
    /// Playback rate, reserved (always 1)
    pub rate: f64,
    /// When this event occurs (ms from sequence start)
    pub elapsed_ms: u64,
    /// Time since the previous event in the merged sequence.
    /// Zero until the event has been through `Sequence::merge`.
    pub delta_ms: u64,
}

impl SequenceEvent {
    pub fn new(instrument_index: usize, gain: f64, elapsed_ms: u64) -> Self {
        Self {
            instrument_index,
            position: 0,
            gain,
            rate: 1.0,
            elapsed_ms,
            delta_ms: 0,
        }
    }
}

/// All instruments' events in one time-ordered list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    pub events: Vec<SequenceEvent>,
}

impl Sequence {
    /// Merge per-instrument event lists into one sequence.
    ///
    /// Events are stably sorted by absolute time, so simultaneous events keep
    /// the order they were emitted in (instrument order, then time). Deltas
    /// are then taken against the previous event, starting from 0.
    pub fn merge<I>(runs: I) -> Self
    where
        I: IntoIterator<Item = Vec<SequenceEvent>>,
    {
        let mut events: Vec<SequenceEvent> = runs.into_iter().flatten().collect();
        events.sort_by_key(|event| event.elapsed_ms);

        let mut previous = 0;
        for event in &mut events {
            event.delta_ms = event.elapsed_ms - previous;
            previous = event.elapsed_ms;
        }

        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Time of the last event (0 when empty)
    pub fn duration_ms(&self) -> u64 {
        self.events.last().map_or(0, |event| event.elapsed_ms)
    }

    /// Rebuild absolute times by accumulating deltas
    pub fn absolute_times(&self) -> impl Iterator<Item = u64> + '_ {
        self.events.iter().scan(0u64, |clock, event| {
            *clock += event.delta_ms;
            Some(*clock)
        })
    }

}
