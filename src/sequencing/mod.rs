pub mod easing;
pub mod sequence;
pub mod sequencer;
pub mod tempo;
pub mod timeline;

pub use sequence::{Sequence, SequenceEvent};
pub use sequencer::{emit_window, sequence_instrument, InstrumentRun};
pub use tempo::Tempo;
pub use timeline::{Leg, Stop, Timeline, TimelineStats};
