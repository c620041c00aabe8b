//! Typed records loaded from the input tables

pub mod instrument;
pub mod station;

pub use instrument::{load_instruments, parse_instruments, Instrument, InstrumentOptions};
pub use station::{load_stations, parse_stations, Station};
