pub mod catalog; // Instrument and station records
pub mod config;
pub mod engine; // Budget allocation
pub mod error;
pub mod geo;
pub mod io;
pub mod pipeline;
pub mod sequencing; // Timeline, envelopes and the merged event sequence

pub use config::Config;
pub use error::{PipelineError, Result};

/// Mean Earth radius used by the haversine distance, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
