//! Whole-route scenario benchmarks.
//!
//! These run every in-memory stage from station list to merged sequence,
//! the same work a pipeline run does minus file I/O.

mod route;

pub use route::bench_route;
