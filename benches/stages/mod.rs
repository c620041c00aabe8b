//! Single-stage benchmarks.

mod allocate;
mod merge;
mod render;
mod window;

pub use allocate::bench_allocate;
pub use merge::bench_merge;
pub use render::bench_render;
pub use window::bench_emit_window;
