pub mod allocator;

pub use allocator::{allocate, Assignment};
