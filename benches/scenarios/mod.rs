//! Engine-level benchmarks.
//!
//! These drive the modulation and synthesis engines the way a host would:
//! steady control ticks and fixed-size render blocks.

mod control;
mod render;

pub use control::bench_control;
pub use render::bench_render;
