//! Benchmarks for low-level primitives.

mod qutrit;
mod shape;
mod torus;

pub use qutrit::bench_qutrit;
pub use shape::bench_shape;
pub use torus::bench_torus;
