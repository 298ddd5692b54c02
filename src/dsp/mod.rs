//! Low-level primitives used by the modulation and synthesis engines.
//!
//! Everything here is plain math over owned arrays: no allocation after
//! construction, no shared state, no randomness. The engines layer control
//! scheduling and macro handling on top.

/// Stereo placement of a mono mix.
pub mod mix;
/// Qutrit node state with soft radial projection.
pub mod qutrit;
/// The 240 E8 root vectors.
pub mod roots;
/// Sine/triangle morph and the tanh output limiter.
pub mod shape;
/// Eight rotating angles and root projections.
pub mod torus;

pub use qutrit::QutritState;
pub use roots::{RootSystem, RootVector};
pub use torus::PhaseTorus;
