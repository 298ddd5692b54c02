//! Control-rate modulation.
//!
//! The [`ModulationEngine`] owns the torus, the node states and the sparse
//! coupling and turns them into one [`NodeModulation`] per node every tick.
//! [`MacroParameters`] are the knobs it reads while doing so.

/// Fixed per-node root subsets.
pub mod coupling;
/// Control tick: torus, node states, per-node outputs.
pub mod engine;
/// Named macro knobs and their defaults.
pub mod macros;

pub use coupling::SparseCoupling;
pub use engine::{ModulationEngine, NodeModulation};
pub use macros::{MacroParam, MacroParameters};
