//! Generative modulation engine built on the E8 root lattice.
//!
//! A fixed set of 240 root vectors, a rotating 8-angle torus and a per-node
//! 8-component "qutrit" state combine into slowly evolving phase, amplitude and
//! timbre modulation. The [`synth`] layer turns that modulation into stereo
//! audio.
//!
//! ```
//! use e8_fractal::{EngineConfig, SynthesisEngine};
//!
//! let mut engine = SynthesisEngine::new(EngineConfig::default()).unwrap();
//! let block = engine.render(4_800, 0.2);
//! assert_eq!(block.len(), 4_800);
//! assert_eq!(engine.ticks_fired(), 100);
//! ```

pub mod config;
pub mod dsp; // Lattice, torus and waveform primitives
pub mod error;
pub mod io;
pub mod modulation; // Macros, sparse coupling and the control-rate engine
pub mod synth; // Block renderer and control clock

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use io::StereoBlock;
pub use modulation::{MacroParam, MacroParameters, ModulationEngine, NodeModulation};
pub use synth::SynthesisEngine;

/// Dimension of the root lattice, the torus and every node state.
pub const DIM: usize = 8;
/// Number of E8 roots.
pub const ROOT_COUNT: usize = 240;
