// Purpose: turn control-rate modulation into audio blocks
// This layer sits above the modulation engine and owns the sample clock

pub mod clock;
pub mod engine;
pub mod message;

pub use clock::ControlClock;
pub use engine::SynthesisEngine;
pub use message::{MacroMessage, MacroReceiver};
