#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::modulation::MacroParam;

/// Macro change sent from another thread (UI, MIDI, OSC) to the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MacroMessage {
    Set { param: MacroParam, value: f32 },
    ResetDefaults,
}

pub trait MacroReceiver {
    fn pop(&mut self) -> Option<MacroMessage>;
}

#[cfg(feature = "rtrb")]
impl MacroReceiver for Consumer<MacroMessage> {
    fn pop(&mut self) -> Option<MacroMessage> {
        Consumer::pop(self).ok()
    }
}

impl MacroReceiver for std::collections::VecDeque<MacroMessage> {
    fn pop(&mut self) -> Option<MacroMessage> {
        self.pop_front()
    }
}
