/*
Control Clock
=============

Audio runs at sample rate, modulation at control rate. The clock converts one
into the other by counting samples:

    samples_per_tick = round(sample_rate / control_rate)     48 at 48k / 1k

    counter += samples
    every time counter reaches samples_per_tick → one tick, counter = 0

The counter survives between calls, so how a stream is chopped into blocks
does not matter. 48 samples in one call, or 20 + 28 in two, both fire exactly
one tick, on the sample that completes it:

    block A (20)         block B (28)
    ├──────────────┤├──────────────────────┤
    counter 0 → 20       20 → 48 → tick, 0
*/

/// Sample counter that fires control ticks at a fixed interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlClock {
    samples_per_tick: usize,
    counter: usize,
}

impl ControlClock {
    pub fn new(samples_per_tick: usize) -> Self {
        Self {
            samples_per_tick: samples_per_tick.max(1),
            counter: 0,
        }
    }

    /// Count `samples` and return how many ticks fell due.
    pub fn advance(&mut self, samples: usize) -> usize {
        let total = self.counter + samples;
        self.counter = total % self.samples_per_tick;
        total / self.samples_per_tick
    }

    #[inline]
    pub fn samples_per_tick(&self) -> usize {
        self.samples_per_tick
    }

    /// Samples counted toward the next tick.
    #[inline]
    pub fn pending(&self) -> usize {
        self.counter
    }
}
