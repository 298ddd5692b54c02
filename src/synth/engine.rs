use std::f32::consts::TAU;

use tracing::{debug, trace};

use crate::{
    config::EngineConfig,
    dsp::{
        mix::{pan_from_angle, pan_split_in_place},
        shape::{morph_wave, soft_limit_buffer},
        torus::wrap_angle,
    },
    error::EngineResult,
    io::StereoBlock,
    modulation::{MacroParam, MacroParameters, ModulationEngine},
    synth::{
        clock::ControlClock,
        message::{MacroMessage, MacroReceiver},
    },
};

/*
Block Renderer
==============

One render call:

  1. Count the block's samples on the control clock and run every tick that
     falls due. All ticks run before any audio is produced, so the whole
     block sees the modulation of its last tick.

  2. Per node, turn the phase offset (rad/s) into Hz and add it to the base
     frequency:

         f   = clamp(base + offset / 2π, 1, 20000)
         inc = 2π f / sample_rate                     radians per sample

  3. Per sample t and node n:

         φ = φn + t · inc
         y += base_gain · amp · ((1 - morph) sin φ + morph tri φ)

     Modulation is constant across the block. Finer control-to-audio coupling
     would need sub-blocks split on tick boundaries.

  4. Pan the mono sum with torus angle 4, scale by EnergyFlow, tanh.

  5. φn += inc · block_len, wrapped.


Base Frequencies
----------------

Nodes sit on a golden-ratio ladder, one factor of φ apart, with the highest
node on the base frequency (110 Hz). Counting down from the top, node i gets
base · φ^(i - (n - 1)):

    8 nodes:  3.8  6.1  9.9  16.0  26.0  42.0  68.0  110.0 Hz

Low nodes move well below audio rate; they read more like slow swells than
pitches. On very large ladders the bottom rungs underflow to 0 Hz and the
renderer clamps them up to 1 Hz.
*/

const MIN_FREQUENCY: f32 = 1.0;
const MAX_FREQUENCY: f32 = 20_000.0;
/// Torus axis that drives the stereo position.
const PAN_AXIS: usize = 4;

/// Golden-ratio frequency ladder, highest node at `top`.
pub fn golden_ladder(num_nodes: usize, top: f32) -> Vec<f32> {
    let phi = (1.0 + 5.0f32.sqrt()) * 0.5;
    let highest = num_nodes.saturating_sub(1);
    (0..num_nodes)
        .map(|i| top * phi.powi(-i32::try_from(highest - i).unwrap_or(i32::MAX)))
        .collect()
}

/// Additive renderer driven by a [`ModulationEngine`].
///
/// ```
/// use e8_fractal::{EngineConfig, MacroParam, SynthesisEngine};
///
/// let mut engine = SynthesisEngine::new(EngineConfig::default()).unwrap();
/// engine.set_macro(MacroParam::EnergyFlow, 0.0);
/// let block = engine.render(256, 0.2);
/// assert!(block.left.iter().chain(&block.right).all(|&s| s == 0.0));
/// ```
pub struct SynthesisEngine {
    modulation: ModulationEngine,
    clock: ControlClock,
    base_frequencies: Vec<f32>,
    node_phases: Vec<f32>,
    sample_rate: f32,
}

impl SynthesisEngine {
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        let modulation = ModulationEngine::new(&config)?;
        let clock = ControlClock::new(config.samples_per_tick());

        debug!(
            nodes = config.num_nodes,
            sample_rate = config.sample_rate,
            control_rate = config.control_rate,
            samples_per_tick = clock.samples_per_tick(),
            seed = config.seed,
            "synthesis engine ready"
        );

        Ok(Self {
            modulation,
            clock,
            base_frequencies: golden_ladder(config.num_nodes, config.base_frequency),
            node_phases: vec![0.0; config.num_nodes],
            sample_rate: config.sample_rate,
        })
    }

    /// Set one macro; it takes effect on the next control tick.
    pub fn set_macro(&mut self, param: MacroParam, value: f32) {
        trace!(%param, value, "macro set");
        self.modulation.macros_mut().set(param, value);
    }

    /// Set a macro by name. Unknown names are ignored and return `false`.
    pub fn set_macro_by_name(&mut self, name: &str, value: f32) -> bool {
        match MacroParam::from_name(name) {
            Some(param) => {
                self.set_macro(param, value);
                true
            }
            None => {
                debug!(name, "ignoring unknown macro");
                false
            }
        }
    }

    /// Set several macros by name, returning how many were recognised.
    pub fn set_macros<'a>(&mut self, values: impl IntoIterator<Item = (&'a str, f32)>) -> usize {
        values
            .into_iter()
            .filter(|&(name, value)| self.set_macro_by_name(name, value))
            .count()
    }

    /// Drain pending macro messages. Returns how many were applied.
    pub fn apply_messages<R: MacroReceiver>(&mut self, rx: &mut R) -> usize {
        let mut applied = 0;
        while let Some(msg) = rx.pop() {
            match msg {
                MacroMessage::Set { param, value } => self.set_macro(param, value),
                MacroMessage::ResetDefaults => {
                    *self.modulation.macros_mut() = MacroParameters::default();
                }
            }
            applied += 1;
        }
        applied
    }

    /// Count `samples` on the control clock and run the ticks that fall due.
    pub fn advance_control(&mut self, samples: usize) -> usize {
        let due = self.clock.advance(samples);
        for _ in 0..due {
            self.modulation.control_step();
        }
        due
    }

    /// Render `num_samples` stereo samples.
    pub fn render(&mut self, num_samples: usize, base_gain: f32) -> StereoBlock {
        let mut block = StereoBlock::silent(num_samples);
        self.render_into(&mut block.left, &mut block.right, base_gain);
        block
    }

    /// Render into caller buffers of equal length, overwriting them.
    ///
    /// # Panics
    ///
    /// Panics if `left` and `right` differ in length.
    pub fn render_into(&mut self, left: &mut [f32], right: &mut [f32], base_gain: f32) {
        assert_eq!(
            left.len(),
            right.len(),
            "stereo buffers must have equal length"
        );
        let len = left.len();

        let ticks = self.advance_control(len);
        trace!(samples = len, ticks, "render block");

        left.fill(0.0);
        let to_radians = TAU / self.sample_rate;

        for ((output, &base), phase) in self
            .modulation
            .outputs()
            .iter()
            .zip(&self.base_frequencies)
            .zip(self.node_phases.iter_mut())
        {
            let frequency =
                (base + output.phase_offset / TAU).clamp(MIN_FREQUENCY, MAX_FREQUENCY);
            let increment = to_radians * frequency;
            let amp = base_gain * output.amp_factor;

            for (t, sample) in left.iter_mut().enumerate() {
                let node_phase = *phase + t as f32 * increment;
                *sample += morph_wave(node_phase, output.morph) * amp;
            }

            *phase = wrap_angle(*phase + increment * len as f32);
        }

        let pan = pan_from_angle(self.modulation.torus().angle(PAN_AXIS));
        pan_split_in_place(left, right, pan);

        let gain = self.modulation.macros().energy_flow;
        soft_limit_buffer(left, gain);
        soft_limit_buffer(right, gain);
    }

    /// Render `seconds` of audio.
    pub fn render_seconds(&mut self, seconds: f32, base_gain: f32) -> StereoBlock {
        let num_samples = (seconds.max(0.0) * self.sample_rate).round() as usize;
        self.render(num_samples, base_gain)
    }

    #[inline]
    pub fn modulation(&self) -> &ModulationEngine {
        &self.modulation
    }

    #[inline]
    pub fn macros(&self) -> &MacroParameters {
        self.modulation.macros()
    }

    #[inline]
    pub fn base_frequencies(&self) -> &[f32] {
        &self.base_frequencies
    }

    #[inline]
    pub fn node_phases(&self) -> &[f32] {
        &self.node_phases
    }

    #[inline]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    #[inline]
    pub fn samples_per_tick(&self) -> usize {
        self.clock.samples_per_tick()
    }

    /// Control ticks fired since construction.
    #[inline]
    pub fn ticks_fired(&self) -> u64 {
        self.modulation.ticks()
    }
}
