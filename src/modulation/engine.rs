use std::array;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::trace;

use crate::{
    config::EngineConfig,
    dsp::{qutrit::QutritState, roots::RootSystem, torus::PhaseTorus},
    error::EngineResult,
    modulation::{coupling::SparseCoupling, macros::MacroParameters},
    DIM, ROOT_COUNT,
};

/*
Control Tick
============

The modulation engine runs at control rate (1 kHz by default). One tick:

  1. Macros → torus
       ω[k]  = PhiDrift × (0.6 + 0.1 k)          overwrite, not accumulate
       θ0   += 0.001 × sin(CoxeterPhase)
       θ1   += 0.001 × cos(CoxeterPhase)
       if EntropyBloom > 1e-6:
         ω[k] += bloom × U(-0.05, 0.05)         8 draws
         θ[k] += bloom × U(-0.002, 0.002)       8 more draws

  2. Advance the torus by dt = 1 / control_rate.

  3. Project the torus onto all 240 roots at once.

  4. Per node, over its sparse roots:
       phase_offset = PhaseGain × mean(sin φ)
       amp_factor   = clamp(1 + AmpGain × mean(cos φ), 0, 4)

     then relax three state components toward the torus drives:

       drive0 = ½ sin θ0 + ½ sin θ1
       drive1 = ½ cos θ2 + ½ cos θ3

       r0 ← drive0 + bias
       r3 ← drive1 - ½ bias
       r7 ← ¼ (drive0 + drive1) - ½ bias          (λ = 0.8)

       morph = clamp(½ ‖(r0, r3, r7)‖, 0, 1)

     and finally soft-project the whole state.

Determinism
-----------

The torsion draws come from a StdRng owned by this engine and seeded from the
config. Two engines with the same seed and the same macro history produce the
same torus trajectory, no matter how many other engines exist.
*/

/// Drift ramp across torus axes: axis k runs at `0.6 + 0.1 k` times PhiDrift.
const DRIFT_RAMP_BASE: f32 = 0.6;
const DRIFT_RAMP_STEP: f32 = 0.1;
/// Per-tick skew added to angles 0 and 1.
const COXETER_SKEW: f32 = 0.001;
/// EntropyBloom values at or below this leave the generator untouched.
const BLOOM_THRESHOLD: f32 = 1e-6;
const VELOCITY_TORSION: f32 = 0.05;
const ANGLE_TORSION: f32 = 0.002;
/// Decay rate of the node-state feedback.
const STATE_DECAY: f32 = 0.8;
const AMP_FACTOR_MAX: f32 = 4.0;
/// State components that carry the drives and define morph.
const DRIVEN_COMPONENTS: [usize; 3] = [0, 3, 7];

/// Modulation produced for one node on the latest tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeModulation {
    /// Frequency offset in rad/s.
    pub phase_offset: f32,
    /// Amplitude multiplier in [0, 4].
    pub amp_factor: f32,
    /// Sine (0) to triangle (1) blend.
    pub morph: f32,
}

impl Default for NodeModulation {
    fn default() -> Self {
        Self {
            phase_offset: 0.0,
            amp_factor: 1.0,
            morph: 0.0,
        }
    }
}

/// Phase offset and amplitude factor for one node.
///
/// Pure function of the tick's root phases, the node's root indices and the
/// two gains, so the order nodes are visited in cannot change the result.
pub fn couple(phases: &[f32], indices: &[usize], phase_gain: f32, amp_gain: f32) -> (f32, f32) {
    let (sin_sum, cos_sum) = indices.iter().fold((0.0f32, 0.0f32), |(s, c), &i| {
        let (sin, cos) = phases[i].sin_cos();
        (s + sin, c + cos)
    });
    let norm = 1.0 / indices.len().max(1) as f32;

    let phase_offset = phase_gain * sin_sum * norm;
    let amp_factor = (1.0 + amp_gain * cos_sum * norm).clamp(0.0, AMP_FACTOR_MAX);
    (phase_offset, amp_factor)
}

/// The two node-state drives for the current torus angles.
#[inline]
pub fn drives(angles: &[f32; DIM]) -> (f32, f32) {
    let drive0 = 0.5 * angles[0].sin() + 0.5 * angles[1].sin();
    let drive1 = 0.5 * angles[2].cos() + 0.5 * angles[3].cos();
    (drive0, drive1)
}

/// Torus, node states and sparse coupling, stepped at control rate.
pub struct ModulationEngine {
    roots: RootSystem,
    torus: PhaseTorus,
    states: Vec<QutritState>,
    coupling: SparseCoupling,
    macros: MacroParameters,
    rng: StdRng,
    outputs: Vec<NodeModulation>,
    /// Scratch for the 240 root phases of the current tick.
    phases: Vec<f32>,
    dt: f32,
    state_radius: f32,
    ticks: u64,
}

impl ModulationEngine {
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let roots = RootSystem::generate()?;

        Ok(Self {
            roots,
            torus: PhaseTorus::new(),
            states: vec![QutritState::new(); config.num_nodes],
            coupling: SparseCoupling::strided(config.num_nodes, config.roots_per_node),
            macros: MacroParameters::default(),
            rng: StdRng::seed_from_u64(config.seed),
            outputs: vec![NodeModulation::default(); config.num_nodes],
            phases: vec![0.0; ROOT_COUNT],
            dt: config.control_dt(),
            state_radius: config.state_radius,
            ticks: 0,
        })
    }

    /// Run one control tick across all nodes.
    pub fn control_step(&mut self) {
        self.apply_torus_macros();
        self.torus.advance(self.dt);
        self.torus.phases_into(self.roots.roots(), &mut self.phases);

        let phase_gain = self.macros.phase_gain;
        let amp_gain = self.macros.amp_gain;
        let bias = self.macros.ternary_bias;
        let (drive0, drive1) = drives(self.torus.angles());
        let targets = [drive0 + bias, drive1 - 0.5 * bias, 0.25 * (drive0 + drive1) - 0.5 * bias];

        for ((indices, state), output) in self
            .coupling
            .iter()
            .zip(self.states.iter_mut())
            .zip(self.outputs.iter_mut())
        {
            let (phase_offset, amp_factor) = couple(&self.phases, indices, phase_gain, amp_gain);

            for (&component, &target) in DRIVEN_COMPONENTS.iter().zip(&targets) {
                state.relax(component, target, STATE_DECAY, self.dt);
            }

            let morph = (0.5 * state.partial_norm(&DRIVEN_COMPONENTS)).clamp(0.0, 1.0);
            state.soft_project(self.state_radius);

            *output = NodeModulation {
                phase_offset,
                amp_factor,
                morph,
            };
        }

        self.ticks += 1;
        trace!(tick = self.ticks, "control step");
    }

    fn apply_torus_macros(&mut self) {
        let drift = self.macros.phi_drift;
        self.torus.set_velocities(array::from_fn(|k| {
            drift * (DRIFT_RAMP_BASE + DRIFT_RAMP_STEP * k as f32)
        }));

        let (skew_sin, skew_cos) = self.macros.coxeter_phase.sin_cos();
        self.torus.nudge_angle(0, COXETER_SKEW * skew_sin);
        self.torus.nudge_angle(1, COXETER_SKEW * skew_cos);

        let bloom = self.macros.entropy_bloom;
        if bloom > BLOOM_THRESHOLD {
            for axis in 0..DIM {
                let jitter: f32 = self.rng.gen_range(-VELOCITY_TORSION..VELOCITY_TORSION);
                self.torus.add_velocity(axis, bloom * jitter);
            }
            for axis in 0..DIM {
                let jitter: f32 = self.rng.gen_range(-ANGLE_TORSION..ANGLE_TORSION);
                self.torus.nudge_angle(axis, bloom * jitter);
            }
        }
    }

    #[inline]
    pub fn macros(&self) -> &MacroParameters {
        &self.macros
    }

    /// Macros are read at the start of every tick.
    #[inline]
    pub fn macros_mut(&mut self) -> &mut MacroParameters {
        &mut self.macros
    }

    #[inline]
    pub fn torus(&self) -> &PhaseTorus {
        &self.torus
    }

    #[inline]
    pub fn roots(&self) -> &RootSystem {
        &self.roots
    }

    #[inline]
    pub fn coupling(&self) -> &SparseCoupling {
        &self.coupling
    }

    #[inline]
    pub fn states(&self) -> &[QutritState] {
        &self.states
    }

    #[inline]
    pub fn outputs(&self) -> &[NodeModulation] {
        &self.outputs
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.states.len()
    }

    /// Control ticks run since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
