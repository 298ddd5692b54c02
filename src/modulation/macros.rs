#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Macro Controls
==============

Macros are the performer-facing knobs. Each one is read once per control
tick, so changes take effect at the next tick boundary.

  CosmicDepth   integer, informational only (kept for external engines)
  PhiDrift      base angular drift of the torus, rad/s
  CoxeterPhase  phase of the slow skew added to torus angles 0 and 1
  EntropyBloom  amount of seeded random torsion added every tick
  TernaryBias   constant push in the node-state feedback
  PhaseGain     depth of the per-node frequency offset
  AmpGain       depth of the per-node amplitude modulation
  EnergyFlow    master output gain, applied before the soft limiter
  SpatialWarp   reserved, accepted but inert
*/

/// Typed key for one macro.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroParam {
    CosmicDepth,
    PhiDrift,
    CoxeterPhase,
    EntropyBloom,
    TernaryBias,
    PhaseGain,
    AmpGain,
    EnergyFlow,
    SpatialWarp,
}

impl MacroParam {
    pub const ALL: [MacroParam; 9] = [
        MacroParam::CosmicDepth,
        MacroParam::PhiDrift,
        MacroParam::CoxeterPhase,
        MacroParam::EntropyBloom,
        MacroParam::TernaryBias,
        MacroParam::PhaseGain,
        MacroParam::AmpGain,
        MacroParam::EnergyFlow,
        MacroParam::SpatialWarp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MacroParam::CosmicDepth => "CosmicDepth",
            MacroParam::PhiDrift => "PhiDrift",
            MacroParam::CoxeterPhase => "CoxeterPhase",
            MacroParam::EntropyBloom => "EntropyBloom",
            MacroParam::TernaryBias => "TernaryBias",
            MacroParam::PhaseGain => "PhaseGain",
            MacroParam::AmpGain => "AmpGain",
            MacroParam::EnergyFlow => "EnergyFlow",
            MacroParam::SpatialWarp => "SpatialWarp",
        }
    }

    /// Look up a macro by its CamelCase name or its snake_case spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        let param = match name {
            "CosmicDepth" | "cosmic_depth" => MacroParam::CosmicDepth,
            "PhiDrift" | "phi_drift" => MacroParam::PhiDrift,
            "CoxeterPhase" | "coxeter_phase" => MacroParam::CoxeterPhase,
            "EntropyBloom" | "entropy_bloom" => MacroParam::EntropyBloom,
            "TernaryBias" | "ternary_bias" => MacroParam::TernaryBias,
            "PhaseGain" | "phase_gain" => MacroParam::PhaseGain,
            "AmpGain" | "amp_gain" => MacroParam::AmpGain,
            "EnergyFlow" | "energy_flow" => MacroParam::EnergyFlow,
            "SpatialWarp" | "spatial_warp" => MacroParam::SpatialWarp,
            _ => return None,
        };
        Some(param)
    }
}

impl std::fmt::Display for MacroParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The full macro set with its defaults.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MacroParameters {
    pub cosmic_depth: i32,
    pub phi_drift: f32,
    pub coxeter_phase: f32,
    pub entropy_bloom: f32,
    pub ternary_bias: f32,
    pub phase_gain: f32,
    pub amp_gain: f32,
    pub energy_flow: f32,
    pub spatial_warp: f32,
}

impl Default for MacroParameters {
    fn default() -> Self {
        Self {
            cosmic_depth: 5,
            phi_drift: 0.02,
            coxeter_phase: 0.0,
            entropy_bloom: 0.02,
            ternary_bias: 0.10,
            phase_gain: 0.25,
            amp_gain: 0.20,
            energy_flow: 1.0,
            spatial_warp: 0.0,
        }
    }
}

impl MacroParameters {
    pub fn get(&self, param: MacroParam) -> f32 {
        match param {
            MacroParam::CosmicDepth => self.cosmic_depth as f32,
            MacroParam::PhiDrift => self.phi_drift,
            MacroParam::CoxeterPhase => self.coxeter_phase,
            MacroParam::EntropyBloom => self.entropy_bloom,
            MacroParam::TernaryBias => self.ternary_bias,
            MacroParam::PhaseGain => self.phase_gain,
            MacroParam::AmpGain => self.amp_gain,
            MacroParam::EnergyFlow => self.energy_flow,
            MacroParam::SpatialWarp => self.spatial_warp,
        }
    }

    /// Set one macro. CosmicDepth truncates toward zero.
    pub fn set(&mut self, param: MacroParam, value: f32) {
        match param {
            MacroParam::CosmicDepth => self.cosmic_depth = value as i32,
            MacroParam::PhiDrift => self.phi_drift = value,
            MacroParam::CoxeterPhase => self.coxeter_phase = value,
            MacroParam::EntropyBloom => self.entropy_bloom = value,
            MacroParam::TernaryBias => self.ternary_bias = value,
            MacroParam::PhaseGain => self.phase_gain = value,
            MacroParam::AmpGain => self.amp_gain = value,
            MacroParam::EnergyFlow => self.energy_flow = value,
            MacroParam::SpatialWarp => self.spatial_warp = value,
        }
    }

    /// Set a macro by name. Unknown names are ignored and return `false`.
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        match MacroParam::from_name(name) {
            Some(param) => {
                self.set(param, value);
                true
            }
            None => false,
        }
    }
}
