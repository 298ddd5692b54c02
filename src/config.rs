#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{EngineError, EngineResult},
    ROOT_COUNT,
};

/// Construction parameters for [`crate::SynthesisEngine`] and
/// [`crate::ModulationEngine`].
///
/// ```
/// use e8_fractal::EngineConfig;
///
/// let config = EngineConfig::default().with_nodes(4).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.samples_per_tick(), 48);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub num_nodes: usize,
    pub sample_rate: f32,
    /// Control ticks per second.
    pub control_rate: f32,
    /// Seed for the torsion generator. Same seed, same output.
    pub seed: u64,
    /// Size of each node's sparse root subset.
    pub roots_per_node: usize,
    /// Radius of the soft projection applied to node states.
    pub state_radius: f32,
    /// Frequency of the highest node in the golden-ratio ladder (Hz).
    pub base_frequency: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_nodes: 8,
            sample_rate: 48_000.0,
            control_rate: 1_000.0,
            seed: 0xE8E8_E8E8,
            roots_per_node: 12,
            state_radius: 1.2,
            base_frequency: 110.0,
        }
    }
}

impl EngineConfig {
    pub fn with_nodes(mut self, num_nodes: usize) -> Self {
        self.num_nodes = num_nodes;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_control_rate(mut self, control_rate: f32) -> Self {
        self.control_rate = control_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_roots_per_node(mut self, roots_per_node: usize) -> Self {
        self.roots_per_node = roots_per_node;
        self
    }

    pub fn with_state_radius(mut self, radius: f32) -> Self {
        self.state_radius = radius;
        self
    }

    pub fn with_base_frequency(mut self, frequency: f32) -> Self {
        self.base_frequency = frequency;
        self
    }

    /// Control tick duration in seconds.
    #[inline]
    pub fn control_dt(&self) -> f32 {
        1.0 / self.control_rate
    }

    /// Audio samples between two control ticks, never less than one.
    ///
    /// Halves round to even, so 220.5 becomes 220.
    pub fn samples_per_tick(&self) -> usize {
        let ratio = (self.sample_rate / self.control_rate).round_ties_even();
        if ratio.is_finite() && ratio >= 1.0 {
            ratio as usize
        } else {
            1
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.num_nodes == 0 {
            return Err(EngineError::Config("num_nodes must be at least 1".into()));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(EngineError::Config(format!(
                "sample_rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if !(self.control_rate.is_finite() && self.control_rate > 0.0) {
            return Err(EngineError::Config(format!(
                "control_rate must be positive, got {}",
                self.control_rate
            )));
        }
        if self.roots_per_node == 0 || self.roots_per_node > ROOT_COUNT {
            return Err(EngineError::Config(format!(
                "roots_per_node must be in 1..={ROOT_COUNT}, got {}",
                self.roots_per_node
            )));
        }
        if !(self.state_radius.is_finite() && self.state_radius > 0.0) {
            return Err(EngineError::Config(format!(
                "state_radius must be positive, got {}",
                self.state_radius
            )));
        }
        if !self.base_frequency.is_finite() {
            return Err(EngineError::Config(format!(
                "base_frequency must be finite, got {}",
                self.base_frequency
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn samples_per_tick_matches_rates() {
        assert_eq!(EngineConfig::default().samples_per_tick(), 48);
        let config = EngineConfig::default()
            .with_sample_rate(44_100.0)
            .with_control_rate(200.0);
        // 220.5 rounds to even
        assert_eq!(config.samples_per_tick(), 220);
    }

    #[test]
    fn samples_per_tick_never_zero() {
        let config = EngineConfig::default()
            .with_sample_rate(100.0)
            .with_control_rate(1_000.0);
        assert_eq!(config.samples_per_tick(), 1);
    }

    #[test]
    fn rejects_unusable_parameters() {
        let cases = [
            EngineConfig::default().with_nodes(0),
            EngineConfig::default().with_sample_rate(0.0),
            EngineConfig::default().with_control_rate(f32::NAN),
            EngineConfig::default().with_roots_per_node(0),
            EngineConfig::default().with_roots_per_node(241),
            EngineConfig::default().with_state_radius(-1.0),
            EngineConfig::default().with_base_frequency(f32::INFINITY),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(EngineError::Config(_))),
                "expected config error for {config:?}"
            );
        }
    }
}
