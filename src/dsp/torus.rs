use std::f32::consts::TAU;

use crate::{dsp::roots::RootVector, DIM};

/*
Phase Torus
===========

Eight angles, each spinning at its own angular velocity. Think of eight very
slow LFOs whose phases are kept side by side in one vector:

    angles      θ = (θ0, θ1, ..., θ7)     radians, always in [0, 2π)
    velocities  ω = (ω0, ω1, ..., ω7)     radians per second, finite

Every control tick the whole vector moves forward by ω·dt and each angle wraps
back onto the circle. Geometrically that is a point travelling in a straight
line on an 8-dimensional torus.

Projecting Onto a Root
----------------------

A root α gives the torus a direction to look in. The scalar phase along that
direction is a plain dot product:

    φ(α) = α · θ = Σ αk θk

The roots are unit vectors, so φ changes at a rate comparable to the
velocities themselves. Nodes take sin/cos of these phases to get smooth,
bounded modulation.

Batching
--------

Every node reads phases for a subset of the same 240 roots, and the torus only
changes once per tick. `phases_into` computes all 240 projections in one pass
so nodes just index into the result.
*/

/// Wrap an angle into `[0, 2π)`.
///
/// `rem_euclid` on a tiny negative value can round up to exactly 2π in f32, so
/// that case is folded back to zero. Non-finite angles also land on zero.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped.is_finite() && wrapped < TAU {
        wrapped
    } else {
        0.0
    }
}

/// Velocities saturate at the largest finite f32 instead of overflowing.
#[inline]
fn saturate(velocity: f32) -> f32 {
    velocity.clamp(-f32::MAX, f32::MAX)
}

/// Eight wrapped angles and their angular velocities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhaseTorus {
    angles: [f32; DIM],
    velocities: [f32; DIM],
}

impl PhaseTorus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from given angles (wrapped on the way in) and velocities.
    pub fn with_state(angles: [f32; DIM], velocities: [f32; DIM]) -> Self {
        Self {
            angles: angles.map(wrap_angle),
            velocities: velocities.map(saturate),
        }
    }

    /// Move every angle forward by `velocity · dt`.
    pub fn advance(&mut self, dt: f32) {
        for (angle, velocity) in self.angles.iter_mut().zip(&self.velocities) {
            *angle = wrap_angle(*angle + velocity * dt);
        }
    }

    /// Projection of the current angles onto one root.
    #[inline]
    pub fn phase_of(&self, root: &RootVector) -> f32 {
        root.iter().zip(&self.angles).map(|(a, t)| a * t).sum()
    }

    /// Batch projection: `out[i] = phase_of(&roots[i])`.
    pub fn phases_into(&self, roots: &[RootVector], out: &mut [f32]) {
        debug_assert_eq!(roots.len(), out.len());
        for (phase, root) in out.iter_mut().zip(roots) {
            *phase = self.phase_of(root);
        }
    }

    /// Shift one angle by `delta` and re-wrap.
    #[inline]
    pub fn nudge_angle(&mut self, axis: usize, delta: f32) {
        self.angles[axis] = wrap_angle(self.angles[axis] + delta);
    }

    /// Overwrite all velocities, saturating at ±`f32::MAX`.
    #[inline]
    pub fn set_velocities(&mut self, velocities: [f32; DIM]) {
        self.velocities = velocities.map(saturate);
    }

    #[inline]
    pub fn add_velocity(&mut self, axis: usize, delta: f32) {
        self.velocities[axis] = saturate(self.velocities[axis] + delta);
    }

    #[inline]
    pub fn angles(&self) -> &[f32; DIM] {
        &self.angles
    }

    #[inline]
    pub fn angle(&self, axis: usize) -> f32 {
        self.angles[axis]
    }

    #[inline]
    pub fn velocities(&self) -> &[f32; DIM] {
        &self.velocities
    }
}
