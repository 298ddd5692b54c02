use crate::DIM;

/*
Qutrit Node State
=================

A qutrit (three-level quantum system) can be described by 8 real numbers,
its coordinates along the Gell-Mann matrices. That is the "generalized Bloch
vector". We borrow the shape, not the physics: every node carries an 8-vector
that is pushed around by feedback and kept inside a ball.

Vocabulary
----------

  component   One of the 8 coordinates. Only 0, 3 and 7 are driven; they are
              the diagonal Gell-Mann directions. The rest stay at zero unless
              a caller seeds them.

  relax       First-order pull toward a target:

                  r[c] += dt · (-λ · r[c] + target)

              With constant target the component settles at target / λ.

  radius      The ball the state must stay inside (1.2 by default).


Soft Projection
---------------

Hard clipping the norm would put a corner in the morph signal the moment the
state touches the boundary. Instead, once the norm n exceeds R, the vector is
rescaled so its new length is

    R · tanh(n / R)

which is always below R, grows monotonically with n, and meets the identity
smoothly enough that the output has no audible step. Inside the ball nothing
happens at all.

    new length
        R ┤                ___________
          │           ___/
          │        _/
          │      /
          │    /   identity until n = R
          │  /
          └──────────┬───────────────── n
                     R
*/

/// Norm guard used by [`QutritState::soft_project`].
const NORM_EPSILON: f32 = 1e-12;

/// 8-component node state, zero at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QutritState {
    r: [f32; DIM],
}

impl QutritState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(r: [f32; DIM]) -> Self {
        Self { r }
    }

    #[inline]
    pub fn components(&self) -> &[f32; DIM] {
        &self.r
    }

    #[inline]
    pub fn component(&self, index: usize) -> f32 {
        self.r[index]
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.r.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Euclidean length of the sub-vector formed by `indices`.
    pub fn partial_norm(&self, indices: &[usize]) -> f32 {
        indices.iter().map(|&i| self.r[i] * self.r[i]).sum::<f32>().sqrt()
    }

    /// One explicit Euler step of `dr/dt = -λ r + target` on one component.
    #[inline]
    pub fn relax(&mut self, index: usize, target: f32, lambda: f32, dt: f32) {
        let r = self.r[index];
        self.r[index] = r + dt * (-lambda * r + target);
    }

    /// Pull the state back inside `radius` with a tanh knee. No-op inside.
    pub fn soft_project(&mut self, radius: f32) {
        let n2: f32 = self.r.iter().map(|x| x * x).sum();
        if n2 <= radius * radius {
            return;
        }
        let n = n2.sqrt();
        let scale = radius * (n / radius).tanh() / (n + NORM_EPSILON);
        for x in self.r.iter_mut() {
            *x *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let state = QutritState::new();
        assert_eq!(state.norm(), 0.0);
    }

    #[test]
    fn projection_is_noop_inside_radius() {
        let original = QutritState::from_components([0.3, -0.2, 0.0, 0.5, 0.1, 0.0, -0.4, 0.2]);
        let mut state = original;
        state.soft_project(1.2);
        assert_eq!(state, original);
    }

    #[test]
    fn projection_bounds_large_vectors() {
        for &scale in &[1.3f32, 2.0, 10.0, 1e3, 1e6] {
            let mut state = QutritState::from_components([scale, -scale, scale, 0.0, 0.0, scale, 0.0, -scale]);
            let before = state.norm();
            state.soft_project(1.2);
            let after = state.norm();
            assert!(after <= 1.2 + 1e-5, "scale {scale}: norm {after} above radius");
            assert!(after <= before, "scale {scale}: norm grew from {before} to {after}");
        }
    }

    #[test]
    fn projection_keeps_direction() {
        let mut state = QutritState::from_components([3.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0]);
        state.soft_project(1.2);
        let ratio = state.component(3) / state.component(0);
        assert!((ratio - 4.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn relax_settles_at_target_over_lambda() {
        let mut state = QutritState::new();
        for _ in 0..20_000 {
            state.relax(0, 0.4, 0.8, 1e-3);
        }
        assert!((state.component(0) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn partial_norm_uses_selected_components() {
        let state = QutritState::from_components([3.0, 9.0, 9.0, 4.0, 9.0, 9.0, 9.0, 12.0]);
        assert!((state.partial_norm(&[0, 3, 7]) - 13.0).abs() < 1e-5);
    }
}
