//! Waveform shapes and output saturation.
//!
//! # Sine to Triangle Morph
//!
//! Each node blends two shapes computed from the same phase:
//!
//!   sine      s(φ) = sin φ
//!   triangle  t(φ) = (2/π) · asin(sin φ)
//!
//! `asin(sin φ)` folds the phase into a zig-zag between -π/2 and π/2; the 2/π
//! factor scales it back to [-1, 1]. Both shapes share zero crossings and
//! peaks, so a linear blend never changes pitch, only brightness:
//!
//!   morph = 0.0  pure sine (fundamental only)
//!   morph = 1.0  pure triangle (odd harmonics, falling off as 1/n²)
//!
//! # Soft Limiting
//!
//! The final mix goes through tanh:
//!
//!   f(x) = tanh(x)
//!
//! - Linear near zero, so quiet material passes untouched
//! - Asymptotic to ±1, so nothing can leave [-1, 1] however hard it is driven
//! - tanh(0) = 0 exactly, so a silent mix stays silent

use std::f32::consts::FRAC_2_PI;

/// Triangle wave from a phase in radians, in [-1, 1].
#[inline]
pub fn triangle(phase: f32) -> f32 {
    fold_sine(phase.sin())
}

#[inline]
fn fold_sine(sine: f32) -> f32 {
    FRAC_2_PI * sine.asin()
}

/// Linear blend from sine (`morph = 0`) to triangle (`morph = 1`).
///
/// Both shapes come from a single `sin` evaluation.
#[inline]
pub fn morph_wave(phase: f32, morph: f32) -> f32 {
    let sine = phase.sin();
    (1.0 - morph) * sine + morph * fold_sine(sine)
}

/// tanh soft limiter.
#[inline]
pub fn soft_limit(sample: f32) -> f32 {
    sample.tanh()
}

/// Apply `gain` and then the soft limiter to a whole buffer in place.
pub fn soft_limit_buffer(buffer: &mut [f32], gain: f32) {
    for sample in buffer.iter_mut() {
        *sample = soft_limit(*sample * gain);
    }
}
