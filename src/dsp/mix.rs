//! Mono summing and stereo placement.

/*
Panning a Mono Mix
==================

All nodes are summed to one mono signal, then split into two channels with a
single pan value:

    left  = mono × (1 - pan)
    right = mono × pan

  pan = 0.0  →  hard left
  pan = 0.5  →  centre, each side at half amplitude
  pan = 1.0  →  hard right

This is the linear law. The two gains always add up to 1.0, so the mix can
never get louder by being panned. As with linear crossfades there is a small
perceived dip at the centre; equal-power laws fix that but are not used here.


Driving Pan From an Angle
-------------------------

The pan position follows one torus angle. sin() gives a bipolar value in
[-1, 1]; the usual conversion maps it to a unipolar gain:

    unipolar = (bipolar + 1.0) × 0.5

    bipolar   unipolar
    -1.0      0.0
     0.0      0.5
    +1.0      1.0
*/

/// Convert bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Pan position in [0, 1] for a torus angle.
#[inline]
pub fn pan_from_angle(angle: f32) -> f32 {
    bipolar_to_unipolar(angle.sin())
}

/// Split a mono signal held in `left` into both channels.
///
/// `left` holds the mono mix on entry and the left channel on return.
#[inline]
pub fn pan_split_in_place(left: &mut [f32], right: &mut [f32], pan: f32) {
    debug_assert_eq!(left.len(), right.len());

    let left_gain = 1.0 - pan;
    let right_gain = pan;
    for (l, r) in left.iter_mut().zip(right.iter_mut()) {
        let mono = *l;
        *l = mono * left_gain;
        *r = mono * right_gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_bipolar_to_unipolar() {
        assert!((bipolar_to_unipolar(-1.0) - 0.0).abs() < 1e-6);
        assert!((bipolar_to_unipolar(0.0) - 0.5).abs() < 1e-6);
        assert!((bipolar_to_unipolar(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_from_angle() {
        assert!((pan_from_angle(0.0) - 0.5).abs() < 1e-6);
        assert!((pan_from_angle(FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!((pan_from_angle(3.0 * FRAC_PI_2) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_split_centre() {
        let mut left = [1.0, -0.5, 0.25];
        let mut right = [9.0; 3];

        pan_split_in_place(&mut left, &mut right, 0.5);

        assert_eq!(left, [0.5, -0.25, 0.125]);
        assert_eq!(right, [0.5, -0.25, 0.125]);
    }

    #[test]
    fn test_pan_split_hard_right() {
        let mut left = [1.0, -1.0];
        let mut right = [0.0; 2];

        pan_split_in_place(&mut left, &mut right, 1.0);

        assert_eq!(left, [0.0, -0.0]);
        assert_eq!(right, [1.0, -1.0]);
    }
}
