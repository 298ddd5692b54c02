use crate::io::StereoBlock;

/// Fraction of full scale the loudest sample is normalised to.
pub const PEAK_TARGET: f32 = 0.9;
/// Peaks below this are treated as this, so silence stays silence.
const PEAK_FLOOR: f32 = 1e-9;

/// Interleaved 16-bit PCM (L, R, L, R, ...) with the peak at 90% of full scale.
///
/// This is what a WAV writer needs; writing the file is left to the caller.
pub fn to_pcm16_interleaved(block: &StereoBlock) -> Vec<i16> {
    let scale = PEAK_TARGET / block.peak().max(PEAK_FLOOR) * i16::MAX as f32;

    block
        .left
        .iter()
        .zip(&block.right)
        .flat_map(|(&l, &r)| [l, r])
        .map(|s| quantize(s * scale))
        .collect()
}

/// Truncate toward zero into i16, saturating at the ends.
#[inline]
fn quantize(sample: f32) -> i16 {
    sample as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaves_and_normalises() {
        let block = StereoBlock {
            left: vec![0.5, -0.25],
            right: vec![0.0, 0.1],
        };
        let pcm = to_pcm16_interleaved(&block);

        let full = (0.9 * 32767.0) as i16;
        assert_eq!(pcm.len(), 4);
        assert!((pcm[0] as i32 - full as i32).abs() <= 1);
        assert_eq!(pcm[1], 0);
        assert!((pcm[2] as i32 + full as i32 / 2).abs() <= 1);
        assert!((pcm[3] as i32 - (full as i32) / 5).abs() <= 1);
    }

    #[test]
    fn silence_stays_silent() {
        let pcm = to_pcm16_interleaved(&StereoBlock::silent(16));
        assert!(pcm.iter().all(|&s| s == 0));
    }

    #[test]
    fn empty_block() {
        assert!(to_pcm16_interleaved(&StereoBlock::default()).is_empty());
    }
}
