// Purpose - rendered output and format conversions for downstream writers

pub mod pcm;

/// One rendered stereo block.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StereoBlock {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
}

impl StereoBlock {
    pub fn silent(len: usize) -> Self {
        Self {
            left: vec![0.0; len],
            right: vec![0.0; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Largest absolute sample over both channels.
    pub fn peak(&self) -> f32 {
        self.left
            .iter()
            .chain(&self.right)
            .fold(0.0f32, |peak, s| peak.max(s.abs()))
    }

    /// Append another block.
    pub fn extend(&mut self, other: &StereoBlock) {
        self.left.extend_from_slice(&other.left);
        self.right.extend_from_slice(&other.right);
    }
}
