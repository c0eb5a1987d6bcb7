//! Animation sequence - ordered frames with display durations

use std::time::Duration;

use image::RgbaImage;

use crate::error::{HypnoError, Result};

/// One frame of an animation and how long it is shown
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedFrame {
    pub image: RgbaImage,
    pub duration: Duration,
}

impl AnimatedFrame {
    pub fn new(image: RgbaImage, duration: Duration) -> Self {
        Self { image, duration }
    }
}

/// A non-empty list of equally sized frames
///
/// Construction checks both invariants, so code holding an
/// `AnimationSequence` can rely on them.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSequence {
    frames: Vec<AnimatedFrame>,
}

impl AnimationSequence {
    /// Create a sequence, rejecting empty input and mixed frame sizes
    pub fn new(frames: Vec<AnimatedFrame>) -> Result<Self> {
        let first = frames.first().ok_or(HypnoError::EmptyAnimation)?;
        let expected = first.image.dimensions();

        if let Some((index, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.image.dimensions() != expected)
        {
            return Err(HypnoError::DimensionMismatch {
                index,
                expected,
                found: frame.image.dimensions(),
            });
        }

        Ok(Self { frames })
    }

    /// Number of frames (always at least 1)
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Shared frame size
    pub fn dimensions(&self) -> (u32, u32) {
        self.frames[0].image.dimensions()
    }

    #[allow(dead_code)]
    pub fn frames(&self) -> &[AnimatedFrame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnimatedFrame> {
        self.frames.iter()
    }

    pub fn into_frames(self) -> Vec<AnimatedFrame> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a AnimationSequence {
    type Item = &'a AnimatedFrame;
    type IntoIter = std::slice::Iter<'a, AnimatedFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
