//! Error types shared by the transform engine and the GIF boundary

use thiserror::Error;

/// Errors that can occur while generating a hypnotic animation
#[derive(Error, Debug)]
pub enum HypnoError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode or encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("The selected image is not an animated GIF")]
    NotAnimated,

    #[error("Animation has no frames")]
    EmptyAnimation,

    #[error("Frame {index} is {found:?}, expected {expected:?}")]
    DimensionMismatch {
        index: usize,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, HypnoError>;
