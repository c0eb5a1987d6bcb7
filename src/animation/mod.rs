//! Animation module - frame sequences, the processing loop and GIF I/O
//!
//! This module provides:
//! - `AnimationSequence` of frames with display durations
//! - Driver applying the per-frame warp with progress reporting
//! - GIF decoding/encoding at the file boundary

mod driver;
pub mod gif;
mod sequence;

#[allow(unused_imports)]
pub use driver::{process, ProgressObserver, PROGRESS_INTERVAL};
pub use sequence::{AnimatedFrame, AnimationSequence};
