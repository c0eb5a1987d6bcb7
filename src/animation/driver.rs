//! Animation driver - runs the warp over every frame in order
//!
//! The driver is strictly sequential: frame `i` is processed after frame
//! `i - 1`, and each output depends only on the matching input frame, the
//! parameters and `i`.

use crate::effects::{boost_blue, transform, EffectParameters, FrameSchedule};
use crate::error::Result;

use super::sequence::{AnimatedFrame, AnimationSequence};

/// Progress is reported on every frame index divisible by this
pub const PROGRESS_INTERVAL: usize = 5;

/// Receives `(current_index, total)` while frames are processed
pub trait ProgressObserver {
    fn on_progress(&mut self, current: usize, total: usize);
}

impl<F: FnMut(usize, usize)> ProgressObserver for F {
    fn on_progress(&mut self, current: usize, total: usize) {
        self(current, total)
    }
}

/// `()` ignores all progress
impl ProgressObserver for () {
    fn on_progress(&mut self, _current: usize, _total: usize) {}
}

/// Warp every frame of `sequence`
///
/// The output has the same length, order and per-frame durations as the
/// input. Any error aborts the whole run; no partial output is returned.
pub fn process<O: ProgressObserver>(
    sequence: &AnimationSequence,
    params: &EffectParameters,
    observer: &mut O,
) -> Result<AnimationSequence> {
    let params = params.validated()?;
    let total = sequence.len();
    let (width, height) = sequence.dimensions();

    log::info!(
        "Processing {} frames ({}x{}), rotation {}°, zoom {}, blue {}",
        total,
        width,
        height,
        params.max_rotation_degrees,
        params.max_zoom_fraction,
        params.max_color_intensity
    );

    let mut output = Vec::with_capacity(total);

    for (index, frame) in sequence.iter().enumerate() {
        let schedule = FrameSchedule::at(index, total, &params);
        log::trace!("Frame {}: {:?}", index, schedule);

        let mut image = transform(&frame.image, &schedule.composite_matrix());

        if params.max_color_intensity > 0 {
            image = boost_blue(&image, schedule.blue_boost);
        }

        output.push(AnimatedFrame::new(image, frame.duration));

        if index % PROGRESS_INTERVAL == 0 {
            observer.on_progress(index, total);
        }
    }

    log::info!("Processed {} frames", output.len());
    AnimationSequence::new(output)
}
