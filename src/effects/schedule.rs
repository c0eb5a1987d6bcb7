//! Periodic schedule - per-frame effect values over one animation cycle
//!
//! Each frame gets a phase in [0, 2π) from its position in the animation,
//! and every effect oscillates with that phase so the output loops
//! seamlessly:
//!
//! - rotation follows `sin(t)`
//! - zoom pulses twice per cycle with `sin(2t)`
//! - shear sways with `cos(t)`
//! - the blue boost follows `|sin(t)|`

use std::f64::consts::TAU;

use super::matrix::{compose, rotation, scale, shear, LinearMatrix};
use super::params::EffectParameters;

/// Peak horizontal shear, fixed rather than user-controlled
pub const SHEAR_AMPLITUDE: f64 = 0.1;

/// Effect values for a single frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSchedule {
    /// Phase in radians
    pub phase: f64,
    /// Rotation angle in degrees
    pub angle_degrees: f64,
    /// Uniform scale factor
    pub zoom: f64,
    /// Horizontal shear factor
    pub shear_x: f64,
    /// Amount added to the blue channel
    pub blue_boost: u8,
}

impl FrameSchedule {
    /// Compute the schedule for frame `index` of `count`
    pub fn at(index: usize, count: usize, params: &EffectParameters) -> Self {
        let phase = phase(index, count);
        let (sin_t, cos_t) = phase.sin_cos();

        let boost = (params.max_color_intensity as f64 * sin_t.abs()).floor();

        Self {
            phase,
            angle_degrees: params.max_rotation_degrees * sin_t,
            zoom: 1.0 + params.max_zoom_fraction * (2.0 * phase).sin(),
            shear_x: SHEAR_AMPLITUDE * cos_t,
            blue_boost: boost.clamp(0.0, 255.0) as u8,
        }
    }

    /// Composite matrix: shear, then scale, then rotation
    ///
    /// Rotation acts on a point first since it is last in the product.
    pub fn composite_matrix(&self) -> LinearMatrix {
        compose([
            shear(self.shear_x, 0.0),
            scale(self.zoom, self.zoom),
            rotation(self.angle_degrees),
        ])
    }
}

/// Normalized cycle position of a frame, in radians
pub fn phase(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64 * TAU
}
