//! Frame transformer - warp a raster frame by a linear matrix
//!
//! Uses inverse mapping: every destination pixel asks "where did I come
//! from?" by applying the inverse matrix around the frame center, then takes
//! the nearest source pixel. This leaves no holes in the output, and pixels
//! whose source falls outside the frame become transparent black.

use image::{Rgba, RgbaImage};
use nalgebra::Vector2;

use super::matrix::LinearMatrix;

/// Fully transparent black, used where no source pixel exists
const EMPTY: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Apply `matrix` to `frame` about its center using nearest-neighbor sampling
///
/// A singular matrix cannot be inverted; in that case the input frame is
/// returned unchanged.
pub fn transform(frame: &RgbaImage, matrix: &LinearMatrix) -> RgbaImage {
    let Some(inverse) = invert(matrix) else {
        log::debug!("Singular transform {:?}, keeping frame as-is", matrix);
        return frame.clone();
    };

    let (width, height) = frame.dimensions();
    let center = Vector2::new(width as f64 / 2.0, height as f64 / 2.0);
    let (w, h) = (width as f64, height as f64);

    RgbaImage::from_fn(width, height, |x, y| {
        let dest = Vector2::new(x as f64, y as f64) - center;
        let src = inverse * dest + center;

        // Ties go to even, matching array rounding
        let sx = src.x.round_ties_even();
        let sy = src.y.round_ties_even();

        if sx >= 0.0 && sx < w && sy >= 0.0 && sy < h {
            *frame.get_pixel(sx as u32, sy as u32)
        } else {
            EMPTY
        }
    })
}

/// Invert a matrix, treating results with non-finite entries as singular
fn invert(matrix: &LinearMatrix) -> Option<LinearMatrix> {
    matrix
        .try_inverse()
        .filter(|inverse| inverse.iter().all(|v| v.is_finite()))
}
