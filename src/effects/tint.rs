//! Color effect - additive blue boost

use image::RgbaImage;

/// Index of the blue channel in an RGBA pixel
const BLUE: usize = 2;

/// Add `amount` to the blue channel of every pixel, saturating at 255
///
/// Red, green and alpha are left untouched. Returns a new frame.
pub fn boost_blue(frame: &RgbaImage, amount: u8) -> RgbaImage {
    let mut out = frame.clone();
    if amount == 0 {
        return out;
    }
    for pixel in out.pixels_mut() {
        pixel.0[BLUE] = pixel.0[BLUE].saturating_add(amount);
    }
    out
}
