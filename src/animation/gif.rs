//! GIF codec - load and save animated GIFs
//!
//! Decoding composes every frame onto the full canvas as RGBA, so the
//! engine only ever sees equally sized frames. Encoding always loops
//! forever.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, Frame};

use super::sequence::{AnimatedFrame, AnimationSequence};
use crate::error::Result;

/// Name of the generated file, placed next to the input
pub const OUTPUT_FILE_NAME: &str = "custom_result.gif";

/// Used when the first frame's delay is zero
///
/// The decoder reports a missing delay and an explicit zero delay the same
/// way, so both fall back to this value.
pub const FALLBACK_DURATION: Duration = Duration::from_millis(100);

/// A decoded GIF
pub struct LoadedAnimation {
    /// All frames with their own delays
    pub sequence: AnimationSequence,
    /// Delay of the first frame, used for every frame on output
    pub default_duration: Duration,
    /// Whether the file holds more than one frame
    pub is_animated: bool,
}

/// Decode a GIF file
pub fn load(path: impl AsRef<Path>) -> Result<LoadedAnimation> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let decoder = GifDecoder::new(reader)?;
    let frames = decoder.into_frames().collect_frames()?;

    log::info!("Decoded {} frames from {}", frames.len(), path.display());

    let frames: Vec<AnimatedFrame> = frames
        .into_iter()
        .map(|frame| {
            let duration = delay_to_duration(frame.delay());
            AnimatedFrame::new(frame.into_buffer(), duration)
        })
        .collect();

    let default_duration = frames
        .first()
        .map(|f| f.duration)
        .filter(|d| !d.is_zero())
        .unwrap_or(FALLBACK_DURATION);
    let is_animated = frames.len() > 1;

    Ok(LoadedAnimation {
        sequence: AnimationSequence::new(frames)?,
        default_duration,
        is_animated,
    })
}

/// Encode `sequence` as an infinitely looping GIF
///
/// Every frame is written with `frame_duration`. The file is only created
/// once encoding has fully succeeded.
pub fn save(path: impl AsRef<Path>, sequence: AnimationSequence, frame_duration: Duration) -> Result<()> {
    let path = path.as_ref();
    let delay = Delay::from_saturating_duration(frame_duration);
    let count = sequence.len();

    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder.set_repeat(Repeat::Infinite)?;
        encoder.encode_frames(
            sequence
                .into_frames()
                .into_iter()
                .map(|frame| Frame::from_parts(frame.image, 0, 0, delay)),
        )?;
    }
    std::fs::write(path, bytes)?;

    log::info!("Wrote {} frames to {}", count, path.display());
    Ok(())
}

/// Where the result for `input` is written
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
    input
        .as_ref()
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(OUTPUT_FILE_NAME)
}

fn delay_to_duration(delay: Delay) -> Duration {
    let (numer, denom) = delay.numer_denom_ms();
    Duration::from_millis(u64::from(numer / denom.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HypnoError;
    use image::{Rgba, RgbaImage};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hypno-gif-{}-{}", std::process::id(), name))
    }

    fn frames(count: usize, duration_ms: u64) -> AnimationSequence {
        let frames = (0..count)
            .map(|i| {
                let shade = (i * 60) as u8;
                let image = RgbaImage::from_pixel(6, 4, Rgba([shade, 0, 255 - shade, 255]));
                AnimatedFrame::new(image, Duration::from_millis(duration_ms))
            })
            .collect();
        AnimationSequence::new(frames).unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip.gif");
        save(&path, frames(3, 70), Duration::from_millis(70)).unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_animated);
        assert_eq!(loaded.sequence.len(), 3);
        assert_eq!(loaded.sequence.dimensions(), (6, 4));
        assert_eq!(loaded.default_duration, Duration::from_millis(70));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_single_frame_not_animated() {
        let path = temp_path("still.gif");
        save(&path, frames(1, 100), Duration::from_millis(100)).unwrap();

        let loaded = load(&path).unwrap();
        assert!(!loaded.is_animated);
        assert_eq!(loaded.sequence.len(), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let result = load(temp_path("does-not-exist.gif"));
        assert!(matches!(result, Err(HypnoError::Io(_))));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path("/tmp/anims/spin.gif"),
            PathBuf::from("/tmp/anims").join(OUTPUT_FILE_NAME)
        );
        assert_eq!(output_path("spin.gif"), PathBuf::from(OUTPUT_FILE_NAME));
    }

    #[test]
    fn test_zero_delay_falls_back() {
        let path = temp_path("zero-delay.gif");
        save(&path, frames(2, 0), Duration::ZERO).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.sequence.frames()[0].duration, Duration::ZERO);
        assert_eq!(loaded.default_duration, FALLBACK_DURATION);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_delay_conversion() {
        assert_eq!(
            delay_to_duration(Delay::from_numer_denom_ms(250, 1)),
            Duration::from_millis(250)
        );
        assert_eq!(
            delay_to_duration(Delay::from_numer_denom_ms(0, 1)),
            Duration::ZERO
        );
    }
}
