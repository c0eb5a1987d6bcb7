//! Job runner - one complete load, warp and save cycle
//!
//! Ties the GIF boundary to the engine and turns progress into
//! human-readable status lines. The result is a single terminal
//! `Result`: either the path of the written file or the reason the run
//! was abandoned.

use std::path::{Path, PathBuf};

use crate::animation::{self, gif};
use crate::effects::EffectParameters;
use crate::error::{HypnoError, Result};

pub const STATUS_STARTED: &str = "Processing... please wait.";
pub const STATUS_COMPLETED: &str = "Completed!";

/// Receives status lines as the job advances
pub trait StatusSink {
    fn status(&mut self, message: &str);
}

impl<F: FnMut(&str)> StatusSink for F {
    fn status(&mut self, message: &str) {
        self(message)
    }
}

/// Generate the hypnotic version of the GIF at `input`
///
/// The last status line is always either [`STATUS_COMPLETED`] or
/// `"Error: <message>"`.
pub fn run<S: StatusSink>(input: &Path, params: &EffectParameters, sink: &mut S) -> Result<PathBuf> {
    let result = generate(input, params, sink);
    match &result {
        Ok(path) => {
            log::info!("Generated {}", path.display());
            sink.status(STATUS_COMPLETED);
        }
        Err(e) => {
            log::error!("Generation failed for {}: {}", input.display(), e);
            sink.status(&format!("Error: {}", e));
        }
    }
    result
}

fn generate<S: StatusSink>(input: &Path, params: &EffectParameters, sink: &mut S) -> Result<PathBuf> {
    let loaded = gif::load(input)?;
    if !loaded.is_animated {
        return Err(HypnoError::NotAnimated);
    }

    sink.status(STATUS_STARTED);

    let mut progress = |current: usize, total: usize| {
        sink.status(&format!("Processing frame {}/{}...", current, total));
    };
    let output = animation::process(&loaded.sequence, params, &mut progress)?;

    let path = gif::output_path(input);
    gif::save(&path, output, loaded.default_duration)?;
    Ok(path)
}
