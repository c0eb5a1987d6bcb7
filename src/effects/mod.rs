//! Effects module - the per-frame warp engine
//!
//! This module provides:
//! - Matrix builder: rotation, scale, shear and composition
//! - Frame transformer: inverse-mapped, nearest-neighbor warp
//! - Blue tint color effect
//! - Periodic schedule driving all effects from the frame phase

mod matrix;
mod params;
mod schedule;
mod tint;
mod warp;

#[allow(unused_imports)]
pub use matrix::{compose, rotation, scale, shear, LinearMatrix};
pub use params::EffectParameters;
#[allow(unused_imports)]
pub use schedule::{phase, FrameSchedule, SHEAR_AMPLITUDE};
pub use tint::boost_blue;
pub use warp::transform;
