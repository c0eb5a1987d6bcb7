//! Effect parameters - the three intensity controls for one run

use crate::error::{HypnoError, Result};

/// Intensity limits for the hypnotic warp
///
/// Supplied once per run and never modified while frames are processed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectParameters {
    /// Peak rotation in degrees (the angle swings between -max and +max)
    pub max_rotation_degrees: f64,
    /// Peak zoom as a fraction (0.3 = pulse between 70% and 130%)
    pub max_zoom_fraction: f64,
    /// Peak value added to the blue channel
    pub max_color_intensity: u8,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self {
            max_rotation_degrees: 20.0,
            max_zoom_fraction: 0.3,
            max_color_intensity: 50,
        }
    }
}

impl EffectParameters {
    /// Build parameters from the raw control values
    ///
    /// # Arguments
    /// * `rotation_degrees` - Rotation slider (0 to 180)
    /// * `zoom_percent` - Zoom slider (0 to 100), converted to a fraction
    /// * `color_intensity` - Blue slider (0 to 100), used directly
    pub fn from_controls(rotation_degrees: f64, zoom_percent: f64, color_intensity: u8) -> Self {
        Self {
            max_rotation_degrees: rotation_degrees,
            max_zoom_fraction: zoom_percent / 100.0,
            max_color_intensity: color_intensity,
        }
    }

    /// Check that every value is finite and non-negative
    pub fn validated(self) -> Result<Self> {
        check("max_rotation_degrees", self.max_rotation_degrees)?;
        check("max_zoom_fraction", self.max_zoom_fraction)?;
        Ok(self)
    }
}

fn check(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HypnoError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_controls() {
        let params = EffectParameters::from_controls(45.0, 30.0, 80);
        assert_eq!(params.max_rotation_degrees, 45.0);
        assert!((params.max_zoom_fraction - 0.3).abs() < 1e-12);
        assert_eq!(params.max_color_intensity, 80);
    }

    #[test]
    fn test_validation() {
        assert!(EffectParameters::default().validated().is_ok());

        let bad = EffectParameters {
            max_zoom_fraction: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            bad.validated(),
            Err(HypnoError::InvalidParameter { name: "max_zoom_fraction", .. })
        ));

        let bad = EffectParameters {
            max_rotation_degrees: f64::NAN,
            ..Default::default()
        };
        assert!(bad.validated().is_err());
    }
}
