//! Matrix builder - 2x2 linear transforms for the plane
//!
//! All matrices act on column vectors `(x, y)` measured from the frame
//! center. Composition follows the usual convention: in `A * B`, `B` is
//! applied to a point first.

use nalgebra::Matrix2;

/// A 2x2 linear map of the plane
pub type LinearMatrix = Matrix2<f64>;

/// Rotation by `angle_degrees`
///
/// ```text
/// | cos  -sin |
/// | sin   cos |
/// ```
pub fn rotation(angle_degrees: f64) -> LinearMatrix {
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
    Matrix2::new(cos_a, -sin_a, sin_a, cos_a)
}

/// Axis-aligned scale
pub fn scale(sx: f64, sy: f64) -> LinearMatrix {
    Matrix2::new(sx, 0.0, 0.0, sy)
}

/// Shear with `cx` along x and `cy` along y
pub fn shear(cx: f64, cy: f64) -> LinearMatrix {
    Matrix2::new(1.0, cx, cy, 1.0)
}

/// Multiply matrices in the order given
///
/// `compose([a, b, c])` is `a * b * c`, so `c` acts on a point first.
/// An empty input yields the identity.
pub fn compose<I>(matrices: I) -> LinearMatrix
where
    I: IntoIterator<Item = LinearMatrix>,
{
    matrices
        .into_iter()
        .fold(LinearMatrix::identity(), |acc, m| acc * m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &LinearMatrix, b: &LinearMatrix) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9, "{a} != {b}");
        }
    }

    #[test]
    fn test_rotation_identity() {
        assert_eq!(rotation(0.0), LinearMatrix::identity());
        assert_close(&rotation(360.0), &LinearMatrix::identity());
    }

    #[test]
    fn test_rotation_90_degrees() {
        let m = rotation(90.0);
        let p = m * nalgebra::Vector2::new(1.0, 0.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_and_shear_entries() {
        assert_eq!(scale(1.0, 1.0), LinearMatrix::identity());
        assert_eq!(scale(2.0, 3.0), Matrix2::new(2.0, 0.0, 0.0, 3.0));
        assert_eq!(shear(0.5, -0.25), Matrix2::new(1.0, 0.5, -0.25, 1.0));
        assert_eq!(shear(0.0, 0.0), LinearMatrix::identity());
    }

    #[test]
    fn test_compose_matches_product() {
        let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let b = Matrix2::new(0.0, 1.0, -1.0, 0.0);
        let c = Matrix2::new(2.0, 0.0, 1.0, 3.0);

        // a*b = [[-2,1],[-4,3]], (a*b)*c = [[-3,3],[-5,9]]
        let expected = Matrix2::new(-3.0, 3.0, -5.0, 9.0);
        assert_eq!(compose([a, b, c]), expected);
        assert_eq!(compose([a, b, c]), a * b * c);
    }

    #[test]
    fn test_compose_order_applies_last_first() {
        // Rotate (1,0) to (0,1), then shear x by y: (1,1)
        let m = compose([shear(1.0, 0.0), rotation(90.0)]);
        let p = m * nalgebra::Vector2::new(1.0, 0.0);
        assert!((p.x - 1.0).abs() < 1e-9);
        assert!((p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_compose_empty() {
        assert_eq!(compose(Vec::new()), LinearMatrix::identity());
    }
}
