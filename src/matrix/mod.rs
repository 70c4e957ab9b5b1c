//! Fixed-size rotation matrices
//!
//! Only 2x2 and 3x3 rotations occur in this crate, so they are built as
//! stack-allocated nalgebra matrices and composed with nalgebra's products.
//! All angles are in radians and rotations are counter-clockwise when looking
//! down the rotation axis toward the origin.

use crate::coordinates::{Vect2, Vect3};
use nalgebra::{Matrix2, Matrix3};

/// Rotation about the x-axis
///
/// ```text
/// | 1    0        0    |
/// | 0  cos(a)  -sin(a) |
/// | 0  sin(a)   cos(a) |
/// ```
pub fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cos_a, -sin_a, //
        0.0, sin_a, cos_a,
    )
}

/// Rotation about the z-axis
///
/// ```text
/// | cos(b)  -sin(b)  0 |
/// | sin(b)   cos(b)  0 |
/// |   0        0     1 |
/// ```
pub fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (sin_b, cos_b) = angle.sin_cos();
    Matrix3::new(
        cos_b, -sin_b, 0.0, //
        sin_b, cos_b, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// In-plane rotation
pub fn rotation_2d(angle: f64) -> Matrix2<f64> {
    let (sin_t, cos_t) = angle.sin_cos();
    Matrix2::new(
        cos_t, -sin_t, //
        sin_t, cos_t,
    )
}

pub fn mul_vect3(m: &Matrix3<f64>, v: Vect3) -> Vect3 {
    Vect3::from_vector3(m * v.to_vector3())
}

pub fn mul_vect2(m: &Matrix2<f64>, v: Vect2) -> Vect2 {
    Vect2::from_vector2(m * v.to_vector2())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_x_quarter_turn() {
        let v = mul_vect3(&rotation_x(FRAC_PI_2), Vect3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let v = mul_vect3(&rotation_z(FRAC_PI_2), Vect3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-15);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_2d_quarter_turn() {
        let v = mul_vect2(&rotation_2d(FRAC_PI_2), Vect2::new(1.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_composed_rotation_is_orthogonal() {
        let m = rotation_x(-0.7) * rotation_z(1.3);
        let identity = m * m.transpose();
        assert_relative_eq!(identity, Matrix3::identity(), epsilon = 1e-14);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-14);
    }
}
