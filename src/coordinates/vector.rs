//! # Vector Algebra Module
//!
//! Two- and three-dimensional vectors used as the intermediate representation
//! for every geodetic and projection calculation in this crate.
//!
//! ## Coordinate System Convention
//!
//! `Vect3` values produced by [`crate::geodesy::geo_to_vect`] live in a
//! right-handed, Earth-centered frame:
//! - **X-axis**: passes through latitude 0°, longitude +90°
//! - **Y-axis**: passes through latitude 0°, longitude 0°
//! - **Z-axis**: passes through the north pole (latitude +90°)
//!
//! ## Absent Results
//!
//! Operations that may fail to produce a vector (normalizing a zero vector, a
//! missed intersection) return `Option`. A zero vector is always a valid
//! value and never stands in for "no result".
//!
//! ## Examples
//!
//! ```rust
//! use navgeom::coordinates::vector::Vect3;
//!
//! let x_axis = Vect3::new(1.0, 0.0, 0.0);
//! let y_axis = Vect3::new(0.0, 1.0, 0.0);
//!
//! // Right-handed: x × y = z
//! assert_eq!(x_axis.cross(&y_axis), Vect3::new(0.0, 0.0, 1.0));
//! assert_eq!(x_axis.dot(&y_axis), 0.0);
//! ```

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Two-dimensional vector
///
/// Used for points and directions on a projection plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vect2 {
    pub x: f64,
    pub y: f64,
}

/// Three-dimensional vector
///
/// Represents either a position (distance from the Earth's center in meters)
/// or a direction. The interpretation depends on the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vect3 {
    /// X-component (toward latitude 0°, longitude +90°)
    pub x: f64,
    /// Y-component (toward latitude 0°, longitude 0°)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Vect2 {
    pub const ZERO: Vect2 = Vect2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vect2 { x, y }
    }

    /// Length of the vector
    pub fn abs(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector with the same orientation, or `None` for a zero vector
    pub fn unit(&self) -> Option<Vect2> {
        self.unit_with_len().map(|(unit, _)| unit)
    }

    /// Like [`Vect2::unit`], also returning the original length
    pub fn unit_with_len(&self) -> Option<(Vect2, f64)> {
        let len = self.abs();
        if len == 0.0 {
            None
        } else {
            Some((Vect2::new(self.x / len, self.y / len), len))
        }
    }

    /// Rescales the vector to length `abs` without changing its orientation
    ///
    /// A zero vector stays zero.
    pub fn set_abs(&self, abs: f64) -> Vect2 {
        let old = self.abs();
        if old != 0.0 {
            *self * (abs / old)
        } else {
            Vect2::ZERO
        }
    }

    pub fn dot(&self, other: &Vect2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the 3D cross product of the two vectors
    ///
    /// Zero when the vectors are parallel (or either is zero).
    pub fn cross(&self, other: &Vect2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn from_vector2(vec: Vector2<f64>) -> Self {
        Vect2 { x: vec.x, y: vec.y }
    }
}

impl Vect3 {
    pub const ZERO: Vect3 = Vect3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navgeom::coordinates::vector::Vect3;
    ///
    /// let v = Vect3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vect3 { x, y, z }
    }

    /// Calculates the length of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `|v| = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navgeom::coordinates::vector::Vect3;
    ///
    /// assert_eq!(Vect3::new(3.0, 4.0, 0.0).abs(), 5.0);
    /// assert_eq!(Vect3::ZERO.abs(), 0.0);
    /// ```
    pub fn abs(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` if the vector has zero length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navgeom::coordinates::vector::Vect3;
    ///
    /// let unit = Vect3::new(3.0, 4.0, 0.0).unit().unwrap();
    /// assert_eq!(unit, Vect3::new(0.6, 0.8, 0.0));
    /// assert!(Vect3::ZERO.unit().is_none());
    /// ```
    pub fn unit(&self) -> Option<Vect3> {
        self.unit_with_len().map(|(unit, _)| unit)
    }

    /// Like [`Vect3::unit`], also returning the original length
    pub fn unit_with_len(&self) -> Option<(Vect3, f64)> {
        let len = self.abs();
        if len == 0.0 {
            None
        } else {
            Some((Vect3::new(self.x / len, self.y / len, self.z / len), len))
        }
    }

    /// Rescales the vector to length `abs` without changing its orientation
    ///
    /// A zero vector has no orientation and stays zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navgeom::coordinates::vector::Vect3;
    ///
    /// let v = Vect3::new(0.0, 3.0, 4.0).set_abs(10.0);
    /// assert_eq!(v, Vect3::new(0.0, 6.0, 8.0));
    /// assert_eq!(Vect3::ZERO.set_abs(10.0), Vect3::ZERO);
    /// ```
    pub fn set_abs(&self, abs: f64) -> Vect3 {
        let old = self.abs();
        if old != 0.0 {
            *self * (abs / old)
        } else {
            Vect3::ZERO
        }
    }

    /// Calculates the dot product with another vector
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vect3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the right-handed cross product with another vector
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Vect3) -> Vect3 {
        Vect3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Converts to nalgebra Vector3 for matrix operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vect3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl std::ops::Add for Vect2 {
    type Output = Vect2;

    fn add(self, other: Vect2) -> Vect2 {
        Vect2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vect2 {
    type Output = Vect2;

    fn sub(self, other: Vect2) -> Vect2 {
        Vect2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vect2 {
    type Output = Vect2;

    fn mul(self, scalar: f64) -> Vect2 {
        Vect2::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Neg for Vect2 {
    type Output = Vect2;

    fn neg(self) -> Vect2 {
        Vect2::new(-self.x, -self.y)
    }
}

impl std::ops::Add for Vect3 {
    type Output = Vect3;

    fn add(self, other: Vect3) -> Vect3 {
        Vect3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vect3 {
    type Output = Vect3;

    fn sub(self, other: Vect3) -> Vect3 {
        Vect3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Vect3 {
    type Output = Vect3;

    fn mul(self, scalar: f64) -> Vect3 {
        Vect3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Neg for Vect3 {
    type Output = Vect3;

    fn neg(self) -> Vect3 {
        Vect3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_abs() {
        assert_eq!(Vect3::new(3.0, 4.0, 0.0).abs(), 5.0);
        assert_eq!(Vect3::new(0.0, -3.0, 4.0).abs(), 5.0);
        assert_eq!(Vect3::ZERO.abs(), 0.0);
        assert_eq!(Vect2::new(-3.0, 4.0).abs(), 5.0);
    }

    #[test]
    fn test_unit() {
        let (unit, len) = Vect3::new(0.0, 0.0, -7.5).unit_with_len().unwrap();
        assert_eq!(unit, Vect3::new(0.0, 0.0, -1.0));
        assert_eq!(len, 7.5);

        let unit = Vect2::new(3.0, 4.0).unit().unwrap();
        assert_relative_eq!(unit.abs(), 1.0, epsilon = 1e-15);

        // Zero vectors have no direction
        assert!(Vect3::ZERO.unit().is_none());
        assert!(Vect2::ZERO.unit_with_len().is_none());

        // Very small values still normalize
        let tiny = Vect3::new(1e-15, 1e-15, 1e-15).unit().unwrap();
        assert_relative_eq!(tiny.abs(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_set_abs() {
        let v = Vect3::new(1.0, 1.0, 1.0).set_abs(3.0_f64.sqrt() * 2.0);
        assert_relative_eq!(v.x, 2.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 2.0, epsilon = 1e-15);
        assert_relative_eq!(v.z, 2.0, epsilon = 1e-15);

        assert_eq!(Vect2::new(0.0, -2.0).set_abs(5.0), Vect2::new(0.0, -5.0));
        assert_eq!(Vect2::ZERO.set_abs(5.0), Vect2::ZERO);
    }

    #[test]
    fn test_cross_product() {
        let x_axis = Vect3::new(1.0, 0.0, 0.0);
        let y_axis = Vect3::new(0.0, 1.0, 0.0);
        let z_axis = Vect3::new(0.0, 0.0, 1.0);

        assert_eq!(x_axis.cross(&y_axis), z_axis);
        assert_eq!(y_axis.cross(&z_axis), x_axis);
        assert_eq!(z_axis.cross(&x_axis), y_axis);
        assert_eq!(y_axis.cross(&x_axis), -z_axis);

        assert_eq!(Vect2::new(1.0, 0.0).cross(&Vect2::new(0.0, 1.0)), 1.0);
        assert_eq!(Vect2::new(2.0, 2.0).cross(&Vect2::new(-1.0, -1.0)), 0.0);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Vect3::new(1.0, 2.0, 3.0);
        let b = Vect3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vect3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vect3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vect3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(&b), 32.0);

        let c = Vect2::new(1.0, -2.0);
        let d = Vect2::new(0.5, 4.0);
        assert_eq!(c + d, Vect2::new(1.5, 2.0));
        assert_eq!(c - d, Vect2::new(0.5, -6.0));
        assert_eq!(c * -2.0, Vect2::new(-2.0, 4.0));
        assert_eq!(c.dot(&d), -7.5);
    }

    #[test]
    fn test_nalgebra_conversions() {
        let v = Vect3::new(1.0, 2.0, 3.0);
        assert_eq!(Vect3::from_vector3(v.to_vector3()), v);

        let w = Vect2::new(-1.0, 0.25);
        assert_eq!(Vect2::from_vector2(w.to_vector2()), w);
    }
}
