//! Geographic coordinate translation
//!
//! A [`GeoTranslate`] moves geodetic coordinates into a frame whose origin
//! (latitude 0°, longitude 0°) sits at an arbitrary reference point and
//! whose axes are rotated about that point. In 3-space this is a rotation of
//! the whole sphere about its center followed by a rotation within the x/z
//! plane, which after the first step is the plane tangent to the sphere at
//! the new origin.

use crate::constants::DEG2RAD;
use crate::coordinates::{GeoPos2, Vect2, Vect3};
use crate::geodesy::{surface_vect, vect_to_geo};
use crate::matrix::{mul_vect2, mul_vect3, rotation_2d, rotation_x, rotation_z};
use nalgebra::{Matrix2, Matrix3};

/// Prepared geographic coordinate translation
///
/// Built once by [`GeoTranslate::new`] and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTranslate {
    /// Rotation about the sphere's center, x (latitude) after z (longitude)
    geo_matrix: Matrix3<f64>,
    /// Rotation within the x/z plane
    rot_matrix: Matrix2<f64>,
}

impl GeoTranslate {
    /// Prepares a set of geographic coordinate translation parameters
    ///
    /// # Arguments
    ///
    /// * `displacement` - Latitude and longitude (degrees) of the target
    ///   system's origin in the source system. A displacement of +10° lat
    ///   and +20° lon moves the point 10° N, 20° E to 0°, 0°, and a point on
    ///   the same meridian such as 5° N, 20° E to 5° S, 0°.
    /// * `rotation` - Counter-clockwise rotation of the target system's axes
    ///   relative to the source system, in degrees
    pub fn new(displacement: GeoPos2, rotation: f64) -> Self {
        let alpha = -displacement.lat * DEG2RAD;
        let bravo = displacement.lon * DEG2RAD;
        let theta = rotation * DEG2RAD;

        let geo_matrix = rotation_x(alpha) * rotation_z(bravo);
        let rot_matrix = rotation_2d(theta);
        log::debug!("GeoTranslate: displacement={displacement:?} rotation={rotation}");

        GeoTranslate {
            geo_matrix,
            rot_matrix,
        }
    }

    /// Rotates a vector from the source frame into the target frame
    pub fn apply(&self, v: Vect3) -> Vect3 {
        // Rotate around the sphere's center along the lat & lon axes
        let q = mul_vect3(&self.geo_matrix, v);
        // Rotate in the x/z plane about the y axis
        let s = mul_vect2(&self.rot_matrix, Vect2::new(q.x, q.z));
        Vect3::new(s.x, q.y, s.y)
    }

    /// Rotates a vector from the target frame back into the source frame
    ///
    /// Both stored matrices are rotations, so their transposes undo them.
    pub fn apply_inverse(&self, v: Vect3) -> Vect3 {
        let s = Vect2::from_vector2(self.rot_matrix.tr_mul(&Vect2::new(v.x, v.z).to_vector2()));
        let p = Vect3::new(s.x, v.y, s.y);
        Vect3::from_vector3(self.geo_matrix.tr_mul(&p.to_vector3()))
    }

    /// Translates a position into the target system
    pub fn translate(&self, pos: GeoPos2) -> GeoPos2 {
        vect_to_geo(self.apply(surface_vect(pos))).to_geo2()
    }

    /// Translates a position from the target system back into the source
    /// system
    pub fn translate_inverse(&self, pos: GeoPos2) -> GeoPos2 {
        vect_to_geo(self.apply_inverse(surface_vect(pos))).to_geo2()
    }
}
