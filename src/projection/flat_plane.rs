//! Flat-plane projections
//!
//! Points on the sphere are projected onto a plane that touches the sphere at
//! the projection's center. Projection rays start at a fixed point on the
//! projection axis, the line through the sphere's center and the plane's
//! point of contact. The position of that point along the axis selects the
//! projection:
//!
//! ```text
//!   projection
//!       center \ | <- projection axis (positive offsets)
//!               v|
//!  ==============+=============+======= <- projection plane
//!         - '    |    ' -     / ^-- projected point
//!       /        |        \ x <-- projecting point
//!     /          |         /\
//!    | sphere    |       /   |
//!    | center -> +     /     |
//!    |           |   /       |
//!     \          | /        /
//!       \        + <- projection point
//!         -      |      -
//!           '----|----'
//!                |
//!                | <- projection axis (negative offsets)
//! ```
//!
//! | Projection    | `dist`           | Projection point              |
//! |---------------|------------------|-------------------------------|
//! | orthographic  | `+∞`             | infinitely far above the plane |
//! | gnomonic      | `-EARTH_MSL`     | the sphere's center            |
//! | stereographic | `-2 * EARTH_MSL` | the antipode of the center     |
//!
//! In the translated frame the plane's point of contact is
//! `(0, EARTH_MSL, 0)` and the projection axis is the y-axis. Plane
//! coordinates are the x and z components on the plane, in meters.

use super::{GeoTranslate, PlaneProjection};
use crate::constants::{EARTH_MSL, PROJECTION_POINT_EPSILON};
use crate::coordinates::{GeoPos2, Vect2, Vect3};
use crate::geodesy::{surface_vect, vect_to_geo};
use crate::intersect::vect_sphere_intersect;
use crate::{GeomError, Result};

/// Prepared flat-plane projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPlaneProjection {
    xlate: GeoTranslate,
    dist: f64,
}

impl FlatPlaneProjection {
    /// Prepares a projection onto the plane touching the sphere at `center`
    ///
    /// # Arguments
    ///
    /// * `center` - Point of contact between the plane and the sphere
    /// * `rotation` - Rotation of the plane's axes in degrees
    ///   counter-clockwise
    /// * `dist` - Distance of the projection point from the plane along the
    ///   projection axis, positive away from the sphere's center. `+∞`
    ///   gives an orthographic projection.
    ///
    /// # Errors
    ///
    /// - [`GeomError::DegenerateInput`] if `dist` is zero or NaN
    /// - [`GeomError::InvalidParameter`] if `dist` is `-∞`. For an inverted
    ///   orthographic projection, flip the x coordinate of
    ///   [`FlatPlaneProjection::orthographic`] results instead.
    pub fn new(center: GeoPos2, rotation: f64, dist: f64) -> Result<Self> {
        if dist == 0.0 || dist.is_nan() {
            return Err(GeomError::DegenerateInput(format!(
                "projection point distance must be nonzero, got {dist}"
            )));
        }
        if dist == f64::NEG_INFINITY {
            return Err(GeomError::InvalidParameter(
                "projection point cannot lie at negative infinity".to_string(),
            ));
        }
        log::debug!("FlatPlaneProjection: center={center:?} rotation={rotation} dist={dist}");
        Ok(Self::new_unchecked(center, rotation, dist))
    }

    fn new_unchecked(center: GeoPos2, rotation: f64, dist: f64) -> Self {
        FlatPlaneProjection {
            xlate: GeoTranslate::new(center, rotation),
            dist,
        }
    }

    /// Orthographic projection, projection point at `+∞`
    pub fn orthographic(center: GeoPos2, rotation: f64) -> Self {
        Self::new_unchecked(center, rotation, f64::INFINITY)
    }

    /// Gnomonic projection, projection point at the sphere's center
    pub fn gnomonic(center: GeoPos2, rotation: f64) -> Self {
        Self::new_unchecked(center, rotation, -EARTH_MSL)
    }

    /// Stereographic projection, projection point at the antipode of
    /// `center`
    pub fn stereographic(center: GeoPos2, rotation: f64) -> Self {
        Self::new_unchecked(center, rotation, -2.0 * EARTH_MSL)
    }

    pub fn dist(&self) -> f64 {
        self.dist
    }

    pub fn translation(&self) -> &GeoTranslate {
        &self.xlate
    }

    /// Picks which sphere intersection of a back-projected ray is the
    /// projected point
    ///
    /// Hits at or behind the projection point cannot have come from a
    /// forward projection. Of the rest, the one nearer the projection point
    /// wins: the larger y when the projection point lies at or above the
    /// sphere's center, the smaller y otherwise.
    fn pick_hit(
        &self,
        hits: impl Iterator<Item = Vect3>,
        origin: Vect3,
        ray: Vect3,
    ) -> Option<Vect3> {
        let ray_len = ray.abs();
        let ahead = hits.filter(|hit| {
            !self.dist.is_finite() || (*hit - origin).dot(&ray) / ray_len > PROJECTION_POINT_EPSILON
        });
        if self.dist >= -EARTH_MSL {
            ahead.max_by(|a, b| a.y.total_cmp(&b.y))
        } else {
            ahead.min_by(|a, b| a.y.total_cmp(&b.y))
        }
    }
}

impl PlaneProjection for FlatPlaneProjection {
    /// Projects `pos` onto the plane
    ///
    /// Returns `None` when the point lies at or behind a projection point
    /// that sits below the plane, so that its ray never reaches the plane.
    fn geo_to_plane(&self, pos: GeoPos2) -> Option<Vect2> {
        let t = self.xlate.apply(surface_vect(pos));

        if !self.dist.is_finite() {
            return Some(Vect2::new(t.x, t.z));
        }
        if self.dist < 0.0 && t.y <= self.dist + EARTH_MSL {
            return None;
        }
        let scale = self.dist / (self.dist + EARTH_MSL - t.y);
        Some(Vect2::new(t.x * scale, t.z * scale))
    }

    /// Back-projects a plane point onto the sphere
    ///
    /// Back-projection is unique only while the projection point lies
    /// inside the sphere (`-2 * EARTH_MSL <= dist < 0`, which covers the
    /// gnomonic and stereographic projections). Otherwise a ray can cross
    /// the sphere twice in front of the projection point and the crossing
    /// nearer to the projection point is returned. For the orthographic
    /// projection that is the hemisphere facing the plane.
    ///
    /// Returns `Ok(None)` for points outside the projection's image.
    fn plane_to_geo(&self, p: Vect2) -> Result<Option<GeoPos2>> {
        let (ray, origin) = if self.dist.is_finite() {
            (
                Vect3::new(p.x, -self.dist, p.y),
                Vect3::new(0.0, EARTH_MSL + self.dist, 0.0),
            )
        } else {
            (Vect3::new(0.0, -1.0, 0.0), Vect3::new(p.x, 0.0, p.y))
        };

        let hits = vect_sphere_intersect(ray, origin, Vect3::ZERO, EARTH_MSL, false)?;
        log::trace!("plane_to_geo: p={p:?} hits={hits:?}");

        let Some(hit) = self.pick_hit(hits.iter(), origin, ray) else {
            return Ok(None);
        };
        let pos = vect_to_geo(self.xlate.apply_inverse(hit));
        Ok(Some(pos.to_geo2()))
    }
}
