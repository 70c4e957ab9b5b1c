//! Line/sphere intersection

use crate::coordinates::Vect3;
use crate::{GeomError, Result};

/// Outcome of [`vect_sphere_intersect`]
///
/// Slot 0 holds the intersection for the root `t1 = -(l·u) - sqrt(Δ)` and
/// slot 1 the one for `t2 = -(l·u) + sqrt(Δ)`. Slot order follows the
/// roots along the line direction, not proximity to anything else. A
/// rejected root leaves its slot `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereIntersection {
    pub points: [Option<Vect3>; 2],
}

impl SphereIntersection {
    /// Number of accepted intersections (0, 1 or 2)
    pub fn count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Accepted intersection points in slot order
    pub fn iter(&self) -> impl Iterator<Item = Vect3> + '_ {
        self.points.iter().flatten().copied()
    }
}

/// Determines whether and where a line intersects the surface of a sphere
///
/// # Arguments
///
/// * `v` - Direction of the line. With `confined` set, also its extent.
/// * `o` - Displacement of the line's origin from the coordinate origin
/// * `c` - Displacement of the sphere's center from the coordinate origin
/// * `r` - Radius of the sphere
/// * `confined` - Only accept intersections between `o` and `o + v`
///   (inclusive) instead of anywhere on the infinite line through them
///
/// # Algorithm
///
/// With `l = v/|v|`, `d = |v|` and `u = o - c`, points on the line are
/// `o + l·t` and the intersections solve
/// `t² + 2(l·u)t + |u|² - r² = 0`, whose reduced discriminant is
/// `Δ = (l·u)² - |u|² + r²`. A negative `Δ` means no intersection, zero a
/// tangent point and positive two crossings.
///
/// # Errors
///
/// [`GeomError::DegenerateInput`] if `v` has zero length.
///
/// # Examples
///
/// ```rust
/// use navgeom::{vect_sphere_intersect, Vect3};
///
/// // A segment through the center of a unit sphere crosses it twice
/// let hits = vect_sphere_intersect(
///     Vect3::new(4.0, 0.0, 0.0),
///     Vect3::new(-2.0, 0.0, 0.0),
///     Vect3::ZERO,
///     1.0,
///     true,
/// )
/// .unwrap();
/// assert_eq!(hits.count(), 2);
/// assert_eq!(hits.points[0], Some(Vect3::new(-1.0, 0.0, 0.0)));
/// assert_eq!(hits.points[1], Some(Vect3::new(1.0, 0.0, 0.0)));
/// ```
pub fn vect_sphere_intersect(
    v: Vect3,
    o: Vect3,
    c: Vect3,
    r: f64,
    confined: bool,
) -> Result<SphereIntersection> {
    let (l, d) = v.unit_with_len().ok_or_else(|| {
        GeomError::DegenerateInput("sphere intersection with zero-length line".to_string())
    })?;

    let o_min_c = o - c;
    let l_dot_o_min_c = l.dot(&o_min_c);
    let disc = l_dot_o_min_c * l_dot_o_min_c - o_min_c.dot(&o_min_c) + r * r;

    log::trace!("sphere intersect: l={l:?} o-c={o_min_c:?} l.(o-c)={l_dot_o_min_c} disc={disc}");

    let accept = |t: f64| -> Option<Vect3> {
        if !confined || (0.0..=d).contains(&t) {
            Some(l * t + o)
        } else {
            None
        }
    };

    let points = if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        [
            accept(-l_dot_o_min_c - sqrt_disc),
            accept(-l_dot_o_min_c + sqrt_disc),
        ]
    } else if disc == 0.0 {
        [accept(-l_dot_o_min_c), None]
    } else {
        [None, None]
    };

    Ok(SphereIntersection { points })
}
