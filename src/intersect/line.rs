//! Intersection of two lines in 2-space

use crate::constants::PARALLEL_EPSILON;
use crate::coordinates::Vect2;
use crate::{GeomError, Result};

/// Computes where two lines, each given as a direction and an origin,
/// intersect
///
/// With `confined` set, the lines are treated as the segments
/// `[oa, oa + da]` and `[ob, ob + db]`, and an intersection outside either
/// segment (endpoints inclusive) is discarded. Confinement is decided on the
/// position along each segment, so crossings on axis-aligned segments are
/// not lost to rounding of the intersection point.
///
/// Returns `Ok(None)` for parallel lines, which have no unique intersection.
/// Coincident origins short-circuit to `Some(oa)` once the lines are known
/// not to be parallel.
///
/// # Errors
///
/// [`GeomError::DegenerateInput`] if either direction has zero length.
///
/// # Examples
///
/// ```rust
/// use navgeom::{vect2_intersect, Vect2};
///
/// let p = vect2_intersect(
///     Vect2::new(1.0, 0.0),
///     Vect2::new(0.0, 0.0),
///     Vect2::new(0.0, 1.0),
///     Vect2::new(0.5, -0.5),
///     true,
/// )
/// .unwrap();
/// assert_eq!(p, Some(Vect2::new(0.5, 0.0)));
/// ```
pub fn vect2_intersect(
    da: Vect2,
    oa: Vect2,
    db: Vect2,
    ob: Vect2,
    confined: bool,
) -> Result<Option<Vect2>> {
    let (da_abs, db_abs) = (da.abs(), db.abs());
    if da_abs == 0.0 || db_abs == 0.0 {
        return Err(GeomError::DegenerateInput(
            "line intersection with zero-length direction".to_string(),
        ));
    }
    if da.cross(&db).abs() <= PARALLEL_EPSILON * da_abs * db_abs {
        return Ok(None);
    }
    if oa == ob {
        return Ok(Some(oa));
    }

    let p1 = oa;
    let p2 = oa + da;
    let p3 = ob;
    let p4 = ob + db;

    let det = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if det == 0.0 {
        return Err(GeomError::DegenerateInput(
            "zero determinant for non-parallel lines".to_string(),
        ));
    }
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;
    let r = Vect2::new(
        (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / det,
        (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / det,
    );

    if confined {
        // Positions along each segment from oa + ta·da = ob + tb·db
        let w = ob - oa;
        let cross = da.cross(&db);
        let ta = w.cross(&db) / cross;
        let tb = w.cross(&da) / cross;
        if !((0.0..=1.0).contains(&ta) && (0.0..=1.0).contains(&tb)) {
            return Ok(None);
        }
    }

    Ok(Some(r))
}
