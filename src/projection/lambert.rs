//! Lambert Conformal Conic projection on the sphere, two standard parallels.
//!
//! Plane coordinates are for a unit sphere; multiply by a radius (for
//! example [`EARTH_MSL`](crate::constants::EARTH_MSL)) for meters. Only the
//! forward projection is provided.

use std::f64::consts::{FRAC_PI_4, PI, TAU};

use super::PlaneProjection;
use crate::constants::DEG2RAD;
use crate::coordinates::{GeoPos2, Vect2};
use crate::{GeomError, Result};

fn cot(x: f64) -> f64 {
    1.0 / x.tan()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertConformalConic {
    reflat: f64, // radians
    reflon: f64, // radians
    n: f64,      // cone constant
    f_val: f64,  // F = cos(φ₁)·tanⁿ(π/4 + φ₁/2)/n
    rho0: f64,   // ρ₀ = F·cotⁿ(π/4 + φ₀/2)
}

impl LambertConformalConic {
    /// Prepares a set of Lambert conformal conic projection parameters.
    ///
    /// All arguments are in degrees. `reflat`/`reflon` is the point that
    /// maps to the plane's origin; scale is true along `stdpar1` and
    /// `stdpar2`.
    ///
    /// # Errors
    ///
    /// [`GeomError::DegenerateInput`] when the parallels do not define a
    /// cone: a single standard parallel on the equator, or two parallels
    /// symmetric about it.
    pub fn new(reflat: f64, reflon: f64, stdpar1: f64, stdpar2: f64) -> Result<Self> {
        let phi0 = reflat * DEG2RAD;
        let phi1 = stdpar1 * DEG2RAD;
        let phi2 = stdpar2 * DEG2RAD;

        let n = if stdpar1 == stdpar2 {
            phi1.sin()
        } else {
            (phi1.cos() / phi2.cos()).ln()
                / ((FRAC_PI_4 + phi2 / 2.0).tan() * cot(FRAC_PI_4 + phi1 / 2.0)).ln()
        };
        if n == 0.0 || !n.is_finite() {
            return Err(GeomError::DegenerateInput(format!(
                "standard parallels {stdpar1} and {stdpar2} give cone constant {n}"
            )));
        }

        let f_val = phi1.cos() * (FRAC_PI_4 + phi1 / 2.0).tan().powf(n) / n;
        let rho0 = f_val * cot(FRAC_PI_4 + phi0 / 2.0).powf(n);
        if !f_val.is_finite() || !rho0.is_finite() {
            return Err(GeomError::DegenerateInput(format!(
                "reference latitude {reflat} with parallels {stdpar1}/{stdpar2} is not projectable"
            )));
        }
        log::debug!("LambertConformalConic: n={n} F={f_val} rho0={rho0}");

        Ok(Self {
            reflat: phi0,
            reflon: reflon * DEG2RAD,
            n,
            f_val,
            rho0,
        })
    }

    /// Cone constant
    pub fn n(&self) -> f64 {
        self.n
    }

    pub fn f_val(&self) -> f64 {
        self.f_val
    }

    pub fn rho0(&self) -> f64 {
        self.rho0
    }

    /// Reference latitude in degrees
    pub fn reflat(&self) -> f64 {
        self.reflat.to_degrees()
    }

    /// Reference longitude in degrees
    pub fn reflon(&self) -> f64 {
        self.reflon.to_degrees()
    }
}

impl PlaneProjection for LambertConformalConic {
    /// Projects `pos` onto the unrolled cone
    ///
    /// Returns `None` for the pole the cone opens toward, which lies at
    /// infinity.
    fn geo_to_plane(&self, pos: GeoPos2) -> Option<Vect2> {
        let lat = pos.lat * DEG2RAD;
        // Keep the angle around the cone in one turn of the reference meridian
        let dlon = (pos.lon * DEG2RAD - self.reflon + PI).rem_euclid(TAU) - PI;

        let rho = self.f_val * cot(FRAC_PI_4 + lat / 2.0).powf(self.n);
        if rho.is_infinite() {
            return None;
        }
        let theta = self.n * dlon;
        Some(Vect2::new(rho * theta.sin(), self.rho0 - rho * theta.cos()))
    }

    fn plane_to_geo(&self, _p: Vect2) -> Result<Option<GeoPos2>> {
        Err(GeomError::Unsupported(
            "Lambert conformal conic inverse projection".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn conus() -> LambertConformalConic {
        LambertConformalConic::new(23.0, -96.0, 33.0, 45.0).unwrap()
    }

    #[test]
    fn test_worked_example() {
        // Snyder, Map Projections: A Working Manual, spherical LCC example
        let lcc = conus();
        assert_relative_eq!(lcc.n(), 0.6304777, epsilon = 1e-7);
        assert_relative_eq!(lcc.f_val(), 1.9550002, epsilon = 1e-7);
        assert_relative_eq!(lcc.rho0(), 1.5071429, epsilon = 1e-7);

        let p = lcc.geo_to_plane(GeoPos2::new(35.0, -75.0)).unwrap();
        assert_relative_eq!(p.x, 0.2966785, epsilon = 1e-7);
        assert_relative_eq!(p.y, 0.2462112, epsilon = 1e-7);
    }

    #[test]
    fn test_reference_point_is_origin() {
        let lcc = conus();
        let p = lcc.geo_to_plane(GeoPos2::new(23.0, -96.0)).unwrap();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    /// Parallel scale factor k = n·ρ / cos(φ) at `lat` on the reference
    /// meridian
    fn parallel_scale(lcc: &LambertConformalConic, lat: f64) -> f64 {
        let p = lcc.geo_to_plane(GeoPos2::new(lat, lcc.reflon())).unwrap();
        lcc.n() * (lcc.rho0() - p.y) / (lat * DEG2RAD).cos()
    }

    #[test]
    fn test_true_scale_on_standard_parallels() {
        let lcc = conus();
        assert_relative_eq!(parallel_scale(&lcc, 33.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(parallel_scale(&lcc, 45.0), 1.0, epsilon = 1e-12);
        // Compressed between the standard parallels
        assert!(parallel_scale(&lcc, 39.0) < 1.0);

        let tangent = LambertConformalConic::new(50.0, 10.0, 40.0, 40.0).unwrap();
        assert_relative_eq!(tangent.n(), (40.0 * DEG2RAD).sin(), epsilon = 1e-15);
        assert_relative_eq!(parallel_scale(&tangent, 40.0), 1.0, epsilon = 1e-12);
        assert!(parallel_scale(&tangent, 50.0) > 1.0);
    }

    #[test]
    fn test_meridians_converge_on_apex() {
        let lcc = conus();
        let apex = Vect2::new(0.0, lcc.rho0());
        let a = lcc.geo_to_plane(GeoPos2::new(30.0, -80.0)).unwrap() - apex;
        let b = lcc.geo_to_plane(GeoPos2::new(50.0, -80.0)).unwrap() - apex;
        assert_relative_eq!(a.cross(&b), 0.0, epsilon = 1e-12);
        // The north pole is the apex itself
        let pole = lcc.geo_to_plane(GeoPos2::new(90.0, 0.0)).unwrap();
        assert_relative_eq!(pole.x, apex.x, epsilon = 1e-9);
        assert_relative_eq!(pole.y, apex.y, epsilon = 1e-9);
    }

    #[test]
    fn test_longitude_wraps_around_reference() {
        let lcc = LambertConformalConic::new(60.0, 170.0, 55.0, 65.0).unwrap();
        let east = lcc.geo_to_plane(GeoPos2::new(60.0, -175.0)).unwrap();
        let west = lcc.geo_to_plane(GeoPos2::new(60.0, 155.0)).unwrap();
        assert!(east.x > 0.0);
        assert_relative_eq!(east.x, -west.x, epsilon = 1e-12);
        assert_relative_eq!(east.y, west.y, epsilon = 1e-12);
    }

    #[test]
    fn test_far_pole_unprojectable() {
        assert_eq!(conus().geo_to_plane(GeoPos2::new(-90.0, 0.0)), None);
    }

    #[test]
    fn test_degenerate_parallels() {
        assert!(matches!(
            LambertConformalConic::new(0.0, 0.0, 0.0, 0.0),
            Err(GeomError::DegenerateInput(_))
        ));
        assert!(matches!(
            LambertConformalConic::new(0.0, 0.0, 30.0, -30.0),
            Err(GeomError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_inverse_unsupported() {
        assert!(matches!(
            conus().plane_to_geo(Vect2::ZERO),
            Err(GeomError::Unsupported(_))
        ));
    }
}
