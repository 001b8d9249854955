//! Lambert Conformal Conic projection, 1SP and 2SP variants.
//!
//! Both variants reduce to the same cone (n, F, ρ₀) and share forward/inverse.
//! Uses `tsfn`, `msfn`, `phi_from_ts` from common.rs.

use crate::proj::common::{msfn, phi_from_ts, tsfn};
use crate::proj::ellipsoid::Spheroid;
use crate::proj::Projection;

/// Lambert Conformal Conic with one standard parallel (the origin latitude) and a scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertConformalConic1Sp {
    pub lon0: f64,
    pub lat0: f64,
    pub k0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

/// Lambert Conformal Conic with two standard parallels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertConformalConic2Sp {
    pub lon0: f64,
    pub lat0: f64,
    pub lat1: f64,
    pub lat2: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl LambertConformalConic1Sp {
    pub fn new(lon0: f64, lat0: f64, k0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            lon0,
            lat0,
            k0,
            false_easting,
            false_northing,
        }
    }

    fn cone(&self, spheroid: &Spheroid) -> LambertCone {
        let phi0 = self.lat0.to_radians();
        let n = phi0.sin();
        let f_val = cone_f(phi0, n, spheroid) * self.k0;
        LambertCone::new(spheroid, self.lon0, phi0, n, f_val)
    }
}

impl LambertConformalConic2Sp {
    pub fn new(
        lon0: f64,
        lat0: f64,
        lat1: f64,
        lat2: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            lon0,
            lat0,
            lat1,
            lat2,
            false_easting,
            false_northing,
        }
    }

    pub(crate) fn cone_constant(&self, spheroid: &Spheroid) -> f64 {
        let phi1 = self.lat1.to_radians();
        let phi2 = self.lat2.to_radians();
        // Tangent cone: the log-difference formula would be 0/0
        if self.lat1 == self.lat2 {
            return phi1.sin();
        }
        let e = spheroid.e();
        let (m1, m2) = (msfn(phi1, spheroid.e2), msfn(phi2, spheroid.e2));
        let (t1, t2) = (tsfn(phi1, e), tsfn(phi2, e));
        (m1.ln() - m2.ln()) / (t1.ln() - t2.ln())
    }

    fn cone(&self, spheroid: &Spheroid) -> LambertCone {
        let n = self.cone_constant(spheroid);
        let f_val = cone_f(self.lat1.to_radians(), n, spheroid);
        LambertCone::new(spheroid, self.lon0, self.lat0.to_radians(), n, f_val)
    }
}

/// F = m(φ)/(n·t(φ)ⁿ) at a standard parallel.
fn cone_f(phi: f64, n: f64, spheroid: &Spheroid) -> f64 {
    msfn(phi, spheroid.e2) / (n * tsfn(phi, spheroid.e()).powf(n))
}

/// The cone constants for a given spheroid.
struct LambertCone {
    a: f64,
    e: f64,
    lon0: f64,
    n: f64,
    f_val: f64, // F
    rho0: f64,  // ρ₀ = a·F·t₀ⁿ
}

impl LambertCone {
    fn new(spheroid: &Spheroid, lon0: f64, phi0: f64, n: f64, f_val: f64) -> Self {
        let e = spheroid.e();
        let rho0 = spheroid.a * f_val * tsfn(phi0, e).powf(n);
        Self {
            a: spheroid.a,
            e,
            lon0,
            n,
            f_val,
            rho0,
        }
    }

    fn forward(&self, lon: f64, lat: f64, false_easting: f64, false_northing: f64) -> (f64, f64) {
        let rho = self.a * self.f_val * tsfn(lat.to_radians(), self.e).powf(self.n);
        let theta = self.n * (lon - self.lon0).to_radians();

        let x = rho * theta.sin() + false_easting;
        let y = self.rho0 - rho * theta.cos() + false_northing;
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64, false_easting: f64, false_northing: f64) -> (f64, f64) {
        let x_ = x - false_easting;
        let y_ = self.rho0 - (y - false_northing);

        // For n < 0, flip signs before computing angle and radius
        let (xn, yn) = if self.n < 0.0 { (-x_, -y_) } else { (x_, y_) };

        let rho = (xn * xn + yn * yn).sqrt().copysign(self.n);
        let theta = xn.atan2(yn); // atan2(x', y'), note the order

        let ts = (rho / (self.a * self.f_val)).powf(1.0 / self.n);
        let lat = phi_from_ts(ts, self.e);
        let lon = self.lon0 + (theta / self.n).to_degrees();

        (lon, lat.to_degrees())
    }
}

impl Projection for LambertConformalConic1Sp {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        self.cone(spheroid)
            .forward(lon, lat, self.false_easting, self.false_northing)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        self.cone(spheroid)
            .inverse(x, y, self.false_easting, self.false_northing)
    }
}

impl Projection for LambertConformalConic2Sp {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        self.cone(spheroid)
            .forward(lon, lat, self.false_easting, self.false_northing)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        self.cone(spheroid)
            .inverse(x, y, self.false_easting, self.false_northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{CLARKE_1866, GRS80, WGS84};
    use approx::assert_relative_eq;

    fn lambert93() -> LambertConformalConic2Sp {
        // RGF93 / Lambert-93 (EPSG:2154)
        LambertConformalConic2Sp::new(3.0, 46.5, 44.0, 49.0, 700_000.0, 6_600_000.0)
    }

    #[test]
    fn test_2sp_roundtrip() {
        let proj = lambert93();
        let cases: &[(f64, f64)] = &[
            (3.0, 46.5),    // origin
            (2.35, 48.86),  // Paris
            (-1.55, 47.22), // Nantes
            (7.75, 48.58),  // Strasbourg
        ];
        for &(lon, lat) in cases {
            let (x, y) = proj.forward(lon, lat, &GRS80);
            let (lon2, lat2) = proj.inverse(x, y, &GRS80);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_lambert93_known_point() {
        // Paris (2.35°E, 48.86°N) lies roughly at (652 km, 6862 km) in Lambert-93
        let (x, y) = lambert93().forward(2.35, 48.86, &GRS80);
        assert!(x > 650_000.0 && x < 654_000.0, "x = {x}");
        assert!(y > 6_860_000.0 && y < 6_864_000.0, "y = {y}");
    }

    #[test]
    fn test_1sp_roundtrip() {
        let proj = LambertConformalConic1Sp::new(0.0, 45.0, 0.9998, 600_000.0, 200_000.0);
        let cases: &[(f64, f64)] = &[(5.0, 48.0), (-3.0, 41.0), (0.0, 45.0), (10.0, 55.0)];
        for &(lon, lat) in cases {
            let (x, y) = proj.forward(lon, lat, &WGS84);
            let (lon2, lat2) = proj.inverse(x, y, &WGS84);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_origin_point() {
        let (x, y) = lambert93().forward(3.0, 46.5, &GRS80);
        assert_relative_eq!(x, 700_000.0, epsilon = 1e-6);
        assert_relative_eq!(y, 6_600_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_us_state_plane_like() {
        // lat1=33°, lat2=45°, lat0=39°, lon0=-96°
        let proj = LambertConformalConic2Sp::new(-96.0, 39.0, 33.0, 45.0, 0.0, 0.0);
        let cases: &[(f64, f64)] = &[
            (-96.0, 39.0),  // origin
            (-74.0, 40.7),  // NYC
            (-87.6, 41.9),  // Chicago
            (-118.2, 34.0), // LA
        ];
        for &(lon, lat) in cases {
            let (x, y) = proj.forward(lon, lat, &CLARKE_1866);
            let (lon2, lat2) = proj.inverse(x, y, &CLARKE_1866);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_southern_cone() {
        // Both parallels south of the equator → n < 0
        let proj = LambertConformalConic2Sp::new(25.0, -23.0, -18.0, -32.0, 0.0, 0.0);
        assert!(proj.cone_constant(&WGS84) < 0.0);
        for &(lon, lat) in &[(25.0, -23.0), (18.5, -33.9), (31.0, -17.8)] {
            let (x, y) = proj.forward(lon, lat, &WGS84);
            let (lon2, lat2) = proj.inverse(x, y, &WGS84);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_equal_parallels_match_1sp() {
        let two = LambertConformalConic2Sp::new(10.0, 45.0, 45.0, 45.0, 1000.0, 2000.0);
        let one = LambertConformalConic1Sp::new(10.0, 45.0, 1.0, 1000.0, 2000.0);

        let n = two.cone_constant(&WGS84);
        assert!(n.is_finite());
        assert_eq!(n, 45.0_f64.to_radians().sin());

        for &(lon, lat) in &[(10.0, 45.0), (3.0, 40.0), (20.0, 60.0)] {
            let a = two.forward(lon, lat, &WGS84);
            let b = one.forward(lon, lat, &WGS84);
            assert!(a.0.is_finite() && a.1.is_finite());
            assert_eq!(a, b);
            assert_eq!(two.inverse(a.0, a.1, &WGS84), one.inverse(b.0, b.1, &WGS84));
        }
    }
}
