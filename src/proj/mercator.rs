//! Mercator projection: normal (ellipsoidal) and Web Mercator (EPSG:3857).
//!
//! Normal Mercator (ellipsoidal):
//!   forward: x = a·k₀·(λ - λ₀), y = -a·k₀·ln(tsfn(φ, e))
//!   inverse: λ = λ₀ + x/(a·k₀), φ = phi_from_ts(exp(-y/(a·k₀)), e)
//!
//! Web Mercator (spherical, radius = semi-major axis, flattening ignored):
//!   forward: x = a·λ, y = a·ln(tan(π/4 + φ/2))
//!   inverse: λ = x/a, φ = 2·atan(exp(y/a)) - π/2

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::proj::common::{phi_from_ts, tsfn};
use crate::proj::ellipsoid::Spheroid;
use crate::proj::Projection;

/// Ellipsoidal Mercator projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    pub lon0: f64,
    pub k0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl Mercator {
    pub fn new(lon0: f64, k0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            lon0,
            k0,
            false_easting,
            false_northing,
        }
    }
}

impl Projection for Mercator {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        let ak = spheroid.a * self.k0;
        let x = ak * (lon - self.lon0).to_radians() + self.false_easting;
        // For positive latitudes, tsfn < 1 so -ln(tsfn) > 0 → y > 0
        let y = ak * -tsfn(lat.to_radians(), spheroid.e()).ln() + self.false_northing;
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        let ak = spheroid.a * self.k0;
        let lon = self.lon0 + ((x - self.false_easting) / ak).to_degrees();
        let ts = (-(y - self.false_northing) / ak).exp();
        let lat = phi_from_ts(ts, spheroid.e()).to_degrees();
        (lon, lat)
    }
}

/// Web Mercator projection (EPSG:3857), spherical approximation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebMercator;

impl Projection for WebMercator {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        let x = spheroid.a * lon.to_radians();
        let y = spheroid.a * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        let lon = (x / spheroid.a).to_degrees();
        let lat = (2.0 * (y / spheroid.a).exp().atan() - FRAC_PI_2).to_degrees();
        (lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{Spheroid, CLARKE_1866, WGS84};
    use approx::assert_relative_eq;

    #[test]
    fn test_web_mercator_origin() {
        for spheroid in [WGS84, CLARKE_1866, Spheroid::sphere(6_371_000.0)] {
            let (x, y) = WebMercator.forward(0.0, 0.0, &spheroid);
            assert_relative_eq!(x, 0.0, epsilon = 1e-6);
            assert_relative_eq!(y, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_web_mercator_roundtrip() {
        let cases: &[(f64, f64)] = &[
            (0.0, 0.0),
            (10.0, 45.0),
            (-73.9857, 40.7484), // NYC
            (139.6917, 35.6895), // Tokyo
            (-180.0, 0.0),
            (180.0, 0.0),
            (25.0, -88.5),
        ];
        for &(lon, lat) in cases {
            let (x, y) = WebMercator.forward(lon, lat, &WGS84);
            let (lon2, lat2) = WebMercator.inverse(x, y, &WGS84);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_web_mercator_epsg3857_reference() {
        // (180°, 0°) → (20037508.34, 0)
        let (x, _) = WebMercator.forward(180.0, 0.0, &WGS84);
        assert_relative_eq!(x, 20_037_508.342_789_244, epsilon = 0.01);

        // Paris
        let (x, y) = WebMercator.forward(2.352_222, 48.856_614, &WGS84);
        assert_relative_eq!(x, 261_848.4, epsilon = 0.5);
        assert_relative_eq!(y, 6_250_566.6, epsilon = 0.5);
    }

    #[test]
    fn test_web_mercator_ignores_flattening() {
        let sphere = Spheroid::sphere(WGS84.a);
        let a = WebMercator.forward(12.0, 55.0, &WGS84);
        let b = WebMercator.forward(12.0, 55.0, &sphere);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ellipsoidal_mercator_roundtrip() {
        let proj = Mercator::new(0.0, 1.0, 0.0, 0.0);
        let cases: &[(f64, f64)] = &[
            (0.0, 0.0),
            (10.0, 45.0),
            (-73.9857, 40.7484),
            (139.6917, 35.6895),
            (-45.0, -88.9),
            (170.0, 88.9),
        ];
        for &(lon, lat) in cases {
            let (x, y) = proj.forward(lon, lat, &WGS84);
            let (lon2, lat2) = proj.inverse(x, y, &WGS84);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ellipsoidal_mercator_origin() {
        let proj = Mercator::new(0.0, 1.0, 0.0, 0.0);
        let (x, y) = proj.forward(0.0, 0.0, &WGS84);
        assert_relative_eq!(x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ellipsoidal_mercator_false_origin() {
        // World Mercator style parameters with an offset central meridian
        let proj = Mercator::new(110.0, 0.997, 3_900_000.0, 900_000.0);
        let (x, y) = proj.forward(110.0, 0.0, &WGS84);
        assert_relative_eq!(x, 3_900_000.0, epsilon = 1e-6);
        assert_relative_eq!(y, 900_000.0, epsilon = 1e-6);

        let (x, y) = proj.forward(120.0, -7.0, &WGS84);
        let (lon, lat) = proj.inverse(x, y, &WGS84);
        assert_relative_eq!(lon, 120.0, epsilon = 1e-9);
        assert_relative_eq!(lat, -7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ellipsoidal_mercator_known_value() {
        // EPSG:3395 World Mercator at 45°N: y = 5591295.92 m
        let proj = Mercator::new(0.0, 1.0, 0.0, 0.0);
        let (_, y) = proj.forward(0.0, 45.0, &WGS84);
        assert_relative_eq!(y, 5_591_295.92, epsilon = 0.01);
    }
}
