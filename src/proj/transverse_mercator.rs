//! Transverse Mercator projection as a truncated power series.
//!
//! Forward expands in A = (λ - λ₀)·cosφ up to A⁶ on top of the meridian arc;
//! the inverse works from the footpoint latitude and expands in
//! D = x / (N₁·k₀) up to D⁶. Accuracy is bounded by series truncation, which
//! is ample within a UTM zone. There is no iteration.

use crate::proj::common::{footpoint_latitude, meridian_arc};
use crate::proj::ellipsoid::Spheroid;
use crate::proj::Projection;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransverseMercator {
    pub lon0: f64,
    pub lat0: f64,
    pub k0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl TransverseMercator {
    pub fn new(lon0: f64, lat0: f64, k0: f64, false_easting: f64, false_northing: f64) -> Self {
        Self {
            lon0,
            lat0,
            k0,
            false_easting,
            false_northing,
        }
    }

    /// Create a Transverse Mercator for a UTM zone.
    pub fn utm(zone: u8, northern: bool) -> Self {
        let lon0 = f64::from(zone) * 6.0 - 183.0;
        let false_northing = if northern { 0.0 } else { 10_000_000.0 };
        Self::new(lon0, 0.0, 0.9996, 500_000.0, false_northing)
    }
}

impl Projection for TransverseMercator {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        let ep2 = spheroid.ep2;
        let phi = lat.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = sin_phi / cos_phi;

        let n = spheroid.prime_vertical_radius(phi);
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = (lon - self.lon0).to_radians() * cos_phi;
        let m = meridian_arc(phi, spheroid);
        let m0 = meridian_arc(self.lat0.to_radians(), spheroid);

        let x = self.k0
            * n
            * (a + (1.0 - t + c) * a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
            + self.false_easting;
        let y = self.k0
            * (m - m0
                + n * tan_phi
                    * (a * a / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6)
                            / 720.0))
            + self.false_northing;
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        let ep2 = spheroid.ep2;
        let e2 = spheroid.e2;
        let x = x - self.false_easting;
        let y = y - self.false_northing;

        let m = meridian_arc(self.lat0.to_radians(), spheroid) + y / self.k0;
        let phi1 = footpoint_latitude(m, spheroid);
        let (sin1, cos1) = phi1.sin_cos();
        let tan1 = sin1 / cos1;

        let n1 = spheroid.prime_vertical_radius(phi1);
        let t1 = tan1 * tan1;
        let c1 = ep2 * cos1 * cos1;
        let r1 = spheroid.a * (1.0 - e2) / (1.0 - e2 * sin1 * sin1).powf(1.5);
        let d = x / (n1 * self.k0);

        let phi = phi1
            - (n1 * tan1 / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);
        let dlam = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos1;

        (self.lon0 + dlam.to_degrees(), phi.to_degrees())
    }
}
