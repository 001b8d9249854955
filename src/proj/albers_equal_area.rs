//! Albers Equal Area Conic projection.
//!
//! Area-preserving conic using `qsfn` from common.rs. The inverse recovers the
//! latitude from q with a fixed number of additive Newton corrections.

use crate::proj::common::{msfn, phi_from_q, qsfn};
use crate::proj::ellipsoid::Spheroid;
use crate::proj::Projection;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlbersEqualArea {
    pub lon0: f64,
    pub lat0: f64,
    pub lat1: f64,
    pub lat2: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

/// Cone constants for a given spheroid.
struct AlbersCone {
    n: f64,
    c: f64,
    rho0: f64,
}

impl AlbersEqualArea {
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
        if self.lat1 == self.lat2 {
            return phi1.sin();
        }
        let phi2 = self.lat2.to_radians();
        let m1 = msfn(phi1, spheroid.e2);
        let m2 = msfn(phi2, spheroid.e2);
        (m1 * m1 - m2 * m2) / (qsfn(phi2, spheroid) - qsfn(phi1, spheroid))
    }

    fn cone(&self, spheroid: &Spheroid) -> AlbersCone {
        let phi1 = self.lat1.to_radians();
        let n = self.cone_constant(spheroid);
        let m1 = msfn(phi1, spheroid.e2);
        let c = m1 * m1 + n * qsfn(phi1, spheroid);
        let rho0 = spheroid.a * (c - n * qsfn(self.lat0.to_radians(), spheroid)).sqrt() / n;
        AlbersCone { n, c, rho0 }
    }
}

impl Projection for AlbersEqualArea {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        let AlbersCone { n, c, rho0 } = self.cone(spheroid);
        let q = qsfn(lat.to_radians(), spheroid);
        let theta = n * (lon - self.lon0).to_radians();
        let rho = spheroid.a * (c - n * q).sqrt() / n;

        let x = rho * theta.sin() + self.false_easting;
        let y = rho0 - rho * theta.cos() + self.false_northing;
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        let AlbersCone { n, c, rho0 } = self.cone(spheroid);
        let x_ = x - self.false_easting;
        let y_ = rho0 - (y - self.false_northing);

        let (xn, yn) = if n < 0.0 { (-x_, -y_) } else { (x_, y_) };

        let rho = (xn * xn + yn * yn).sqrt();
        let theta = xn.atan2(yn);

        let q = (c - (rho * n / spheroid.a).powi(2)) / n;
        let lat = phi_from_q(q, spheroid);

        let lon = self.lon0 + (theta / n).to_degrees();
        (lon, lat.to_degrees())
    }
}
