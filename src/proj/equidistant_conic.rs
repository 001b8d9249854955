//! Equidistant Conic projection.
//!
//! Distances along meridians are true to scale: ρ = a·G − M(φ), with M the
//! meridian arc. The inverse goes through the footpoint latitude series and
//! does not iterate.

use crate::proj::common::{footpoint_latitude, meridian_arc, msfn};
use crate::proj::ellipsoid::Spheroid;
use crate::proj::Projection;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquidistantConic {
    pub lon0: f64,
    pub lat0: f64,
    pub lat1: f64,
    pub lat2: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

struct EquidistantCone {
    n: f64,
    a_g: f64, // a·G
    rho0: f64,
}

impl EquidistantConic {
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
        spheroid.a * (msfn(phi1, spheroid.e2) - msfn(phi2, spheroid.e2))
            / (meridian_arc(phi2, spheroid) - meridian_arc(phi1, spheroid))
    }

    fn cone(&self, spheroid: &Spheroid) -> EquidistantCone {
        let phi1 = self.lat1.to_radians();
        let n = self.cone_constant(spheroid);
        let g = msfn(phi1, spheroid.e2) / n + meridian_arc(phi1, spheroid) / spheroid.a;
        let a_g = spheroid.a * g;
        let rho0 = a_g - meridian_arc(self.lat0.to_radians(), spheroid);
        EquidistantCone { n, a_g, rho0 }
    }
}

impl Projection for EquidistantConic {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        let EquidistantCone { n, a_g, rho0 } = self.cone(spheroid);
        let rho = a_g - meridian_arc(lat.to_radians(), spheroid);
        let theta = n * (lon - self.lon0).to_radians();

        let x = rho * theta.sin() + self.false_easting;
        let y = rho0 - rho * theta.cos() + self.false_northing;
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        let EquidistantCone { n, a_g, rho0 } = self.cone(spheroid);
        let x_ = x - self.false_easting;
        let y_ = rho0 - (y - self.false_northing);

        let (xn, yn) = if n < 0.0 { (-x_, -y_) } else { (x_, y_) };

        let rho = (xn * xn + yn * yn).sqrt().copysign(n);
        let theta = xn.atan2(yn);

        let lat = footpoint_latitude(a_g - rho, spheroid);
        let lon = self.lon0 + (theta / n).to_degrees();
        (lon, lat.to_degrees())
    }
}
