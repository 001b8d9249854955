use std::str::FromStr;

use crate::error::ProjError;

/// Reference ellipsoid, defined by its semi-major axis and inverse flattening.
///
/// An inverse flattening of `0.0` encodes a sphere (`f = 0`, `e = 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spheroid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Inverse flattening, `0.0` for a sphere
    pub inv_f: f64,
    /// Flattening: 1 / inv_f
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    pub ep2: f64,
}

impl Spheroid {
    pub const fn new(a: f64, inv_f: f64) -> Self {
        let f = if inv_f == 0.0 { 0.0 } else { 1.0 / inv_f };
        let e2 = 2.0 * f - f * f;
        Self {
            a,
            inv_f,
            f,
            b: a * (1.0 - f),
            e2,
            ep2: e2 / (1.0 - e2),
        }
    }

    pub const fn sphere(radius: f64) -> Self {
        Self::new(radius, 0.0)
    }

    pub fn major_axis(&self) -> f64 {
        self.a
    }

    pub fn inverse_flattening(&self) -> f64 {
        self.inv_f
    }

    pub fn a2(&self) -> f64 {
        self.a * self.a
    }

    /// First eccentricity (computed at runtime, `sqrt` is not const).
    pub fn e(&self) -> f64 {
        self.e2.sqrt()
    }

    pub fn e4(&self) -> f64 {
        self.e2 * self.e2
    }

    pub fn e6(&self) -> f64 {
        self.e2 * self.e2 * self.e2
    }

    /// `e1 = (1 - sqrt(1 - e²)) / (1 + sqrt(1 - e²))`, the expansion parameter of
    /// the footpoint latitude series.
    pub fn ei(&self) -> f64 {
        let r = (1.0 - self.e2).sqrt();
        (1.0 - r) / (1.0 + r)
    }

    pub fn ei2(&self) -> f64 {
        self.ei().powi(2)
    }

    pub fn ei3(&self) -> f64 {
        self.ei().powi(3)
    }

    pub fn ei4(&self) -> f64 {
        self.ei().powi(4)
    }

    /// Prime vertical radius of curvature N(φ).
    pub fn prime_vertical_radius(&self, phi: f64) -> f64 {
        let s = phi.sin();
        self.a / (1.0 - self.e2 * s * s).sqrt()
    }
}

impl Default for Spheroid {
    fn default() -> Self {
        WGS84
    }
}

impl FromStr for Spheroid {
    type Err = ProjError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "wgs84" => Ok(WGS84),
            "grs80" | "grs1980" => Ok(GRS80),
            "airy" | "airy1830" => Ok(AIRY_1830),
            "bessel" | "bessel1841" => Ok(BESSEL_1841),
            "intl" | "international" | "international1924" | "hayford" => {
                Ok(INTERNATIONAL_1924)
            }
            "clrk66" | "clarke1866" => Ok(CLARKE_1866),
            _ => Err(ProjError::UnknownSpheroid(name.to_string())),
        }
    }
}

pub const WGS84: Spheroid = Spheroid::new(6_378_137.0, 298.257_223_563);
pub const GRS80: Spheroid = Spheroid::new(6_378_137.0, 298.257_222_101);
pub const AIRY_1830: Spheroid = Spheroid::new(6_377_563.396, 299.324_964_6);
pub const BESSEL_1841: Spheroid = Spheroid::new(6_377_397.155, 299.152_812_8);
pub const INTERNATIONAL_1924: Spheroid = Spheroid::new(6_378_388.0, 297.0);
pub const CLARKE_1866: Spheroid = Spheroid::new(6_378_206.4, 294.978_698_2);
