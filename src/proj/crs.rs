//! Coordinate reference systems.
//!
//! Every CRS exposes the same capability set: report its spheroid, shift
//! geocentric coordinates to/from WGS84 with its datum, and convert its native
//! coordinates to/from its geocentric frame against a supplied spheroid. That is
//! all the [`pipeline`](crate::proj::pipeline) needs to chain any two of them.

use crate::proj::datum::GeodeticDatum;
use crate::proj::ellipsoid::Spheroid;
use crate::proj::mercator::WebMercator;
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::{MapProjection, Projection};

/// The capability set shared by all CRS kinds.
pub trait CoordinateSystem {
    fn datum(&self) -> GeodeticDatum;

    /// Native coordinates → geocentric X, Y, Z on `spheroid`.
    fn to_xyz(&self, a: f64, b: f64, c: f64, spheroid: &Spheroid) -> (f64, f64, f64);

    /// Geocentric X, Y, Z on `spheroid` → native coordinates.
    fn from_xyz(&self, x: f64, y: f64, z: f64, spheroid: &Spheroid) -> (f64, f64, f64);

    fn spheroid(&self) -> Spheroid {
        self.datum().spheroid
    }

    fn major_axis(&self) -> f64 {
        self.spheroid().major_axis()
    }

    fn inverse_flattening(&self) -> f64 {
        self.spheroid().inverse_flattening()
    }

    fn to_wgs84(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        self.datum().to_wgs84(x, y, z)
    }

    fn from_wgs84(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        self.datum().from_wgs84(x, y, z)
    }
}

/// Earth-centred Cartesian coordinates (metres).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geocentric {
    pub datum: GeodeticDatum,
}

impl CoordinateSystem for Geocentric {
    fn datum(&self) -> GeodeticDatum {
        self.datum
    }

    fn to_xyz(&self, a: f64, b: f64, c: f64, _spheroid: &Spheroid) -> (f64, f64, f64) {
        (a, b, c)
    }

    fn from_xyz(&self, x: f64, y: f64, z: f64, _spheroid: &Spheroid) -> (f64, f64, f64) {
        (x, y, z)
    }
}

/// Longitude, latitude (degrees) and ellipsoidal height (metres).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geodetic {
    pub datum: GeodeticDatum,
}

impl CoordinateSystem for Geodetic {
    fn datum(&self) -> GeodeticDatum {
        self.datum
    }

    fn to_xyz(&self, lon: f64, lat: f64, h: f64, spheroid: &Spheroid) -> (f64, f64, f64) {
        let (sin_lam, cos_lam) = lon.to_radians().sin_cos();
        let phi = lat.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let n = spheroid.prime_vertical_radius(phi);

        let x = (n + h) * cos_phi * cos_lam;
        let y = (n + h) * cos_phi * sin_lam;
        let z = (n * spheroid.b * spheroid.b / spheroid.a2() + h) * sin_phi;
        (x, y, z)
    }

    /// Closed-form (Bowring) inversion, no iteration.
    fn from_xyz(&self, x: f64, y: f64, z: f64, spheroid: &Spheroid) -> (f64, f64, f64) {
        let (a, b, e2) = (spheroid.a, spheroid.b, spheroid.e2);
        let p = (x * x + y * y).sqrt();
        let t = (z * a / (p * b)).atan();
        let (sin_t, cos_t) = t.sin_cos();
        let phi = ((z + e2 * spheroid.a2() / b * sin_t.powi(3)) / (p - e2 * a * cos_t.powi(3)))
            .atan();
        let h = p / phi.cos() - spheroid.prime_vertical_radius(phi);
        let lam = y.atan2(x);
        (lam.to_degrees(), phi.to_degrees(), h)
    }
}

/// A geodetic CRS viewed through a map projection (easting, northing, height).
///
/// Without an explicit projection, Web Mercator is used.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Projected {
    pub datum: GeodeticDatum,
    pub projection: Option<MapProjection>,
}

impl Projected {
    pub fn new(datum: GeodeticDatum, projection: impl Into<MapProjection>) -> Self {
        Self {
            datum,
            projection: Some(projection.into()),
        }
    }

    /// The effective projection.
    pub fn projection(&self) -> MapProjection {
        self.projection.unwrap_or_default()
    }

    fn geodetic(&self) -> Geodetic {
        Geodetic { datum: self.datum }
    }
}

impl CoordinateSystem for Projected {
    fn datum(&self) -> GeodeticDatum {
        self.datum
    }

    fn to_xyz(&self, east: f64, north: f64, h: f64, spheroid: &Spheroid) -> (f64, f64, f64) {
        let (lon, lat) = self.projection().inverse(east, north, spheroid);
        self.geodetic().to_xyz(lon, lat, h, spheroid)
    }

    fn from_xyz(&self, x: f64, y: f64, z: f64, spheroid: &Spheroid) -> (f64, f64, f64) {
        let (lon, lat, h) = self.geodetic().from_xyz(x, y, z, spheroid);
        let (east, north) = self.projection().forward(lon, lat, spheroid);
        (east, north, h)
    }
}

/// Any coordinate reference system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crs {
    Geocentric(Geocentric),
    Geodetic(Geodetic),
    Projected(Projected),
}

impl Crs {
    pub fn geocentric(datum: GeodeticDatum) -> Self {
        Self::Geocentric(Geocentric { datum })
    }

    pub fn geodetic(datum: GeodeticDatum) -> Self {
        Self::Geodetic(Geodetic { datum })
    }

    pub fn projected(datum: GeodeticDatum, projection: impl Into<MapProjection>) -> Self {
        Self::Projected(Projected::new(datum, projection))
    }

    pub fn web_mercator(datum: GeodeticDatum) -> Self {
        Self::projected(datum, WebMercator)
    }

    pub fn utm(zone: u8, northern: bool, datum: GeodeticDatum) -> Self {
        Self::projected(datum, TransverseMercator::utm(zone, northern))
    }

    /// The composed transform from this CRS into `to`.
    pub fn to(&self, to: &Crs) -> impl Fn(f64, f64, f64) -> (f64, f64, f64) {
        crate::proj::pipeline::transform(*self, *to)
    }

    fn inner(&self) -> &dyn CoordinateSystem {
        match self {
            Self::Geocentric(c) => c,
            Self::Geodetic(c) => c,
            Self::Projected(c) => c,
        }
    }
}

impl Default for Crs {
    fn default() -> Self {
        Self::geodetic(GeodeticDatum::WGS84)
    }
}

impl From<Geocentric> for Crs {
    fn from(c: Geocentric) -> Self {
        Self::Geocentric(c)
    }
}

impl From<Geodetic> for Crs {
    fn from(c: Geodetic) -> Self {
        Self::Geodetic(c)
    }
}

impl From<Projected> for Crs {
    fn from(c: Projected) -> Self {
        Self::Projected(c)
    }
}

impl CoordinateSystem for Crs {
    fn datum(&self) -> GeodeticDatum {
        self.inner().datum()
    }

    fn to_xyz(&self, a: f64, b: f64, c: f64, spheroid: &Spheroid) -> (f64, f64, f64) {
        self.inner().to_xyz(a, b, c, spheroid)
    }

    fn from_xyz(&self, x: f64, y: f64, z: f64, spheroid: &Spheroid) -> (f64, f64, f64) {
        self.inner().from_xyz(x, y, z, spheroid)
    }
}
