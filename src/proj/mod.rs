pub mod albers_equal_area;
pub mod common;
pub mod crs;
pub mod datum;
pub mod ellipsoid;
pub mod equidistant_conic;
pub mod lambert_conformal;
pub mod mercator;
pub mod pipeline;
pub mod transverse_mercator;

use albers_equal_area::AlbersEqualArea;
use ellipsoid::Spheroid;
use equidistant_conic::EquidistantConic;
use lambert_conformal::{LambertConformalConic1Sp, LambertConformalConic2Sp};
use mercator::{Mercator, WebMercator};
use transverse_mercator::TransverseMercator;

/// Trait for map projections supporting forward and inverse transforms.
///
/// Angles are in degrees, plane coordinates in metres. The spheroid is supplied
/// per call so the same parameters can be evaluated against any ellipsoid.
pub trait Projection: Send + Sync {
    /// Forward: (lon_deg, lat_deg) -> (easting, northing)
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64);

    /// Inverse: (easting, northing) -> (lon_deg, lat_deg)
    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64);
}

/// The closed set of supported projection families.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapProjection {
    WebMercator(WebMercator),
    Mercator(Mercator),
    TransverseMercator(TransverseMercator),
    LambertConformalConic1Sp(LambertConformalConic1Sp),
    LambertConformalConic2Sp(LambertConformalConic2Sp),
    AlbersEqualArea(AlbersEqualArea),
    EquidistantConic(EquidistantConic),
}

impl MapProjection {
    fn as_projection(&self) -> &dyn Projection {
        match self {
            Self::WebMercator(p) => p,
            Self::Mercator(p) => p,
            Self::TransverseMercator(p) => p,
            Self::LambertConformalConic1Sp(p) => p,
            Self::LambertConformalConic2Sp(p) => p,
            Self::AlbersEqualArea(p) => p,
            Self::EquidistantConic(p) => p,
        }
    }
}

impl Default for MapProjection {
    fn default() -> Self {
        Self::WebMercator(WebMercator)
    }
}

impl Projection for MapProjection {
    fn forward(&self, lon: f64, lat: f64, spheroid: &Spheroid) -> (f64, f64) {
        self.as_projection().forward(lon, lat, spheroid)
    }

    fn inverse(&self, x: f64, y: f64, spheroid: &Spheroid) -> (f64, f64) {
        self.as_projection().inverse(x, y, spheroid)
    }
}

macro_rules! impl_from_projection {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for MapProjection {
                fn from(p: $ty) -> Self {
                    Self::$variant(p)
                }
            }
        )*
    };
}

impl_from_projection!(
    WebMercator(WebMercator),
    Mercator(Mercator),
    TransverseMercator(TransverseMercator),
    LambertConformalConic1Sp(LambertConformalConic1Sp),
    LambertConformalConic2Sp(LambertConformalConic2Sp),
    AlbersEqualArea(AlbersEqualArea),
    EquidistantConic(EquidistantConic),
);
