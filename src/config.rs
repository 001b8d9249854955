//! Serializable CRS definitions.
//!
//! A [`CrsConfig`] is the plain-data form of a [`Crs`]: it can be read from
//! JSON or any other serde format and resolved with [`CrsConfig::build`].
//!
//! ```json
//! {
//!   "kind": "projected",
//!   "datum": "OSGB36",
//!   "projection": {
//!     "family": "transverse_mercator",
//!     "lon0": -2.0, "lat0": 49.0, "k0": 0.9996012717,
//!     "false_easting": 400000.0, "false_northing": -100000.0
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ProjError;
use crate::proj::albers_equal_area::AlbersEqualArea;
use crate::proj::crs::{Crs, Geocentric, Geodetic, Projected};
use crate::proj::datum::{GeodeticDatum, Helmert};
use crate::proj::ellipsoid::Spheroid;
use crate::proj::equidistant_conic::EquidistantConic;
use crate::proj::lambert_conformal::{LambertConformalConic1Sp, LambertConformalConic2Sp};
use crate::proj::mercator::{Mercator, WebMercator};
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::MapProjection;

fn unit_scale() -> f64 {
    1.0
}

fn northern() -> bool {
    true
}

/// A CRS definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CrsConfig {
    Geocentric {
        #[serde(default)]
        datum: DatumConfig,
    },
    Geodetic {
        #[serde(default)]
        datum: DatumConfig,
    },
    /// A missing projection means Web Mercator.
    Projected {
        #[serde(default)]
        datum: DatumConfig,
        #[serde(default)]
        projection: Option<ProjectionConfig>,
    },
}

/// A datum given either by name or by its spheroid and TOWGS84 parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatumConfig {
    Named(String),
    Custom {
        semi_major_axis: f64,
        inverse_flattening: f64,
        /// dx, dy, dz (m), rx, ry, rz (arc-seconds), ds (ppm)
        #[serde(default)]
        towgs84: [f64; 7],
    },
}

impl Default for DatumConfig {
    fn default() -> Self {
        Self::Named("WGS84".to_string())
    }
}

/// Map projection parameters. Angles in degrees, offsets in metres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ProjectionConfig {
    WebMercator,
    Mercator {
        #[serde(default)]
        lon0: f64,
        #[serde(default = "unit_scale")]
        k0: f64,
        #[serde(default)]
        false_easting: f64,
        #[serde(default)]
        false_northing: f64,
    },
    TransverseMercator {
        #[serde(default)]
        lon0: f64,
        #[serde(default)]
        lat0: f64,
        #[serde(default = "unit_scale")]
        k0: f64,
        #[serde(default)]
        false_easting: f64,
        #[serde(default)]
        false_northing: f64,
    },
    Utm {
        zone: u8,
        #[serde(default = "northern")]
        northern: bool,
    },
    #[serde(rename = "lambert_conformal_conic_1sp")]
    LambertConformalConic1Sp {
        #[serde(default)]
        lon0: f64,
        lat0: f64,
        #[serde(default = "unit_scale")]
        k0: f64,
        #[serde(default)]
        false_easting: f64,
        #[serde(default)]
        false_northing: f64,
    },
    #[serde(rename = "lambert_conformal_conic_2sp")]
    LambertConformalConic2Sp {
        #[serde(default)]
        lon0: f64,
        #[serde(default)]
        lat0: f64,
        lat1: f64,
        lat2: f64,
        #[serde(default)]
        false_easting: f64,
        #[serde(default)]
        false_northing: f64,
    },
    AlbersEqualArea {
        #[serde(default)]
        lon0: f64,
        #[serde(default)]
        lat0: f64,
        lat1: f64,
        lat2: f64,
        #[serde(default)]
        false_easting: f64,
        #[serde(default)]
        false_northing: f64,
    },
    EquidistantConic {
        #[serde(default)]
        lon0: f64,
        #[serde(default)]
        lat0: f64,
        lat1: f64,
        lat2: f64,
        #[serde(default)]
        false_easting: f64,
        #[serde(default)]
        false_northing: f64,
    },
}

impl CrsConfig {
    /// Resolve names and parameters into a [`Crs`].
    pub fn build(&self) -> Result<Crs, ProjError> {
        let crs = match self {
            Self::Geocentric { datum } => Crs::from(Geocentric {
                datum: datum.build()?,
            }),
            Self::Geodetic { datum } => Crs::from(Geodetic {
                datum: datum.build()?,
            }),
            Self::Projected { datum, projection } => Crs::from(Projected {
                datum: datum.build()?,
                projection: projection.as_ref().map(ProjectionConfig::build).transpose()?,
            }),
        };
        log::debug!("resolved CRS config {self:?} to {crs:?}");
        Ok(crs)
    }
}

impl DatumConfig {
    pub fn build(&self) -> Result<GeodeticDatum, ProjError> {
        match self {
            Self::Named(name) => name.parse(),
            Self::Custom {
                semi_major_axis,
                inverse_flattening,
                towgs84,
            } => {
                if !(semi_major_axis.is_finite() && *semi_major_axis > 0.0) {
                    return Err(ProjError::InvalidParameter(format!(
                        "semi_major_axis must be positive, got {semi_major_axis}"
                    )));
                }
                if !(inverse_flattening.is_finite() && *inverse_flattening >= 0.0) {
                    return Err(ProjError::InvalidParameter(format!(
                        "inverse_flattening must be non-negative, got {inverse_flattening}"
                    )));
                }
                let [dx, dy, dz, rx, ry, rz, ds] = *towgs84;
                Ok(GeodeticDatum::new(
                    Spheroid::new(*semi_major_axis, *inverse_flattening),
                    Helmert::from_towgs84(dx, dy, dz, rx, ry, rz, ds),
                ))
            }
        }
    }
}

impl ProjectionConfig {
    pub fn build(&self) -> Result<MapProjection, ProjError> {
        let projection: MapProjection = match *self {
            Self::WebMercator => WebMercator.into(),
            Self::Mercator {
                lon0,
                k0,
                false_easting,
                false_northing,
            } => Mercator::new(lon0, k0, false_easting, false_northing).into(),
            Self::TransverseMercator {
                lon0,
                lat0,
                k0,
                false_easting,
                false_northing,
            } => TransverseMercator::new(lon0, lat0, k0, false_easting, false_northing).into(),
            Self::Utm { zone, northern } => {
                if !(1..=60).contains(&zone) {
                    return Err(ProjError::InvalidParameter(format!(
                        "UTM zone must be 1..=60, got {zone}"
                    )));
                }
                TransverseMercator::utm(zone, northern).into()
            }
            Self::LambertConformalConic1Sp {
                lon0,
                lat0,
                k0,
                false_easting,
                false_northing,
            } => LambertConformalConic1Sp::new(lon0, lat0, k0, false_easting, false_northing)
                .into(),
            Self::LambertConformalConic2Sp {
                lon0,
                lat0,
                lat1,
                lat2,
                false_easting,
                false_northing,
            } => LambertConformalConic2Sp::new(lon0, lat0, lat1, lat2, false_easting, false_northing)
                .into(),
            Self::AlbersEqualArea {
                lon0,
                lat0,
                lat1,
                lat2,
                false_easting,
                false_northing,
            } => AlbersEqualArea::new(lon0, lat0, lat1, lat2, false_easting, false_northing).into(),
            Self::EquidistantConic {
                lon0,
                lat0,
                lat1,
                lat2,
                false_easting,
                false_northing,
            } => EquidistantConic::new(lon0, lat0, lat1, lat2, false_easting, false_northing).into(),
        };
        Ok(projection)
    }
}

impl TryFrom<&CrsConfig> for Crs {
    type Error = ProjError;

    fn try_from(config: &CrsConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
