//! Coordinate conversion between geocentric, geodetic and projected
//! coordinate reference systems, each on its own datum, through a WGS84
//! geocentric hub.

pub mod config;
pub mod error;
pub mod proj;

pub use config::{CrsConfig, DatumConfig, ProjectionConfig};
pub use error::ProjError;
pub use proj::crs::{CoordinateSystem, Crs, Geocentric, Geodetic, Projected};
pub use proj::datum::{GeodeticDatum, Helmert};
pub use proj::ellipsoid::Spheroid;
pub use proj::pipeline::{transform, Pipeline};
pub use proj::{MapProjection, Projection};
