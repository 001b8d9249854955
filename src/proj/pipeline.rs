//! CRS-to-CRS transform chain through the WGS84 geocentric hub.
//!
//! Every conversion runs the same four steps:
//! source native → source geocentric → WGS84 → target geocentric → target native.
//! There is no shortcut when both ends share a datum.

use crate::proj::crs::{CoordinateSystem, Crs};
use crate::proj::ellipsoid::Spheroid;

/// Compose the transform from `src` to `dst`.
///
/// Each CRS converts to and from its geocentric frame on its own spheroid.
pub fn transform<S, D>(src: S, dst: D) -> impl Fn(f64, f64, f64) -> (f64, f64, f64)
where
    S: CoordinateSystem,
    D: CoordinateSystem,
{
    let src_spheroid = src.spheroid();
    let dst_spheroid = dst.spheroid();
    move |a, b, c| chain(&src, &src_spheroid, &dst, &dst_spheroid, (a, b, c))
}

/// source native → source geocentric → WGS84 → target geocentric → target native
fn chain<S, D>(
    src: &S,
    src_spheroid: &Spheroid,
    dst: &D,
    dst_spheroid: &Spheroid,
    (a, b, c): (f64, f64, f64),
) -> (f64, f64, f64)
where
    S: CoordinateSystem + ?Sized,
    D: CoordinateSystem + ?Sized,
{
    let (x, y, z) = src.to_xyz(a, b, c, src_spheroid);
    let (x, y, z) = src.to_wgs84(x, y, z);
    let (x, y, z) = dst.from_wgs84(x, y, z);
    dst.from_xyz(x, y, z, dst_spheroid)
}

/// A source/target CRS pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pipeline {
    pub src: Crs,
    pub dst: Crs,
}

impl Pipeline {
    pub fn new(src: impl Into<Crs>, dst: impl Into<Crs>) -> Self {
        let (src, dst) = (src.into(), dst.into());
        log::debug!("building pipeline {src:?} -> {dst:?}");
        Self { src, dst }
    }

    /// Transform a single point from the source CRS to the target CRS.
    ///
    /// Coordinates are in CRS native units: degrees and metres for geodetic,
    /// metres for geocentric and projected.
    pub fn transform(&self, a: f64, b: f64, c: f64) -> (f64, f64, f64) {
        let (src_spheroid, dst_spheroid) = (self.src.spheroid(), self.dst.spheroid());
        chain(&self.src, &src_spheroid, &self.dst, &dst_spheroid, (a, b, c))
    }

    /// The same pair, reversed.
    pub fn inverse(&self) -> Self {
        Self::new(self.dst, self.src)
    }
}
