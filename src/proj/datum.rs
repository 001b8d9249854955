//! Geodetic datums and the 7-parameter shift into the WGS84 geocentric frame.
//!
//! The shift is the linearised (small-angle) Helmert transform in the
//! position-vector convention:
//!
//!   X' = dx + (1+ds)·( X − rz·Y + ry·Z)
//!   Y' = dy + (1+ds)·( rz·X + Y − rx·Z)
//!   Z' = dz + (1+ds)·(−ry·X + rx·Y + Z)
//!
//! The reverse direction negates all seven parameters. That is an
//! approximation, not the exact matrix inverse.

use std::f64::consts::PI;
use std::str::FromStr;

use crate::error::ProjError;
use crate::proj::ellipsoid::{
    Spheroid, AIRY_1830, BESSEL_1841, GRS80, INTERNATIONAL_1924, WGS84 as WGS84_SPHEROID,
};

const ARCSEC_TO_RAD: f64 = PI / 648_000.0;

/// Helmert parameters relating a datum's geocentric frame to WGS84.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Helmert {
    /// Translations (metres)
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    /// Rotations (radians)
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// Scale difference (unitless, 1e-6 = 1 ppm)
    pub ds: f64,
}

impl Helmert {
    pub const IDENTITY: Helmert = Helmert::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    pub const fn new(dx: f64, dy: f64, dz: f64, rx: f64, ry: f64, rz: f64, ds: f64) -> Self {
        Self {
            dx,
            dy,
            dz,
            rx,
            ry,
            rz,
            ds,
        }
    }

    /// Build from TOWGS84-style values: rotations in arc-seconds, scale in ppm.
    pub const fn from_towgs84(
        dx: f64,
        dy: f64,
        dz: f64,
        rx_arcsec: f64,
        ry_arcsec: f64,
        rz_arcsec: f64,
        ds_ppm: f64,
    ) -> Self {
        Self::new(
            dx,
            dy,
            dz,
            rx_arcsec * ARCSEC_TO_RAD,
            ry_arcsec * ARCSEC_TO_RAD,
            rz_arcsec * ARCSEC_TO_RAD,
            ds_ppm * 1e-6,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    fn negated(&self) -> Self {
        Self::new(
            -self.dx, -self.dy, -self.dz, -self.rx, -self.ry, -self.rz, -self.ds,
        )
    }

    fn apply(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let m = 1.0 + self.ds;
        (
            self.dx + m * (x - self.rz * y + self.ry * z),
            self.dy + m * (self.rz * x + y - self.rx * z),
            self.dz + m * (-self.ry * x + self.rx * y + z),
        )
    }

    /// Datum geocentric → WGS84 geocentric.
    pub fn to_wgs84(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        if self.is_identity() {
            return (x, y, z);
        }
        self.apply(x, y, z)
    }

    /// WGS84 geocentric → datum geocentric.
    pub fn from_wgs84(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        if self.is_identity() {
            return (x, y, z);
        }
        self.negated().apply(x, y, z)
    }
}

/// A reference spheroid plus its relationship to the WGS84 geocentric frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticDatum {
    pub spheroid: Spheroid,
    pub shift: Helmert,
}

impl GeodeticDatum {
    /// The hub datum: WGS84 spheroid, identity shift.
    pub const WGS84: GeodeticDatum = GeodeticDatum::new(WGS84_SPHEROID, Helmert::IDENTITY);
    pub const ETRS89: GeodeticDatum = GeodeticDatum::new(GRS80, Helmert::IDENTITY);
    pub const NAD83: GeodeticDatum = GeodeticDatum::new(GRS80, Helmert::IDENTITY);
    pub const OSGB36: GeodeticDatum = GeodeticDatum::new(
        AIRY_1830,
        Helmert::from_towgs84(446.448, -125.157, 542.06, 0.15, 0.247, 0.842, -20.489),
    );
    pub const DHDN: GeodeticDatum = GeodeticDatum::new(
        BESSEL_1841,
        Helmert::from_towgs84(598.1, 73.7, 418.2, 0.202, 0.045, -2.455, 6.7),
    );
    pub const ED50: GeodeticDatum = GeodeticDatum::new(
        INTERNATIONAL_1924,
        Helmert::from_towgs84(-87.0, -98.0, -121.0, 0.0, 0.0, 0.0, 0.0),
    );

    pub const fn new(spheroid: Spheroid, shift: Helmert) -> Self {
        Self { spheroid, shift }
    }

    pub fn to_wgs84(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        self.shift.to_wgs84(x, y, z)
    }

    pub fn from_wgs84(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        self.shift.from_wgs84(x, y, z)
    }
}

impl Default for GeodeticDatum {
    fn default() -> Self {
        Self::WGS84
    }
}

impl FromStr for GeodeticDatum {
    type Err = ProjError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "wgs84" => Ok(Self::WGS84),
            "etrs89" => Ok(Self::ETRS89),
            "nad83" => Ok(Self::NAD83),
            "osgb36" => Ok(Self::OSGB36),
            "dhdn" | "potsdam" => Ok(Self::DHDN),
            "ed50" => Ok(Self::ED50),
            _ => Err(ProjError::UnknownDatum(name.to_string())),
        }
    }
}
