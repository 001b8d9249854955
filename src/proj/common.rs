//! Common helpers for projection math (meridian arc, conformal and authalic latitudes).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::ellipsoid::Spheroid;

/// Number of refinement steps used by every iterative inverse.
///
/// There is no convergence test: every inverse performs exactly this many steps.
pub const INVERSE_ITERATIONS: usize = 5;

/// `m(φ) = cosφ / sqrt(1 - e²·sin²φ)`
pub fn msfn(phi: f64, e2: f64) -> f64 {
    let s = phi.sin();
    phi.cos() / (1.0 - e2 * s * s).sqrt()
}

/// `t(φ) = tan(π/4 - φ/2) / ((1 - e·sinφ)/(1 + e·sinφ))^(e/2)`
pub fn tsfn(phi: f64, e: f64) -> f64 {
    let es = e * phi.sin();
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - es) / (1.0 + es)).powf(e / 2.0)
}

/// Recover latitude from `t` (the inverse of [`tsfn`]).
pub fn phi_from_ts(ts: f64, e: f64) -> f64 {
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..INVERSE_ITERATIONS {
        let es = e * phi.sin();
        phi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - es) / (1.0 + es)).powf(e / 2.0)).atan();
    }
    phi
}

/// `1/(2e)·ln((1 - e·sinφ)/(1 + e·sinφ))`, taking its limit `-sinφ` on a sphere.
fn half_log_ratio(sin_phi: f64, e: f64) -> f64 {
    if e == 0.0 {
        return -sin_phi;
    }
    let es = e * sin_phi;
    ((1.0 - es) / (1.0 + es)).ln() / (2.0 * e)
}

/// Authalic `q(φ) = (1 - e²)·(sinφ/(1 - e²sin²φ) - 1/(2e)·ln((1 - e·sinφ)/(1 + e·sinφ)))`
pub fn qsfn(phi: f64, spheroid: &Spheroid) -> f64 {
    let s = phi.sin();
    let e2 = spheroid.e2;
    (1.0 - e2) * (s / (1.0 - e2 * s * s) - half_log_ratio(s, spheroid.e()))
}

/// Recover latitude from `q` (the inverse of [`qsfn`]), starting from `asin(q/2)`.
pub fn phi_from_q(q: f64, spheroid: &Spheroid) -> f64 {
    let e = spheroid.e();
    let e2 = spheroid.e2;
    let mut phi = (q / 2.0).asin();
    for _ in 0..INVERSE_ITERATIONS {
        let s = phi.sin();
        let one_minus = 1.0 - e2 * s * s;
        phi += one_minus * one_minus / (2.0 * phi.cos())
            * (q / (1.0 - e2) - s / one_minus + half_log_ratio(s, e));
    }
    phi
}

/// Meridian arc length from the equator to latitude φ (metres).
pub fn meridian_arc(phi: f64, spheroid: &Spheroid) -> f64 {
    let (e2, e4, e6) = (spheroid.e2, spheroid.e4(), spheroid.e6());
    spheroid.a
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Footpoint latitude: the latitude whose meridian arc is `m` (series inversion, no iteration).
pub fn footpoint_latitude(m: f64, spheroid: &Spheroid) -> f64 {
    let (e2, e4, e6) = (spheroid.e2, spheroid.e4(), spheroid.e6());
    let (ei, ei2, ei3, ei4) = (spheroid.ei(), spheroid.ei2(), spheroid.ei3(), spheroid.ei4());
    let mu = m / (spheroid.a * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));
    mu + (3.0 * ei / 2.0 - 27.0 * ei3 / 32.0) * (2.0 * mu).sin()
        + (21.0 * ei2 / 16.0 - 55.0 * ei4 / 32.0) * (4.0 * mu).sin()
        + (151.0 * ei3 / 96.0) * (6.0 * mu).sin()
        + (1097.0 * ei4 / 512.0) * (8.0 * mu).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::WGS84;
    use approx::assert_relative_eq;

    #[test]
    fn test_meridian_arc_equator() {
        let m = meridian_arc(0.0, &WGS84);
        assert_relative_eq!(m, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_meridian_arc_quadrant() {
        // Equator to pole on WGS84: 10001965.729 m
        let m = meridian_arc(FRAC_PI_2, &WGS84);
        assert_relative_eq!(m, 10_001_965.729, epsilon = 0.01);
    }

    #[test]
    fn test_footpoint_inverts_arc() {
        for deg in [-75.0_f64, -30.0, 0.0, 12.5, 45.0, 60.0, 88.0] {
            let phi = deg.to_radians();
            let back = footpoint_latitude(meridian_arc(phi, &WGS84), &WGS84);
            assert_relative_eq!(back, phi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_conformal_latitude_roundtrip() {
        let e = WGS84.e();
        for deg in [-88.0_f64, -45.0, 0.0, 30.0, 60.0, 88.0] {
            let phi = deg.to_radians();
            assert_relative_eq!(phi_from_ts(tsfn(phi, e), e), phi, epsilon = 1e-11);
        }
    }

    #[test]
    fn test_authalic_latitude_roundtrip() {
        for deg in [-80.0_f64, -45.0, 0.0, 30.0, 60.0, 80.0] {
            let phi = deg.to_radians();
            assert_relative_eq!(phi_from_q(qsfn(phi, &WGS84), &WGS84), phi, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_inverses_run_exactly_five_steps() {
        // f = 1/3 converges slowly enough that a sixth step still moves φ.
        let flat = Spheroid::new(6_378_137.0, 3.0);
        let (e, e2) = (flat.e(), flat.e2);
        assert_eq!(INVERSE_ITERATIONS, 5);

        let ts = tsfn(60.0_f64.to_radians(), e);
        let step_ts = |phi: f64| {
            let es = e * phi.sin();
            FRAC_PI_2 - 2.0 * (ts * ((1.0 - es) / (1.0 + es)).powf(e / 2.0)).atan()
        };
        let start = FRAC_PI_2 - 2.0 * ts.atan();
        let five = step_ts(step_ts(step_ts(step_ts(step_ts(start)))));
        assert_eq!(phi_from_ts(ts, e), five);
        assert!((step_ts(five) - five).abs() > 1e-5);

        let q = qsfn(89.0_f64.to_radians(), &flat);
        let step_q = |phi: f64| {
            let s = phi.sin();
            let one_minus = 1.0 - e2 * s * s;
            phi + one_minus * one_minus / (2.0 * phi.cos())
                * (q / (1.0 - e2) - s / one_minus + half_log_ratio(s, e))
        };
        let start = (q / 2.0).asin();
        let five = step_q(step_q(step_q(step_q(step_q(start)))));
        assert_eq!(phi_from_q(q, &flat), five);
        assert!((step_q(five) - five).abs() > 1e-5);
    }

    #[test]
    fn test_sphere_limits() {
        let sphere = Spheroid::sphere(6_371_000.0);
        let phi = 0.7_f64;
        assert_relative_eq!(qsfn(phi, &sphere), 2.0 * phi.sin(), epsilon = 1e-15);
        assert_relative_eq!(phi_from_q(qsfn(phi, &sphere), &sphere), phi, epsilon = 1e-12);
        assert_relative_eq!(tsfn(phi, 0.0), (FRAC_PI_4 - phi / 2.0).tan());
    }
}
