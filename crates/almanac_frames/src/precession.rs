//! General precession in ecliptic longitude.
//!
//! Accumulated motion of the equinox along the ecliptic of date, relative
//! to the fixed J2000 ecliptic. Uses the Lieske (1977) angles as given by
//! Meeus (Astronomical Algorithms, eq. 21.5/21.6).

use crate::angle::{arctan_deg, cos_deg, normalize_360, sin_deg, ARCSEC};
use crate::series::poly;

/// Precession in ecliptic longitude in degrees, normalized to [0, 360).
///
/// `c` = Julian centuries of dynamical time since J2000.0. Dates before
/// J2000 yield values just below 360 (the equinox has not yet moved as far).
pub fn precession_deg(c: f64) -> f64 {
    let eta = normalize_360(poly(
        c,
        &[0.0, 47.0029 * ARCSEC, -0.03302 * ARCSEC, 0.000060 * ARCSEC],
    ));
    let cap_p = normalize_360(poly(c, &[174.876384, -869.8089 * ARCSEC, 0.03536 * ARCSEC]));
    let p = normalize_360(poly(
        c,
        &[0.0, 5029.0966 * ARCSEC, 1.11113 * ARCSEC, 0.000006 * ARCSEC],
    ));
    let cap_a = cos_deg(eta) * sin_deg(cap_p);
    let cap_b = cos_deg(cap_p);
    let arg = arctan_deg(cap_a, cap_b);
    normalize_360(p + cap_p - arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::normalize_pm180;

    #[test]
    fn zero_at_j2000() {
        let p = normalize_pm180(precession_deg(0.0));
        assert!(p.abs() < 1e-9, "p(0) = {p}");
    }

    #[test]
    fn rate_per_century() {
        // ~5029″ per century ≈ 1.397°
        let p = normalize_pm180(precession_deg(1.0));
        assert!((p - 1.397).abs() < 0.01, "p(1) = {p}");
    }

    #[test]
    fn before_j2000_wraps() {
        let p = precession_deg(-1.0);
        assert!(p > 358.0 && p < 360.0, "p(-1) = {p}");
    }
}
