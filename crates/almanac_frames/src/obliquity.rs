//! Mean obliquity of the ecliptic.
//!
//! Laskar-style cubic in Julian centuries, as tabulated by Meeus
//! (Astronomical Algorithms, eq. 22.2).

use crate::angle::{angle_from_dms, ARCSEC};
use crate::series::poly;

/// Mean obliquity of the ecliptic in degrees.
///
/// `c` = Julian centuries of dynamical time since J2000.0.
///
/// ε = 23°26′21.448″ − 46.8150″·c − 0.00059″·c² + 0.001813″·c³
pub fn obliquity_deg(c: f64) -> f64 {
    angle_from_dms(23.0, 26.0, 21.448)
        + poly(
            c,
            &[0.0, -46.8150 * ARCSEC, -0.00059 * ARCSEC, 0.001813 * ARCSEC],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn decreasing_with_time() {
        assert!(obliquity_deg(1.0) < obliquity_deg(0.0));
        // ~47″ per century
        let drop = (obliquity_deg(0.0) - obliquity_deg(1.0)) * 3600.0;
        assert!((drop - 46.8).abs() < 0.1, "drop = {drop}″");
    }
}
