//! Two-term nutation in longitude.
//!
//! Only the 18.6-year (lunar node) and half-year (solar) terms are kept;
//! together they reproduce Δψ to about half an arcsecond, well inside the
//! accuracy of the position series that consume it.

use crate::angle::sin_deg;
use crate::series::poly;

/// Nutation in longitude in degrees.
///
/// `c` = Julian centuries of dynamical time since J2000.0.
pub fn nutation_deg(c: f64) -> f64 {
    let cap_a = poly(c, &[124.90, -1934.134, 0.002063]);
    let cap_b = poly(c, &[201.11, 72001.5377, 0.00057]);
    -0.004778 * sin_deg(cap_a) - 0.0003667 * sin_deg(cap_b)
}
