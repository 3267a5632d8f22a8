//! Annual aberration of the Sun's apparent longitude.

use crate::angle::cos_deg;

/// Aberration correction to the solar longitude in degrees.
///
/// `c` = Julian centuries of dynamical time since J2000.0. Always close to
/// −20″; the small periodic part follows the Earth's orbital eccentricity.
pub fn aberration_deg(c: f64) -> f64 {
    0.0000974 * cos_deg(177.63 + 35999.01848 * c) - 0.005575
}
