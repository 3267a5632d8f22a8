//! Mean sidereal time.

use almanac_frames::{normalize_360, poly};

use crate::{DAYS_PER_CENTURY, J2000, Moment};

/// Greenwich mean sidereal time at universal `tee`, as an angle in
/// degrees [0, 360).
///
/// Meeus eq. 12.4, evaluated in universal (not dynamical) centuries.
pub fn sidereal_from_moment(tee: Moment) -> f64 {
    let c = (tee - J2000) / DAYS_PER_CENTURY;
    normalize_360(poly(
        c,
        &[280.46061837, 36525.0 * 360.98564736629, 0.000387933, -1.0 / 38_710_000.0],
    ))
}
