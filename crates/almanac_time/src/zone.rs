//! Universal ↔ local mean ↔ standard time.
//!
//! Local mean time is universal time shifted by the observer's longitude
//! (one day per 360°); standard time is universal time shifted by the
//! location's zone offset. All shifts are exact linear inverses.

use crate::location::Location;
use crate::Moment;

/// Offset of local mean time from universal time, in days, for an east
/// longitude in degrees.
pub fn zone_from_longitude(longitude_deg: f64) -> f64 {
    longitude_deg / 360.0
}

pub fn universal_from_local(tee_local: Moment, location: &Location) -> Moment {
    tee_local - zone_from_longitude(location.longitude_deg())
}

pub fn local_from_universal(tee_ut: Moment, location: &Location) -> Moment {
    tee_ut + zone_from_longitude(location.longitude_deg())
}

pub fn standard_from_universal(tee_ut: Moment, location: &Location) -> Moment {
    tee_ut + location.zone_days()
}

pub fn universal_from_standard(tee_std: Moment, location: &Location) -> Moment {
    tee_std - location.zone_days()
}

pub fn standard_from_local(tee_local: Moment, location: &Location) -> Moment {
    standard_from_universal(universal_from_local(tee_local, location), location)
}

pub fn local_from_standard(tee_std: Moment, location: &Location) -> Moment {
    local_from_universal(universal_from_standard(tee_std, location), location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hours;

    fn jerusalem() -> Location {
        Location::with_zone_hours(31.78, 35.24, 740.0, 2.0).unwrap()
    }

    #[test]
    fn longitude_zone() {
        assert_eq!(zone_from_longitude(90.0), 0.25);
        assert_eq!(zone_from_longitude(-90.0), -0.25);
    }

    #[test]
    fn local_is_ahead_east_of_greenwich() {
        let loc = jerusalem();
        let u = 738_000.5;
        let l = local_from_universal(u, &loc);
        assert!((l - u - 35.24 / 360.0).abs() < 1e-9);
        assert!((universal_from_local(l, &loc) - u).abs() < 1e-9);
    }

    #[test]
    fn standard_shift_is_zone() {
        let loc = jerusalem();
        let u = 738_000.5;
        assert!((standard_from_universal(u, &loc) - (u + hours(2.0))).abs() < 1e-9);
    }

    #[test]
    fn local_standard_pair() {
        let loc = jerusalem();
        let s = 738_000.25;
        let l = local_from_standard(s, &loc);
        assert!((standard_from_local(l, &loc) - s).abs() < 1e-9);
        // Jerusalem mean time runs about 21 minutes ahead of zone time
        assert!(l > s);
        assert!((l - s - 0.014_555_6).abs() < 1e-6);
    }
}
