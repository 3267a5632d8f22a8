//! Apparent (sundial) time.
//!
//! Apparent solar time differs from local mean time by the equation of
//! time; sundial noon is when the true Sun crosses the meridian.

use almanac_time::{Location, Moment, hours, local_from_universal, universal_from_local};

use crate::solar::equation_of_time;

/// Sundial time from local mean time at `location`.
pub fn apparent_from_local(tee_local: Moment, location: &Location) -> Moment {
    tee_local + equation_of_time(universal_from_local(tee_local, location))
}

/// Local mean time from sundial time at `location`.
pub fn local_from_apparent(tee_apparent: Moment, location: &Location) -> Moment {
    tee_apparent - equation_of_time(universal_from_local(tee_apparent, location))
}

/// Sundial time from universal time at `location`.
pub fn apparent_from_universal(tee_ut: Moment, location: &Location) -> Moment {
    apparent_from_local(local_from_universal(tee_ut, location), location)
}

/// Universal time from sundial time at `location`.
pub fn universal_from_apparent(tee_apparent: Moment, location: &Location) -> Moment {
    universal_from_local(local_from_apparent(tee_apparent, location), location)
}

/// Universal moment of true (sundial) midnight at the start of fixed
/// `date` at `location`.
pub fn midnight(date: i64, location: &Location) -> Moment {
    universal_from_apparent(date as f64, location)
}

/// Universal moment of true (sundial) noon on fixed `date` at `location`.
pub fn midday(date: i64, location: &Location) -> Moment {
    universal_from_apparent(date as f64 + hours(12.0), location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::{CivilCalendar, Gregorian, minutes};

    #[test]
    fn greenwich_noon_tracks_equation_of_time() {
        let greenwich = Location::new(51.4779, 0.0, 46.0, 0.0).unwrap();
        // Early November the sundial runs ~16 minutes fast, so true noon
        // comes ~16 minutes before 12:00 UT.
        let date = Gregorian.fixed_from_date(2024, 11, 3);
        let noon = midday(date, &greenwich);
        let offset = noon - (date as f64 + hours(12.0));
        assert!((offset + minutes(16.4)).abs() < minutes(0.5), "offset = {} min", offset * 1440.0);
    }

    #[test]
    fn apparent_local_roundtrip() {
        let loc = Location::with_zone_hours(40.7, -74.0, 10.0, -5.0).unwrap();
        let tee = Gregorian.fixed_from_date(2024, 5, 1) as f64 + 0.3;
        let back = local_from_apparent(apparent_from_local(tee, &loc), &loc);
        // Equation of time changes by < 30 s/day, so the inverse is close
        assert!((back - tee).abs() < 1e-5, "diff = {}", back - tee);
    }

    #[test]
    fn midnight_precedes_midday_by_half_day() {
        let loc = Location::new(0.0, 100.0, 0.0, 0.0).unwrap();
        let date = Gregorian.fixed_from_date(2024, 7, 1);
        let span = midday(date, &loc) - midnight(date, &loc);
        assert!((span - 0.5).abs() < minutes(0.2), "span = {span}");
    }
}
