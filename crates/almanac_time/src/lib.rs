//! Time axis, observer locations and time-scale shifts.
//!
//! This crate provides:
//! - The moment convention: `f64` days since R.D. 0, where R.D. 1 is
//!   0001-01-01 (proleptic Gregorian) and the fraction is the time of day
//! - [`Location`], a validated observer position with a standard-time zone
//! - Universal ↔ local ↔ standard time shifts
//! - ΔT (dynamical − universal time) and Julian centuries since J2000
//! - Mean sidereal time
//! - The [`CivilCalendar`] interface and a proleptic [`Gregorian`] calendar

pub mod calendar;
pub mod delta_t;
pub mod error;
pub mod location;
pub mod sidereal;
pub mod zone;

pub use calendar::{CivilCalendar, CivilDate, Gregorian};
pub use delta_t::{
    DeltaTModel, dynamical_from_universal, ephemeris_correction, ephemeris_correction_with,
    julian_centuries, universal_from_dynamical,
};
pub use error::TimeError;
pub use location::Location;
pub use sidereal::sidereal_from_moment;
pub use zone::{
    local_from_standard, local_from_universal, standard_from_local, standard_from_universal,
    universal_from_local, universal_from_standard, zone_from_longitude,
};

/// A point on the continuous time axis: days since R.D. 0.
pub type Moment = f64;

/// J2000.0 (2000-01-01 12:00 TT) as a moment.
pub const J2000: Moment = 730_120.5;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Mean tropical year in days (equinox to equinox).
pub const MEAN_TROPICAL_YEAR: f64 = 365.242_189;

/// Mean synodic month in days (new moon to new moon).
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588_861;

/// Mean sidereal year in days (fixed star to fixed star).
pub const MEAN_SIDEREAL_YEAR: f64 = 365.256_36;

/// `x` hours as a fraction of a day.
pub const fn hours(x: f64) -> f64 {
    x / 24.0
}

/// `x` minutes as a fraction of a day.
pub const fn minutes(x: f64) -> f64 {
    x / 1440.0
}

/// `x` seconds as a fraction of a day.
pub const fn seconds(x: f64) -> f64 {
    x / 86_400.0
}

/// Fixed date (day count) containing `tee`.
pub fn fixed_from_moment(tee: Moment) -> i64 {
    tee.floor() as i64
}

/// Time of day of `tee` as a fraction in [0, 1).
pub fn time_from_moment(tee: Moment) -> f64 {
    tee - tee.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_is_gregorian_noon() {
        let jan1 = Gregorian.fixed_from_date(2000, 1, 1);
        assert_eq!(J2000, jan1 as f64 + hours(12.0));
    }

    #[test]
    fn unit_fractions() {
        assert_eq!(hours(6.0), 0.25);
        assert_eq!(minutes(720.0), 0.5);
        assert_eq!(seconds(43_200.0), 0.5);
    }

    #[test]
    fn moment_split() {
        assert_eq!(fixed_from_moment(738_965.75), 738_965);
        assert!((time_from_moment(738_965.75) - 0.75).abs() < 1e-12);
        assert_eq!(fixed_from_moment(-0.25), -1);
        assert!((time_from_moment(-0.25) - 0.75).abs() < 1e-12);
    }
}
