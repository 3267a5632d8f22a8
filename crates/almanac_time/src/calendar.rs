//! Civil calendar interface.
//!
//! The astronomical core only needs two things from a calendar: the day
//! count of a civil date and the civil year containing a day count (plus
//! differences between two dates, derived from the first). [`Gregorian`]
//! supplies them for the proleptic Gregorian calendar, which is what the
//! ΔT models are keyed on.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;

/// Day-count interface to a civil calendar.
///
/// Day counts are fixed dates: R.D. 1 is 0001-01-01 Gregorian.
pub trait CivilCalendar {
    /// Fixed day count of a civil date.
    fn fixed_from_date(&self, year: i64, month: u32, day: u32) -> i64;

    /// Civil year containing a fixed day count.
    fn year_from_fixed(&self, date: i64) -> i64;

    /// Number of days from `from` to `to` (negative if `to` is earlier).
    fn date_difference(&self, from: (i64, u32, u32), to: (i64, u32, u32)) -> i64 {
        self.fixed_from_date(to.0, to.1, to.2) - self.fixed_from_date(from.0, from.1, from.2)
    }
}

/// A civil date: year, month (1–12), day (1–31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl Gregorian {
    pub fn is_leap_year(year: i64) -> bool {
        year.rem_euclid(4) == 0 && !matches!(year.rem_euclid(400), 100 | 200 | 300)
    }

    /// Number of days in `month` of `year`.
    pub fn days_in_month(year: i64, month: u32) -> u32 {
        match month {
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Fixed date of a validated civil date.
    pub fn checked_fixed_from_date(&self, year: i64, month: u32, day: u32) -> Result<i64, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be in 1..=12"));
        }
        if day == 0 || day > Self::days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        Ok(self.fixed_from_date(year, month, day))
    }

    /// Fixed date of January 1 of `year`.
    pub fn new_year(&self, year: i64) -> i64 {
        self.fixed_from_date(year, 1, 1)
    }

    /// Civil date of a fixed day count.
    pub fn date_from_fixed(&self, date: i64) -> CivilDate {
        let year = self.year_from_fixed(date);
        let prior_days = date - self.new_year(year);
        let correction = if date < self.fixed_from_date(year, 3, 1) {
            0
        } else if Self::is_leap_year(year) {
            1
        } else {
            2
        };
        let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u32;
        let day = (date - self.fixed_from_date(year, month, 1) + 1) as u32;
        CivilDate { year, month, day }
    }
}

impl CivilCalendar for Gregorian {
    fn fixed_from_date(&self, year: i64, month: u32, day: u32) -> i64 {
        let y = year - 1;
        let m = month as i64;
        let leap_adjust = if m <= 2 {
            0
        } else if Self::is_leap_year(year) {
            -1
        } else {
            -2
        };
        365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
            + (367 * m - 362).div_euclid(12)
            + leap_adjust
            + day as i64
    }

    fn year_from_fixed(&self, date: i64) -> i64 {
        let d0 = date - 1;
        let n400 = d0.div_euclid(146_097);
        let d1 = d0.rem_euclid(146_097);
        let n100 = d1.div_euclid(36_524);
        let d2 = d1.rem_euclid(36_524);
        let n4 = d2.div_euclid(1_461);
        let d3 = d2.rem_euclid(1_461);
        let n1 = d3.div_euclid(365);
        let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
        if n100 == 4 || n1 == 4 { year } else { year + 1 }
    }
}
