//! ΔT: dynamical time minus universal time.
//!
//! Piecewise polynomial model selected by civil year (Espenak & Meeus
//! fits, as arranged by Reingold & Dershowitz). Outside −499..=2150 the
//! Reingold & Dershowitz long-term parabola applies:
//! `ΔT = −20 s + x² / 41048480`, where `x` is ½ plus the days from
//! 1810-01-01 to January 1 of the year. Adjacent pieces do not meet
//! exactly at their boundary years; the jumps there (about 29 s at
//! 2150/2151) are part of the published model and are kept as-is.

use almanac_frames::poly;

use crate::calendar::{CivilCalendar, Gregorian};
use crate::{DAYS_PER_CENTURY, J2000, Moment};

/// The year-range piece of the ΔT model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeltaTModel {
    /// 2051–2150: parabola blended toward the long-term fallback.
    Y2051,
    /// 2006–2050.
    Y2006,
    /// 1987–2005.
    Y1987,
    /// 1900–1986.
    Y1900,
    /// 1800–1899.
    Y1800,
    /// 1700–1799.
    Y1700,
    /// 1600–1699.
    Y1600,
    /// 500–1599.
    Y500,
    /// −499–499.
    Y0,
    /// Long-term parabola in days since 1810 for every other year.
    Fallback,
}

impl DeltaTModel {
    /// Model piece covering civil `year`.
    pub fn for_year(year: i64) -> Self {
        match year {
            2051..=2150 => Self::Y2051,
            2006..=2050 => Self::Y2006,
            1987..=2005 => Self::Y1987,
            1900..=1986 => Self::Y1900,
            1800..=1899 => Self::Y1800,
            1700..=1799 => Self::Y1700,
            1600..=1699 => Self::Y1600,
            500..=1599 => Self::Y500,
            -499..=499 => Self::Y0,
            _ => Self::Fallback,
        }
    }

    /// ΔT in days for civil `year`, with day counts taken in `calendar`.
    pub fn evaluate<C: CivilCalendar + ?Sized>(self, calendar: &C, year: i64) -> f64 {
        let y = year as f64;
        // Centuries from 1900-01-01 to July 1 of `year`.
        let c = || calendar.date_difference((1900, 1, 1), (year, 7, 1)) as f64 / DAYS_PER_CENTURY;
        match self {
            Self::Y2051 => {
                let u = (y - 1820.0) / 100.0;
                secs(-20.0 + 32.0 * u * u + 0.5628 * (2150.0 - y))
            }
            Self::Y2006 => secs(poly(y - 2000.0, &[62.92, 0.32217, 0.005589])),
            Self::Y1987 => secs(poly(
                y - 2000.0,
                &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
            )),
            // The 1900 and 1800 fits are in days already.
            Self::Y1900 => poly(
                c(),
                &[-0.00002, 0.000297, 0.025184, -0.181133, 0.553040, -0.861938, 0.677066, -0.212591],
            ),
            Self::Y1800 => poly(
                c(),
                &[
                    -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535, 31.332267,
                    38.291999, 28.316289, 11.636204, 2.043794,
                ],
            ),
            Self::Y1700 => secs(poly(
                y - 1700.0,
                &[8.118780842, -0.005092142, 0.003336121, -0.0000266484],
            )),
            Self::Y1600 => secs(poly(y - 1600.0, &[120.0, -0.9808, -0.01532, 0.000140272128])),
            Self::Y500 => secs(poly(
                (y - 1000.0) / 100.0,
                &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073],
            )),
            Self::Y0 => secs(poly(
                y / 100.0,
                &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521],
            )),
            Self::Fallback => {
                let x = 0.5 + calendar.date_difference((1810, 1, 1), (year, 1, 1)) as f64;
                secs(-20.0 + x * x / 41_048_480.0)
            }
        }
    }
}

fn secs(x: f64) -> f64 {
    x / 86_400.0
}

/// ΔT in days at `tee`, using the proleptic Gregorian calendar to find
/// the civil year.
pub fn ephemeris_correction(tee: Moment) -> f64 {
    ephemeris_correction_with(&Gregorian, tee)
}

/// ΔT in days at `tee`, with the civil year taken from `calendar`.
pub fn ephemeris_correction_with<C: CivilCalendar + ?Sized>(calendar: &C, tee: Moment) -> f64 {
    let year = calendar.year_from_fixed(tee.floor() as i64);
    DeltaTModel::for_year(year).evaluate(calendar, year)
}

/// Dynamical time of universal moment `tee`.
pub fn dynamical_from_universal(tee: Moment) -> Moment {
    tee + ephemeris_correction(tee)
}

/// Universal time of dynamical moment `tee`.
pub fn universal_from_dynamical(tee: Moment) -> Moment {
    tee - ephemeris_correction(tee)
}

/// Julian centuries of dynamical time since J2000.0 for universal `tee`.
pub fn julian_centuries(tee: Moment) -> f64 {
    (dynamical_from_universal(tee) - J2000) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_t_seconds(year: i64) -> f64 {
        let tee = Gregorian.fixed_from_date(year, 7, 1) as f64;
        ephemeris_correction(tee) * 86_400.0
    }

    #[test]
    fn model_selection() {
        assert_eq!(DeltaTModel::for_year(2150), DeltaTModel::Y2051);
        assert_eq!(DeltaTModel::for_year(2151), DeltaTModel::Fallback);
        assert_eq!(DeltaTModel::for_year(2050), DeltaTModel::Y2006);
        assert_eq!(DeltaTModel::for_year(1987), DeltaTModel::Y1987);
        assert_eq!(DeltaTModel::for_year(1986), DeltaTModel::Y1900);
        assert_eq!(DeltaTModel::for_year(1899), DeltaTModel::Y1800);
        assert_eq!(DeltaTModel::for_year(1700), DeltaTModel::Y1700);
        assert_eq!(DeltaTModel::for_year(1600), DeltaTModel::Y1600);
        assert_eq!(DeltaTModel::for_year(500), DeltaTModel::Y500);
        assert_eq!(DeltaTModel::for_year(0), DeltaTModel::Y0);
        assert_eq!(DeltaTModel::for_year(-499), DeltaTModel::Y0);
        assert_eq!(DeltaTModel::for_year(-500), DeltaTModel::Fallback);
    }

    #[test]
    fn known_values() {
        // (year, ΔT seconds, tolerance)
        let cases = [
            (2000, 63.86, 0.5),
            (1900, -2.0, 1.0),
            (1800, 13.7, 1.0),
            (1000, 1574.2, 1.0),
            (0, 10583.6, 1.0),
        ];
        for (year, expected, tol) in cases {
            let dt = delta_t_seconds(year);
            assert!(
                (dt - expected).abs() < tol,
                "ΔT({year}) = {dt:.2}s, expected {expected}s"
            );
        }
    }

    #[test]
    fn long_term_parabola_counts_days_from_1810() {
        assert!((delta_t_seconds(2200) - 474.31).abs() < 0.05, "{}", delta_t_seconds(2200));
        assert!((delta_t_seconds(2151) - 357.90).abs() < 0.05, "{}", delta_t_seconds(2151));
        // Vertex of the parabola sits half a day before 1810-01-01.
        let vertex = DeltaTModel::Fallback.evaluate(&Gregorian, 1810) * 86_400.0;
        assert!((vertex - (-20.0 + 0.25 / 41_048_480.0)).abs() < 1e-9);
        // 2150 → 2151 leaves the blended parabola for the long-term one.
        let jump = delta_t_seconds(2151) - delta_t_seconds(2150);
        assert!((jump - 29.4).abs() < 1.0, "jump = {jump}s");
    }

    #[test]
    fn modern_era_near_seventy_seconds() {
        let dt = delta_t_seconds(2024);
        assert!(dt > 65.0 && dt < 80.0, "ΔT(2024) = {dt}");
    }

    #[test]
    fn boundary_jump_is_small_but_present() {
        // 1986 → 1987 switches pieces; the jump is well under a second
        let g = Gregorian;
        let before = ephemeris_correction(g.fixed_from_date(1986, 12, 31) as f64);
        let after = ephemeris_correction(g.fixed_from_date(1987, 1, 1) as f64);
        let jump = (after - before) * 86_400.0;
        assert!(jump.abs() < 2.0, "jump = {jump}s");
        assert!(jump != 0.0);
    }

    #[test]
    fn dynamical_universal_inverse() {
        let tee = 738_000.3;
        let back = universal_from_dynamical(dynamical_from_universal(tee));
        assert!((back - tee).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_j2000() {
        // Universal J2000 is ~64 s before dynamical J2000
        let c = julian_centuries(J2000);
        assert!(c > 0.0 && c < 1e-7, "c = {c}");
    }
}
