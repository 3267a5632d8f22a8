//! First visibility of the lunar crescent.
//!
//! Two criteria are provided. Shaukat's tests phase, arc of light and
//! lunar altitude at a simple best-viewing moment shortly after sunset.
//! Yallop's compares the topocentric crescent width with the Moon's
//! altitude above the Sun (ARCV) at Bruin's best time.

use almanac_ephem::{lunar_altitude, lunar_latitude, lunar_parallax, solar_altitude};
use almanac_frames::{arccos_deg, cos_deg, poly, sin_deg};
use almanac_search::{lunar_phase, lunar_phase_at_or_before, next_day};
use almanac_time::{Location, Moment, fixed_from_moment, universal_from_standard};
use log::debug;

use crate::error::RiseSetError;
use crate::moon::moonset;
use crate::riseset_types::{RiseSetConfig, RiseSetResult};
use crate::sun::{dusk, sunset};

/// Solar depression (degrees) at the simple best-viewing moment.
const BEST_VIEW_DEPRESSION_DEG: f64 = 4.5;

/// Yallop's `e` offset separating "easily visible" from "needs optical aid".
const YALLOP_THRESHOLD: f64 = -0.14;

/// Crescent visibility criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CrescentCriterion {
    /// Shaukat: phase in (0°, 90°), arc of light in [10.6°, 90°], lunar
    /// altitude above 4.1° at the simple best view.
    #[default]
    Shaukat,
    /// Yallop's q-test at Bruin's best time.
    Yallop,
}

/// Angular separation of Sun and Moon at `tee`, degrees.
pub fn arc_of_light(tee: Moment) -> f64 {
    arccos_deg(cos_deg(lunar_latitude(tee)) * cos_deg(lunar_phase(tee)))
}

/// Altitude difference between Moon and Sun at `tee`, degrees.
pub fn arcv(tee: Moment, location: &Location) -> f64 {
    lunar_altitude(tee, location) - solar_altitude(tee, location)
}

/// Topocentric semi-diameter of the Moon at `tee`, degrees.
pub fn lunar_semi_diameter(tee: Moment, location: &Location) -> f64 {
    let h = lunar_altitude(tee, location);
    let p = lunar_parallax(tee, location);
    0.27245 * p * (1.0 + sin_deg(h) * sin_deg(p))
}

/// Universal moment to look for the crescent on the evening of fixed
/// `date`: when the Sun is 4.5° below the horizon, or the following
/// midnight if it never gets that low.
pub fn simple_best_view(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Moment, RiseSetError> {
    let best = match dusk(date, location, BEST_VIEW_DEPRESSION_DEG, config)? {
        RiseSetResult::Event(t) => t,
        RiseSetResult::NeverRises | RiseSetResult::NeverSets => date as f64 + 1.0,
    };
    Ok(universal_from_standard(best, location))
}

/// Bruin's best time on the evening of fixed `date`: four ninths of the
/// way from sunset to moonset, in universal time. Falls back to the
/// following midnight when either event is missing.
pub fn bruin_best_view(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Moment, RiseSetError> {
    let sun = sunset(date, location, config)?.moment();
    let moon = moonset(date, location, config)?;
    let best = match sun.zip(moon) {
        Some((s, m)) => 5.0 / 9.0 * s + 4.0 / 9.0 * m,
        None => date as f64 + 1.0,
    };
    Ok(universal_from_standard(best, location))
}

/// Whether the crescent seen on the eve of fixed `date` passes Shaukat's
/// criterion.
pub fn shaukat_criterion(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<bool, RiseSetError> {
    let tee = simple_best_view(date - 1, location, config)?;
    let phase = lunar_phase(tee);
    let h = lunar_altitude(tee, location);
    let arcl = arc_of_light(tee);
    Ok(phase > 0.0 && phase < 90.0 && (10.6..=90.0).contains(&arcl) && h > 4.1)
}

/// Whether the crescent seen on the eve of fixed `date` passes Yallop's
/// q-test (visible to the naked eye or with optical aid).
pub fn yallop_criterion(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<bool, RiseSetError> {
    let tee = bruin_best_view(date - 1, location, config)?;
    let phase = lunar_phase(tee);
    // Crescent width in arcminutes
    let w = 60.0 * lunar_semi_diameter(tee, location) * (1.0 - cos_deg(arc_of_light(tee)));
    let q1 = poly(w, &[11.8371, -6.3226, 0.7319, -0.1018]);
    let v = arcv(tee, location);
    debug!("yallop: W {w:.3}′ ARCV {v:.3}° q {:.3}", (v - q1) / 10.0);
    Ok(phase > 0.0 && phase < 90.0 && v > q1 + YALLOP_THRESHOLD)
}

/// Whether the crescent is visible on the eve of fixed `date` by
/// `criterion`.
pub fn visible_crescent(
    date: i64,
    location: &Location,
    criterion: CrescentCriterion,
    config: &RiseSetConfig,
) -> Result<bool, RiseSetError> {
    match criterion {
        CrescentCriterion::Shaukat => shaukat_criterion(date, location, config),
        CrescentCriterion::Yallop => yallop_criterion(date, location, config),
    }
}

/// Fixed date of the new moon at or before fixed `date`.
fn new_moon_date(date: i64, config: &RiseSetConfig) -> Result<i64, RiseSetError> {
    let moon = lunar_phase_at_or_before(0.0, date as f64, &config.search_config())?;
    Ok(fixed_from_moment(moon))
}

/// Most recent date, at or before fixed `date`, on which the first crescent
/// became visible.
pub fn phasis_on_or_before(
    date: i64,
    location: &Location,
    criterion: CrescentCriterion,
    config: &RiseSetConfig,
) -> Result<i64, RiseSetError> {
    let moon = new_moon_date(date, config)?;
    let age = date - moon;
    let start = if age <= 3 && !visible_crescent(date, location, criterion, config)? {
        // Too young to have been seen yet: go back a month.
        moon - 30
    } else {
        moon
    };
    next_day(start, config.max_scan_days, |d| {
        visible_crescent(d, location, criterion, config)
    })
}

/// First date, at or after fixed `date`, on which a new crescent is
/// visible.
pub fn phasis_on_or_after(
    date: i64,
    location: &Location,
    criterion: CrescentCriterion,
    config: &RiseSetConfig,
) -> Result<i64, RiseSetError> {
    let moon = new_moon_date(date, config)?;
    let age = date - moon;
    let start = if age >= 4 || visible_crescent(date - 1, location, criterion, config)? {
        // This month's crescent is already out: look at the next one.
        moon + 29
    } else {
        date
    };
    next_day(start, config.max_scan_days, |d| {
        visible_crescent(d, location, criterion, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::{CivilCalendar, Gregorian};

    fn mecca() -> Location {
        Location::with_zone_hours(21.4225, 39.8262, 298.0, 3.0).unwrap()
    }

    #[test]
    fn arc_of_light_near_full_moon() {
        let tee = Gregorian.fixed_from_date(2024, 1, 25) as f64 + 0.5;
        let a = arc_of_light(tee);
        assert!(a > 170.0 && a <= 180.0, "arcl = {a}");
    }

    #[test]
    fn best_view_after_sunset() {
        let config = RiseSetConfig::default();
        let date = Gregorian.fixed_from_date(2024, 1, 12);
        let view = simple_best_view(date, &mecca(), &config).unwrap();
        let set = sunset(date, &mecca(), &config).unwrap().moment().unwrap();
        let set_ut = universal_from_standard(set, &mecca());
        assert!(view > set_ut && view - set_ut < 0.05);
    }

    #[test]
    fn shaukat_sequence_jan_2024() {
        // New moon 2024-01-11 11:57 UT; first seen from Mecca the evening
        // of the 12th, so the 13th is the first visible date.
        let config = RiseSetConfig::default();
        let loc = mecca();
        let d = |day| Gregorian.fixed_from_date(2024, 1, day);
        assert!(!shaukat_criterion(d(12), &loc, &config).unwrap());
        assert!(shaukat_criterion(d(13), &loc, &config).unwrap());
        assert!(shaukat_criterion(d(14), &loc, &config).unwrap());
    }

    #[test]
    fn yallop_agrees_on_clear_cases() {
        let config = RiseSetConfig::default();
        let loc = mecca();
        let d = |day| Gregorian.fixed_from_date(2024, 1, day);
        assert!(!yallop_criterion(d(11), &loc, &config).unwrap());
        assert!(yallop_criterion(d(14), &loc, &config).unwrap());
    }

    #[test]
    fn criteria_dispatch() {
        let config = RiseSetConfig::default();
        let date = Gregorian.fixed_from_date(2024, 1, 14);
        for c in [CrescentCriterion::Shaukat, CrescentCriterion::Yallop] {
            assert!(visible_crescent(date, &mecca(), c, &config).unwrap());
        }
    }
}
