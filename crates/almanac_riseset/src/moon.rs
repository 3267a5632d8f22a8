//! Moonrise and moonset by bisection on the observed lunar altitude.
//!
//! The search starts from an estimate built from the Moon's altitude at the
//! start of the day and whether it is waxing or waning, scans a window
//! around the estimate for a horizon crossing and refines it by bisection.
//! When the estimate misses (likely at high latitudes, where the Moon's
//! declination dominates its diurnal arc) the whole civil day is scanned.

use almanac_ephem::observed_lunar_altitude;
use almanac_search::{SearchError, bisect_threshold, lunar_phase};
use almanac_time::{Location, Moment, standard_from_universal, universal_from_standard};
use log::debug;

use crate::error::RiseSetError;
use crate::riseset_types::RiseSetConfig;

/// Find the first false→true flip of `pred` in `[lo, hi]`, scanning in
/// steps of about `step` days and refining by bisection.
fn scan_for_crossing<P>(
    pred: &P,
    lo: Moment,
    hi: Moment,
    step: f64,
    config: &RiseSetConfig,
) -> Result<Option<Moment>, SearchError>
where
    P: Fn(Moment) -> bool,
{
    let steps = ((hi - lo) / step).ceil().max(1.0) as u32;
    let width = (hi - lo) / f64::from(steps);
    let mut a = lo;
    let mut above = pred(lo);
    for k in 1..=steps {
        let b = lo + f64::from(k) * width;
        let now = pred(b);
        if !above && now {
            let search = config.search_config();
            return bisect_threshold(pred, a, b, config.moon_resolution_days, &search).map(Some);
        }
        above = now;
        a = b;
    }
    Ok(None)
}

/// Offset estimate from the Moon's altitude at the start of the day: the
/// altitude as a fraction of its meridian range, a quarter day at most.
fn altitude_offset(tee: Moment, location: &Location) -> f64 {
    let alt = observed_lunar_altitude(tee, location);
    let range = 90.0 - location.latitude_deg().abs();
    if range <= 0.0 {
        return 0.0;
    }
    (alt / (4.0 * range)).clamp(-0.25, 0.25)
}

fn horizon_crossing(
    date: i64,
    location: &Location,
    rising: bool,
    config: &RiseSetConfig,
) -> Result<Option<Moment>, RiseSetError> {
    config.validate().map_err(RiseSetError::InvalidConfig)?;
    let t = universal_from_standard(date as f64, location);
    let phase = lunar_phase(t);
    let offset = altitude_offset(t, location);

    let approx = if rising {
        let waning = phase > 180.0;
        match (waning, offset > 0.0) {
            (true, true) => t + 1.0 - offset,
            (true, false) => t - offset,
            (false, _) => t + 0.5 + offset,
        }
    } else {
        let waxing = phase < 180.0;
        match (waxing, offset > 0.0) {
            (true, true) => t + offset,
            (true, false) => t + 1.0 + offset,
            (false, _) => t + 0.5 - offset,
        }
    };

    let pred = |x: Moment| {
        let h = observed_lunar_altitude(x, location);
        if rising { h > 0.0 } else { h < 0.0 }
    };
    let in_day = |x: &Moment| (t..t + 1.0).contains(x);

    let window = config.moon_window_days;
    let step = config.moon_scan_step_days;
    let mut found = scan_for_crossing(&pred, approx - window, approx + window, step, config)?
        .filter(in_day);
    if found.is_none() {
        debug!("horizon_crossing: estimate missed on {date}, scanning whole day");
        found = scan_for_crossing(&pred, t, t + 1.0, step, config)?.filter(in_day);
    }
    Ok(found.map(|x| standard_from_universal(x, location)))
}

/// Standard time of moonrise on fixed `date`, or `None` when the Moon does
/// not rise that day.
pub fn moonrise(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Option<Moment>, RiseSetError> {
    horizon_crossing(date, location, true, config)
}

/// Standard time of moonset on fixed `date`, or `None` when the Moon does
/// not set that day.
pub fn moonset(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Option<Moment>, RiseSetError> {
    horizon_crossing(date, location, false, config)
}
