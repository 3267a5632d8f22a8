//! Sunrise/sunset and twilight by fixed-point iteration on the solar
//! depression angle.
//!
//! For a depression `α` the Sun's hour angle at the event follows from
//! `sin(offset) = tan φ · tan δ + sin α / (cos δ · cos φ)`. Declination is
//! re-evaluated at each new estimate until two successive estimates agree
//! within the configured threshold.

use almanac_ephem::{local_from_apparent, solar_declination};
use almanac_frames::{arcsin_deg, cos_deg, mod3, sin_deg, tan_deg};
use almanac_time::{Location, Moment, hours, standard_from_local, universal_from_local};
use log::{debug, warn};

use crate::error::RiseSetError;
use crate::riseset_types::{ALL_EVENTS, RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Sine of the Sun's hour-angle offset from 6h/18h apparent time when its
/// center is `alpha_deg` below the horizon, using the declination at local
/// moment `tee`.
///
/// Values outside [-1, 1] mean the depression is never reached.
pub fn sine_offset(tee: Moment, location: &Location, alpha_deg: f64) -> f64 {
    let phi = location.latitude_deg();
    let delta = solar_declination(universal_from_local(tee, location));
    tan_deg(phi) * tan_deg(delta) + sin_deg(alpha_deg) / (cos_deg(delta) * cos_deg(phi))
}

/// Classify a sine offset outside [-1, 1].
fn non_occurrence(value: f64) -> Option<RiseSetResult> {
    if value > 1.0 {
        Some(RiseSetResult::NeverSets)
    } else if value < -1.0 {
        Some(RiseSetResult::NeverRises)
    } else {
        None
    }
}

/// One estimate of the local moment on the day of `tee` when the Sun's
/// center is `alpha_deg` below the horizon, in the morning when `early`.
///
/// When the depression is not reached with the declination at `tee`, the
/// declination at midnight (or noon, for negative `alpha_deg`) decides.
pub fn approx_moment_of_depression(
    tee: Moment,
    location: &Location,
    alpha_deg: f64,
    early: bool,
) -> RiseSetResult {
    let first = sine_offset(tee, location, alpha_deg);
    let date = tee.floor();
    let alt = match (alpha_deg >= 0.0, early) {
        (true, true) => date,
        (true, false) => date + 1.0,
        (false, _) => date + hours(12.0),
    };
    let value = if first.abs() > 1.0 {
        sine_offset(alt, location, alpha_deg)
    } else {
        first
    };
    if let Some(none) = non_occurrence(value) {
        return none;
    }

    let offset = mod3(arcsin_deg(value) / 360.0, -0.5, 0.5);
    let apparent = if early {
        date + hours(6.0) - offset
    } else {
        date + hours(18.0) + offset
    };
    RiseSetResult::Event(local_from_apparent(apparent, location))
}

/// Local moment near `approx` when the Sun's center is `alpha_deg` below
/// the horizon, iterated to a fixed point.
pub fn moment_of_depression(
    approx: Moment,
    location: &Location,
    alpha_deg: f64,
    early: bool,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    config.validate().map_err(RiseSetError::InvalidConfig)?;
    let mut estimate = approx;
    for iteration in 0..config.max_iterations {
        match approx_moment_of_depression(estimate, location, alpha_deg, early) {
            RiseSetResult::Event(t) => {
                if (estimate - t).abs() < config.convergence_days {
                    debug!("moment_of_depression: α {alpha_deg:.4} converged in {iteration} iterations");
                    return Ok(RiseSetResult::Event(t));
                }
                estimate = t;
            }
            none => return Ok(none),
        }
    }
    warn!(
        "moment_of_depression: α {alpha_deg:.4} not converged after {} iterations",
        config.max_iterations
    );
    Err(RiseSetError::NoConvergence("moment of depression"))
}

/// Standard time in the morning of fixed `date` when the Sun's center is
/// `alpha_deg` below the horizon.
pub fn dawn(
    date: i64,
    location: &Location,
    alpha_deg: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    let result = moment_of_depression(date as f64 + hours(6.0), location, alpha_deg, true, config)?;
    Ok(result.map(|t| standard_from_local(t, location)))
}

/// Standard time in the evening of fixed `date` when the Sun's center is
/// `alpha_deg` below the horizon.
pub fn dusk(
    date: i64,
    location: &Location,
    alpha_deg: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    let result = moment_of_depression(date as f64 + hours(18.0), location, alpha_deg, false, config)?;
    Ok(result.map(|t| standard_from_local(t, location)))
}

/// Standard time of sunrise on fixed `date`.
pub fn sunrise(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    compute_event(date, location, RiseSetEvent::Sunrise, config)
}

/// Standard time of sunset on fixed `date`.
pub fn sunset(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    compute_event(date, location, RiseSetEvent::Sunset, config)
}

/// Compute a single rise/set or twilight event on fixed `date`.
pub fn compute_event(
    date: i64,
    location: &Location,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, RiseSetError> {
    let alpha = event.depression_deg(location);
    if event.is_rising() {
        dawn(date, location, alpha, config)
    } else {
        dusk(date, location, alpha, config)
    }
}

/// Compute all 8 rise/set events for a day, in [`ALL_EVENTS`] order.
///
/// Each event is computed independently and carries its own result: one
/// that cannot occur is `NeverRises`/`NeverSets`, and one whose iteration
/// fails to settle is `Err(NoConvergence)`, without affecting the others.
/// Only an invalid `config` fails the whole day.
pub fn compute_all_events(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Vec<(RiseSetEvent, Result<RiseSetResult, RiseSetError>)>, RiseSetError> {
    config.validate().map_err(RiseSetError::InvalidConfig)?;
    Ok(ALL_EVENTS
        .iter()
        .map(|&event| (event, compute_event(date, location, event, config)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::{CivilCalendar, Gregorian, minutes};

    fn equator() -> Location {
        Location::new(0.0, 0.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn sine_offset_small_at_equator() {
        let tee = Gregorian.fixed_from_date(2024, 3, 20) as f64 + 0.25;
        let s = sine_offset(tee, &equator(), 0.0);
        assert!(s.abs() < 1e-3, "s = {s}");
    }

    #[test]
    fn sine_offset_beyond_one_in_polar_summer() {
        let svalbard = Location::new(78.2232, 15.6267, 0.0, hours(1.0)).unwrap();
        let tee = Gregorian.fixed_from_date(2024, 6, 21) as f64 + 0.25;
        assert!(sine_offset(tee, &svalbard, 0.8333) > 1.0);
    }

    #[test]
    fn approx_is_near_six_local() {
        let tee = Gregorian.fixed_from_date(2024, 3, 20) as f64 + 0.25;
        match approx_moment_of_depression(tee, &equator(), 0.8333, true) {
            RiseSetResult::Event(t) => assert!((t - tee).abs() < minutes(15.0)),
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn fixed_point_converges() {
        let tee = Gregorian.fixed_from_date(2024, 9, 1) as f64 + 0.25;
        let loc = Location::new(45.0, 10.0, 0.0, 0.0).unwrap();
        let r = moment_of_depression(tee, &loc, 0.8333, true, &RiseSetConfig::default()).unwrap();
        let t = r.moment().unwrap();
        let again = approx_moment_of_depression(t, &loc, 0.8333, true).moment().unwrap();
        assert!((again - t).abs() < minutes(0.5));
    }

    #[test]
    fn iteration_cap_reported() {
        let config = RiseSetConfig {
            max_iterations: 1,
            convergence_days: 1e-12,
            ..RiseSetConfig::default()
        };
        let tee = Gregorian.fixed_from_date(2024, 9, 1) as f64;
        let loc = Location::new(45.0, 10.0, 0.0, 0.0).unwrap();
        let r = moment_of_depression(tee, &loc, 0.8333, true, &config);
        assert!(matches!(r, Err(RiseSetError::NoConvergence(_))));
    }

    #[test]
    fn twilight_events_in_order() {
        let loc = Location::with_zone_hours(40.7128, -74.006, 10.0, -5.0).unwrap();
        let date = Gregorian.fixed_from_date(2024, 3, 20);
        let events = compute_all_events(date, &loc, &RiseSetConfig::default()).unwrap();
        let times: Vec<f64> = events
            .iter()
            .map(|(_, r)| r.as_ref().ok().and_then(|r| r.moment()).unwrap())
            .collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]), "{times:?}");
    }

    #[test]
    fn unsettled_twilight_leaves_other_events_intact() {
        // Polar night breaking up: the Sun never rises, and civil dusk
        // oscillates about the horizon without settling.
        let loc = Location::new(80.0, 20.0, 0.0, 0.0).unwrap();
        let date = Gregorian.fixed_from_date(2024, 2, 5);
        assert_eq!(date, 738_921);
        let config = RiseSetConfig::default();

        let events = compute_all_events(date, &loc, &config).unwrap();
        assert_eq!(events.len(), ALL_EVENTS.len());
        let result_of = |wanted: RiseSetEvent| {
            events.iter().find(|(e, _)| *e == wanted).map(|(_, r)| r.clone()).unwrap()
        };
        assert_eq!(result_of(RiseSetEvent::Sunrise), Ok(RiseSetResult::NeverRises));
        assert!(matches!(
            result_of(RiseSetEvent::CivilDusk),
            Err(RiseSetError::NoConvergence(_))
        ));
        for (event, result) in &events {
            assert_eq!(*result, compute_event(date, &loc, *event, &config), "{event:?}");
        }
    }

    #[test]
    fn invalid_config_fails_the_whole_day() {
        let config = RiseSetConfig {
            max_iterations: 0,
            ..RiseSetConfig::default()
        };
        let date = Gregorian.fixed_from_date(2024, 3, 20);
        assert!(matches!(
            compute_all_events(date, &equator(), &config),
            Err(RiseSetError::InvalidConfig(_))
        ));
    }
}
