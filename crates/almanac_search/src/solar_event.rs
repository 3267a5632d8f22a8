//! Solar-longitude events: equinoxes, solstices, arbitrary longitudes.

use almanac_ephem::solar_longitude;
use almanac_frames::{normalize_360, normalize_pm180};
use almanac_time::{CivilCalendar, MEAN_TROPICAL_YEAR, Moment};

use crate::error::SearchError;
use crate::root::invert_angular;
use crate::search_types::SearchConfig;
use crate::solar_event_types::Season;

/// Days per degree of mean solar motion.
const SOLAR_RATE: f64 = MEAN_TROPICAL_YEAR / 360.0;

/// Half-width in days of the bracket around the mean-motion estimate.
/// The true Sun runs at most ~2.5 days ahead of or behind the mean.
const SOLAR_WINDOW_DAYS: f64 = 5.0;

/// First moment at or after `tee` (universal) when the solar longitude is
/// `lambda_deg`.
pub fn solar_longitude_after(
    lambda_deg: f64,
    tee: Moment,
    config: &SearchConfig,
) -> Result<Moment, SearchError> {
    let tau = tee + SOLAR_RATE * normalize_360(lambda_deg - solar_longitude(tee));
    let lo = tee.max(tau - SOLAR_WINDOW_DAYS);
    let hi = tau + SOLAR_WINDOW_DAYS;
    invert_angular(solar_longitude, lambda_deg, lo, hi, config)
}

/// Last moment at or before `tee` (universal) when the solar longitude was
/// `lambda_deg`.
pub fn solar_longitude_before(
    lambda_deg: f64,
    tee: Moment,
    config: &SearchConfig,
) -> Result<Moment, SearchError> {
    let tau = tee - SOLAR_RATE * normalize_360(solar_longitude(tee) - lambda_deg);
    let lo = tau - SOLAR_WINDOW_DAYS;
    let hi = tee.min(tau + SOLAR_WINDOW_DAYS);
    invert_angular(solar_longitude, lambda_deg, lo, hi, config)
}

/// Approximate moment at or before `tee` when the solar longitude was
/// `lambda_deg`, from one mean-motion correction step.
///
/// Accurate to a few minutes; cheap enough for calendar arithmetic that
/// only needs the day.
pub fn estimate_prior_solar_longitude(lambda_deg: f64, tee: Moment) -> Moment {
    let tau = tee - SOLAR_RATE * normalize_360(solar_longitude(tee) - lambda_deg);
    let delta = normalize_pm180(solar_longitude(tau) - lambda_deg);
    tee.min(tau - SOLAR_RATE * delta)
}

/// Universal moment at which `season` begins in civil `year` of `calendar`.
pub fn season_in_year<C: CivilCalendar + ?Sized>(
    season: Season,
    year: i64,
    calendar: &C,
    config: &SearchConfig,
) -> Result<Moment, SearchError> {
    let new_year = calendar.fixed_from_date(year, 1, 1) as f64;
    solar_longitude_after(season.longitude_deg(), new_year, config)
}
