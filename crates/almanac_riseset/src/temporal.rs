//! Temporal (seasonal) hours: the daylight and the night each divided into
//! twelve equal parts, and sundial time read on that scale.

use almanac_time::{Location, Moment, fixed_from_moment, time_from_moment};

use crate::error::RiseSetError;
use crate::riseset_types::RiseSetConfig;
use crate::sun::{sunrise, sunset};

/// Length of one daytime temporal hour on fixed `date`, in days, or `None`
/// when the Sun does not both rise and set.
pub fn daytime_temporal_hour(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Option<f64>, RiseSetError> {
    let rise = sunrise(date, location, config)?.moment();
    let set = sunset(date, location, config)?.moment();
    Ok(rise.zip(set).map(|(r, s)| (s - r) / 12.0))
}

/// Length of one nighttime temporal hour for the night after fixed `date`,
/// in days, or `None` when sunset or the next sunrise does not occur.
pub fn nighttime_temporal_hour(
    date: i64,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Option<f64>, RiseSetError> {
    let set = sunset(date, location, config)?.moment();
    let rise = sunrise(date + 1, location, config)?.moment();
    Ok(set.zip(rise).map(|(s, r)| (r - s) / 12.0))
}

/// Standard time corresponding to sundial (temporal-hour) time `tee`.
///
/// 06:00 on the sundial is sunrise and 18:00 is sunset; the hours between
/// are daytime temporal hours and the rest nighttime ones. `None` when the
/// needed sunrise or sunset does not occur.
pub fn standard_from_sundial(
    tee: Moment,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<Option<Moment>, RiseSetError> {
    let date = fixed_from_moment(tee);
    let hour = 24.0 * time_from_moment(tee);

    let result = if (6.0..=18.0).contains(&hour) {
        let h = daytime_temporal_hour(date, location, config)?;
        let rise = sunrise(date, location, config)?.moment();
        rise.zip(h).map(|(r, h)| r + (hour - 6.0) * h)
    } else if hour < 6.0 {
        let h = nighttime_temporal_hour(date - 1, location, config)?;
        let set = sunset(date - 1, location, config)?.moment();
        set.zip(h).map(|(s, h)| s + (hour + 6.0) * h)
    } else {
        let h = nighttime_temporal_hour(date, location, config)?;
        let set = sunset(date, location, config)?.moment();
        set.zip(h).map(|(s, h)| s + (hour - 18.0) * h)
    };
    Ok(result)
}
