//! Sidereal (star-fixed) ecliptic longitudes.
//!
//! Tropical longitudes are measured from the moving equinox. The sidereal
//! frame fixes its zero at the equinox of a historical epoch, the March
//! equinox of 285 CE as observed from Ujjain, so sidereal longitude is the
//! tropical longitude with the precession accumulated since that epoch
//! removed.

use almanac_ephem::{lunar_longitude, precession, solar_longitude};
use almanac_frames::{angle_from_dms, normalize_360};
use almanac_time::{CivilCalendar, Location, Moment, hours, universal_from_local};
use log::debug;

use crate::error::SearchError;
use crate::search_types::SearchConfig;
use crate::solar_event::solar_longitude_after;

/// Year of the sidereal epoch.
const EPOCH_YEAR: i64 = 285;

/// Ujjain, the traditional prime meridian of Indian astronomy.
pub fn ujjain() -> Result<Location, SearchError> {
    Location::new(
        angle_from_dms(23.0, 9.0, 0.0),
        angle_from_dms(75.0, 46.0, 6.0),
        0.0,
        hours(5.0 + 461.0 / 9000.0),
    )
    .map_err(SearchError::from)
}

/// Offset between the J2000 precession scale and the sidereal zero point.
///
/// Computed once (it needs an equinox search) and then passed by
/// reference wherever sidereal longitudes are wanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealFrame {
    start_deg: f64,
}

impl SiderealFrame {
    /// Build the frame: precession at the March equinox of 285 CE, the
    /// equinox moment being read as Ujjain local time.
    pub fn new<C: CivilCalendar + ?Sized>(
        calendar: &C,
        config: &SearchConfig,
    ) -> Result<Self, SearchError> {
        let new_year = calendar.fixed_from_date(EPOCH_YEAR, 1, 1) as f64;
        let equinox = solar_longitude_after(0.0, new_year, config)?;
        let start_deg = precession(universal_from_local(equinox, &ujjain()?));
        debug!("sidereal frame: start {start_deg:.6}°");
        Ok(Self { start_deg })
    }

    /// Frame with a caller-supplied zero-point offset in degrees.
    pub fn from_start_deg(start_deg: f64) -> Self {
        Self { start_deg: normalize_360(start_deg) }
    }

    /// Zero-point offset in degrees [0, 360).
    pub fn start_deg(&self) -> f64 {
        self.start_deg
    }

    /// Difference between tropical and sidereal longitude at `tee`, degrees.
    pub fn ayanamsha_deg(&self, tee: Moment) -> f64 {
        normalize_360(precession(tee) - self.start_deg)
    }

    /// Sidereal solar longitude at universal `tee`, degrees [0, 360).
    pub fn sidereal_solar_longitude(&self, tee: Moment) -> f64 {
        normalize_360(solar_longitude(tee) - precession(tee) + self.start_deg)
    }

    /// Sidereal lunar longitude at universal `tee`, degrees [0, 360).
    pub fn sidereal_lunar_longitude(&self, tee: Moment) -> f64 {
        normalize_360(lunar_longitude(tee) - precession(tee) + self.start_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::Gregorian;

    fn frame() -> SiderealFrame {
        SiderealFrame::new(&Gregorian, &SearchConfig::default()).unwrap()
    }

    #[test]
    fn start_is_precession_back_to_285() {
        // ~1715 years of general precession at ~50.3″/yr before J2000
        let s = frame().start_deg();
        assert!((s - 336.136).abs() < 0.01, "start = {s}");
    }

    #[test]
    fn ayanamsha_in_2024() {
        let tee = Gregorian.fixed_from_date(2024, 1, 1) as f64;
        let a = frame().ayanamsha_deg(tee);
        assert!((a - 24.199).abs() < 0.01, "ayanamsha = {a}");
    }

    #[test]
    fn sidereal_lags_tropical_by_ayanamsha() {
        let f = frame();
        let tee = Gregorian.fixed_from_date(2024, 4, 14) as f64;
        let diff = normalize_360(solar_longitude(tee) - f.sidereal_solar_longitude(tee));
        assert!((diff - f.ayanamsha_deg(tee)).abs() < 1e-9);
        let diff = normalize_360(lunar_longitude(tee) - f.sidereal_lunar_longitude(tee));
        assert!((diff - f.ayanamsha_deg(tee)).abs() < 1e-9);
    }

    #[test]
    fn explicit_start_normalized() {
        assert_eq!(SiderealFrame::from_start_deg(-10.0).start_deg(), 350.0);
    }
}
