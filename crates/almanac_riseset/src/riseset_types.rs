//! Types for sunrise/sunset, twilight and moonrise calculations.
//!
//! Provides event types, configuration, and result types used by the
//! rise/set computation modules.

use almanac_ephem::refraction;
use almanac_frames::ARCMIN;
use almanac_search::SearchConfig;
use almanac_time::{Location, Moment, hours, minutes, seconds};

/// Mean angular semi-diameter of the Sun and Moon in degrees (16′).
pub const MEAN_SEMI_DIAMETER_DEG: f64 = 16.0 * ARCMIN;

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Sunrise: upper limb of the Sun at the apparent horizon,
    /// accounting for refraction, horizon dip and solar semi-diameter.
    Sunrise,
    /// Sunset: upper limb disappears below the horizon.
    Sunset,
    /// Civil dawn: Sun center 6 deg below horizon.
    CivilDawn,
    /// Civil dusk: Sun center 6 deg below horizon.
    CivilDusk,
    /// Nautical dawn: Sun center 12 deg below horizon.
    NauticalDawn,
    /// Nautical dusk: Sun center 12 deg below horizon.
    NauticalDusk,
    /// Astronomical dawn: Sun center 18 deg below horizon.
    AstronomicalDawn,
    /// Astronomical dusk: Sun center 18 deg below horizon.
    AstronomicalDusk,
}

/// All eight events in the order they occur on an ordinary day.
pub const ALL_EVENTS: [RiseSetEvent; 8] = [
    RiseSetEvent::AstronomicalDawn,
    RiseSetEvent::NauticalDawn,
    RiseSetEvent::CivilDawn,
    RiseSetEvent::Sunrise,
    RiseSetEvent::Sunset,
    RiseSetEvent::CivilDusk,
    RiseSetEvent::NauticalDusk,
    RiseSetEvent::AstronomicalDusk,
];

impl RiseSetEvent {
    /// Depression angle of the Sun's center below the geometric horizon,
    /// in degrees, as seen from `location`.
    ///
    /// Sunrise/sunset use refraction plus dip for the observer's elevation
    /// plus the mean semi-diameter (50′ at sea level).
    pub fn depression_deg(self, location: &Location) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => refraction(location) + MEAN_SEMI_DIAMETER_DEG,
            Self::CivilDawn | Self::CivilDusk => 6.0,
            Self::NauticalDawn | Self::NauticalDusk => 12.0,
            Self::AstronomicalDawn | Self::AstronomicalDusk => 18.0,
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::CivilDawn => "Civil dawn",
            Self::CivilDusk => "Civil dusk",
            Self::NauticalDawn => "Nautical dawn",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::AstronomicalDusk => "Astronomical dusk",
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Iteration cap for the depression fixed point and for bisection
    /// (default 64).
    pub max_iterations: u32,
    /// Fixed-point convergence threshold in days (default 30 s).
    pub convergence_days: f64,
    /// Half-width of the moonrise/moonset window around the estimate,
    /// in days (default 6 h).
    pub moon_window_days: f64,
    /// Moonrise/moonset resolution in days (default 1 min).
    pub moon_resolution_days: f64,
    /// Step of the coarse scan for a lunar horizon crossing, in days
    /// (default 1 h).
    pub moon_scan_step_days: f64,
    /// Longest day scan when searching for crescent visibility
    /// (default 40 days).
    pub max_scan_days: u32,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            convergence_days: seconds(30.0),
            moon_window_days: hours(6.0),
            moon_resolution_days: minutes(1.0),
            moon_scan_step_days: hours(1.0),
            max_scan_days: 40,
        }
    }
}

impl RiseSetConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        for (value, msg) in [
            (self.convergence_days, "convergence_days must be positive"),
            (self.moon_window_days, "moon_window_days must be positive"),
            (self.moon_resolution_days, "moon_resolution_days must be positive"),
            (self.moon_scan_step_days, "moon_scan_step_days must be positive"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(msg);
            }
        }
        if self.moon_scan_step_days > 2.0 * self.moon_window_days {
            return Err("moon_scan_step_days must not exceed the moon window");
        }
        if self.max_scan_days == 0 {
            return Err("max_scan_days must be > 0");
        }
        Ok(())
    }

    /// Search budgets for the phase and threshold searches used here.
    pub(crate) fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_iterations: self.max_iterations,
            ..SearchConfig::default()
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given moment (standard time of the location).
    Event(Moment),
    /// The Sun stays below the requested depression all day (polar night).
    NeverRises,
    /// The Sun stays above the requested depression all day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// The event moment, if the event occurs.
    pub fn moment(self) -> Option<Moment> {
        match self {
            Self::Event(t) => Some(t),
            Self::NeverRises | Self::NeverSets => None,
        }
    }

    pub(crate) fn map(self, f: impl FnOnce(Moment) -> Moment) -> Self {
        match self {
            Self::Event(t) => Self::Event(f(t)),
            other => other,
        }
    }
}
