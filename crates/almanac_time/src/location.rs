//! Observer location.

use crate::error::TimeError;
use crate::hours;

/// Observer position on Earth's surface with its standard-time zone.
///
/// Immutable once built; [`Location::new`] rejects out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    zone_days: f64,
}

impl Location {
    /// Create a location.
    ///
    /// * `latitude_deg`: north positive, in [-90, 90]
    /// * `longitude_deg`: east positive, in (-180, 180]
    /// * `elevation_m`: metres above sea level, ≥ 0
    /// * `zone_days`: standard-time offset from universal time in days
    ///   (hours / 24), at most one day in magnitude
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        zone_days: f64,
    ) -> Result<Self, TimeError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TimeError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || longitude_deg <= -180.0 || longitude_deg > 180.0 {
            return Err(TimeError::InvalidLocation("longitude must be in (-180, 180]"));
        }
        if !elevation_m.is_finite() || elevation_m < 0.0 {
            return Err(TimeError::InvalidLocation("elevation must be >= 0"));
        }
        if !zone_days.is_finite() || zone_days.abs() > 1.0 {
            return Err(TimeError::InvalidLocation("zone offset must be within one day"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            zone_days,
        })
    }

    /// Create a location with the zone offset given in hours.
    pub fn with_zone_hours(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        zone_hours: f64,
    ) -> Result<Self, TimeError> {
        Self::new(latitude_deg, longitude_deg, elevation_m, hours(zone_hours))
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    /// Standard-time offset from universal time in days.
    pub fn zone_days(&self) -> f64 {
        self.zone_days
    }
}
