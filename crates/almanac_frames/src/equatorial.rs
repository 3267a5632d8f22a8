//! Ecliptic → equatorial conversions and horizon altitude.

use crate::angle::{arcsin_deg, arctan_deg, cos_deg, mod3, sin_deg, tan_deg};

/// Declination in degrees for ecliptic latitude `beta` and longitude
/// `lambda`, given the obliquity `epsilon` (all degrees).
pub fn declination_deg(epsilon: f64, beta: f64, lambda: f64) -> f64 {
    arcsin_deg(sin_deg(beta) * cos_deg(epsilon) + cos_deg(beta) * sin_deg(epsilon) * sin_deg(lambda))
}

/// Right ascension in degrees [0, 360) for ecliptic latitude `beta` and
/// longitude `lambda`, given the obliquity `epsilon`.
pub fn right_ascension_deg(epsilon: f64, beta: f64, lambda: f64) -> f64 {
    arctan_deg(
        sin_deg(lambda) * cos_deg(epsilon) - tan_deg(beta) * sin_deg(epsilon),
        cos_deg(lambda),
    )
}

/// Geocentric altitude in degrees [-180, 180) of a body at declination
/// `delta` and local hour angle `hour_angle` for an observer at `latitude`.
pub fn altitude_from_hour_angle(latitude: f64, delta: f64, hour_angle: f64) -> f64 {
    let alt = arcsin_deg(
        sin_deg(latitude) * sin_deg(delta) + cos_deg(latitude) * cos_deg(delta) * cos_deg(hour_angle),
    );
    mod3(alt, -180.0, 180.0)
}
