//! Horizon coordinates: lunar and solar altitude, parallax, refraction.

use almanac_frames::{
    altitude_from_hour_angle, arccos_deg, arcsin_deg, cos_deg, declination_deg, normalize_360,
    right_ascension_deg, ARCMIN, ARCSEC,
};
use almanac_time::{Location, Moment, sidereal_from_moment};

use crate::lunar::{lunar_distance, lunar_latitude, lunar_longitude};
use crate::solar::{obliquity, solar_longitude};

/// Equatorial radius of the Earth in metres (IAU 1976).
const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_140.0;

/// Mean Earth radius in metres used for the horizon dip.
const EARTH_RADIUS_M: f64 = 6_372_000.0;

/// Geocentric altitude in degrees [-180, 180) of a body at ecliptic
/// `(beta, lambda)` seen from `location` at universal `tee`.
fn altitude_of(tee: Moment, location: &Location, beta: f64, lambda: f64) -> f64 {
    let epsilon = obliquity(tee);
    let alpha = right_ascension_deg(epsilon, beta, lambda);
    let delta = declination_deg(epsilon, beta, lambda);
    let theta0 = sidereal_from_moment(tee);
    let hour_angle = normalize_360(theta0 + location.longitude_deg() - alpha);
    altitude_from_hour_angle(location.latitude_deg(), delta, hour_angle)
}

/// Geocentric altitude of the Moon in degrees [-180, 180), ignoring
/// parallax and refraction.
pub fn lunar_altitude(tee: Moment, location: &Location) -> f64 {
    altitude_of(tee, location, lunar_latitude(tee), lunar_longitude(tee))
}

/// Geocentric altitude of the Sun's centre in degrees [-180, 180).
pub fn solar_altitude(tee: Moment, location: &Location) -> f64 {
    altitude_of(tee, location, 0.0, solar_longitude(tee))
}

/// Lunar parallax in altitude, degrees.
pub fn lunar_parallax(tee: Moment, location: &Location) -> f64 {
    let geo = lunar_altitude(tee, location);
    let sin_pi = EARTH_EQUATORIAL_RADIUS_M / lunar_distance(tee);
    arcsin_deg(sin_pi * cos_deg(geo))
}

/// Topocentric altitude of the Moon in degrees: geocentric altitude less
/// parallax.
pub fn topocentric_lunar_altitude(tee: Moment, location: &Location) -> f64 {
    lunar_altitude(tee, location) - lunar_parallax(tee, location)
}

/// Refraction at the horizon plus horizon dip for the observer's
/// elevation, degrees.
pub fn refraction(location: &Location) -> f64 {
    let h = location.elevation_m().max(0.0);
    let dip = arccos_deg(EARTH_RADIUS_M / (EARTH_RADIUS_M + h));
    34.0 * ARCMIN + dip + 19.0 * ARCSEC * h.sqrt()
}

/// Observed altitude of the Moon's upper limb in degrees: topocentric
/// altitude plus refraction and the mean lunar semi-diameter.
pub fn observed_lunar_altitude(tee: Moment, location: &Location) -> f64 {
    topocentric_lunar_altitude(tee, location) + refraction(location) + 16.0 * ARCMIN
}
