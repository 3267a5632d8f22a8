//! Lunar position model.
//!
//! Mean elements and the ELP-2000/82 periodic series as abridged by Meeus
//! (chapter 47). Terms that depend on the solar anomaly M are damped by
//! the eccentricity factor E raised to |multiple of M|, which accounts for
//! the slow decrease of the Earth's orbital eccentricity.

use almanac_frames::{cos_deg, normalize_360, poly, sin_deg, sum_series};
use almanac_time::{Moment, julian_centuries};

use crate::lunar_tables::{LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS};
use crate::solar::nutation;

/// Mean distance term of the distance series, metres.
const MEAN_DISTANCE_M: f64 = 385_000_560.0;

/// Mean longitude of the Moon (referred to the mean equinox of date),
/// degrees [0, 360). `c` = Julian centuries since J2000.0.
pub fn mean_lunar_longitude(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[218.3164477, 481267.88123421, -0.0015786, 1.0 / 538_841.0, -1.0 / 65_194_000.0],
    ))
}

/// Mean elongation of the Moon from the Sun (D), degrees [0, 360).
pub fn lunar_elongation(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[297.8501921, 445267.1114034, -0.0018819, 1.0 / 545_868.0, -1.0 / 113_065_000.0],
    ))
}

/// Mean anomaly of the Sun (M), degrees [0, 360).
pub fn solar_anomaly(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24_490_000.0],
    ))
}

/// Mean anomaly of the Moon (M′), degrees [0, 360).
pub fn lunar_anomaly(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[134.9633964, 477198.8675055, 0.0087414, 1.0 / 69_699.0, -1.0 / 14_712_000.0],
    ))
}

/// Moon's argument of latitude (F), degrees [0, 360).
pub fn moon_node(c: f64) -> f64 {
    normalize_360(poly(
        c,
        &[93.2720950, 483202.0175233, -0.0036539, -1.0 / 3_526_000.0, 1.0 / 863_310_000.0],
    ))
}

/// Eccentricity damping factor for terms containing the solar anomaly.
fn eccentricity_factor(c: f64) -> f64 {
    poly(c, &[1.0, -0.002516, -0.0000074])
}

/// Mean elements at `c`: `(L′, D, M, M′, F, E)`.
fn elements(c: f64) -> (f64, f64, f64, f64, f64, f64) {
    (
        mean_lunar_longitude(c),
        lunar_elongation(c),
        solar_anomaly(c),
        lunar_anomaly(c),
        moon_node(c),
        eccentricity_factor(c),
    )
}

/// Argument `D·d + M·m + M′·m′ + F·f` of a series term.
fn term_argument(row: &[i32], d: f64, m: f64, m_prime: f64, f: f64) -> f64 {
    row[0] as f64 * d + row[1] as f64 * m + row[2] as f64 * m_prime + row[3] as f64 * f
}

/// Geocentric ecliptic longitude of the Moon in degrees [0, 360), referred
/// to the true equinox of date, at universal `tee`.
pub fn lunar_longitude(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    let (l_prime, d, m, m_prime, f, e) = elements(c);

    let correction = sum_series(&LONGITUDE_DISTANCE_TERMS, |row| {
        row[4] as f64 * e.powi(row[1].abs()) * sin_deg(term_argument(row, d, m, m_prime, f))
    }) / 1_000_000.0;
    let venus = 3958.0 / 1_000_000.0 * sin_deg(119.75 + c * 131.849);
    let jupiter = 318.0 / 1_000_000.0 * sin_deg(53.09 + c * 479_264.29);
    let flat_earth = 1962.0 / 1_000_000.0 * sin_deg(l_prime - f);

    normalize_360(l_prime + correction + venus + jupiter + flat_earth + nutation(tee))
}

/// Geocentric ecliptic latitude of the Moon in degrees at universal `tee`.
pub fn lunar_latitude(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    let (l_prime, d, m, m_prime, f, e) = elements(c);

    let beta = sum_series(&LATITUDE_TERMS, |row| {
        row[4] as f64 * e.powi(row[1].abs()) * sin_deg(term_argument(row, d, m, m_prime, f))
    }) / 1_000_000.0;
    let venus = 175.0 / 1_000_000.0
        * (sin_deg(119.75 + c * 131.849 + f) + sin_deg(119.75 + c * 131.849 - f));
    let flat_earth = -2235.0 / 1_000_000.0 * sin_deg(l_prime)
        + 127.0 / 1_000_000.0 * sin_deg(l_prime - m_prime)
        - 115.0 / 1_000_000.0 * sin_deg(l_prime + m_prime);
    let extra = 382.0 / 1_000_000.0 * sin_deg(313.45 + c * 481_266.484);

    beta + venus + flat_earth + extra
}

/// Distance between the centres of Earth and Moon in metres at universal
/// `tee`.
pub fn lunar_distance(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    let (_, d, m, m_prime, f, e) = elements(c);

    let correction = sum_series(&LONGITUDE_DISTANCE_TERMS, |row| {
        row[5] as f64 * e.powi(row[1].abs()) * cos_deg(term_argument(row, d, m, m_prime, f))
    });
    MEAN_DISTANCE_M + correction
}

/// Longitude of the Moon's mean ascending node in degrees [0, 360).
pub fn lunar_node(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    normalize_360(poly(
        c,
        &[125.0445479, -1934.1362891, 0.0020754, 1.0 / 467_441.0, -1.0 / 60_616_000.0],
    ))
}

/// Apparent angular diameter of the Moon in degrees at universal `tee`.
pub fn lunar_diameter(tee: Moment) -> f64 {
    (1_792_367_000.0 / 9.0) / lunar_distance(tee)
}
