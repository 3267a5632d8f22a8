//! Solar position model.
//!
//! Apparent geocentric longitude from a 49-term periodic series in Julian
//! centuries (Bretagnon & Simon, as abridged by Meeus and by Reingold &
//! Dershowitz), plus aberration and nutation.

use std::f64::consts::TAU;

use almanac_frames::{
    aberration_deg, cos_deg, declination_deg, normalize_360, nutation_deg, obliquity_deg, poly,
    precession_deg, sin_deg, sum_series, tan_deg,
};
use almanac_time::{Moment, hours, julian_centuries};

/// Series coefficients in units of 1e-7 rad, converted to degrees.
const SERIES_SCALE: f64 = 0.000_005_729_577_951_308_232;

/// Solar longitude series: `[coefficient, addend, multiplier]`, one term
/// `coefficient · sin(addend + multiplier · c)` per row.
#[rustfmt::skip]
static SOLAR_LONGITUDE_TERMS: [[f64; 3]; 49] = [
    [403406.0, 270.54861,      0.9287892],
    [195207.0, 340.19128,  35999.1376958],
    [119433.0,  63.91854,  35999.4089666],
    [112392.0, 331.26220,  35998.7287385],
    [  3891.0, 317.843,    71998.20261],
    [  2819.0,  86.631,    71998.4403],
    [  1721.0, 240.052,    36000.35726],
    [   660.0, 310.26,     71997.4812],
    [   350.0, 247.23,     32964.4678],
    [   334.0, 260.87,       -19.4410],
    [   314.0, 297.82,    445267.1117],
    [   268.0, 343.14,     45036.8840],
    [   242.0, 166.79,         3.1008],
    [   234.0,  81.53,     22518.4434],
    [   158.0,   3.50,       -19.9739],
    [   132.0, 132.75,     65928.9345],
    [   129.0, 182.95,      9038.0293],
    [   114.0, 162.03,      3034.7684],
    [    99.0,  29.8,      33718.148],
    [    93.0, 266.4,       3034.448],
    [    86.0, 249.2,      -2280.773],
    [    78.0, 157.6,      29929.992],
    [    72.0, 257.8,      31556.493],
    [    68.0, 185.1,        149.588],
    [    64.0,  69.9,       9037.750],
    [    46.0,   8.0,     107997.405],
    [    38.0, 197.1,      -4444.176],
    [    37.0, 250.4,        151.771],
    [    32.0,  65.3,      67555.316],
    [    29.0, 162.7,      31556.080],
    [    28.0, 341.5,      -4561.540],
    [    27.0, 291.6,     107996.706],
    [    27.0,  98.5,       1221.655],
    [    25.0, 146.7,      62894.167],
    [    24.0, 110.0,      31437.369],
    [    21.0,   5.2,      14578.298],
    [    21.0, 342.6,     -31931.757],
    [    20.0, 230.9,      34777.243],
    [    18.0, 256.1,       1221.999],
    [    17.0,  45.3,      62894.511],
    [    14.0, 242.9,      -4442.039],
    [    13.0, 115.2,     107997.909],
    [    13.0, 151.8,        119.066],
    [    13.0, 285.3,      16859.071],
    [    12.0,  53.3,         -4.578],
    [    10.0, 126.6,      26895.292],
    [    10.0, 205.7,        -39.127],
    [    10.0,  85.9,      12297.536],
    [    10.0, 146.1,      90073.778],
];

/// Apparent solar longitude in degrees [0, 360) at universal `tee`.
pub fn solar_longitude(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    let periodic = sum_series(&SOLAR_LONGITUDE_TERMS, |&[x, y, z]| x * sin_deg(y + z * c));
    let lambda = 282.777_183_4 + 36_000.769_537_44 * c + SERIES_SCALE * periodic;
    normalize_360(lambda + aberration_deg(c) + nutation_deg(c))
}

/// Mean obliquity of the ecliptic in degrees at universal `tee`.
pub fn obliquity(tee: Moment) -> f64 {
    obliquity_deg(julian_centuries(tee))
}

/// Nutation in longitude in degrees at universal `tee`.
pub fn nutation(tee: Moment) -> f64 {
    nutation_deg(julian_centuries(tee))
}

/// Aberration of the solar longitude in degrees at universal `tee`.
pub fn aberration(tee: Moment) -> f64 {
    aberration_deg(julian_centuries(tee))
}

/// Precession in ecliptic longitude since J2000, degrees [0, 360).
pub fn precession(tee: Moment) -> f64 {
    precession_deg(julian_centuries(tee))
}

/// Declination of the Sun in degrees at universal `tee`.
pub fn solar_declination(tee: Moment) -> f64 {
    declination_deg(obliquity(tee), 0.0, solar_longitude(tee))
}

/// Equation of time (apparent − mean solar time) in days at universal
/// `tee`.
///
/// The value saturates at ±12 hours, keeping its sign; real values stay
/// within about ±17 minutes.
pub fn equation_of_time(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    let lambda = poly(c, &[280.46645, 36000.76983, 0.0003032]);
    let anomaly = poly(c, &[357.52910, 35999.05030, -0.0001559, -0.00000048]);
    let eccentricity = poly(c, &[0.016708617, -0.000042037, -0.0000001236]);
    let epsilon = obliquity(tee);
    let y = tan_deg(epsilon / 2.0).powi(2);

    let equation = (y * sin_deg(2.0 * lambda) - 2.0 * eccentricity * sin_deg(anomaly)
        + 4.0 * eccentricity * y * sin_deg(anomaly) * cos_deg(2.0 * lambda)
        - 0.5 * y * y * sin_deg(4.0 * lambda)
        - 1.25 * eccentricity * eccentricity * sin_deg(2.0 * anomaly))
        / TAU;

    equation.signum() * equation.abs().min(hours(12.0))
}
