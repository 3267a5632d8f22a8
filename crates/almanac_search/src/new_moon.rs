//! New moons: the closed-form nth new moon and bounded neighbour scans.

use almanac_frames::{poly, sin_deg, sum_parallel, sum_series};
use almanac_time::{J2000, MEAN_SYNODIC_MONTH, Moment, universal_from_dynamical};

use crate::error::SearchError;
use crate::lunar_phase::lunar_phase;
use crate::root::{final_day, next_day};
use crate::search_types::SearchConfig;

/// Index of the first new moon after J2000, counting from the first new
/// moon after R.D. 0.
const NEW_MOON_AT_J2000: i64 = 24_724;

/// Mean lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Periodic corrections to the mean new moon (Meeus 49).
/// Columns: [coefficient, power of E, solar anomaly, lunar anomaly, moon argument].
#[rustfmt::skip]
static NEW_MOON_TERMS: [[f64; 5]; 24] = [
    [-0.40720, 0.0,  0.0, 1.0,  0.0],
    [ 0.17241, 1.0,  1.0, 0.0,  0.0],
    [ 0.01608, 0.0,  0.0, 2.0,  0.0],
    [ 0.01039, 0.0,  0.0, 0.0,  2.0],
    [ 0.00739, 1.0, -1.0, 1.0,  0.0],
    [-0.00514, 1.0,  1.0, 1.0,  0.0],
    [ 0.00208, 2.0,  2.0, 0.0,  0.0],
    [-0.00111, 0.0,  0.0, 1.0, -2.0],
    [-0.00057, 0.0,  0.0, 1.0,  2.0],
    [ 0.00056, 1.0,  1.0, 2.0,  0.0],
    [-0.00042, 0.0,  0.0, 3.0,  0.0],
    [ 0.00042, 1.0,  1.0, 0.0,  2.0],
    [ 0.00038, 1.0,  1.0, 0.0, -2.0],
    [-0.00024, 1.0, -1.0, 2.0,  0.0],
    [-0.00007, 0.0,  2.0, 1.0,  0.0],
    [ 0.00004, 0.0,  0.0, 2.0, -2.0],
    [ 0.00004, 0.0,  3.0, 0.0,  0.0],
    [ 0.00003, 0.0,  1.0, 1.0, -2.0],
    [ 0.00003, 0.0,  0.0, 2.0,  2.0],
    [-0.00003, 0.0,  1.0, 1.0,  2.0],
    [ 0.00003, 0.0, -1.0, 1.0,  2.0],
    [-0.00002, 0.0, -1.0, 1.0, -2.0],
    [-0.00002, 0.0,  1.0, 3.0,  0.0],
    [ 0.00002, 0.0,  0.0, 4.0,  0.0],
];

/// Planetary arguments (Meeus 49, A1–A14 less the Venus-independent A1),
/// stored as three aligned columns: argument at k = 0 in degrees, degrees
/// per lunation, amplitude in days.
#[rustfmt::skip]
static ADDITIONAL_PHASE: [f64; 13] = [
    251.88, 251.83, 349.42,  84.66, 141.74, 207.14, 154.84,
     34.52, 207.19, 291.34, 161.72, 239.56, 331.55,
];

#[rustfmt::skip]
static ADDITIONAL_RATE: [f64; 13] = [
     0.016321, 26.651886, 36.412478, 18.206239, 53.303771,  2.453732,  7.306860,
    27.261239,  0.121824,  1.844379, 24.198154, 25.513099,  3.592518,
];

#[rustfmt::skip]
static ADDITIONAL_AMPLITUDE: [f64; 13] = [
    0.000165, 0.000164, 0.000126, 0.000110, 0.000062, 0.000060, 0.000056,
    0.000047, 0.000042, 0.000040, 0.000037, 0.000035, 0.000023,
];

/// Universal moment of the `n`-th new moon, where new moon 0 is the first
/// after R.D. 0 (0001-01-11).
pub fn nth_new_moon(n: i64) -> Moment {
    let k = (n - NEW_MOON_AT_J2000) as f64;
    let c = k / LUNATIONS_PER_CENTURY;
    let approx = J2000
        + poly(
            c,
            &[5.09766, MEAN_SYNODIC_MONTH * LUNATIONS_PER_CENTURY, 0.00015437, -0.000000150, 0.00000000073],
        );
    let e = poly(c, &[1.0, -0.002516, -0.0000074]);
    let solar_anomaly = poly(c, &[2.5534, LUNATIONS_PER_CENTURY * 29.10535670, -0.0000014, -0.00000011]);
    let lunar_anomaly = poly(
        c,
        &[201.5643, 385.81693528 * LUNATIONS_PER_CENTURY, 0.0107582, 0.00001238, -0.000000058],
    );
    let moon_argument = poly(
        c,
        &[160.7108, 390.67050284 * LUNATIONS_PER_CENTURY, -0.0016118, -0.00000227, 0.000000011],
    );
    let omega = poly(c, &[124.7746, -1.56375588 * LUNATIONS_PER_CENTURY, 0.0020672, 0.00000215]);

    let correction = -0.00017 * sin_deg(omega)
        + sum_series(&NEW_MOON_TERMS, |&[v, w, x, y, z]| {
            v * e.powi(w as i32) * sin_deg(x * solar_anomaly + y * lunar_anomaly + z * moon_argument)
        });
    let extra = 0.000325 * sin_deg(poly(c, &[299.77, 132.8475848, -0.009173]));
    let additional = sum_parallel(
        [&ADDITIONAL_PHASE[..], &ADDITIONAL_RATE[..], &ADDITIONAL_AMPLITUDE[..]],
        |[i, j, l]| l * sin_deg(i + j * k),
    );

    universal_from_dynamical(approx + correction + extra + additional)
}

/// Index estimate for the new moon nearest `tee`, from the mean month and
/// the current phase.
fn new_moon_index_estimate(tee: Moment) -> i64 {
    let t0 = nth_new_moon(0);
    ((tee - t0) / MEAN_SYNODIC_MONTH - lunar_phase(tee) / 360.0).round() as i64
}

/// Last new moon strictly before `tee`.
pub fn new_moon_before(tee: Moment, config: &SearchConfig) -> Result<Moment, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let n = new_moon_index_estimate(tee);
    let k = final_day(n - 1, config.max_scan_steps, |k| Ok::<_, SearchError>(nth_new_moon(k) < tee))?;
    Ok(nth_new_moon(k))
}

/// First new moon at or after `tee`.
pub fn new_moon_at_or_after(tee: Moment, config: &SearchConfig) -> Result<Moment, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let n = new_moon_index_estimate(tee);
    let k = next_day(n, config.max_scan_steps, |k| Ok::<_, SearchError>(nth_new_moon(k) >= tee))?;
    Ok(nth_new_moon(k))
}
