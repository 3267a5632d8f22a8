//! Angle helpers and reference-frame corrections for the almanac engine.
//!
//! This crate provides:
//! - Degree-based trigonometry with clamped inverse functions
//! - The weighted periodic-series evaluator shared by every position model
//! - Obliquity, nutation, aberration and precession as polynomials in
//!   Julian centuries
//! - Ecliptic → equatorial conversions (declination, right ascension)
//!
//! Every function here takes Julian centuries (or plain angles) as input,
//! so the crate has no notion of time scales.

pub mod aberration;
pub mod angle;
pub mod equatorial;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod series;

pub use aberration::aberration_deg;
pub use angle::{
    angle_from_dms, arccos_deg, arcsin_deg, arctan_deg, cos_deg, mod3, normalize_360,
    normalize_pm180, sin_deg, tan_deg, ARCMIN, ARCSEC,
};
pub use equatorial::{altitude_from_hour_angle, declination_deg, right_ascension_deg};
pub use nutation::nutation_deg;
pub use obliquity::obliquity_deg;
pub use precession::precession_deg;
pub use series::{poly, sum_parallel, sum_series};
