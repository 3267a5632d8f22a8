//! Analytic sun and moon positions.
//!
//! This crate provides:
//! - Apparent solar longitude (49-term series), equation of time, and the
//!   obliquity/nutation/aberration/precession corrections evaluated at a
//!   moment
//! - Sundial (apparent) time conversions built on the equation of time
//! - Lunar mean elements and the 60-term longitude, latitude and distance
//!   series
//! - Geocentric and topocentric lunar altitude, refraction, solar altitude
//!
//! Moments are universal time (days since R.D. 0); the models convert to
//! dynamical Julian centuries internally.

pub mod apparent;
pub mod lunar;
mod lunar_tables;
pub mod solar;
pub mod topocentric;

pub use apparent::{
    apparent_from_local, apparent_from_universal, local_from_apparent, midday, midnight,
    universal_from_apparent,
};
pub use lunar::{
    lunar_anomaly, lunar_diameter, lunar_distance, lunar_elongation, lunar_latitude,
    lunar_longitude, lunar_node, mean_lunar_longitude, moon_node, solar_anomaly,
};
pub use solar::{
    aberration, equation_of_time, nutation, obliquity, precession, solar_declination,
    solar_longitude,
};
pub use topocentric::{
    lunar_altitude, lunar_parallax, observed_lunar_altitude, refraction, solar_altitude,
    topocentric_lunar_altitude,
};
