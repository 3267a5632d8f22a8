//! Root finding and solar/lunar event search.
//!
//! This crate provides:
//! - Bracketed bisection on angular functions and threshold predicates,
//!   plus bounded integer scans, all with explicit iteration budgets
//! - Solar-longitude events: equinoxes, solstices, arbitrary longitudes
//! - The closed-form nth new moon and the lunar phase angle
//! - Phase-crossing search (new, quarter and full moons)
//! - The sidereal reference frame and sidereal longitudes

pub mod error;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod new_moon;
pub mod root;
pub mod search_types;
pub mod sidereal;
pub mod solar_event;
pub mod solar_event_types;

pub use error::SearchError;
pub use lunar_phase::{
    lunar_phase, lunar_phase_at_or_after, lunar_phase_at_or_before, next_moon_phase,
    prev_moon_phase, search_moon_phases,
};
pub use lunar_phase_types::{ALL_MOON_PHASES, MoonPhase, MoonPhaseEvent};
pub use new_moon::{new_moon_at_or_after, new_moon_before, nth_new_moon};
pub use root::{bisect_threshold, final_day, invert_angular, next_day};
pub use search_types::SearchConfig;
pub use sidereal::{SiderealFrame, ujjain};
pub use solar_event::{
    estimate_prior_solar_longitude, season_in_year, solar_longitude_after, solar_longitude_before,
};
pub use solar_event_types::{ALL_SEASONS, Season};
