//! Sunrise, sunset, twilight, moonrise/moonset and crescent visibility.
//!
//! This crate provides:
//! - Dawn/dusk for any solar depression by fixed-point iteration, with
//!   sunrise/sunset and the civil/nautical/astronomical twilight catalogue
//! - Moonrise/moonset by bisection on the observed lunar altitude
//! - Temporal hours and sundial time
//! - Lunar crescent visibility (Shaukat and Yallop criteria) and the first
//!   date of visibility (phasis)
//!
//! Dates are fixed day numbers; returned moments are standard time of the
//! location unless noted otherwise. A body that does not rise or set is
//! reported as [`RiseSetResult::NeverRises`]/[`RiseSetResult::NeverSets`]
//! or `None`, never as an error.

pub mod error;
pub mod moon;
pub mod riseset_types;
pub mod sun;
pub mod temporal;
pub mod visibility;

pub use error::RiseSetError;
pub use moon::{moonrise, moonset};
pub use riseset_types::{
    ALL_EVENTS, MEAN_SEMI_DIAMETER_DEG, RiseSetConfig, RiseSetEvent, RiseSetResult,
};
pub use sun::{
    approx_moment_of_depression, compute_all_events, compute_event, dawn, dusk,
    moment_of_depression, sine_offset, sunrise, sunset,
};
pub use temporal::{daytime_temporal_hour, nighttime_temporal_hour, standard_from_sundial};
pub use visibility::{
    CrescentCriterion, arc_of_light, arcv, bruin_best_view, lunar_semi_diameter,
    phasis_on_or_after, phasis_on_or_before, shaukat_criterion, simple_best_view,
    visible_crescent, yallop_criterion,
};
