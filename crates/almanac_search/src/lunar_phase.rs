//! Lunar phase angle and phase-crossing search.

use almanac_ephem::{lunar_longitude, solar_longitude};
use almanac_frames::normalize_360;
use almanac_time::{MEAN_SYNODIC_MONTH, Moment};
use log::debug;

use crate::error::SearchError;
use crate::lunar_phase_types::{ALL_MOON_PHASES, MoonPhase, MoonPhaseEvent};
use crate::new_moon::nth_new_moon;
use crate::root::invert_angular;
use crate::search_types::SearchConfig;

/// Half-width in days of the bracket around the mean-motion estimate.
const PHASE_WINDOW_DAYS: f64 = 2.0;

/// Lunar phase angle at universal `tee`: lunar minus solar longitude, in
/// degrees [0, 360).
///
/// Near new moon the two series can disagree about which side of 0° the
/// Moon is on; when the longitude difference is more than half a circle
/// away from the mean-month phase measured from the nearest new moon, the
/// mean-month value is used instead.
pub fn lunar_phase(tee: Moment) -> f64 {
    let phi = normalize_360(lunar_longitude(tee) - solar_longitude(tee));
    let t0 = nth_new_moon(0);
    let n = ((tee - t0) / MEAN_SYNODIC_MONTH).round() as i64;
    let phi_prime = 360.0 * ((tee - nth_new_moon(n)) / MEAN_SYNODIC_MONTH).rem_euclid(1.0);
    if (phi - phi_prime).abs() > 180.0 { phi_prime } else { phi }
}

/// First moment at or after `tee` when the lunar phase is `phi_deg`.
pub fn lunar_phase_at_or_after(
    phi_deg: f64,
    tee: Moment,
    config: &SearchConfig,
) -> Result<Moment, SearchError> {
    let tau = tee + MEAN_SYNODIC_MONTH / 360.0 * normalize_360(phi_deg - lunar_phase(tee));
    let lo = tee.max(tau - PHASE_WINDOW_DAYS);
    let hi = tau + PHASE_WINDOW_DAYS;
    invert_angular(lunar_phase, phi_deg, lo, hi, config)
}

/// Last moment at or before `tee` when the lunar phase was `phi_deg`.
pub fn lunar_phase_at_or_before(
    phi_deg: f64,
    tee: Moment,
    config: &SearchConfig,
) -> Result<Moment, SearchError> {
    let tau = tee - MEAN_SYNODIC_MONTH / 360.0 * normalize_360(lunar_phase(tee) - phi_deg);
    let lo = tau - PHASE_WINDOW_DAYS;
    let hi = tee.min(tau + PHASE_WINDOW_DAYS);
    invert_angular(lunar_phase, phi_deg, lo, hi, config)
}

/// Next occurrence of `phase` at or after `tee`.
pub fn next_moon_phase(
    phase: MoonPhase,
    tee: Moment,
    config: &SearchConfig,
) -> Result<MoonPhaseEvent, SearchError> {
    let moment = lunar_phase_at_or_after(phase.angle_deg(), tee, config)?;
    Ok(MoonPhaseEvent { phase, moment })
}

/// Most recent occurrence of `phase` at or before `tee`.
pub fn prev_moon_phase(
    phase: MoonPhase,
    tee: Moment,
    config: &SearchConfig,
) -> Result<MoonPhaseEvent, SearchError> {
    let moment = lunar_phase_at_or_before(phase.angle_deg(), tee, config)?;
    Ok(MoonPhaseEvent { phase, moment })
}

/// Every principal phase in `[start, end)`, in time order.
pub fn search_moon_phases(
    start: Moment,
    end: Moment,
    config: &SearchConfig,
) -> Result<Vec<MoonPhaseEvent>, SearchError> {
    let mut events = Vec::new();
    for phase in ALL_MOON_PHASES {
        let mut cursor = start;
        loop {
            let event = next_moon_phase(phase, cursor, config)?;
            if event.moment >= end {
                break;
            }
            events.push(event);
            // Skip past this crossing; the next one is a month away.
            cursor = event.moment + 1.0;
        }
    }
    events.sort_by(|a, b| a.moment.total_cmp(&b.moment));
    debug!("search_moon_phases: {} events in [{start}, {end})", events.len());
    Ok(events)
}
