//! Bracketed bisection and bounded day scans.
//!
//! Every search in the engine narrows a bracket `[lo, hi]` that is known to
//! contain exactly one crossing. The bracket is checked before iterating and
//! the loop carries an explicit iteration budget, so a violated assumption
//! surfaces as [`SearchError::NotBracketed`] or [`SearchError::NoConvergence`]
//! instead of a silent endpoint.

use almanac_frames::normalize_pm180;
use almanac_time::Moment;
use log::{debug, warn};

use crate::error::SearchError;
use crate::search_types::SearchConfig;

fn is_ordered(lo: f64, hi: f64) -> bool {
    !lo.is_nan() && !hi.is_nan() && lo <= hi
}

/// Find the moment in `[lo, hi]` where the angular function `f` reaches
/// `target_deg`.
///
/// The residual `f(t) - target_deg` is taken in [-180, 180), so the search
/// is unaffected by the 360° wrap. `f` must be increasing through the target
/// within the bracket: residual ≤ 0 at `lo` and ≥ 0 at `hi`.
pub fn invert_angular<F>(
    f: F,
    target_deg: f64,
    lo: Moment,
    hi: Moment,
    config: &SearchConfig,
) -> Result<Moment, SearchError>
where
    F: Fn(Moment) -> f64,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let residual = |t: Moment| normalize_pm180(f(t) - target_deg);

    if !is_ordered(lo, hi) || residual(lo) > 0.0 || residual(hi) < 0.0 {
        return Err(SearchError::NotBracketed);
    }

    let (mut lo, mut hi) = (lo, hi);
    for iteration in 0..config.max_iterations {
        if hi - lo < config.angular_precision_days {
            debug!("invert_angular: target {target_deg} after {iteration} iterations");
            return Ok(0.5 * (lo + hi));
        }
        let mid = 0.5 * (lo + hi);
        if residual(mid) >= 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    if hi - lo < config.angular_precision_days {
        return Ok(0.5 * (lo + hi));
    }
    warn!(
        "invert_angular: budget of {} iterations exhausted, bracket {} days",
        config.max_iterations,
        hi - lo
    );
    Err(SearchError::NoConvergence("angular inversion"))
}

/// Find the moment in `[lo, hi]` where `pred` switches from false to true,
/// to within `tolerance_days`.
///
/// Requires `pred(lo)` false and `pred(hi)` true.
pub fn bisect_threshold<P>(
    pred: P,
    lo: Moment,
    hi: Moment,
    tolerance_days: f64,
    config: &SearchConfig,
) -> Result<Moment, SearchError>
where
    P: Fn(Moment) -> bool,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !tolerance_days.is_finite() || tolerance_days <= 0.0 {
        return Err(SearchError::InvalidConfig("tolerance must be positive"));
    }
    if !is_ordered(lo, hi) || pred(lo) || !pred(hi) {
        return Err(SearchError::NotBracketed);
    }

    let (mut lo, mut hi) = (lo, hi);
    for _ in 0..config.max_iterations {
        if hi - lo < tolerance_days {
            return Ok(0.5 * (lo + hi));
        }
        let mid = 0.5 * (lo + hi);
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    if hi - lo < tolerance_days {
        return Ok(0.5 * (lo + hi));
    }
    warn!("bisect_threshold: budget of {} iterations exhausted", config.max_iterations);
    Err(SearchError::NoConvergence("threshold bisection"))
}

/// First day `d` in `start .. start + max_days` for which `pred(d)` holds.
///
/// Any integer sequence works, e.g. new-moon indices.
pub fn next_day<E, P>(start: i64, max_days: u32, mut pred: P) -> Result<i64, E>
where
    E: From<SearchError>,
    P: FnMut(i64) -> Result<bool, E>,
{
    for day in start..start + i64::from(max_days) {
        if pred(day)? {
            return Ok(day);
        }
    }
    warn!("next_day: no match within {max_days} days of {start}");
    Err(SearchError::NoConvergence("day scan").into())
}

/// Last day of the run of days satisfying `pred` that begins at `start`.
///
/// Returns `start - 1` when `pred(start)` is false. The run may be at most
/// `max_days` long.
pub fn final_day<E, P>(start: i64, max_days: u32, mut pred: P) -> Result<i64, E>
where
    E: From<SearchError>,
    P: FnMut(i64) -> Result<bool, E>,
{
    for day in start..=start + i64::from(max_days) {
        if !pred(day)? {
            return Ok(day - 1);
        }
    }
    warn!("final_day: run from {start} longer than {max_days} days");
    Err(SearchError::NoConvergence("day scan").into())
}
