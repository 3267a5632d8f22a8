//! Round-trip and continuity properties of the time-axis conversions.

use almanac_time::{
    CivilCalendar, Gregorian, Location, dynamical_from_universal, ephemeris_correction,
    local_from_standard, seconds, standard_from_local, standard_from_universal,
    universal_from_dynamical, universal_from_standard,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Arbitrary moments and zones: each shift is one f64 addition, so the
    /// round trip is exact only up to rounding of the intermediate sum.
    #[test]
    fn standard_universal_roundtrip(
        tee in 0.0f64..1_000_000.0,
        lat in -90.0f64..90.0,
        lon in -179.9f64..180.0,
        zone_hours in -12.0f64..14.0,
    ) {
        let loc = Location::with_zone_hours(lat, lon, 0.0, zone_hours).unwrap();
        let back = universal_from_standard(standard_from_universal(tee, &loc), &loc);
        prop_assert!((back - tee).abs() < 1e-9);
        let back = local_from_standard(standard_from_local(tee, &loc), &loc);
        prop_assert!((back - tee).abs() < 1e-9);
    }

    /// Moments on a 1/1024-day grid and zones in whole multiples of 3 h
    /// (eighths of a day) are dyadic, so the round trip is bit-exact.
    #[test]
    fn standard_universal_roundtrip_exact_on_dyadic_grid(
        ticks in 0i64..1_024_000_000,
        eighths in -4i64..=4,
        lon in -179.9f64..180.0,
    ) {
        let tee = ticks as f64 / 1024.0;
        let loc = Location::with_zone_hours(0.0, lon, 0.0, 3.0 * eighths as f64).unwrap();
        prop_assert_eq!(universal_from_standard(standard_from_universal(tee, &loc), &loc), tee);
        prop_assert_eq!(standard_from_universal(universal_from_standard(tee, &loc), &loc), tee);
    }

    #[test]
    fn dynamical_roundtrip_within_a_second(year in 1620i64..2100, doy in 0i64..365) {
        let tee = (Gregorian.fixed_from_date(year, 1, 1) + doy) as f64 + 0.5;
        let back = universal_from_dynamical(dynamical_from_universal(tee));
        prop_assert!((back - tee).abs() < seconds(1.0));
    }

    #[test]
    fn delta_t_modern_range(year in 1950i64..2030) {
        let tee = Gregorian.fixed_from_date(year, 7, 1) as f64;
        let dt = ephemeris_correction(tee) / seconds(1.0);
        prop_assert!((25.0..80.0).contains(&dt), "ΔT({}) = {} s", year, dt);
    }
}

/// Gregorian fixed/date conversions agree over a span of leap centuries.
#[test]
fn gregorian_date_roundtrip_1600_2400() {
    let start = Gregorian.fixed_from_date(1600, 1, 1);
    let end = Gregorian.fixed_from_date(2400, 12, 31);
    for date in (start..=end).step_by(7) {
        let d = Gregorian.date_from_fixed(date);
        assert_eq!(Gregorian.fixed_from_date(d.year, d.month, d.day), date);
    }
}
