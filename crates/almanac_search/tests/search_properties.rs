//! Property tests for event search invariants.

use almanac_ephem::solar_longitude;
use almanac_frames::normalize_pm180;
use almanac_search::{SearchConfig, lunar_phase, nth_new_moon, solar_longitude_after};
use almanac_time::hours;
use proptest::prelude::*;

/// 1900-01-01 .. 2100-01-01 as moments.
const START: f64 = 693_596.0;
const END: f64 = 766_645.0;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn phase_at_new_moon_is_zero(n in 20_000i64..30_000) {
        let p = normalize_pm180(lunar_phase(nth_new_moon(n)));
        prop_assert!(p.abs() < 0.01, "n {}: phase {}", n, p);
    }

    #[test]
    fn phase_in_range(tee in START..END) {
        let p = lunar_phase(tee);
        prop_assert!((0.0..360.0).contains(&p));
    }

    #[test]
    fn solar_longitude_after_hits_target(tee in START..END, lambda in 0.0f64..360.0) {
        let t = solar_longitude_after(lambda, tee, &SearchConfig::default()).unwrap();
        prop_assert!(t >= tee);
        prop_assert!(t - tee < 366.0);
        let err = normalize_pm180(solar_longitude(t) - lambda);
        prop_assert!(err.abs() < 1e-4, "err {}", err);
    }

    #[test]
    fn solar_longitude_after_is_minimal(tee in START..END, lambda in 0.0f64..360.0) {
        let t = solar_longitude_after(lambda, tee, &SearchConfig::default()).unwrap();
        let earlier = t - hours(1.0);
        if earlier >= tee {
            prop_assert!(normalize_pm180(solar_longitude(earlier) - lambda) < 0.0);
        }
    }
}
