//! Degree-based trigonometry and angle normalization.
//!
//! All public angles in the workspace are degrees; radians only appear
//! inside these helpers. Inverse functions clamp their argument to
//! [-1, 1] so that rounding noise never turns into NaN.

/// One arcminute in degrees.
pub const ARCMIN: f64 = 1.0 / 60.0;

/// One arcsecond in degrees.
pub const ARCSEC: f64 = 1.0 / 3600.0;

/// Angle in degrees from degrees, arcminutes and arcseconds.
///
/// Components are summed as given, so a negative angle needs every
/// component negated: `angle_from_dms(0.0, 0.0, -46.815)`.
pub fn angle_from_dms(deg: f64, min: f64, sec: f64) -> f64 {
    deg + min * ARCMIN + sec * ARCSEC
}

pub fn sin_deg(theta: f64) -> f64 {
    theta.to_radians().sin()
}

pub fn cos_deg(theta: f64) -> f64 {
    theta.to_radians().cos()
}

pub fn tan_deg(theta: f64) -> f64 {
    theta.to_radians().tan()
}

/// Arcsine in degrees, range [-90, 90]. The argument is clamped to [-1, 1].
pub fn arcsin_deg(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Arccosine in degrees, range [0, 180]. The argument is clamped to [-1, 1].
pub fn arccos_deg(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Two-argument arctangent in degrees, normalized to [0, 360).
pub fn arctan_deg(y: f64, x: f64) -> f64 {
    normalize_360(y.atan2(x).to_degrees())
}

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Normalize an angle to [-180, 180).
pub fn normalize_pm180(deg: f64) -> f64 {
    mod3(deg, -180.0, 180.0)
}

/// Shift `x` into the half-open interval [a, b).
///
/// Returns `x` unchanged when `a == b`.
pub fn mod3(x: f64, a: f64, b: f64) -> f64 {
    if a == b {
        return x;
    }
    let width = b - a;
    let r = a + (x - a).rem_euclid(width);
    if r >= b { a } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dms_components() {
        let e = angle_from_dms(23.0, 26.0, 21.448);
        assert!((e - 23.439_291_1).abs() < 1e-6, "e = {e}");
        assert!((angle_from_dms(0.0, 0.0, -36.0) + 0.01).abs() < 1e-12);
    }

    #[test]
    fn trig_in_degrees() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-12);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-12);
        assert!((tan_deg(45.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_trig_clamps() {
        assert_eq!(arcsin_deg(1.000_000_000_1), 90.0);
        assert_eq!(arcsin_deg(-1.000_000_000_1), -90.0);
        assert_eq!(arccos_deg(1.000_000_000_1), 0.0);
        assert!((arccos_deg(-1.5) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn arctan_quadrants() {
        assert!((arctan_deg(1.0, 1.0) - 45.0).abs() < 1e-12);
        assert!((arctan_deg(1.0, -1.0) - 135.0).abs() < 1e-12);
        assert!((arctan_deg(-1.0, -1.0) - 225.0).abs() < 1e-12);
        assert!((arctan_deg(-1.0, 1.0) - 315.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_basic() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-12);
        assert!(normalize_360(-1e-18) < 360.0);
    }

    #[test]
    fn pm180_half_open() {
        assert_eq!(normalize_pm180(180.0), -180.0);
        assert_eq!(normalize_pm180(-180.0), -180.0);
        assert!((normalize_pm180(270.0) + 90.0).abs() < 1e-12);
        assert!((normalize_pm180(-270.0) - 90.0).abs() < 1e-12);
        assert!((normalize_pm180(359.5) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn mod3_degenerate_interval() {
        assert_eq!(mod3(7.5, 2.0, 2.0), 7.5);
        assert!((mod3(0.75, -0.5, 0.5) + 0.25).abs() < 1e-12);
    }
}
