//! Configuration shared by the event searches.

/// Iteration budgets and tolerances for event search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Maximum bisection iterations (default 64).
    pub max_iterations: u32,
    /// Bisection stops once the bracket is narrower than this, in days
    /// (default 1e-5, ~0.86 s).
    pub angular_precision_days: f64,
    /// Maximum steps of a linear scan over new moons or days (default 64).
    pub max_scan_steps: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            angular_precision_days: 1e-5,
            max_scan_steps: 64,
        }
    }
}

impl SearchConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.angular_precision_days.is_finite() || self.angular_precision_days <= 0.0 {
            return Err("angular_precision_days must be positive");
        }
        if self.max_scan_steps == 0 {
            return Err("max_scan_steps must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_valid() {
        let c = SearchConfig::default();
        assert_eq!(c.max_iterations, 64);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = SearchConfig {
            max_iterations: 0,
            ..SearchConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_bad_precision() {
        for p in [0.0, -1e-5, f64::NAN] {
            let c = SearchConfig {
                angular_precision_days: p,
                ..SearchConfig::default()
            };
            assert!(c.validate().is_err(), "precision {p} accepted");
        }
    }

    #[test]
    fn rejects_zero_scan() {
        let c = SearchConfig {
            max_scan_steps: 0,
            ..SearchConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
