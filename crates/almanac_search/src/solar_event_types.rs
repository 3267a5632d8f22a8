//! Types for solar-longitude events.

/// Astronomical season, named for the northern hemisphere, keyed by the
/// solar longitude at which it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// March equinox, solar longitude 0°.
    Spring,
    /// June solstice, 90°.
    Summer,
    /// September equinox, 180°.
    Autumn,
    /// December solstice, 270°.
    Winter,
}

/// All four seasons in calendar order.
pub const ALL_SEASONS: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

impl Season {
    /// Solar longitude at the start of the season, degrees.
    pub const fn longitude_deg(self) -> f64 {
        match self {
            Self::Spring => 0.0,
            Self::Summer => 90.0,
            Self::Autumn => 180.0,
            Self::Winter => 270.0,
        }
    }

    /// Name of the equinox or solstice that opens the season.
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Spring => "March equinox",
            Self::Summer => "June solstice",
            Self::Autumn => "September equinox",
            Self::Winter => "December solstice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitudes_are_quadrants() {
        for (i, s) in ALL_SEASONS.iter().enumerate() {
            assert_eq!(s.longitude_deg(), 90.0 * i as f64);
        }
    }
}
