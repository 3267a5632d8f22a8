//! Types for lunar phase search.

use almanac_time::Moment;

/// Principal phase of the Moon, keyed by its phase angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// Phase angle 0°.
    New,
    /// Phase angle 90°.
    FirstQuarter,
    /// Phase angle 180°.
    Full,
    /// Phase angle 270°.
    LastQuarter,
}

/// All four principal phases in order of a lunation.
pub const ALL_MOON_PHASES: [MoonPhase; 4] = [
    MoonPhase::New,
    MoonPhase::FirstQuarter,
    MoonPhase::Full,
    MoonPhase::LastQuarter,
];

impl MoonPhase {
    /// Phase angle (lunar minus solar longitude) in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::New => 0.0,
            Self::FirstQuarter => 90.0,
            Self::Full => 180.0,
            Self::LastQuarter => 270.0,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::Full => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }
}

/// A principal phase and the universal moment it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseEvent {
    /// Which phase.
    pub phase: MoonPhase,
    /// Universal moment of the phase.
    pub moment: Moment,
}
