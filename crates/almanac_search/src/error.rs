//! Error types for root finding and event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use almanac_time::TimeError;

/// Errors from event search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid time-axis input (calendar date, location).
    Time(TimeError),
    /// The target is not bracketed by the search interval.
    NotBracketed,
    /// An iteration or scan budget was exhausted.
    NoConvergence(&'static str),
    /// Invalid search configuration.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NotBracketed => write!(f, "target not bracketed by search interval"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
