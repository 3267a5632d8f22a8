//! Error types for locations and calendar input.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing time-axis inputs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A location parameter is out of range or not finite.
    InvalidLocation(&'static str),
    /// A civil date component is out of range.
    InvalidDate(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for TimeError {}
