//! Error types for rise/set and visibility calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use almanac_search::SearchError;
use almanac_time::TimeError;

/// Errors from rise/set and visibility calculations.
///
/// A body that does not rise or set on a given day is not an error; that
/// is reported through [`RiseSetResult`](crate::RiseSetResult) or `None`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RiseSetError {
    /// Error from an underlying event search.
    Search(SearchError),
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
    /// Invalid rise/set configuration.
    InvalidConfig(&'static str),
}

impl Display for RiseSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for RiseSetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for RiseSetError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<TimeError> for RiseSetError {
    fn from(e: TimeError) -> Self {
        Self::Search(SearchError::Time(e))
    }
}
