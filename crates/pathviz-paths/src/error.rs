use std::fmt;

use pathviz_core::Point;

/// Errors for searches whose endpoints are invalid.
///
/// An unreachable finish is not an error; see
/// [`PathOutcome::Unreachable`](crate::PathOutcome::Unreachable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the search range.
    OutOfRange(Point),
    /// Start and finish are the same cell.
    SameEndpoints(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(p) => write!(f, "search endpoint {p} is outside the range"),
            Self::SameEndpoints(p) => write!(f, "search start and finish are both {p}"),
        }
    }
}

impl std::error::Error for SearchError {}
