use std::fmt;

use crate::cell::MarkerKind;
use crate::geom::Point;

/// Errors raised by grid construction and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    EmptyGrid,
    /// The coordinate lies outside the grid.
    OutOfBounds(Point),
    /// Start and finish would share a cell.
    SameMarkers(Point),
    /// The edit targets a start or finish cell.
    MarkerCell(Point),
    /// Layout lines have inconsistent widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// A character outside `.#SF` was found in a layout.
    InvalidChar { ch: char, pos: Point },
    /// A layout has no cell for this marker.
    MissingMarker(MarkerKind),
    /// A layout has more than one cell for this marker.
    DuplicateMarker(MarkerKind),
    /// A layout dimension does not fit a grid coordinate.
    TooLarge(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
            Self::SameMarkers(p) => write!(f, "start and finish both placed at {p}"),
            Self::MarkerCell(p) => write!(f, "cell {p} holds a start or finish marker"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout line {line} has {found} columns, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(kind) => write!(f, "layout has no {kind:?} marker"),
            Self::DuplicateMarker(kind) => write!(f, "layout has more than one {kind:?} marker"),
            Self::TooLarge(n) => write!(f, "layout dimension {n} is too large"),
        }
    }
}

impl std::error::Error for GridError {}
