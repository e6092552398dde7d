//! The [`Cell`] type: one grid position with its role flags.

use crate::geom::Point;

/// Which of the two markers a grid operation targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    Start,
    Finish,
}

impl MarkerKind {
    /// The other marker.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Start => Self::Finish,
            Self::Finish => Self::Start,
        }
    }
}

/// A snapshot of one grid position.
///
/// Cells are produced by [`Grid::cell`](crate::Grid::cell) and carry only
/// the static role flags. Search metadata (distance, visited, predecessor)
/// is kept by the search engine, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub is_start: bool,
    pub is_finish: bool,
    pub is_wall: bool,
}

impl Cell {
    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    /// Whether the search may enter this cell.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        !self.is_wall
    }

    /// Whether the cell holds either marker.
    #[inline]
    pub const fn is_marker(&self) -> bool {
        self.is_start || self.is_finish
    }
}
