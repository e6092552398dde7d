//! Grid configuration.

use crate::geom::Point;

/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 20;
/// Default number of columns.
pub const DEFAULT_COLS: i32 = 50;

/// Dimensions and initial marker positions for a new [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub finish: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: Point::new(10, 15),
            finish: Point::new(10, 35),
        }
    }
}

impl GridConfig {
    /// A config of the given size with the markers placed on the middle row,
    /// at 30% and 70% of the width (the default layout, scaled).
    pub fn with_size(rows: i32, cols: i32) -> Self {
        let mid = rows / 2;
        let start_col = cols * 3 / 10;
        let mut finish_col = cols * 7 / 10;
        if finish_col == start_col && cols > 1 {
            finish_col = (start_col + 1).min(cols - 1);
        }
        Self {
            rows,
            cols,
            start: Point::new(mid, start_col),
            finish: Point::new(mid, finish_col),
        }
    }
}
