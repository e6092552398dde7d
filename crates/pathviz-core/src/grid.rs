//! The [`Grid`] type: walls plus the start and finish markers.
//!
//! The grid stores one wall flag per cell and the two marker positions
//! directly, so "exactly one start and one finish" holds by construction.
//! Cells are handed out as [`Cell`] snapshots.

use std::fmt;

use crate::cell::{Cell, MarkerKind};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range, RangeIter};

/// A fixed-size rectangular grid of free and wall cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    walls: Vec<bool>,
    start: Point,
    finish: Point,
}

impl Grid {
    /// Create a wall-free grid of `rows x cols` with the given markers.
    pub fn new(rows: i32, cols: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::EmptyGrid);
        }
        let bounds = Range::with_size(rows, cols);
        for p in [start, finish] {
            if !bounds.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if start == finish {
            return Err(GridError::SameMarkers(start));
        }
        Ok(Self {
            bounds,
            walls: vec![false; bounds.len()],
            start,
            finish,
        })
    }

    /// Create a grid from a [`GridConfig`].
    pub fn from_config(cfg: &GridConfig) -> Result<Self, GridError> {
        Self::new(cfg.rows, cfg.cols, cfg.start, cfg.finish)
    }

    /// Build a grid from a text layout.
    ///
    /// Each line is one row: `.` free, `#` wall, `S` start, `F` finish.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(layout: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridError::EmptyGrid);
        };
        let cols = first.chars().count();
        let height = i32::try_from(lines.len()).map_err(|_| GridError::TooLarge(lines.len()))?;
        let width = i32::try_from(cols).map_err(|_| GridError::TooLarge(cols))?;

        let mut walls = Vec::with_capacity(lines.len() * cols);
        let mut start = None;
        let mut finish = None;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::InconsistentSize {
                    line: row,
                    expected: cols,
                    found,
                });
            }
            // Both indices are below `height` and `width`, so they fit in i32.
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                let marker = match ch {
                    '.' => None,
                    '#' => {
                        walls.push(true);
                        continue;
                    }
                    'S' => Some((MarkerKind::Start, &mut start)),
                    'F' => Some((MarkerKind::Finish, &mut finish)),
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                };
                if let Some((kind, slot)) = marker {
                    if slot.replace(pos).is_some() {
                        return Err(GridError::DuplicateMarker(kind));
                    }
                }
                walls.push(false);
            }
        }

        let start = start.ok_or(GridError::MissingMarker(MarkerKind::Start))?;
        let finish = finish.ok_or(GridError::MissingMarker(MarkerKind::Finish))?;
        Ok(Self {
            bounds: Range::with_size(height, width),
            walls,
            start,
            finish,
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Position of the given marker.
    #[inline]
    pub fn marker(&self, kind: MarkerKind) -> Point {
        match kind {
            MarkerKind::Start => self.start,
            MarkerKind::Finish => self.finish,
        }
    }

    /// Whether `p` is a wall. Out-of-bounds positions are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| self.walls[i])
    }

    /// Snapshot of the cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        let i = self.bounds.index(p)?;
        Some(Cell {
            pos: p,
            is_start: p == self.start,
            is_finish: p == self.finish,
            is_wall: self.walls[i],
        })
    }

    /// In-bounds cardinal neighbours of `p`, walls included.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }

    /// Flip the wall flag at `p` and return its new value.
    ///
    /// Marker cells can never become walls.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.editable_index(p)?;
        self.walls[i] = !self.walls[i];
        log::trace!("toggle wall at {p}: {}", self.walls[i]);
        Ok(self.walls[i])
    }

    /// Set the wall flag at `p`. Returns whether the flag changed.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<bool, GridError> {
        let i = self.editable_index(p)?;
        let changed = self.walls[i] != wall;
        self.walls[i] = wall;
        Ok(changed)
    }

    /// Move a marker to `p`.
    ///
    /// The previous cell loses the marker and `p` gains it; a wall at `p`
    /// is cleared. Moving a marker onto the other one is rejected.
    pub fn relocate_marker(&mut self, kind: MarkerKind, p: Point) -> Result<(), GridError> {
        let i = self.bounds.index(p).ok_or(GridError::OutOfBounds(p))?;
        if p == self.marker(kind.other()) {
            return Err(GridError::MarkerCell(p));
        }
        self.walls[i] = false;
        let slot = match kind {
            MarkerKind::Start => &mut self.start,
            MarkerKind::Finish => &mut self.finish,
        };
        log::debug!("relocate {kind:?} marker {} -> {p}", *slot);
        *slot = p;
        Ok(())
    }

    /// Clear every wall. Markers stay where they are.
    pub fn reset(&mut self) {
        self.walls.fill(false);
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Row-major iterator over every cell.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    fn editable_index(&self, p: Point) -> Result<usize, GridError> {
        let i = self.bounds.index(p).ok_or(GridError::OutOfBounds(p))?;
        if p == self.start || p == self.finish {
            return Err(GridError::MarkerCell(p));
        }
        Ok(i)
    }
}

impl Default for Grid {
    fn default() -> Self {
        let cfg = GridConfig::default();
        let bounds = Range::with_size(cfg.rows, cfg.cols);
        Self {
            bounds,
            walls: vec![false; bounds.len()],
            start: cfg.start,
            finish: cfg.finish,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let p = Point::new(row, col);
                let ch = if p == self.start {
                    'S'
                } else if p == self.finish {
                    'F'
                } else if self.is_wall(p) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the [`Cell`]s of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let p = self.inner.next()?;
        self.grid.cell(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Grid {
        Grid::new(3, 4, Point::new(0, 0), Point::new(2, 3)).unwrap()
    }

    #[test]
    fn new_grid_has_no_walls_and_one_of_each_marker() {
        let g = small();
        assert_eq!(g.wall_count(), 0);
        assert_eq!(g.iter().filter(|c| c.is_start).count(), 1);
        assert_eq!(g.iter().filter(|c| c.is_finish).count(), 1);
        assert!(g.cell(Point::new(0, 0)).unwrap().is_start);
        assert!(g.cell(Point::new(2, 3)).unwrap().is_finish);
    }

    #[test]
    fn default_grid_is_20_by_50() {
        let g = Grid::default();
        assert_eq!((g.rows(), g.cols()), (20, 50));
        assert_eq!(g.start(), Point::new(10, 15));
        assert_eq!(g.finish(), Point::new(10, 35));
        assert_eq!(Grid::from_config(&GridConfig::default()).unwrap(), g);
    }

    #[test]
    fn invalid_construction_is_rejected() {
        assert_eq!(
            Grid::new(3, 3, Point::new(1, 1), Point::new(1, 1)),
            Err(GridError::SameMarkers(Point::new(1, 1)))
        );
        assert_eq!(
            Grid::new(3, 3, Point::new(0, 0), Point::new(3, 0)),
            Err(GridError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(
            Grid::new(0, 3, Point::new(0, 0), Point::new(0, 1)),
            Err(GridError::EmptyGrid)
        );
    }

    #[test]
    fn double_toggle_restores_wall_flag() {
        let mut g = small();
        let p = Point::new(1, 1);
        assert!(g.toggle_wall(p).unwrap());
        assert!(g.is_wall(p));
        assert!(!g.toggle_wall(p).unwrap());
        assert!(!g.is_wall(p));
    }

    #[test]
    fn toggle_rejects_markers_and_out_of_bounds() {
        let mut g = small();
        assert_eq!(
            g.toggle_wall(Point::new(0, 0)),
            Err(GridError::MarkerCell(Point::new(0, 0)))
        );
        assert_eq!(
            g.toggle_wall(Point::new(9, 9)),
            Err(GridError::OutOfBounds(Point::new(9, 9)))
        );
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn set_wall_is_idempotent() {
        let mut g = small();
        let p = Point::new(1, 2);
        assert!(g.set_wall(p, true).unwrap());
        assert!(!g.set_wall(p, true).unwrap());
        assert!(g.is_wall(p));
    }

    #[test]
    fn relocate_start_leaves_exactly_one_start() {
        let mut g = small();
        let old = g.start();
        g.relocate_marker(MarkerKind::Start, Point::new(1, 2)).unwrap();
        let starts: Vec<_> = g.iter().filter(|c| c.is_start).map(|c| c.pos).collect();
        assert_eq!(starts, vec![Point::new(1, 2)]);
        assert!(!g.cell(old).unwrap().is_start);
    }

    #[test]
    fn relocate_onto_wall_clears_it() {
        let mut g = small();
        let p = Point::new(1, 1);
        g.toggle_wall(p).unwrap();
        g.relocate_marker(MarkerKind::Finish, p).unwrap();
        let c = g.cell(p).unwrap();
        assert!(c.is_finish && !c.is_wall);
    }

    #[test]
    fn relocate_onto_other_marker_is_rejected() {
        let mut g = small();
        let finish = g.finish();
        assert_eq!(
            g.relocate_marker(MarkerKind::Start, finish),
            Err(GridError::MarkerCell(finish))
        );
        assert_eq!(g.start(), Point::new(0, 0));
    }

    #[test]
    fn reset_clears_walls_keeps_markers() {
        let mut g = small();
        g.toggle_wall(Point::new(1, 1)).unwrap();
        g.toggle_wall(Point::new(1, 2)).unwrap();
        g.relocate_marker(MarkerKind::Start, Point::new(2, 0)).unwrap();
        g.reset();
        assert_eq!(g.wall_count(), 0);
        assert_eq!(g.start(), Point::new(2, 0));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let g = small();
        let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(g.neighbors(Point::new(1, 1)).count(), 4);
    }

    #[test]
    fn parse_and_display_agree() {
        let layout = "\
S..#
.#..
...F
";
        let g = Grid::parse(layout).unwrap();
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.finish(), Point::new(2, 3));
        assert!(g.is_wall(Point::new(0, 3)));
        assert!(g.is_wall(Point::new(1, 1)));
        assert_eq!(g.to_string(), layout);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Grid::parse("S.\n.F.").unwrap_err(),
            GridError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            Grid::parse("S?F").unwrap_err(),
            GridError::InvalidChar {
                ch: '?',
                pos: Point::new(0, 1)
            }
        );
        assert_eq!(
            Grid::parse("S..").unwrap_err(),
            GridError::MissingMarker(MarkerKind::Finish)
        );
        assert_eq!(
            Grid::parse("SSF").unwrap_err(),
            GridError::DuplicateMarker(MarkerKind::Start)
        );
        assert_eq!(Grid::parse("\n\n").unwrap_err(), GridError::EmptyGrid);
    }
}
