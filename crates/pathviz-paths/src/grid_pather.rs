use pathviz_core::{Grid, Point};

use crate::dijkstra::{Search, search};
use crate::traits::{Pather, WeightedPather};

/// Cardinal moves onto non-wall cells.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p).filter(|&n| !self.is_wall(n)));
    }
}

/// Every move costs 1.
impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

/// Search `grid` from its start marker to its finish marker.
pub fn search_grid(grid: &Grid) -> Search {
    match search(grid, grid.bounds(), grid.start(), grid.finish()) {
        Ok(s) => s,
        // A Grid keeps both markers in bounds and apart.
        Err(e) => unreachable!("grid markers violate their invariant: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_not_neighbors() {
        let g = Grid::parse(
            "\
.#.
.S#
F..
",
        )
        .unwrap();
        let mut buf = Vec::new();
        Pather::neighbors(&g, g.start(), &mut buf);
        assert_eq!(buf, vec![Point::new(2, 1), Point::new(1, 0)]);
    }
}
