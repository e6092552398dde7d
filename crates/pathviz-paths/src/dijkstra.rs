use std::collections::BinaryHeap;

use pathviz_core::{Point, Range};

use crate::error::SearchError;
use crate::path::{PathOutcome, reconstruct_path};
use crate::state::{NodeRef, SearchState};
use crate::traits::WeightedPather;

/// The result of one shortest-path search.
///
/// Holds the order in which cells were settled (the exploration history to
/// animate) and the search metadata needed to rebuild the path.
#[derive(Debug, Clone)]
pub struct Search {
    pub(crate) start: Point,
    pub(crate) finish: Point,
    pub(crate) order: Vec<Point>,
    pub(crate) state: SearchState,
}

impl Search {
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Cells in the order they were settled. Starts with the start cell and
    /// ends with the finish cell when it was reached.
    #[inline]
    pub fn order(&self) -> &[Point] {
        &self.order
    }

    /// The metadata left behind by the search.
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether the finish cell was settled.
    #[inline]
    pub fn reached(&self) -> bool {
        self.state.is_visited(self.finish)
    }

    #[inline]
    pub fn distance(&self, p: Point) -> Option<i32> {
        self.state.distance(p)
    }

    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.state.is_visited(p)
    }

    #[inline]
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.state.predecessor(p)
    }

    /// Shortest path from start to finish. Same as [`reconstruct_path`].
    pub fn path(&self) -> PathOutcome {
        reconstruct_path(self)
    }
}

/// Run a uniform-cost (Dijkstra) search from `start` until `finish` is
/// settled or the frontier is exhausted.
///
/// The cell with the smallest tentative distance is settled next; ties go
/// to the smallest row-major position in `range`, so the visitation order is
/// a pure function of the pather and the endpoints.
pub fn search<P: WeightedPather>(
    pather: &P,
    range: Range,
    start: Point,
    finish: Point,
) -> Result<Search, SearchError> {
    let mut state = SearchState::new(range);
    let start_idx = state.idx(start).ok_or(SearchError::OutOfRange(start))?;
    let finish_idx = state.idx(finish).ok_or(SearchError::OutOfRange(finish))?;
    if start_idx == finish_idx {
        return Err(SearchError::SameEndpoints(start));
    }

    state.set_source(start_idx);
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        dist: 0,
    });

    let mut order = Vec::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if state.visited_at(ci) || current.dist != state.dist_at(ci) {
            continue;
        }
        state.settle(ci);
        let cp = state.point(ci);
        order.push(cp);
        log::trace!("settled {cp} at distance {}", current.dist);

        if ci == finish_idx {
            break;
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = state.idx(np) else {
                continue;
            };
            if state.visited_at(ni) {
                continue;
            }
            let tentative = current.dist + pather.cost(cp, np);
            if state.relax(ni, ci, tentative) {
                open.push(NodeRef {
                    idx: ni,
                    dist: tentative,
                });
            }
        }
    }

    let search = Search {
        start,
        finish,
        order,
        state,
    };
    log::debug!(
        "search {start} -> {finish}: settled {} cells, finish {}",
        search.order.len(),
        match search.distance(finish).filter(|_| search.reached()) {
            Some(d) => format!("at distance {d}"),
            None => "unreachable".to_owned(),
        }
    );
    Ok(search)
}

#[cfg(test)]
mod tests {
    use pathviz_core::{Grid, Point};

    use super::*;
    use crate::distance::manhattan;
    use crate::search_grid;

    #[test]
    fn two_cell_grid() {
        let g = Grid::parse("SF").unwrap();
        let s = search_grid(&g);
        assert_eq!(s.order(), &[Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(
            s.path().cells(),
            &[Point::new(0, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn wall_free_expansion_is_monotonic() {
        let g = Grid::new(7, 9, Point::new(3, 2), Point::new(5, 7)).unwrap();
        let s = search_grid(&g);
        let target = manhattan(g.start(), g.finish());
        let finish_at = s.order().iter().position(|&p| p == g.finish()).unwrap();
        assert_eq!(finish_at, s.order().len() - 1);
        for p in g.bounds().iter() {
            let d = manhattan(g.start(), p);
            // Ties at the finish distance are settled in row-major order.
            if d < target || (d == target && p < g.finish()) {
                let at = s.order().iter().position(|&q| q == p);
                assert!(at.is_some_and(|i| i < finish_at), "{p} not settled before finish");
            }
        }
    }

    #[test]
    fn order_distances_never_decrease() {
        let g = Grid::parse(
            "\
S.#.....
..#.##..
..#..#..
.....#.F
",
        )
        .unwrap();
        let s = search_grid(&g);
        let dists: Vec<_> = s.order().iter().map(|&p| s.distance(p).unwrap()).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        assert!(s.reached());
    }

    #[test]
    fn path_length_is_distance_plus_one() {
        let g = Grid::parse(
            "\
S...#...
.##.#.#.
.#..#.#.
.#.##.#.
.......F
",
        )
        .unwrap();
        let s = search_grid(&g);
        let path = s.path();
        let d = s.distance(g.finish()).unwrap();
        assert_eq!(path.len(), d as usize + 1);
        assert_eq!(path.cells().first(), Some(&g.start()));
        assert_eq!(path.cells().last(), Some(&g.finish()));
        for w in path.cells().windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
            assert!(!g.is_wall(w[1]));
        }
    }

    #[test]
    fn walled_off_finish_is_unreachable() {
        let g = Grid::parse(
            "\
S....
...#.
..#F#
...##
",
        )
        .unwrap();
        let s = search_grid(&g);
        let reachable = g.bounds().len() - g.wall_count() - 1;
        assert_eq!(s.order().len(), reachable);
        assert!(!s.reached());
        assert!(!s.is_visited(g.finish()));
        assert_eq!(s.distance(g.finish()), None);
        let path = s.path();
        assert!(!path.is_found());
        assert_eq!(path.cells(), &[g.finish()]);
    }

    #[test]
    fn walls_stay_unreached_and_predecessors_lead_to_start() {
        let g = Grid::parse(
            "\
S.#..
.#...
...#F
",
        )
        .unwrap();
        let s = search_grid(&g);
        assert!(s.reached());

        let walls: Vec<Point> = g.bounds().iter().filter(|&p| g.is_wall(p)).collect();
        assert_eq!(walls.len(), 3);
        for w in walls {
            assert_eq!(s.distance(w), None, "wall {w}");
            assert!(!s.is_visited(w), "wall {w}");
        }

        for &p in s.order() {
            let mut cur = p;
            let mut steps = 0;
            while let Some(prev) = s.predecessor(cur) {
                assert_eq!(manhattan(prev, cur), 1);
                assert!(!g.is_wall(prev));
                cur = prev;
                steps += 1;
            }
            assert_eq!(cur, g.start(), "chain from {p}");
            assert_eq!(s.distance(p), Some(steps));
        }
    }

    #[test]
    fn adjacent_endpoints_take_the_direct_edge() {
        // The detour through the top row is scanned first in row-major
        // order but is longer than the direct edge.
        let g = Grid::parse(
            "\
...
.#.
FS.
",
        )
        .unwrap();
        let s = search_grid(&g);
        assert_eq!(
            s.path().cells(),
            &[Point::new(2, 1), Point::new(2, 0)]
        );
        assert_eq!(s.order(), &[Point::new(2, 1), Point::new(2, 0)]);
    }

    #[test]
    fn searches_are_deterministic_and_fresh() {
        let g = Grid::parse(
            "\
.....
.S...
.....
...F.
",
        )
        .unwrap();
        let a = search_grid(&g);
        let b = search_grid(&g);
        assert_eq!(a.order(), b.order());
        assert_eq!(a.path(), b.path());
        assert_eq!(a.distance(g.start()), Some(0));
        assert_eq!(a.predecessor(g.start()), None);
    }

    #[test]
    fn ties_are_broken_row_major() {
        let g = Grid::parse(
            "\
...
.S.
...
F..
",
        )
        .unwrap();
        let s = search_grid(&g);
        assert_eq!(
            &s.order()[..5],
            &[
                Point::new(1, 1),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn invalid_endpoints_are_rejected() {
        let g = Grid::parse("S.F").unwrap();
        assert_eq!(
            search(&g, g.bounds(), Point::new(0, 5), g.finish()).unwrap_err(),
            SearchError::OutOfRange(Point::new(0, 5))
        );
        assert_eq!(
            search(&g, g.bounds(), g.start(), g.start()).unwrap_err(),
            SearchError::SameEndpoints(g.start())
        );
    }

    struct Weighted;

    impl crate::Pather for Weighted {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            let r = Range::with_size(2, 3);
            buf.extend(p.neighbors_4().into_iter().filter(|&n| r.contains(n)));
        }
    }

    impl WeightedPather for Weighted {
        fn cost(&self, _from: Point, to: Point) -> i32 {
            // The middle of the top row is expensive.
            if to == Point::new(0, 1) { 10 } else { 1 }
        }
    }

    #[test]
    fn weighted_costs_route_around_expensive_cells() {
        let s = search(&Weighted, Range::with_size(2, 3), Point::new(0, 0), Point::new(0, 2)).unwrap();
        assert_eq!(s.distance(Point::new(0, 2)), Some(4));
        assert_eq!(
            s.path().cells(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(0, 2)
            ]
        );
    }
}
