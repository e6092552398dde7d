use pathviz_core::Point;

use crate::dijkstra::Search;

/// Shortest path extracted from a [`Search`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOutcome {
    /// The path from start to finish, both included.
    Found(Vec<Point>),
    /// The finish was never settled.
    Unreachable { finish: Point },
}

impl PathOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The cells to highlight, start first.
    ///
    /// An unreachable finish yields just the finish cell, so a renderer can
    /// treat both cases the same way.
    pub fn cells(&self) -> &[Point] {
        match self {
            Self::Found(path) => path,
            Self::Unreachable { finish } => std::slice::from_ref(finish),
        }
    }

    /// Number of cells in [`cells`](PathOutcome::cells).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    /// Always false: even an unreachable outcome reports its finish cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The path, if one was found.
    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            Self::Found(path) => Some(path),
            Self::Unreachable { .. } => None,
        }
    }
}

/// Walk predecessor links back from the finish to rebuild the shortest path.
pub fn reconstruct_path(search: &Search) -> PathOutcome {
    let state = search.state();
    let finish = search.finish();
    let Some(goal_idx) = state.idx(finish).filter(|&i| state.visited_at(i)) else {
        return PathOutcome::Unreachable { finish };
    };

    let mut path = Vec::new();
    let mut ci = Some(goal_idx);
    while let Some(i) = ci {
        path.push(state.point(i));
        ci = state.parent_at(i);
    }
    path.reverse();
    PathOutcome::Found(path)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = PathOutcome::Found(vec![Point::new(0, 0), Point::new(0, 1)]);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: PathOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
