use pathviz_core::{Point, Range};

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest distance first and, among equal distances, the smallest
/// row-major index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) dist: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-run search metadata, kept apart from the grid.
///
/// Distances, visited flags and predecessor links are flat arrays indexed
/// by the row-major position within `range`. A fresh state is built for
/// every search, so nothing from a previous run can leak into the next.
#[derive(Debug, Clone)]
pub struct SearchState {
    range: Range,
    dist: Vec<i32>,
    visited: Vec<bool>,
    parent: Vec<usize>,
}

impl SearchState {
    /// A state where every cell is unreached and unvisited.
    pub fn new(range: Range) -> Self {
        let len = range.len();
        Self {
            range,
            dist: vec![UNREACHABLE; len],
            visited: vec![false; len],
            parent: vec![NO_PARENT; len],
        }
    }

    /// The range this state covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Final or tentative distance of `p`, or `None` if never reached or
    /// out of range.
    pub fn distance(&self, p: Point) -> Option<i32> {
        let i = self.range.index(p)?;
        let d = self.dist[i];
        (d != UNREACHABLE).then_some(d)
    }

    /// Whether the search settled `p`.
    pub fn is_visited(&self, p: Point) -> bool {
        self.range.index(p).is_some_and(|i| self.visited[i])
    }

    /// The cell `p` was reached from on its best known path.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        let i = self.range.index(p)?;
        let parent = self.parent[i];
        (parent != NO_PARENT).then(|| self.range.point(parent))
    }

    // -----------------------------------------------------------------------
    // Index-level access for the search loop
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.range.index(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.range.point(idx)
    }

    #[inline]
    pub(crate) fn dist_at(&self, idx: usize) -> i32 {
        self.dist[idx]
    }

    #[inline]
    pub(crate) fn visited_at(&self, idx: usize) -> bool {
        self.visited[idx]
    }

    #[inline]
    pub(crate) fn parent_at(&self, idx: usize) -> Option<usize> {
        let parent = self.parent[idx];
        (parent != NO_PARENT).then_some(parent)
    }

    #[inline]
    pub(crate) fn set_source(&mut self, idx: usize) {
        self.dist[idx] = 0;
        self.parent[idx] = NO_PARENT;
    }

    #[inline]
    pub(crate) fn settle(&mut self, idx: usize) {
        self.visited[idx] = true;
    }

    /// Lower the distance of `idx` to `dist` via `parent` if that is an
    /// improvement. Returns whether the node was relaxed.
    #[inline]
    pub(crate) fn relax(&mut self, idx: usize, parent: usize, dist: i32) -> bool {
        if dist >= self.dist[idx] {
            return false;
        }
        self.dist[idx] = dist;
        self.parent[idx] = parent;
        true
    }
}
