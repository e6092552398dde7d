//! Per-cell replay state.

use pathviz_core::{Point, Range};

use crate::timeline::{Event, EventKind};

/// How a cell is currently shown by a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    Idle,
    Visited,
    Path,
}

/// The [`Mark`] of every cell in a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    range: Range,
    marks: Vec<Mark>,
}

impl Overlay {
    /// An overlay with every cell idle.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            marks: vec![Mark::Idle; range.len()],
        }
    }

    /// Overlay after applying `events` in order.
    pub fn from_events(range: Range, events: &[Event]) -> Self {
        let mut overlay = Self::new(range);
        for ev in events {
            overlay.apply(ev);
        }
        overlay
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Mark at `p`; idle outside the range.
    pub fn get(&self, p: Point) -> Mark {
        self.range
            .index(p)
            .map_or(Mark::Idle, |i| self.marks[i])
    }

    /// Apply one event. A path mark is never downgraded to visited.
    pub fn apply(&mut self, ev: &Event) {
        let Some(i) = self.range.index(ev.pos) else {
            return;
        };
        self.marks[i] = match (ev.kind, self.marks[i]) {
            (EventKind::Path, _) => Mark::Path,
            (EventKind::Visit, Mark::Path) => Mark::Path,
            (EventKind::Visit, _) => Mark::Visited,
        };
    }

    /// Set every cell back to idle.
    pub fn clear(&mut self) {
        self.marks.fill(Mark::Idle);
    }

    /// Number of cells with the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}
