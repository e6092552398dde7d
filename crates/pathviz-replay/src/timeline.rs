//! Time-stamped replay events derived from a finished search.

use std::time::Duration;

use pathviz_core::{Point, Range};
use pathviz_paths::{PathOutcome, Search};

use crate::overlay::Overlay;
use crate::policy::ReplayPolicy;

/// What a replay event shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The cell was settled by the search.
    Visit,
    /// The cell lies on the shortest path.
    Path,
}

/// One state change at a point in replay time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub at: Duration,
    pub pos: Point,
    pub kind: EventKind,
}

/// The finite, ordered event sequence of one search.
///
/// Events are sorted by time. All visits come first, in settle order,
/// followed by the path from start to finish. An unreachable finish
/// contributes no path events.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    range: Range,
    events: Vec<Event>,
    visits: usize,
    path_found: bool,
}

impl Timeline {
    /// Build the timeline of `search` with its extracted `path`.
    pub fn new(search: &Search, path: &PathOutcome, policy: &ReplayPolicy) -> Self {
        let order = search.order();
        let mut events = Vec::with_capacity(order.len() + path.len());
        let mut at = Duration::ZERO;
        for &pos in order {
            events.push(Event {
                at,
                pos,
                kind: EventKind::Visit,
            });
            at += policy.visit_step;
        }

        let path_found = path.is_found();
        if path_found {
            for &pos in path.cells() {
                events.push(Event {
                    at,
                    pos,
                    kind: EventKind::Path,
                });
                at += policy.path_step;
            }
        }

        let timeline = Self {
            range: search.state().range(),
            events,
            visits: order.len(),
            path_found,
        };
        log::debug!(
            "timeline: {} visits, {} path steps, {:?} long",
            timeline.visits,
            timeline.events.len() - timeline.visits,
            timeline.duration()
        );
        timeline
    }

    /// The grid range the events refer to.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of visit events.
    #[inline]
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Path events, start first.
    #[inline]
    pub fn path_events(&self) -> &[Event] {
        &self.events[self.visits..]
    }

    /// Whether the timeline ends with a path.
    #[inline]
    pub fn path_found(&self) -> bool {
        self.path_found
    }

    /// Time of the last event.
    pub fn duration(&self) -> Duration {
        self.events.last().map_or(Duration::ZERO, |ev| ev.at)
    }

    /// Number of events due at time `t` (those with `at <= t`).
    pub fn due_count(&self, t: Duration) -> usize {
        self.events.partition_point(|ev| ev.at <= t)
    }

    /// Every event due at time `t`.
    pub fn events_until(&self, t: Duration) -> &[Event] {
        &self.events[..self.due_count(t)]
    }

    /// Cell marks as they stand at time `t`.
    pub fn overlay_at(&self, t: Duration) -> Overlay {
        Overlay::from_events(self.range, self.events_until(t))
    }
}
