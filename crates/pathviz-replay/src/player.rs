//! Replay cursor over a [`Timeline`].
//!
//! [`Player`] never reads a clock or sleeps: the caller feeds it elapsed time
//! (from a frame loop, a timer, or a test) and draws whatever it returns.

use std::time::Duration;

use crate::overlay::Overlay;
use crate::timeline::{Event, Timeline};

/// Highest speed multiplier.
pub const MAX_SPEED: u32 = 64;

/// Plays a [`Timeline`] back at an adjustable speed.
#[derive(Debug, Clone)]
pub struct Player {
    timeline: Timeline,
    overlay: Overlay,
    /// Replay time reached so far.
    clock: Duration,
    /// Number of events applied to `overlay`.
    cursor: usize,
    /// Set by `step_back`: events sharing the clock's timestamp stay undone
    /// until the clock moves.
    held: bool,
    paused: bool,
    /// Speed multiplier (1 = normal, 2 = 2x, etc.)
    speed: u32,
}

impl Player {
    /// A player positioned before the first event.
    pub fn new(timeline: Timeline) -> Self {
        let overlay = Overlay::new(timeline.range());
        Self {
            timeline,
            overlay,
            clock: Duration::ZERO,
            cursor: 0,
            held: false,
            paused: false,
            speed: 1,
        }
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Cell marks for every event applied so far.
    #[inline]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[inline]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Number of events applied.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.timeline.len()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn speed_up(&mut self) {
        self.speed = (self.speed * 2).min(MAX_SPEED);
    }

    pub fn slow_down(&mut self) {
        self.speed = (self.speed / 2).max(1);
    }

    /// Move replay time forward by `dt` (scaled by the speed) and return the
    /// events that became due. Returns nothing while paused.
    pub fn advance(&mut self, dt: Duration) -> &[Event] {
        if self.paused || self.is_done() {
            return &[];
        }
        let dt = dt.saturating_mul(self.speed);
        if self.held && dt.is_zero() {
            return &[];
        }
        self.held = false;
        self.clock = self.clock.saturating_add(dt);
        let from = self.cursor;
        let to = self.timeline.due_count(self.clock).max(from);
        self.apply_range(from, to);
        &self.timeline.events()[from..to]
    }

    /// Wall-clock time until the next event is due at the current speed, or
    /// `None` when the replay is finished.
    pub fn time_to_next(&self) -> Option<Duration> {
        let next = self.timeline.events().get(self.cursor)?;
        Some(next.at.saturating_sub(self.clock) / self.speed)
    }

    /// Jump to replay time `t`, rebuilding the overlay.
    pub fn seek(&mut self, t: Duration) {
        self.clock = t.min(self.timeline.duration());
        self.cursor = self.timeline.due_count(self.clock);
        self.held = false;
        self.rebuild();
    }

    /// Apply exactly one more event, regardless of time. The clock jumps to
    /// that event's time.
    pub fn step_forward(&mut self) -> Option<&Event> {
        if self.is_done() {
            return None;
        }
        let i = self.cursor;
        self.held = false;
        self.apply_range(i, i + 1);
        self.clock = self.clock.max(self.timeline.events()[i].at);
        self.timeline.events().get(i)
    }

    /// Undo the last applied event. Returns the event that was undone.
    ///
    /// The clock moves back to the previous event's time. The undone event is
    /// not replayed until the clock moves forward again.
    pub fn step_back(&mut self) -> Option<&Event> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.held = true;
        self.clock = match self.cursor {
            0 => Duration::ZERO,
            n => self.timeline.events()[n - 1].at,
        };
        self.rebuild();
        self.timeline.events().get(self.cursor)
    }

    /// Back to the beginning. Pause and speed settings are kept.
    pub fn restart(&mut self) {
        self.clock = Duration::ZERO;
        self.cursor = 0;
        self.held = false;
        self.overlay.clear();
    }

    fn apply_range(&mut self, from: usize, to: usize) {
        for ev in &self.timeline.events()[from..to] {
            self.overlay.apply(ev);
        }
        self.cursor = to;
    }

    fn rebuild(&mut self) {
        self.overlay = Overlay::from_events(
            self.timeline.range(),
            &self.timeline.events()[..self.cursor],
        );
    }
}

#[cfg(test)]
mod tests {
    use pathviz_core::{Grid, Point};
    use pathviz_paths::search_grid;

    use super::*;
    use crate::overlay::Mark;
    use crate::policy::ReplayPolicy;
    use crate::timeline::EventKind;

    fn player(layout: &str) -> Player {
        let g = Grid::parse(layout).unwrap();
        let s = search_grid(&g);
        Player::new(Timeline::new(&s, &s.path(), &ReplayPolicy::default()))
    }

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn advance_returns_newly_due_events() {
        let mut p = player("S.F");
        assert_eq!(p.advance(Duration::ZERO).len(), 1);
        assert_eq!(p.advance(MS * 5).len(), 0);
        let evs = p.advance(MS * 20);
        assert_eq!(evs.len(), 2);
        assert_eq!(evs[1].pos, Point::new(0, 2));
        assert_eq!(p.advance(MS * 10)[0].kind, EventKind::Path);
        assert!(!p.is_done());
        assert_eq!(p.advance(Duration::from_secs(1)).len(), 2);
        assert!(p.is_done());
        assert!(p.advance(MS).is_empty());
    }

    #[test]
    fn frame_by_frame_matches_timeline_overlay() {
        let mut p = player(
            "\
S.#..
..#.F
.....
",
        );
        let mut t = Duration::ZERO;
        while !p.is_done() {
            p.advance(MS * 7);
            t += MS * 7;
            assert_eq!(p.overlay(), &p.timeline().overlay_at(t));
        }
    }

    #[test]
    fn pause_stops_time() {
        let mut p = player("S.F");
        p.pause();
        assert!(p.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(p.clock(), Duration::ZERO);
        p.toggle_pause();
        assert_eq!(p.advance(Duration::ZERO).len(), 1);
    }

    #[test]
    fn speed_scales_time_and_is_clamped() {
        let mut p = player("S.F");
        p.speed_up();
        assert_eq!(p.speed(), 2);
        p.advance(MS * 10);
        assert_eq!(p.clock(), MS * 20);
        assert_eq!(p.position(), 3);
        for _ in 0..10 {
            p.speed_up();
        }
        assert_eq!(p.speed(), MAX_SPEED);
        for _ in 0..10 {
            p.slow_down();
        }
        assert_eq!(p.speed(), 1);
    }

    #[test]
    fn time_to_next_accounts_for_speed() {
        let mut p = player("S.F");
        p.advance(Duration::ZERO);
        assert_eq!(p.time_to_next(), Some(MS * 10));
        p.speed_up();
        assert_eq!(p.time_to_next(), Some(MS * 5));
        p.advance(Duration::from_secs(5));
        assert_eq!(p.time_to_next(), None);
    }

    #[test]
    fn seek_and_steps() {
        let mut p = player("S.F");
        p.seek(MS * 35);
        assert_eq!(p.position(), 4);
        assert_eq!(p.overlay().get(Point::new(0, 0)), Mark::Path);

        let undone = p.step_back().copied().unwrap();
        assert_eq!(undone.kind, EventKind::Path);
        assert_eq!(p.overlay().get(Point::new(0, 0)), Mark::Visited);
        assert_eq!(p.clock(), MS * 20);

        assert_eq!(p.step_forward().map(|e| e.pos), Some(Point::new(0, 0)));
        assert_eq!(p.position(), 4);

        p.seek(Duration::from_secs(60));
        assert!(p.is_done());
        assert_eq!(p.clock(), p.timeline().duration());
        assert!(p.step_forward().is_none());
    }

    #[test]
    fn step_back_holds_events_sharing_a_timestamp() {
        let g = Grid::parse("S...F").unwrap();
        let s = search_grid(&g);
        let policy = ReplayPolicy::default().scaled(0.0);
        let mut p = Player::new(Timeline::new(&s, &s.path(), &policy));
        let n = p.timeline().len();
        assert_eq!(p.advance(Duration::ZERO).len(), n);

        p.step_back();
        assert_eq!(p.position(), n - 1);
        assert!(p.advance(Duration::ZERO).is_empty());
        assert_eq!(p.position(), n - 1);

        p.pause();
        p.resume();
        assert!(p.advance(Duration::ZERO).is_empty());
        assert_eq!(p.advance(MS).len(), 1);
        assert!(p.is_done());
    }

    #[test]
    fn restart_clears_overlay() {
        let mut p = player("S.F");
        p.advance(Duration::from_secs(1));
        p.restart();
        assert_eq!(p.position(), 0);
        assert_eq!(p.overlay().count(Mark::Idle), 3);
        assert!(p.step_back().is_none());
    }
}
