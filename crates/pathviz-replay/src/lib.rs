//! Deterministic replay of pathviz searches.
//!
//! A finished [`Search`](pathviz_paths::Search) is turned into a
//! [`Timeline`]: a finite list of time-stamped [`Event`]s, visits first and
//! then the shortest path. A [`Player`] walks the timeline at whatever pace
//! the caller drives it (frame loop, timer or direct iteration) and keeps an
//! [`Overlay`] of per-cell [`Mark`]s for rendering.
//!
//! Timing comes from a [`ReplayPolicy`]; the default is 10 ms per visit step
//! and 50 ms per path step.

mod overlay;
mod player;
mod policy;
mod timeline;

pub use overlay::{Mark, Overlay};
pub use player::{MAX_SPEED, Player};
pub use policy::{DEFAULT_PATH_STEP, DEFAULT_VISIT_STEP, ReplayPolicy};
pub use timeline::{Event, EventKind, Timeline};
