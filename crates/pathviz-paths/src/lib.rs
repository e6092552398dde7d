//! Shortest-path search over pathviz grids.
//!
//! The engine runs a uniform-cost (Dijkstra) search and reports two things:
//!
//! - the **visitation order**, every cell in the order it was settled, which
//!   is the history an animation replays ([`Search::order`]);
//! - the **shortest path**, rebuilt from predecessor links
//!   ([`reconstruct_path`]), as an explicit [`PathOutcome`].
//!
//! Search metadata lives in a [`SearchState`] owned by the returned
//! [`Search`]; the grid itself is only borrowed.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//!
//! [`Grid`](pathviz_core::Grid) implements both with unit edge costs.

mod dijkstra;
mod distance;
mod error;
mod grid_pather;
mod path;
mod state;
mod traits;

pub use dijkstra::{Search, search};
pub use distance::manhattan;
pub use error::SearchError;
pub use grid_pather::search_grid;
pub use path::{PathOutcome, reconstruct_path};
pub use state::{SearchState, UNREACHABLE};
pub use traits::{Pather, WeightedPather};
