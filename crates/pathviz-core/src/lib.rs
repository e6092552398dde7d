//! **pathviz-core**: grid model for the pathviz shortest-path visualizer.
//!
//! This crate provides the types shared across the *pathviz* workspace:
//! geometry primitives, the [`Grid`] of free and wall cells with its start
//! and finish markers, grid configuration and the editing primitives an
//! interactive editor needs (wall toggling, marker relocation, reset).

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
mod scatter;

pub use cell::{Cell, MarkerKind};
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
