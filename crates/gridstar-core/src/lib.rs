//! **gridstar-core** — the grid model for gridstar.
//!
//! This crate provides the types a path search runs on: geometry primitives,
//! cells with a fixed passability, the immutable [`Grid`], and the
//! [`PassabilitySource`]s that supply obstacle data when a grid is built.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod source;

pub use cell::{Cell, Passability};
pub use error::{GridError, MapError};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use source::{AllPassable, AsciiMap, DEFAULT_OBSTACLE_PCT, PassabilitySource, RandomObstacles};
