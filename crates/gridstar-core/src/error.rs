//! Errors returned by grid construction, lookup and map parsing.

use thiserror::Error;

use crate::geom::Point;

/// Errors from [`Grid`](crate::Grid) construction and lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was zero or negative.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// The coordinate lies outside `[0, width) × [0, height)`.
    #[error("coordinate {pos} is outside the {width}x{height} grid")]
    OutOfBounds { pos: Point, width: i32, height: i32 },
}

/// Errors from parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map contains no rows")]
    Empty,
    /// A row does not have the same width as the first one.
    #[error("map line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("map contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// The parsed map could not be turned into a grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}
