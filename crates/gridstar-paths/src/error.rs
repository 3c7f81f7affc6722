use std::fmt;

use gridstar_core::Point;
use thiserror::Error;

/// Which end of a path request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Why [`Pathfinder::find_path`](crate::Pathfinder::find_path) returned no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// An endpoint lies outside `[0, width) × [0, height)`.
    #[error("{endpoint} {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        pos: Point,
        width: i32,
        height: i32,
    },
    /// An endpoint is an impassable cell.
    #[error("{endpoint} {pos} is blocked")]
    BlockedEndpoint { endpoint: Endpoint, pos: Point },
    /// The open set ran out before the goal was reached.
    #[error("no path from {start} to {goal}")]
    NoPathFound { start: Point, goal: Point },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = PathError::BlockedEndpoint {
            endpoint: Endpoint::Start,
            pos: Point::new(1, 2),
        };
        assert_eq!(e.to_string(), "start (1, 2) is blocked");
        let e = PathError::OutOfBounds {
            endpoint: Endpoint::Goal,
            pos: Point::new(5, 0),
            width: 5,
            height: 5,
        };
        assert_eq!(e.to_string(), "goal (5, 0) is outside the 5x5 grid");
    }
}
