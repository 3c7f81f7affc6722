//! A* shortest-path search on gridstar grids.
//!
//! A [`Pathfinder`] searches a [`gridstar_core::Grid`] for a lowest-cost
//! 8-way path between two cells. Orthogonal steps cost 1, diagonal steps √2.
//! The grid is only borrowed; all per-search state (costs, predecessors,
//! open/closed sets) lives in the pathfinder and is reset by every call, so
//! searches never influence each other and one grid can be searched from
//! several threads at once.
//!
//! ```
//! use gridstar_core::{Grid, Point};
//! use gridstar_paths::Pathfinder;
//!
//! let grid = Grid::from_ascii("...\n.#.\n...").unwrap();
//! let mut pf = Pathfinder::new();
//! let path = pf.find_path(&grid, Point::new(0, 1), Point::new(2, 1)).unwrap();
//! assert_eq!(path.len(), 3);
//! ```
//!
//! # Heuristics
//!
//! | [`Heuristic`] | Optimal with diagonals |
//! |---|---|
//! | `Manhattan` (default) | no |
//! | `Octile` | yes |
//! | `Chebyshev` | yes |
//! | `Zero` | yes (Dijkstra) |

mod astar;
mod config;
mod distance;
mod error;
mod path;
mod scratch;

pub use astar::{Pathfinder, SearchState};
pub use config::{Diagonals, Heuristic, ParseConfigError, PathfinderConfig};
pub use distance::{
    DIAGONAL_COST, ORTHOGONAL_COST, chebyshev, manhattan, octile, path_cost, step_cost,
};
pub use error::{Endpoint, PathError};
pub use path::Path;
