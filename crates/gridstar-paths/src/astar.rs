use gridstar_core::{Grid, Point};

use crate::config::PathfinderConfig;
use crate::distance::step_cost;
use crate::error::{Endpoint, PathError};
use crate::path::Path;
use crate::scratch::{NO_PARENT, Scratch};

/// Where the most recent [`Pathfinder::find_path`] call ended.
///
/// `Validating` and `Searching` are only held while `find_path` runs, so
/// [`Pathfinder::state`] reports `Idle` or one of the terminal states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// No search has run yet.
    #[default]
    Idle,
    /// Endpoints are being checked.
    Validating,
    /// The open set is being expanded.
    Searching,
    PathFound,
    NoPathFound,
    /// Validation failed: an endpoint was out of bounds or blocked.
    Rejected,
}

impl SearchState {
    /// Whether a search ended in this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::PathFound | Self::NoPathFound | Self::Rejected)
    }
}

/// A* path search over a [`Grid`].
///
/// The pathfinder owns the transient per-cell records (costs, predecessor,
/// open/closed membership) and reuses them between calls; the grid is only
/// read. Use one `Pathfinder` per thread to search a shared grid in
/// parallel.
#[derive(Debug, Default)]
pub struct Pathfinder {
    config: PathfinderConfig,
    scratch: Scratch,
    state: SearchState,
}

impl Pathfinder {
    /// A pathfinder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PathfinderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> PathfinderConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PathfinderConfig) {
        self.config = config;
    }

    /// State reached by the most recent search.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Find a lowest-cost path from `start` to `goal`.
    ///
    /// Orthogonal steps cost 1 and diagonal steps √2. The returned path
    /// includes both endpoints; `start == goal` yields a one-cell path.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<Path, PathError> {
        self.state = SearchState::Validating;
        if let Err(err) = validate(grid, start, goal) {
            log::debug!("rejected path request {start} -> {goal}: {err}");
            self.state = SearchState::Rejected;
            return Err(err);
        }
        if start == goal {
            self.state = SearchState::PathFound;
            return Ok(Path::new(vec![start], 0.0, 0));
        }

        self.state = SearchState::Searching;
        let result = self.search(grid, start, goal);
        self.state = match result {
            Ok(_) => SearchState::PathFound,
            Err(_) => SearchState::NoPathFound,
        };
        result
    }

    fn search(&mut self, grid: &Grid, start: Point, goal: Point) -> Result<Path, PathError> {
        // Endpoints were validated, so both indices exist.
        let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
            return Err(PathError::NoPathFound { start, goal });
        };
        let PathfinderConfig {
            heuristic,
            diagonals,
        } = self.config;
        let cur_gen = self.scratch.begin(grid.len());

        {
            let node = &mut self.scratch.nodes[start_idx];
            node.g = 0.0;
            node.h = 0.0;
            node.f = 0.0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = false;
        }

        let mut current = start_idx;
        let mut expanded = 0;
        loop {
            expanded += 1;
            let cp = grid.point(current);
            let current_g = self.scratch.nodes[current].g;

            for np in cp.neighbors_8() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if !grid.passable_at(np) || !diagonals.allows(grid, cp, np) {
                    continue;
                }
                let tentative_g = current_g + step_cost(cp, np);

                if self.scratch.visited(ni) {
                    let n = &mut self.scratch.nodes[ni];
                    if !n.open || tentative_g >= n.g {
                        continue;
                    }
                    n.g = tentative_g;
                    n.f = tentative_g + n.h;
                    n.parent = current;
                } else {
                    let n = &mut self.scratch.nodes[ni];
                    n.generation = cur_gen;
                    n.g = tentative_g;
                    n.h = heuristic.estimate(np, goal);
                    n.f = n.g + n.h;
                    n.parent = current;
                }
                self.scratch.push_open(ni);
            }

            let Some(next) = self.scratch.pop_open() else {
                log::debug!("no path {start} -> {goal} after expanding {expanded} cells");
                return Err(PathError::NoPathFound { start, goal });
            };
            log::trace!(
                "closed {} g={:.3} f={:.3}",
                grid.point(next),
                self.scratch.nodes[next].g,
                self.scratch.nodes[next].f
            );
            current = next;
            if current == goal_idx {
                break;
            }
        }

        let mut points = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            points.push(grid.point(ci));
            ci = self.scratch.nodes[ci].parent;
        }
        points.reverse();
        let cost = self.scratch.nodes[goal_idx].g;
        log::debug!(
            "path {start} -> {goal}: {} cells, cost {cost:.3}, {expanded} expanded",
            points.len()
        );
        Ok(Path::new(points, cost, expanded))
    }
}

/// Bounds of both endpoints first, then their passability.
fn validate(grid: &Grid, start: Point, goal: Point) -> Result<(), PathError> {
    let endpoints = [(Endpoint::Start, start), (Endpoint::Goal, goal)];
    for (endpoint, pos) in endpoints {
        if !grid.contains(pos) {
            return Err(PathError::OutOfBounds {
                endpoint,
                pos,
                width: grid.width(),
                height: grid.height(),
            });
        }
    }
    for (endpoint, pos) in endpoints {
        if !grid.passable_at(pos) {
            return Err(PathError::BlockedEndpoint { endpoint, pos });
        }
    }
    Ok(())
}
