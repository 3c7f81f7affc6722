//! Search configuration: heuristic and diagonal movement policy.

use std::fmt;
use std::str::FromStr;

use gridstar_core::{Grid, Point};
use thiserror::Error;

use crate::distance;

/// Estimate of the remaining cost from a cell to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Heuristic {
    /// `|dx| + |dy|`. Overestimates diagonal moves, so paths are not always
    /// cost-optimal when diagonals are allowed.
    #[default]
    Manhattan,
    /// Exact open-field 8-way cost. Admissible and consistent.
    Octile,
    /// `max(|dx|, |dy|)`. Admissible and consistent.
    Chebyshev,
    /// Always 0; the search degrades to Dijkstra.
    Zero,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Octile,
        Heuristic::Chebyshev,
        Heuristic::Zero,
    ];

    /// Heuristic estimate from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Manhattan => f64::from(distance::manhattan(from, to)),
            Self::Octile => distance::octile(from, to),
            Self::Chebyshev => f64::from(distance::chebyshev(from, to)),
            Self::Zero => 0.0,
        }
    }

    /// Whether the estimate never exceeds the true remaining cost under
    /// `diagonals`, which makes found paths cost-optimal.
    pub fn is_admissible(self, diagonals: Diagonals) -> bool {
        match self {
            Self::Manhattan => diagonals == Diagonals::Never,
            Self::Octile | Self::Chebyshev | Self::Zero => true,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Octile => "octile",
            Self::Chebyshev => "chebyshev",
            Self::Zero => "zero",
        }
    }
}

/// Which diagonal steps the search may take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Diagonals {
    /// Any diagonal step onto a passable cell, even between two walls.
    #[default]
    Always,
    /// A diagonal step needs both orthogonally adjacent cells passable.
    NoCornerCutting,
    /// Orthogonal steps only.
    Never,
}

impl Diagonals {
    pub const ALL: [Diagonals; 3] = [
        Diagonals::Always,
        Diagonals::NoCornerCutting,
        Diagonals::Never,
    ];

    /// Whether the step from `from` to the adjacent `to` is allowed on `grid`.
    /// Passability of `to` itself is checked by the caller.
    #[inline]
    pub fn allows(self, grid: &Grid, from: Point, to: Point) -> bool {
        if !from.is_diagonal_step(to) {
            return true;
        }
        match self {
            Self::Always => true,
            Self::NoCornerCutting => {
                grid.passable_at(Point::new(to.x, from.y))
                    && grid.passable_at(Point::new(from.x, to.y))
            }
            Self::Never => false,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::NoCornerCutting => "no-corner-cutting",
            Self::Never => "never",
        }
    }
}

/// Options of a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    pub heuristic: Heuristic,
    pub diagonals: Diagonals,
}

impl PathfinderConfig {
    /// Set the heuristic (builder).
    #[inline]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the diagonal policy (builder).
    #[inline]
    pub const fn with_diagonals(mut self, diagonals: Diagonals) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// Whether paths found with this configuration are cost-optimal.
    pub fn is_optimal(&self) -> bool {
        self.heuristic.is_admissible(self.diagonals)
    }
}

/// Unknown name given for a [`Heuristic`] or [`Diagonals`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} \u{201c}{name}\u{201d}, expected one of: {expected}")]
pub struct ParseConfigError {
    kind: &'static str,
    name: String,
    expected: String,
}

fn parse_named<T: Copy>(
    kind: &'static str,
    s: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, ParseConfigError> {
    let wanted = s.trim().to_ascii_lowercase();
    all.iter()
        .copied()
        .find(|&v| name(v) == wanted)
        .ok_or_else(|| ParseConfigError {
            kind,
            name: s.to_string(),
            expected: all.iter().map(|&v| name(v)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for Heuristic {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("heuristic", s, &Self::ALL, Self::name)
    }
}

impl FromStr for Diagonals {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("diagonal policy", s, &Self::ALL, Self::name)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Diagonals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_json() {
        let c = PathfinderConfig::default()
            .with_heuristic(Heuristic::Octile)
            .with_diagonals(Diagonals::NoCornerCutting);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"heuristic":"octile","diagonals":"no-corner-cutting"}"#);
        let back: PathfinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
        let partial: PathfinderConfig = serde_json::from_str(r#"{"heuristic":"zero"}"#).unwrap();
        assert_eq!(partial.diagonals, Diagonals::Always);
    }
}
