//! Obstacle data suppliers for [`Grid::create`].
//!
//! A [`PassabilitySource`] is asked once per coordinate, in row-major order.
//! Three suppliers are provided:
//! - [`AllPassable`]: an open field.
//! - [`RandomObstacles`]: each cell blocked with a fixed probability.
//! - [`AsciiMap`]: a fixed map read from text (`.` floor, `#` wall).
//!
//! Any `FnMut(Point) -> Passability` closure is also a source.

use std::str::FromStr;

use rand::{Rng, RngExt};

use crate::cell::Passability;
use crate::error::MapError;
use crate::geom::Point;
use crate::grid::Grid;

/// Supplies the passability of each cell at grid construction.
pub trait PassabilitySource {
    /// Passability of the cell at `p`.
    fn passability(&mut self, p: Point) -> Passability;
}

impl<F> PassabilitySource for F
where
    F: FnMut(Point) -> Passability,
{
    fn passability(&mut self, p: Point) -> Passability {
        self(p)
    }
}

/// Every cell is passable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPassable;

impl PassabilitySource for AllPassable {
    fn passability(&mut self, _p: Point) -> Passability {
        Passability::Passable
    }
}

// ---------------------------------------------------------------------------
// Random obstacles
// ---------------------------------------------------------------------------

/// Default share of blocked cells, in percent.
pub const DEFAULT_OBSTACLE_PCT: u32 = 20;

/// Blocks each cell independently with probability `obstacle_pct / 100`.
#[derive(Debug, Clone)]
pub struct RandomObstacles<R: Rng> {
    rng: R,
    obstacle_pct: u32,
}

impl<R: Rng> RandomObstacles<R> {
    /// Random obstacles at [`DEFAULT_OBSTACLE_PCT`].
    pub fn new(rng: R) -> Self {
        Self::with_percent(rng, DEFAULT_OBSTACLE_PCT)
    }

    /// Random obstacles at `obstacle_pct` percent, clamped to 100.
    pub fn with_percent(rng: R, obstacle_pct: u32) -> Self {
        Self {
            rng,
            obstacle_pct: obstacle_pct.min(100),
        }
    }

    pub fn obstacle_pct(&self) -> u32 {
        self.obstacle_pct
    }

    /// Give back the generator.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> PassabilitySource for RandomObstacles<R> {
    fn passability(&mut self, _p: Point) -> Passability {
        if self.rng.random_range(0..100u32) < self.obstacle_pct {
            Passability::Impassable
        } else {
            Passability::Passable
        }
    }
}

// ---------------------------------------------------------------------------
// ASCII map
// ---------------------------------------------------------------------------

/// A fixed obstacle map parsed from text.
///
/// One line per row. `.` and space are passable, `#` is impassable. Trailing
/// blank lines and `\r` line endings are ignored; every row must have the
/// same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiMap {
    cells: Vec<Passability>,
    width: usize,
    height: usize,
}

impl AsciiMap {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Build a grid with the map's dimensions.
    pub fn to_grid(&self) -> Result<Grid, MapError> {
        let mut src = self.clone();
        Ok(Grid::create(self.width(), self.height(), &mut src)?)
    }
}

impl FromStr for AsciiMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let rows = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(MapError::Empty),
        };

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Passability::from_glyph(ch).ok_or(MapError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(p);
            }
        }
        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }
}

impl PassabilitySource for AsciiMap {
    /// Points outside the map are impassable.
    fn passability(&mut self, p: Point) -> Passability {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return Passability::Impassable;
        }
        self.cells[p.y as usize * self.width + p.x as usize]
    }
}

impl Grid {
    /// Parse an ASCII map and build a grid from it.
    pub fn from_ascii(s: &str) -> Result<Grid, MapError> {
        s.parse::<AsciiMap>()?.to_grid()
    }
}
