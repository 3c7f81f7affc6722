//! The [`Grid`] type — a fixed-size 2D obstacle map.
//!
//! A `Grid` owns one [`Cell`] per coordinate in row-major order. Passability
//! is decided once, at construction, by a [`PassabilitySource`] and never
//! changes afterwards, so a grid can be shared freely between threads.

use std::fmt;

use crate::cell::{Cell, Passability};
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::source::PassabilitySource;

/// A `width × height` grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid, asking `source` for the passability of every cell in
    /// row-major order.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if `width` or `height` is
    /// not positive.
    pub fn create<S>(width: i32, height: i32, source: &mut S) -> Result<Self, GridError>
    where
        S: PassabilitySource + ?Sized,
    {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        let cells: Vec<Cell> = bounds
            .iter()
            .map(|p| Cell::new(p, source.passability(p)))
            .collect();
        let grid = Self { cells, bounds };
        log::debug!(
            "created {}x{} grid, {} impassable cells",
            width,
            height,
            grid.count(Passability::Impassable)
        );
        Ok(grid)
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a successfully created grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Row-major index of `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Inverse of [`index`](Grid::index). `idx` must be below [`len`](Grid::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        self.index(p)
            .map(|i| &self.cells[i])
            .ok_or_else(|| self.out_of_bounds(p))
    }

    /// Whether the cell at `p` is passable.
    pub fn is_passable(&self, p: Point) -> Result<bool, GridError> {
        self.cell_at(p).map(Cell::is_passable)
    }

    /// Like [`is_passable`](Grid::is_passable) but reports points outside the
    /// grid as not passable.
    #[inline]
    pub fn passable_at(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i].is_passable())
    }

    /// Count cells with the given passability.
    pub fn count(&self, passability: Passability) -> usize {
        self.cells
            .iter()
            .filter(|c| c.passability == passability)
            .count()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub(crate) fn out_of_bounds(&self, pos: Point) -> GridError {
        GridError::OutOfBounds {
            pos,
            width: self.width(),
            height: self.height(),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    /// One text line per row: `.` passable, `#` impassable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.passability.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let w = self.width() as usize;
        let mut seq = serializer.serialize_seq(Some(self.height() as usize))?;
        for row in self.cells.chunks(w) {
            let line: String = row.iter().map(|c| c.passability.glyph()).collect();
            seq.serialize_element(&line)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        Grid::from_ascii(&rows.join("\n")).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::AllPassable;

    #[test]
    fn create_and_size() {
        let g = Grid::create(4, 3, &mut AllPassable).unwrap();
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert_eq!(g.count(Passability::Passable), 12);
    }

    #[test]
    fn create_rejects_non_positive_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
            assert_eq!(
                Grid::create(w, h, &mut AllPassable),
                Err(GridError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn one_cell_per_coordinate() {
        let g = Grid::create(5, 4, &mut AllPassable).unwrap();
        for p in g.bounds() {
            let c = g.cell_at(p).unwrap();
            assert_eq!(c.pos, p);
            assert_eq!(g.point(g.index(p).unwrap()), p);
        }
    }

    #[test]
    fn cell_at_strict_bounds() {
        let g = Grid::create(5, 5, &mut AllPassable).unwrap();
        assert!(g.cell_at(Point::new(4, 4)).is_ok());
        for p in [
            Point::new(5, 0),
            Point::new(0, 5),
            Point::new(5, 5),
            Point::new(-1, 0),
        ] {
            assert_eq!(
                g.cell_at(p),
                Err(GridError::OutOfBounds {
                    pos: p,
                    width: 5,
                    height: 5
                })
            );
            assert!(g.is_passable(p).is_err());
            assert!(!g.passable_at(p));
        }
    }

    #[test]
    fn source_sees_every_point_once() {
        let mut seen = Vec::new();
        let mut src = |p: Point| {
            seen.push(p);
            Passability::from(p.x != 1)
        };
        let g = Grid::create(3, 2, &mut src).unwrap();
        assert_eq!(seen.len(), 6);
        assert_eq!(g.is_passable(Point::new(1, 0)), Ok(false));
        assert_eq!(g.is_passable(Point::new(2, 1)), Ok(true));
    }

    #[test]
    fn display_rows() {
        let mut src = |p: Point| Passability::from(p != Point::new(1, 1));
        let g = Grid::create(3, 2, &mut src).unwrap();
        assert_eq!(g.to_string(), "...\n.#.");
    }
}
