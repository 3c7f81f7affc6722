//! The [`Cell`] type — one grid square and whether it can be walked on.

use std::fmt;

use crate::geom::Point;

/// Whether a cell can be entered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Passability {
    #[default]
    Passable,
    Impassable,
}

impl Passability {
    /// ASCII glyph used by map text: `.` passable, `#` impassable.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Passable => '.',
            Self::Impassable => '#',
        }
    }

    /// Parse a map glyph. A space is accepted as passable.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' | ' ' => Some(Self::Passable),
            '#' => Some(Self::Impassable),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Passable)
    }
}

impl From<bool> for Passability {
    /// `true` maps to [`Passability::Passable`].
    fn from(passable: bool) -> Self {
        if passable {
            Self::Passable
        } else {
            Self::Impassable
        }
    }
}

impl fmt::Display for Passability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passable => f.write_str("passable"),
            Self::Impassable => f.write_str("impassable"),
        }
    }
}

/// A grid cell: its coordinates and its passability.
///
/// Cells are created by [`Grid`](crate::Grid) and never change afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub passability: Passability,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Point, passability: Passability) -> Self {
        Self { pos, passability }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn is_passable(&self) -> bool {
        self.passability.is_passable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_round_trip() {
        for p in [Passability::Passable, Passability::Impassable] {
            assert_eq!(Passability::from_glyph(p.glyph()), Some(p));
        }
        assert_eq!(Passability::from_glyph(' '), Some(Passability::Passable));
        assert_eq!(Passability::from_glyph('x'), None);
    }

    #[test]
    fn from_bool() {
        assert_eq!(Passability::from(true), Passability::Passable);
        assert_eq!(Passability::from(false), Passability::Impassable);
    }

    #[test]
    fn cell_accessors() {
        let c = Cell::new(Point::new(4, 2), Passability::Impassable);
        assert_eq!((c.x(), c.y()), (4, 2));
        assert!(!c.is_passable());
    }
}
