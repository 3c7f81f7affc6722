use std::fmt;

use gridstar_core::{Cell, Grid, Point};

/// A path found by [`Pathfinder::find_path`](crate::Pathfinder::find_path).
///
/// Points run from start to goal, both included, and are never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathRepr"))]
pub struct Path {
    points: Vec<Point>,
    cost: f64,
    expanded: usize,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: f64, expanded: usize) -> Self {
        debug_assert!(!points.is_empty());
        Self {
            points,
            cost,
            expanded,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Sum of the step costs along the path.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells whose neighbours were examined during the search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points.first().copied().unwrap_or_default()
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.points.last().copied().unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The grid cells along the path.
    pub fn cells<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = &'a Cell> + 'a {
        self.points.iter().filter_map(move |&p| grid.cell_at(p).ok())
    }
}

/// Unchecked wire form of a [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRepr {
    points: Vec<Point>,
    cost: f64,
    expanded: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<PathRepr> for Path {
    type Error = &'static str;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        if repr.points.is_empty() {
            return Err("a path needs at least one point");
        }
        Ok(Self::new(repr.points, repr.cost, repr.expanded))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_json() {
        let path = Path::new(vec![Point::new(0, 0), Point::new(1, 1)], 1.5, 2);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
        assert_eq!(back.start(), Point::new(0, 0));
        assert_eq!(back.goal(), Point::new(1, 1));
    }

    #[test]
    fn empty_points_rejected() {
        let res = serde_json::from_str::<Path>(r#"{"points":[],"cost":0.0,"expanded":0}"#);
        let err = res.unwrap_err();
        assert!(err.to_string().contains("at least one point"));
    }

    #[test]
    fn endpoint_json() {
        use crate::Endpoint;
        let json = serde_json::to_string(&Endpoint::Goal).unwrap();
        let back: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Endpoint::Goal);
    }
}
