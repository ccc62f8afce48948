//! Rings, polygons and multi-polygons

use super::{Bound, LineString, Point};
use std::ops::{Deref, DerefMut};

/// Winding direction of a ring
///
/// Smart clipping expects shells wound in the requested orientation and holes
/// wound the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Counter-clockwise (positive signed area)
    Ccw = 1,
    /// Clockwise (negative signed area)
    Cw = -1,
}

impl Orientation {
    /// The opposite winding direction
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Ccw => Orientation::Cw,
            Orientation::Cw => Orientation::Ccw,
        }
    }
}

/// A line string expected to be closed (first point == last point)
///
/// Unclosed rings are tolerated by the clippers, which only re-close their
/// output when the input was closed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring(pub Vec<Point>);

impl Ring {
    /// Create a ring from its points
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns true if the first and last points are equal
    pub fn is_closed(&self) -> bool {
        matches!((self.0.first(), self.0.last()), (Some(a), Some(b)) if a == b)
    }

    /// Signed area via the shoelace formula; positive for counter-clockwise
    ///
    /// The closing edge is included even when the ring is not explicitly closed.
    pub fn signed_area(&self) -> f64 {
        let n = self.0.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.0[i];
            let b = self.0[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Winding direction, or `None` for a degenerate ring with zero area
    pub fn orientation(&self) -> Option<Orientation> {
        let area = self.signed_area();
        if area > 0.0 {
            Some(Orientation::Ccw)
        } else if area < 0.0 {
            Some(Orientation::Cw)
        } else {
            None
        }
    }

    /// Bounding box of the points
    pub fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.0)
    }

    /// Consume the ring and return its points
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for Ring {
    type Target = Vec<Point>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Ring {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl From<Vec<(f64, f64)>> for Ring {
    fn from(coords: Vec<(f64, f64)>) -> Self {
        Self(coords.into_iter().map(Point::from).collect())
    }
}

impl From<LineString> for Ring {
    fn from(line: LineString) -> Self {
        Self(line.0)
    }
}

impl FromIterator<Point> for Ring {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A polygon: ring 0 is the shell, rings 1.. are holes
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon(pub Vec<Ring>);

impl Polygon {
    /// Create a polygon from its rings
    pub fn new(rings: Vec<Ring>) -> Self {
        Self(rings)
    }

    /// Create a polygon with a shell and no holes
    pub fn from_shell(shell: Ring) -> Self {
        Self(vec![shell])
    }

    /// The outer ring
    pub fn shell(&self) -> Option<&Ring> {
        self.0.first()
    }

    /// The inner rings
    pub fn holes(&self) -> &[Ring] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Bounding box of the shell
    pub fn bound(&self) -> Option<Bound> {
        self.shell().and_then(Ring::bound)
    }

    /// Shell area minus hole areas, regardless of winding
    pub fn area(&self) -> f64 {
        let shell = self.shell().map_or(0.0, |r| r.signed_area().abs());
        let holes: f64 = self.holes().iter().map(|r| r.signed_area().abs()).sum();
        shell - holes
    }
}

impl Deref for Polygon {
    type Target = Vec<Ring>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Polygon {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Ring>> for Polygon {
    fn from(rings: Vec<Ring>) -> Self {
        Self(rings)
    }
}

/// A set of polygons with no ordering guarantee
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    /// Create a multi polygon from its polygons
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    /// Bounding box of every shell
    pub fn bound(&self) -> Option<Bound> {
        Bound::from_points(self.0.iter().filter_map(Polygon::shell).flat_map(|r| r.iter()))
    }

    /// Total area of all polygons
    pub fn area(&self) -> f64 {
        self.0.iter().map(Polygon::area).sum()
    }
}

impl Deref for MultiPolygon {
    type Target = Vec<Polygon>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MultiPolygon {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        Ring::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])
    }

    #[test]
    fn test_ring_closed() {
        assert!(square().is_closed());
        assert!(!Ring::from(vec![(0.0, 0.0), (1.0, 0.0)]).is_closed());
        assert!(!Ring::default().is_closed());
    }

    #[test]
    fn test_ring_signed_area_and_orientation() {
        let ring = square();
        assert_eq!(ring.signed_area(), 16.0);
        assert_eq!(ring.orientation(), Some(Orientation::Ccw));

        let mut reversed = ring.clone();
        reversed.reverse();
        assert_eq!(reversed.signed_area(), -16.0);
        assert_eq!(reversed.orientation(), Some(Orientation::Cw));
    }

    #[test]
    fn test_polygon_area_with_hole() {
        let hole = Ring::from(vec![(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]);
        let polygon = Polygon::new(vec![square(), hole]);
        assert_eq!(polygon.holes().len(), 1);
        assert_eq!(polygon.area(), 15.0);
    }

    #[test]
    fn test_empty_polygon_accessors() {
        let polygon = Polygon::default();
        assert!(polygon.shell().is_none());
        assert!(polygon.holes().is_empty());
        assert!(polygon.bound().is_none());
    }
}
