//! Points and axis-aligned bounds

use super::{Orientation, Ring};

/// A 2D point with x, y coordinates
///
/// Points compare by exact floating-point equality.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum corners
///
/// A bound whose `min` exceeds `max` on either axis is empty. Clipping against
/// an empty bound always produces an empty result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    /// Lower-left corner
    pub min: Point,
    /// Upper-right corner
    pub max: Point,
}

impl Bound {
    /// Create a bound from its two corners
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a bound from raw coordinates
    pub const fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Smallest bound covering every point, or `None` for no points
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bound = Bound::new(first, first);
        for p in iter {
            bound.extend(*p);
        }
        Some(bound)
    }

    /// Grow the bound to include a point
    pub fn extend(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest bound covering both bounds
    pub fn union(&self, other: &Bound) -> Bound {
        let mut out = *self;
        out.extend(other.min);
        out.extend(other.max);
        out
    }

    /// Returns true if `min` exceeds `max` on either axis
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Returns true if the point lies inside or on the boundary
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns true if the two bounds share at least one point
    pub fn intersects(&self, other: &Bound) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Returns true if this bound lies entirely inside `other` (boundary allowed)
    pub fn is_within(&self, other: &Bound) -> bool {
        other.contains(self.min) && other.contains(self.max)
    }

    /// The overlapping region of two bounds, `None` if they are disjoint
    pub fn intersection(&self, other: &Bound) -> Option<Bound> {
        let out = Bound::from_coords(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        );
        (!out.is_empty()).then_some(out)
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// The bound's outline as a closed ring starting at `min`
    pub fn to_ring(&self, orientation: Orientation) -> Ring {
        let (min, max) = (self.min, self.max);
        let mut ring = Ring::new(vec![
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
            min,
        ]);
        if orientation == Orientation::Cw {
            ring.reverse();
        }
        ring
    }
}
