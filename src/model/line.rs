//! Polylines

use super::{Bound, Point};
use std::ops::{Deref, DerefMut};

/// An ordered, open sequence of points
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString(pub Vec<Point>);

impl LineString {
    /// Create a line string from its points
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns true if the first and last points are equal
    pub fn is_closed(&self) -> bool {
        matches!((self.0.first(), self.0.last()), (Some(a), Some(b)) if a == b)
    }

    /// Bounding box of the points
    pub fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.0)
    }

    /// Consume the line string and return its points
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for LineString {
    type Target = Vec<Point>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LineString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Point>> for LineString {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl From<Vec<(f64, f64)>> for LineString {
    fn from(coords: Vec<(f64, f64)>) -> Self {
        Self(coords.into_iter().map(Point::from).collect())
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A set of line strings
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    /// Create a multi line string from its lines
    pub fn new(lines: Vec<LineString>) -> Self {
        Self(lines)
    }

    /// Bounding box of every line
    pub fn bound(&self) -> Option<Bound> {
        Bound::from_points(self.0.iter().flat_map(|l| l.iter()))
    }
}

impl Deref for MultiLineString {
    type Target = Vec<LineString>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MultiLineString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(lines: Vec<LineString>) -> Self {
        Self(lines)
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<I: IntoIterator<Item = LineString>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A set of points
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPoint(pub Vec<Point>);

impl MultiPoint {
    /// Create a multi point from its points
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Bounding box of the points
    pub fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.0)
    }
}

impl Deref for MultiPoint {
    type Target = Vec<Point>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MultiPoint {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
