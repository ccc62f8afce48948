//! Geometry enum for type-dispatched clipping

use super::{Bound, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Ring};

/// Any geometry the clippers understand
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// A single point
    Point(Point),
    /// A set of points
    MultiPoint(MultiPoint),
    /// An open polyline
    LineString(LineString),
    /// A set of polylines
    MultiLineString(MultiLineString),
    /// A closed ring, treated as a polygon without holes by smart clipping
    Ring(Ring),
    /// A polygon with optional holes
    Polygon(Polygon),
    /// A set of polygons
    MultiPolygon(MultiPolygon),
    /// A heterogeneous set of geometries
    Collection(Collection),
    /// An axis-aligned rectangle
    Bound(Bound),
}

impl Geometry {
    /// Bounding box, or `None` for an empty geometry
    pub fn bound(&self) -> Option<Bound> {
        match self {
            Geometry::Point(p) => Some(Bound::new(*p, *p)),
            Geometry::MultiPoint(mp) => mp.bound(),
            Geometry::LineString(ls) => ls.bound(),
            Geometry::MultiLineString(mls) => mls.bound(),
            Geometry::Ring(r) => r.bound(),
            Geometry::Polygon(p) => p.bound(),
            Geometry::MultiPolygon(mp) => mp.bound(),
            Geometry::Collection(c) => c.bound(),
            Geometry::Bound(b) => (!b.is_empty()).then_some(*b),
        }
    }
}

/// A heterogeneous set of geometries
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection(pub Vec<Geometry>);

impl Collection {
    /// Bounding box of every member
    pub fn bound(&self) -> Option<Bound> {
        self.0
            .iter()
            .filter_map(Geometry::bound)
            .reduce(|a, b| a.union(&b))
    }
}

impl FromIterator<Geometry> for Collection {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

macro_rules! impl_from_geometry {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(g: $variant) -> Self {
                    Geometry::$variant(g)
                }
            }
        )*
    };
}

impl_from_geometry!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Ring,
    Polygon,
    MultiPolygon,
    Collection,
    Bound
);
