//! Point classification and edge intersection
//!
//! An outcode records which of the bound's four half-planes a point lies
//! outside of. At most one x bit and one y bit are ever set, so the only
//! valid values are 0, the four sides and the four corners.

use crate::model::{Bound, Point};
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// Bit set describing a point's position relative to a bound
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    /// Inside (or on the boundary, under the closed classification)
    pub const INSIDE: Outcode = Outcode(0);
    /// Left of `min.x`
    pub const LEFT: Outcode = Outcode(1);
    /// Right of `max.x`
    pub const RIGHT: Outcode = Outcode(2);
    /// Below `min.y`
    pub const BOTTOM: Outcode = Outcode(4);
    /// Above `max.y`
    pub const TOP: Outcode = Outcode(8);
    /// Bottom-left corner region
    pub const BOTTOM_LEFT: Outcode = Outcode(5);
    /// Bottom-right corner region
    pub const BOTTOM_RIGHT: Outcode = Outcode(6);
    /// Top-left corner region
    pub const TOP_LEFT: Outcode = Outcode(9);
    /// Top-right corner region
    pub const TOP_RIGHT: Outcode = Outcode(10);

    /// Raw bit value
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no bit is set
    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the two codes share a bit
    #[inline]
    pub fn intersects(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true if every bit of `other` is set in `self`
    #[inline]
    pub fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true for the four corner codes
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(self.0, 5 | 6 | 9 | 10)
    }
}

impl BitOr for Outcode {
    type Output = Outcode;
    fn bitor(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Outcode;
    fn bitand(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 & rhs.0)
    }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            0 => "INSIDE",
            1 => "LEFT",
            2 => "RIGHT",
            4 => "BOTTOM",
            8 => "TOP",
            5 => "BOTTOM_LEFT",
            6 => "BOTTOM_RIGHT",
            9 => "TOP_LEFT",
            10 => "TOP_RIGHT",
            _ => return write!(f, "Outcode({:#06b})", self.0),
        };
        f.write_str(name)
    }
}

/// Classify a point against a bound
///
/// # Arguments
///
/// * `bound` - The clip rectangle
/// * `p` - The point to classify
/// * `open` - When true, points exactly on the boundary count as outside
///
/// # Returns
///
/// The point's outcode. Under the closed classification the boundary is
/// inside; under the open classification it is outside.
#[inline]
pub fn outcode(bound: &Bound, p: Point, open: bool) -> Outcode {
    if open {
        open_outcode(bound, p)
    } else {
        closed_outcode(bound, p)
    }
}

/// Classify a point, treating the boundary as inside
#[inline]
pub fn closed_outcode(bound: &Bound, p: Point) -> Outcode {
    let mut code = 0;
    if p.x < bound.min.x {
        code |= 1;
    } else if p.x > bound.max.x {
        code |= 2;
    }
    if p.y < bound.min.y {
        code |= 4;
    } else if p.y > bound.max.y {
        code |= 8;
    }
    Outcode(code)
}

/// Classify a point, treating the boundary as outside
#[inline]
pub fn open_outcode(bound: &Bound, p: Point) -> Outcode {
    let mut code = 0;
    if p.x <= bound.min.x {
        code |= 1;
    } else if p.x >= bound.max.x {
        code |= 2;
    }
    if p.y <= bound.min.y {
        code |= 4;
    } else if p.y >= bound.max.y {
        code |= 8;
    }
    Outcode(code)
}

/// Intersection of segment `a`-`b` with one edge of the bound
///
/// The edge is chosen from the bits of `edge` with priority top, bottom,
/// right, left. If `a` or `b` already lies on the chosen edge's line it is
/// returned unchanged.
///
/// # Panics
///
/// Panics if `edge` has no bit set.
pub fn intersect(bound: &Bound, edge: Outcode, a: Point, b: Point) -> Point {
    if edge.intersects(Outcode::TOP) {
        at_y(a, b, bound.max.y)
    } else if edge.intersects(Outcode::BOTTOM) {
        at_y(a, b, bound.min.y)
    } else if edge.intersects(Outcode::RIGHT) {
        at_x(a, b, bound.max.x)
    } else if edge.intersects(Outcode::LEFT) {
        at_x(a, b, bound.min.x)
    } else {
        panic!("intersect called without an edge bit: {:?}", edge);
    }
}

fn at_y(a: Point, b: Point, y: f64) -> Point {
    if a.y == y {
        return a;
    }
    if b.y == y {
        return b;
    }
    Point::new(a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y), y)
}

fn at_x(a: Point, b: Point, x: f64) -> Point {
    if a.x == x {
        return a;
    }
    if b.x == x {
        return b;
    }
    Point::new(x, a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound() -> Bound {
        Bound::from_coords(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_closed_outcode_boundary_is_inside() {
        let b = bound();
        assert_eq!(closed_outcode(&b, Point::new(0.0, 5.0)), Outcode::INSIDE);
        assert_eq!(closed_outcode(&b, Point::new(10.0, 10.0)), Outcode::INSIDE);
        assert_eq!(closed_outcode(&b, Point::new(-1.0, 5.0)), Outcode::LEFT);
        assert_eq!(closed_outcode(&b, Point::new(11.0, -1.0)), Outcode::BOTTOM_RIGHT);
        assert_eq!(closed_outcode(&b, Point::new(-1.0, 11.0)), Outcode::TOP_LEFT);
    }

    #[test]
    fn test_open_outcode_boundary_is_outside() {
        let b = bound();
        assert_eq!(open_outcode(&b, Point::new(5.0, 5.0)), Outcode::INSIDE);
        assert_eq!(open_outcode(&b, Point::new(0.0, 5.0)), Outcode::LEFT);
        assert_eq!(open_outcode(&b, Point::new(5.0, 10.0)), Outcode::TOP);
        assert_eq!(open_outcode(&b, Point::new(0.0, 0.0)), Outcode::BOTTOM_LEFT);
        assert_eq!(open_outcode(&b, Point::new(10.0, 10.0)), Outcode::TOP_RIGHT);
        assert_eq!(outcode(&b, Point::new(10.0, 0.0), true), Outcode::BOTTOM_RIGHT);
    }

    #[test]
    fn test_outcode_corner_helpers() {
        assert!(Outcode::TOP_LEFT.is_corner());
        assert!(!Outcode::TOP.is_corner());
        assert!(Outcode::TOP_LEFT.contains(Outcode::LEFT));
        assert_eq!(Outcode::BOTTOM | Outcode::RIGHT, Outcode::BOTTOM_RIGHT);
        assert_eq!(format!("{:?}", Outcode::TOP_RIGHT), "TOP_RIGHT");
    }

    #[test]
    fn test_intersect_interpolates() {
        let b = bound();
        let p = intersect(&b, Outcode::LEFT, Point::new(-10.0, 0.0), Point::new(10.0, 10.0));
        assert_eq!(p, Point::new(0.0, 5.0));

        let p = intersect(&b, Outcode::TOP, Point::new(5.0, 5.0), Point::new(15.0, 15.0));
        assert_eq!(p, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_intersect_priority_top_before_left() {
        let b = bound();
        let p = intersect(&b, Outcode::TOP_LEFT, Point::new(-5.0, 20.0), Point::new(5.0, 0.0));
        assert_eq!(p.y, 10.0, "top edge must win over left");
    }

    #[test]
    fn test_intersect_returns_endpoint_on_edge() {
        let b = bound();
        let a = Point::new(0.0, 3.0);
        assert_eq!(intersect(&b, Outcode::LEFT, a, Point::new(-4.0, 7.0)), a);
    }

    #[test]
    #[should_panic(expected = "edge bit")]
    fn test_intersect_without_edge_panics() {
        intersect(&bound(), Outcode::INSIDE, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
    }
}
