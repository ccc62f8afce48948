//! Perimeter stitching
//!
//! Open fragments have both endpoints on the bound's boundary. Sorting every
//! endpoint into one walk order around the perimeter turns shell
//! reconstruction into a single pass: follow a fragment to its end, walk the
//! perimeter to the next fragment start, and repeat until the walk returns to
//! where the shell began.
//!
//! Endpoints live in a flat arena. A fragment's start is stored at `2 * i`
//! and its end at `2 * i + 1` before sorting, and each endpoint records the
//! sorted position of its partner.

use super::around::around_bound;
use crate::error::{Error, Result};
use crate::model::{Bound, LineString, MultiPolygon, Orientation, Point, Polygon, Ring};
use std::cmp::Ordering;
use std::mem;
use tracing::{debug, trace};

/// Side of the bound, in counter-clockwise walk order starting at the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Side {
    Left,
    Bottom,
    Right,
    Top,
}

impl Side {
    /// Unit vectors (forward, inward) of the counter-clockwise walk along this side
    fn frame(self) -> ((f64, f64), (f64, f64)) {
        match self {
            Side::Left => ((0.0, -1.0), (1.0, 0.0)),
            Side::Bottom => ((1.0, 0.0), (0.0, 1.0)),
            Side::Right => ((0.0, 1.0), (-1.0, 0.0)),
            Side::Top => ((-1.0, 0.0), (0.0, -1.0)),
        }
    }
}

/// The side a boundary point lies on; corners belong to the first match
/// in the order left, bottom, right, top
pub(crate) fn side_of(bound: &Bound, p: Point) -> Option<Side> {
    if p.x == bound.min.x {
        Some(Side::Left)
    } else if p.y == bound.min.y {
        Some(Side::Bottom)
    } else if p.x == bound.max.x {
        Some(Side::Right)
    } else if p.y == bound.max.y {
        Some(Side::Top)
    } else {
        None
    }
}

/// Position along a side, increasing in counter-clockwise walk direction
pub(crate) fn perimeter_key(side: Side, p: Point) -> f64 {
    match side {
        Side::Left => -p.y,
        Side::Bottom => p.x,
        Side::Right => p.y,
        Side::Top => -p.x,
    }
}

#[derive(Debug, Clone)]
struct Endpoint {
    point: Point,
    start: bool,
    side: Side,
    key: f64,
    /// Direction towards the neighbouring vertex of the same fragment,
    /// measured from the side's forward direction towards the interior
    angle: f64,
    fragment: usize,
    other: usize,
    used: bool,
}

impl Endpoint {
    fn new(bound: &Bound, fragment: usize, points: &[Point], start: bool) -> Result<Self> {
        let (point, neighbour) = if start {
            (points[0], points[1])
        } else {
            (points[points.len() - 1], points[points.len() - 2])
        };
        let side = side_of(bound, point).ok_or_else(|| Error::endpoint_off_bound(point.x, point.y))?;

        let (f, n) = side.frame();
        let (dx, dy) = (neighbour.x - point.x, neighbour.y - point.y);
        let angle = (dx * n.0 + dy * n.1).atan2(dx * f.0 + dy * f.1);

        Ok(Self {
            point,
            start,
            side,
            key: perimeter_key(side, point),
            angle,
            fragment,
            other: 0,
            used: false,
        })
    }
}

fn ccw_order(a: &Endpoint, b: &Endpoint) -> Ordering {
    a.side
        .cmp(&b.side)
        .then_with(|| a.key.partial_cmp(&b.key).unwrap_or(Ordering::Equal))
        .then_with(|| b.angle.partial_cmp(&a.angle).unwrap_or(Ordering::Equal))
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.fragment.cmp(&b.fragment))
}

/// Close open fragments into shells by walking the bound's perimeter
///
/// # Arguments
///
/// * `bound` - The clip rectangle every fragment endpoint lies on
/// * `fragments` - Open pieces produced by [`super::clip_rings`]
/// * `orientation` - Winding of the shells to build
///
/// # Returns
///
/// One polygon per reconstructed shell, without holes.
///
/// # Errors
///
/// * [`Error::MalformedGeometry`] if a fragment endpoint is off the boundary
/// * [`Error::RingNotClosed`] if some fragments cannot be joined into shells
pub fn smart_wrap(
    bound: &Bound,
    fragments: Vec<LineString>,
    orientation: Orientation,
) -> Result<MultiPolygon> {
    let fragments: Vec<LineString> = fragments.into_iter().filter(|f| f.len() > 1).collect();
    if fragments.is_empty() {
        return Ok(MultiPolygon::default());
    }

    let mut endpoints = Vec::with_capacity(fragments.len() * 2);
    for (i, fragment) in fragments.iter().enumerate() {
        endpoints.push(Endpoint::new(bound, i, fragment, true)?);
        endpoints.push(Endpoint::new(bound, i, fragment, false)?);
    }

    let mut order: Vec<usize> = (0..endpoints.len()).collect();
    order.sort_by(|&a, &b| {
        let ord = ccw_order(&endpoints[a], &endpoints[b]);
        match orientation {
            Orientation::Ccw => ord,
            Orientation::Cw => ord.reverse(),
        }
    });

    let mut position = vec![0; order.len()];
    for (pos, &id) in order.iter().enumerate() {
        position[id] = pos;
    }
    let mut sorted: Vec<Endpoint> = order
        .iter()
        .map(|&id| {
            let mut e = endpoints[id].clone();
            e.other = position[id ^ 1];
            e
        })
        .collect();

    let n = sorted.len();
    let mut shells = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut i = 0;

    while i < 2 * n {
        let idx = i % n;
        if sorted[idx].used {
            i += 1;
            continue;
        }

        if !sorted[idx].start {
            if current.is_empty() {
                current = fragments[sorted[idx].fragment].to_vec();
                sorted[idx].used = true;
            }
            i += 1;
            continue;
        }

        let Some(&last) = current.last() else {
            i += 1;
            continue;
        };

        sorted[idx].used = true;
        let point = sorted[idx].point;
        if point != last {
            current.extend_from_slice(&around_bound(bound, last, point, orientation)[1..]);
        }

        if point == current[0] {
            trace!(points = current.len(), "closed shell");
            shells.push(Polygon::from_shell(Ring(mem::take(&mut current))));
            i = 0;
            continue;
        }

        current.extend_from_slice(&fragments[sorted[idx].fragment][1..]);
        let other = sorted[idx].other;
        sorted[other].used = true;
        i = other + 1;
    }

    // Not reachable once every endpoint passed the boundary check above: each
    // walk starts at an unused end, scans a full cycle, and closes on a start,
    // so ends and starts are consumed in equal numbers. Kept as a guard.
    let unused = sorted.iter().filter(|e| !e.used).count();
    if unused > 0 || !current.is_empty() {
        return Err(Error::unmatched_endpoints(unused.max(1)));
    }

    debug!(fragments = fragments.len(), shells = shells.len(), "stitched fragments");
    Ok(MultiPolygon(shells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(coords: &[(f64, f64)]) -> LineString {
        LineString::from(coords.to_vec())
    }

    #[test]
    fn test_side_of_corner_priority() {
        let b = Bound::from_coords(0.0, 0.0, 5.0, 5.0);
        assert_eq!(side_of(&b, Point::new(0.0, 0.0)), Some(Side::Left));
        assert_eq!(side_of(&b, Point::new(5.0, 0.0)), Some(Side::Bottom));
        assert_eq!(side_of(&b, Point::new(5.0, 5.0)), Some(Side::Right));
        assert_eq!(side_of(&b, Point::new(2.0, 5.0)), Some(Side::Top));
        assert_eq!(side_of(&b, Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn test_single_fragment_closes_along_bound() {
        let b = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let out = smart_wrap(&b, vec![line(&[(0.0, 2.0), (5.0, 5.0), (0.0, 8.0)])], Orientation::Ccw)
            .expect("fragment closes");
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0][0].0,
            line(&[(0.0, 2.0), (5.0, 5.0), (0.0, 8.0), (0.0, 2.0)]).0
        );
    }

    #[test]
    fn test_nested_fragments_on_one_side() {
        let b = Bound::from_coords(0.0, 0.0, 5.0, 5.0);
        let out = smart_wrap(
            &b,
            vec![
                line(&[(0.0, 1.0), (4.0, 1.0), (4.0, 4.0), (0.0, 4.0)]),
                line(&[(0.0, 3.0), (3.0, 3.0), (3.0, 2.0), (0.0, 2.0)]),
            ],
            Orientation::Ccw,
        )
        .expect("fragments close");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0][0].signed_area(), 12.0 - 3.0);
    }

    #[test]
    fn test_endpoint_off_bound_is_error() {
        let b = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let err = smart_wrap(&b, vec![line(&[(0.0, 2.0), (5.0, 5.0)])], Orientation::Ccw)
            .expect_err("interior endpoint");
        assert!(matches!(err, Error::MalformedGeometry(_)));
    }

    #[test]
    fn test_no_fragments() {
        let b = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(smart_wrap(&b, Vec::new(), Orientation::Cw).expect("empty").is_empty());
    }
}
