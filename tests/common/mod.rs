//! Shared helpers for clipping integration tests

#![allow(dead_code)]

use boundclip::{Bound, LineString, MultiPolygon, Point, Ring};

/// Build a point list from coordinate pairs
pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

/// Build a line string from coordinate pairs
pub fn line(coords: &[(f64, f64)]) -> LineString {
    LineString::new(points(coords))
}

/// Build a ring from coordinate pairs
pub fn ring(coords: &[(f64, f64)]) -> Ring {
    Ring::new(points(coords))
}

/// Closed counter-clockwise axis-aligned rectangle
pub fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Ring {
    ring(&[
        (min_x, min_y),
        (max_x, min_y),
        (max_x, max_y),
        (min_x, max_y),
        (min_x, min_y),
    ])
}

/// Closed clockwise axis-aligned rectangle, for use as a hole
pub fn rect_cw(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Ring {
    let mut r = rect(min_x, min_y, max_x, max_y);
    r.reverse();
    r
}

/// Assert that every vertex of every ring lies inside or on the bound
///
/// # Arguments
///
/// * `bound` - The clip rectangle
/// * `mp` - The clipped result
pub fn assert_within(bound: &Bound, mp: &MultiPolygon) {
    for polygon in mp.iter() {
        for ring in polygon.iter() {
            for p in ring.iter() {
                assert!(bound.contains(*p), "point {:?} lies outside {:?}", p, bound);
            }
        }
    }
}

/// Assert that every ring of the result is closed
pub fn assert_closed(mp: &MultiPolygon) {
    for polygon in mp.iter() {
        for ring in polygon.iter() {
            assert!(ring.is_closed(), "ring not closed: {:?}", ring);
        }
    }
}
