//! Walking the bound's perimeter between two boundary points

use super::stitch::{perimeter_key, side_of};
use crate::clip::{open_outcode, Outcode};
use crate::model::{Bound, Orientation, Point};

/// Points along the bound's perimeter from `from` to `to`
///
/// Walks in the direction given by `orientation`, visiting every corner in
/// between. When both points are on the same side but `to` comes before
/// `from` in walking order, the walk goes all the way around.
///
/// # Returns
///
/// `[from, corners.., to]`
///
/// # Panics
///
/// Panics if either point is not on the bound's boundary.
pub fn around_bound(bound: &Bound, from: Point, to: Point, orientation: Orientation) -> Vec<Point> {
    let from_code = open_outcode(bound, from);
    let to_code = open_outcode(bound, to);
    assert!(
        !from_code.is_inside() && !to_code.is_inside(),
        "around_bound requires boundary points, got {:?} -> {:?}",
        from,
        to
    );

    let full_loop = from_code == to_code && !in_walk_order(bound, from, to, orientation);

    let mut out = vec![from];
    let mut code = from_code;
    let mut first = true;
    loop {
        if !(first && full_loop) && reaches(code, to_code, orientation) {
            break;
        }
        first = false;
        code = next_corner(code, orientation);
        if code == to_code {
            break;
        }
        out.push(corner_point(bound, code));
    }
    out.push(to);
    out
}

/// Returns true if walking from `code` lands on the side or corner `target`
/// without passing another corner
fn reaches(code: Outcode, target: Outcode, orientation: Orientation) -> bool {
    code == target || (code.is_corner() && leaving_side(code, orientation) == target)
}

fn in_walk_order(bound: &Bound, from: Point, to: Point, orientation: Orientation) -> bool {
    let (Some(side_from), Some(side_to)) = (side_of(bound, from), side_of(bound, to)) else {
        return true;
    };
    let a = (side_from, perimeter_key(side_from, from));
    let b = (side_to, perimeter_key(side_to, to));
    match orientation {
        Orientation::Ccw => a < b,
        Orientation::Cw => a > b,
    }
}

/// The corner reached next when walking from a side or corner
fn next_corner(code: Outcode, orientation: Orientation) -> Outcode {
    use Outcode as O;
    match (orientation, code) {
        (Orientation::Ccw, O::LEFT) | (Orientation::Ccw, O::TOP_LEFT) => O::BOTTOM_LEFT,
        (Orientation::Ccw, O::BOTTOM) | (Orientation::Ccw, O::BOTTOM_LEFT) => O::BOTTOM_RIGHT,
        (Orientation::Ccw, O::RIGHT) | (Orientation::Ccw, O::BOTTOM_RIGHT) => O::TOP_RIGHT,
        (Orientation::Ccw, O::TOP) | (Orientation::Ccw, O::TOP_RIGHT) => O::TOP_LEFT,
        (Orientation::Cw, O::LEFT) | (Orientation::Cw, O::BOTTOM_LEFT) => O::TOP_LEFT,
        (Orientation::Cw, O::TOP) | (Orientation::Cw, O::TOP_LEFT) => O::TOP_RIGHT,
        (Orientation::Cw, O::RIGHT) | (Orientation::Cw, O::TOP_RIGHT) => O::BOTTOM_RIGHT,
        (Orientation::Cw, O::BOTTOM) | (Orientation::Cw, O::BOTTOM_RIGHT) => O::BOTTOM_LEFT,
        (_, other) => unreachable!("invalid perimeter code {:?}", other),
    }
}

/// The side the walk continues along after a corner
fn leaving_side(corner: Outcode, orientation: Orientation) -> Outcode {
    use Outcode as O;
    match (orientation, corner) {
        (Orientation::Ccw, O::BOTTOM_LEFT) => O::BOTTOM,
        (Orientation::Ccw, O::BOTTOM_RIGHT) => O::RIGHT,
        (Orientation::Ccw, O::TOP_RIGHT) => O::TOP,
        (Orientation::Ccw, O::TOP_LEFT) => O::LEFT,
        (Orientation::Cw, O::TOP_LEFT) => O::TOP,
        (Orientation::Cw, O::TOP_RIGHT) => O::RIGHT,
        (Orientation::Cw, O::BOTTOM_RIGHT) => O::BOTTOM,
        (Orientation::Cw, O::BOTTOM_LEFT) => O::LEFT,
        (_, other) => unreachable!("not a corner {:?}", other),
    }
}

fn corner_point(bound: &Bound, corner: Outcode) -> Point {
    match corner {
        Outcode::BOTTOM_LEFT => bound.min,
        Outcode::BOTTOM_RIGHT => Point::new(bound.max.x, bound.min.y),
        Outcode::TOP_RIGHT => bound.max,
        Outcode::TOP_LEFT => Point::new(bound.min.x, bound.max.y),
        other => unreachable!("not a corner {:?}", other),
    }
}
