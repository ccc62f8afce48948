//! Integration tests for Cohen-Sutherland line clipping

mod common;

use boundclip::clip;
use boundclip::{clip_line_string, Bound, MultiLineString};
use common::{line, points};

#[test]
fn test_line_winding_through_bound() {
    let bound = Bound::from_coords(0.0, 0.0, 30.0, 30.0);
    let input = line(&[
        (-10.0, 10.0),
        (10.0, 10.0),
        (10.0, -10.0),
        (20.0, -10.0),
        (20.0, 10.0),
        (40.0, 10.0),
        (40.0, 20.0),
        (20.0, 20.0),
        (20.0, 40.0),
        (10.0, 40.0),
        (10.0, 20.0),
        (5.0, 20.0),
        (-10.0, 20.0),
    ]);

    let out = clip_line_string(&bound, input, false);

    let expected = MultiLineString(vec![
        line(&[(0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]),
        line(&[(20.0, 0.0), (20.0, 10.0), (30.0, 10.0)]),
        line(&[(30.0, 20.0), (20.0, 20.0), (20.0, 30.0)]),
        line(&[(10.0, 30.0), (10.0, 20.0), (5.0, 20.0), (0.0, 20.0)]),
    ]);
    assert_eq!(out, expected);
}

#[test]
fn test_line_ending_inside() {
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let out = clip_line_string(&bound, line(&[(-5.0, 5.0), (5.0, 5.0)]), false);
    assert_eq!(out.0, vec![line(&[(0.0, 5.0), (5.0, 5.0)])]);
}

#[test]
fn test_line_starting_inside() {
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let out = clip_line_string(&bound, line(&[(5.0, 5.0), (5.0, 20.0), (8.0, 20.0)]), false);
    assert_eq!(out.0, vec![line(&[(5.0, 5.0), (5.0, 10.0)])]);
}

#[test]
fn test_line_crossing_corner_region() {
    // enters through the left edge after starting in the bottom-left region
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let out = clip_line_string(&bound, line(&[(-10.0, -5.0), (10.0, 5.0)]), false);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0, points(&[(0.0, 0.0), (10.0, 5.0)]));
}

#[test]
fn test_line_reentering_twice() {
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let input = line(&[(-1.0, 2.0), (5.0, 2.0), (5.0, 12.0), (7.0, 12.0), (7.0, 8.0)]);
    let out = clip_line_string(&bound, input, false);
    assert_eq!(
        out.0,
        vec![
            line(&[(0.0, 2.0), (5.0, 2.0), (5.0, 10.0)]),
            line(&[(7.0, 10.0), (7.0, 8.0)]),
        ]
    );
}

#[test]
fn test_line_along_boundary_depends_on_openness() {
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let edge = line(&[(2.0, 10.0), (8.0, 10.0)]);

    let closed = clip_line_string(&bound, edge.clone(), false);
    assert_eq!(closed.0, vec![edge.clone()]);

    let open = clip_line_string(&bound, edge, true);
    assert!(open.is_empty(), "open boundary drops edge-hugging segments");
}

#[test]
fn test_line_open_boundary_keeps_interior_part() {
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let input = line(&[(0.0, 2.0), (0.0, 5.0), (5.0, 5.0), (5.0, 10.0)]);
    let out = clip_line_string(&bound, input, true);
    assert_eq!(out.0, vec![line(&[(0.0, 5.0), (5.0, 5.0), (5.0, 10.0)])]);
}

#[test]
fn test_line_outside_is_empty() {
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let out = clip_line_string(&bound, line(&[(11.0, 0.0), (20.0, 5.0), (11.0, 10.0)]), false);
    assert!(out.is_empty());
}

#[test]
fn test_line_against_empty_bound() {
    let bound = Bound::from_coords(10.0, 10.0, 0.0, 0.0);
    let out = clip_line_string(&bound, line(&[(1.0, 1.0), (5.0, 5.0)]), false);
    assert!(out.is_empty());
}

#[test]
fn test_multi_line_string_flattens_pieces() {
    let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
    let mls = MultiLineString(vec![
        line(&[(-5.0, 5.0), (15.0, 5.0)]),
        line(&[(5.0, -5.0), (5.0, 15.0)]),
        line(&[(20.0, 20.0), (30.0, 30.0)]),
    ]);
    let out = clip::multi_line_string(&bound, mls, false);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1], line(&[(5.0, 0.0), (5.0, 10.0)]));
}
