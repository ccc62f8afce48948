#![no_main]

use boundclip::{Bound, LineString, Point, Ring};
use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct FuzzInput {
    bound: Bound,
    points: Vec<Point>,
    open: bool,
}

// Quarter-unit grid coordinates so vertices regularly land on the boundary
fn coord(u: &mut Unstructured<'_>) -> Result<f64> {
    Ok(u.int_in_range(-200i32..=200)? as f64 / 4.0)
}

impl<'a> Arbitrary<'a> for FuzzInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let bound = Bound::from_coords(coord(u)?, coord(u)?, coord(u)?, coord(u)?);
        let count = u.int_in_range(0..=64)?;
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(Point::new(coord(u)?, coord(u)?));
        }
        Ok(FuzzInput {
            bound,
            points,
            open: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: FuzzInput| {
    let FuzzInput { bound, points, open } = input;

    let lines = boundclip::clip_line_string(&bound, LineString(points.clone()), open);
    for line in lines.iter() {
        assert!(line.len() >= 2);
        for p in line.iter() {
            assert!(bound.contains(*p), "{:?} outside {:?}", p, bound);
        }
    }

    let clipped = boundclip::clip_ring(&bound, Ring(points));
    for p in clipped.iter() {
        assert!(bound.contains(*p), "{:?} outside {:?}", p, bound);
    }
});
