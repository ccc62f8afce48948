#![no_main]

use boundclip::{Bound, Orientation, Point, Polygon, Ring};
use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct FuzzPolygon {
    bound: Bound,
    rings: Vec<Vec<Point>>,
    clockwise: bool,
}

fn coord(u: &mut Unstructured<'_>) -> Result<f64> {
    Ok(u.int_in_range(-40i32..=40)? as f64 / 2.0)
}

impl<'a> Arbitrary<'a> for FuzzPolygon {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let bound = Bound::from_coords(coord(u)?, coord(u)?, coord(u)?, coord(u)?);
        let ring_count = u.int_in_range(0..=4)?;
        let mut rings = Vec::with_capacity(ring_count);
        for _ in 0..ring_count {
            let count = u.int_in_range(0..=32)?;
            let mut ring = Vec::with_capacity(count + 1);
            for _ in 0..count {
                ring.push(Point::new(coord(u)?, coord(u)?));
            }
            if let Some(&first) = ring.first() {
                ring.push(first);
            }
            rings.push(ring);
        }
        Ok(FuzzPolygon {
            bound,
            rings,
            clockwise: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: FuzzPolygon| {
    let orientation = if input.clockwise {
        Orientation::Cw
    } else {
        Orientation::Ccw
    };
    let polygon = Polygon::new(input.rings.into_iter().map(Ring).collect());

    // Arbitrary rings self-intersect, so reconstruction may report an error,
    // but it must never panic and successful output must stay in the bound
    if let Ok(out) = boundclip::smart_clip_polygon(&input.bound, polygon, orientation) {
        for polygon in out.iter() {
            for ring in polygon.iter() {
                for p in ring.iter() {
                    assert!(input.bound.contains(*p), "{:?} outside {:?}", p, input.bound);
                }
            }
        }
    }
});
