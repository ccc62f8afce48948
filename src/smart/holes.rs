//! Containment tests and hole attachment

use crate::error::{Error, Result};
use crate::model::{Bound, MultiPolygon, Point, Polygon, Ring};
use tracing::warn;

/// Ray-casting point-in-ring test
///
/// Casts a horizontal ray through `p` and counts edge crossings on the left
/// of the point. Crossings are also counted over the whole line: a closed
/// ring is crossed an even number of times, so an odd total means the ring
/// is open.
///
/// # Errors
///
/// [`Error::RingNotClosed`] if the total number of crossings is odd.
pub fn ring_contains(ring: &[Point], p: Point) -> Result<bool> {
    let mut total = 0;
    let mut left = 0;
    for edge in ring.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if (a.y > p.y) == (b.y > p.y) {
            continue;
        }
        total += 1;
        let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
        if x < p.x {
            left += 1;
        }
    }

    if total % 2 != 0 {
        return Err(Error::odd_crossings(total));
    }
    Ok(left % 2 == 1)
}

/// Attach interior rings to the shells containing them
///
/// With a single shell every ring is attached to it. Otherwise a ring goes
/// to the smallest shell containing its first point. Rings no shell contains
/// are dropped.
pub fn attach_holes(shells: &mut MultiPolygon, holes: Vec<Ring>) -> Result<()> {
    if holes.is_empty() {
        return Ok(());
    }
    if let [only] = shells.as_mut_slice() {
        only.extend(holes);
        return Ok(());
    }

    let areas: Vec<f64> = shells
        .iter()
        .map(|p| p.shell().map_or(0.0, |s| s.signed_area().abs()))
        .collect();

    for hole in holes {
        let Some(&probe) = hole.first() else {
            continue;
        };

        let mut best: Option<usize> = None;
        for (i, polygon) in shells.iter().enumerate() {
            let Some(shell) = polygon.shell() else {
                continue;
            };
            if !ring_contains(shell, probe)? {
                continue;
            }
            if best.is_none_or(|b| areas[i] < areas[b]) {
                best = Some(i);
            }
        }

        match best {
            Some(i) => shells[i].push(hole),
            None => warn!(x = probe.x, y = probe.y, "dropping ring outside every shell"),
        }
    }
    Ok(())
}

/// Returns true if the rings enclose the whole bound
///
/// Only called when no ring crosses the bound, so the bound is either fully
/// covered or fully uncovered. Rings whose extent contains the bound are
/// tested against its center; an odd count of enclosing rings means the
/// center, and with it the bound, is covered.
pub fn covers_bound<'a, I>(bound: &Bound, rings: I) -> Result<bool>
where
    I: IntoIterator<Item = &'a Ring>,
{
    let center = bound.center();
    let mut count = 0;
    for ring in rings {
        let Some(extent) = ring.bound() else {
            continue;
        };
        if !bound.is_within(&extent) {
            continue;
        }

        let inside = if ring.is_closed() {
            ring_contains(ring, center)?
        } else {
            let mut closed = ring.to_vec();
            closed.push(ring[0]);
            ring_contains(&closed, center)?
        };
        if inside {
            count += 1;
        }
    }
    Ok(count % 2 == 1)
}

/// Polygon made of the bound's outline in the given winding
pub(crate) fn bound_polygon(bound: &Bound, orientation: crate::model::Orientation) -> Polygon {
    Polygon::from_shell(bound.to_ring(orientation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Orientation;

    fn square(min: f64, max: f64) -> Ring {
        Ring::from(vec![(min, min), (max, min), (max, max), (min, max), (min, min)])
    }

    #[test]
    fn test_ring_contains() {
        let ring = square(0.0, 4.0);
        assert!(ring_contains(&ring, Point::new(2.0, 2.0)).expect("closed"));
        assert!(!ring_contains(&ring, Point::new(5.0, 2.0)).expect("closed"));
        assert!(!ring_contains(&ring, Point::new(-1.0, 2.0)).expect("closed"));
    }

    #[test]
    fn test_ring_contains_open_ring_is_error() {
        let open = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 4.0)];
        let err = ring_contains(&open, Point::new(2.0, 2.0)).expect_err("open ring");
        assert!(matches!(err, Error::RingNotClosed(_)));
    }

    #[test]
    fn test_attach_single_shell_takes_everything() {
        let mut shells = MultiPolygon(vec![Polygon::from_shell(square(0.0, 4.0))]);
        attach_holes(&mut shells, vec![square(10.0, 11.0)]).expect("attach");
        assert_eq!(shells[0].len(), 2);
    }

    #[test]
    fn test_attach_prefers_smallest_shell() {
        let mut shells = MultiPolygon(vec![
            Polygon::from_shell(square(0.0, 10.0)),
            Polygon::from_shell(square(2.0, 8.0)),
        ]);
        let mut hole = square(4.0, 5.0);
        hole.reverse();
        attach_holes(&mut shells, vec![hole]).expect("attach");
        assert_eq!(shells[0].len(), 1);
        assert_eq!(shells[1].len(), 2);
    }

    #[test]
    fn test_attach_drops_uncontained() {
        let mut shells = MultiPolygon(vec![
            Polygon::from_shell(square(0.0, 2.0)),
            Polygon::from_shell(square(4.0, 6.0)),
        ]);
        attach_holes(&mut shells, vec![square(8.0, 9.0)]).expect("attach");
        assert!(shells.iter().all(|p| p.len() == 1));
    }

    #[test]
    fn test_covers_bound() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let big = square(-5.0, 15.0);
        assert!(covers_bound(&bound, [&big]).expect("closed"));

        let hole = square(-2.0, 12.0);
        assert!(!covers_bound(&bound, [&big, &hole]).expect("closed"));

        assert!(!covers_bound(&bound, [&square(2.0, 3.0)]).expect("closed"));
    }

    #[test]
    fn test_bound_polygon_orientation() {
        let bound = Bound::from_coords(0.0, 0.0, 1.0, 1.0);
        let p = bound_polygon(&bound, Orientation::Cw);
        assert_eq!(p[0].orientation(), Some(Orientation::Cw));
    }
}
