//! Smart clipping with shell reconstruction
//!
//! Naive ring clipping keeps the parts of a ring that run along the bound, so
//! a polygon that leaves and re-enters the bound comes back as one ring with
//! zero-width spikes. Smart clipping instead cuts every ring into fragments
//! against the open boundary, then rebuilds proper shells by walking the
//! bound's perimeter between fragment endpoints, and finally re-attaches
//! interior rings as holes by containment.
//!
//! Shells are expected in the requested [`Orientation`] and holes in the
//! opposite one. Input polygons are not checked for simplicity; malformed
//! input may come back as [`crate::Error::RingNotClosed`].
//!
//! # Example
//!
//! ```
//! use boundclip::{smart, Bound, Orientation, Polygon, Ring};
//!
//! let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
//! let shell = Ring::from(vec![(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0), (-5.0, -5.0)]);
//! let out = smart::polygon(&bound, Polygon::from_shell(shell), Orientation::Ccw).unwrap();
//! assert_eq!(out.len(), 1);
//! assert_eq!(out.area(), 25.0);
//! ```

mod around;
mod fragments;
mod holes;
mod stitch;

pub use around::around_bound;
pub use fragments::{clip_rings, Fragments};
pub use holes::{attach_holes, covers_bound, ring_contains};
pub use stitch::smart_wrap;

use crate::clip::{clip_geometry, polygons_to_geometry};
use crate::error::{Error, Result};
use crate::model::{Bound, Collection, Geometry, MultiPolygon, Orientation, Polygon, Ring};
use holes::bound_polygon;
use tracing::debug;

/// Clip a polygon and rebuild its shells and holes
///
/// # Arguments
///
/// * `bound` - The clip rectangle
/// * `polygon` - The polygon to clip; returned unchanged if it lies inside
/// * `orientation` - Winding of the polygon's shell
///
/// # Returns
///
/// Zero or more polygons. A polygon that encloses the whole bound clips to
/// the bound itself.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedGeometry`] for a NaN or infinite
/// coordinate, and [`crate::Error`] if the fragments cannot be stitched into
/// closed shells, which only happens for malformed input.
pub fn polygon(bound: &Bound, polygon: Polygon, orientation: Orientation) -> Result<MultiPolygon> {
    check_finite(polygon.iter())?;
    if bound.is_empty() {
        return Ok(MultiPolygon::default());
    }
    let Some(extent) = polygon.bound() else {
        return Ok(MultiPolygon::default());
    };
    if !extent.intersects(bound) {
        return Ok(MultiPolygon::default());
    }
    if extent.is_within(bound) {
        return Ok(MultiPolygon(vec![polygon]));
    }

    let outer = clip_rings(bound, polygon.shell());
    let inner = clip_rings(bound, polygon.holes());
    rebuild(bound, outer, inner, polygon.iter(), orientation)
}

/// Clip a multi polygon and rebuild its shells and holes
///
/// Shells of all member polygons are stitched together, so polygons whose
/// clipped parts meet on the boundary may merge, and holes are re-assigned
/// to whichever output shell contains them.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedGeometry`] for a NaN or infinite
/// coordinate, and [`crate::Error`] if the fragments cannot be stitched into
/// closed shells.
pub fn multi_polygon(bound: &Bound, mp: MultiPolygon, orientation: Orientation) -> Result<MultiPolygon> {
    check_finite(mp.iter().flat_map(|p| p.iter()))?;
    if bound.is_empty() {
        return Ok(MultiPolygon::default());
    }
    let Some(extent) = mp.bound() else {
        return Ok(MultiPolygon::default());
    };
    if !extent.intersects(bound) {
        return Ok(MultiPolygon::default());
    }
    if extent.is_within(bound) {
        return Ok(mp);
    }

    let outer = clip_rings(bound, mp.iter().filter_map(Polygon::shell));
    let inner = clip_rings(bound, mp.iter().flat_map(|p| p.holes()));
    rebuild(bound, outer, inner, mp.iter().flat_map(|p| p.iter()), orientation)
}

/// Reject NaN and infinite coordinates before they reach the extent checks,
/// where `f64::min`/`f64::max` would silently skip them
fn check_finite<'a, I>(rings: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Ring>,
{
    match rings.into_iter().flat_map(|r| r.iter()).find(|p| !p.is_finite()) {
        Some(p) => Err(Error::non_finite(p.x, p.y)),
        None => Ok(()),
    }
}

fn rebuild<'a, I>(
    bound: &Bound,
    outer: Fragments,
    inner: Fragments,
    rings: I,
    orientation: Orientation,
) -> Result<MultiPolygon>
where
    I: IntoIterator<Item = &'a Ring>,
{
    debug!(
        outer_open = outer.open.len(),
        outer_closed = outer.closed.len(),
        inner_open = inner.open.len(),
        inner_closed = inner.closed.len(),
        "assembled fragments"
    );

    let mut shells: MultiPolygon = outer.closed.into_iter().map(Polygon::from_shell).collect();

    let mut open = outer.open;
    open.extend(inner.open);
    if open.is_empty() {
        if covers_bound(bound, rings)? {
            shells.push(bound_polygon(bound, orientation));
        }
    } else {
        let wrapped = smart_wrap(bound, open, orientation)?;
        shells.extend(wrapped.0);
    }

    if shells.is_empty() {
        return Ok(shells);
    }
    attach_holes(&mut shells, inner.closed)?;
    Ok(shells)
}

/// Clip any geometry, rebuilding polygon topology
///
/// Rings, polygons and multi polygons take the smart path. Everything else is
/// clipped naively with the boundary treated as inside. Rings come back as
/// polygons.
pub fn geometry(bound: &Bound, geometry: Geometry, orientation: Orientation) -> Result<Option<Geometry>> {
    smart_geometry(bound, geometry, orientation, false)
}

pub(crate) fn smart_geometry(
    bound: &Bound,
    geometry: Geometry,
    orientation: Orientation,
    open: bool,
) -> Result<Option<Geometry>> {
    match geometry {
        Geometry::Ring(r) => Ok(polygons_to_geometry(polygon(bound, Polygon::from_shell(r), orientation)?)),
        Geometry::Polygon(p) => Ok(polygons_to_geometry(polygon(bound, p, orientation)?)),
        Geometry::MultiPolygon(mp) => Ok(polygons_to_geometry(multi_polygon(bound, mp, orientation)?)),
        Geometry::Collection(c) => {
            let mut out = Collection::default();
            for g in c.0 {
                if let Some(clipped) = smart_geometry(bound, g, orientation, open)? {
                    out.0.push(clipped);
                }
            }
            Ok((!out.0.is_empty()).then_some(Geometry::Collection(out)))
        }
        other => Ok(clip_geometry(bound, other, open)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn square(min: f64, max: f64) -> Ring {
        Ring::from(vec![(min, min), (max, min), (max, max), (min, max), (min, min)])
    }

    #[test]
    fn test_polygon_inside_is_unchanged() {
        let p = Polygon::from_shell(square(1.0, 2.0));
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let out = polygon(&bound, p.clone(), Orientation::Ccw).expect("clip");
        assert_eq!(out.0, vec![p]);
    }

    #[test]
    fn test_polygon_outside_is_empty() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let out = polygon(&bound, Polygon::from_shell(square(20.0, 30.0)), Orientation::Ccw).expect("clip");
        assert!(out.is_empty());
    }

    #[test]
    fn test_polygon_enclosing_bound_becomes_bound() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let out = polygon(&bound, Polygon::from_shell(square(-5.0, 15.0)), Orientation::Ccw).expect("clip");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0][0], bound.to_ring(Orientation::Ccw));
    }

    #[test]
    fn test_bound_inside_hole_is_empty() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let mut hole = square(-2.0, 12.0);
        hole.reverse();
        let p = Polygon::new(vec![square(-5.0, 15.0), hole]);
        assert!(polygon(&bound, p, Orientation::Ccw).expect("clip").is_empty());
    }

    #[test]
    fn test_polygon_keeps_interior_hole() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let mut hole = square(2.0, 3.0);
        hole.reverse();
        let p = Polygon::new(vec![square(-5.0, 5.0), hole.clone()]);
        let out = polygon(&bound, p, Orientation::Ccw).expect("clip");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].holes(), &[hole]);
        assert_eq!(out.area(), 25.0 - 1.0);
    }

    #[test]
    fn test_polygon_split_into_two_shells() {
        // a U shape whose base lies below the bound
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let shell = Ring::from(vec![
            (1.0, -5.0),
            (9.0, -5.0),
            (9.0, 5.0),
            (7.0, 5.0),
            (7.0, -2.0),
            (3.0, -2.0),
            (3.0, 5.0),
            (1.0, 5.0),
            (1.0, -5.0),
        ]);
        let out = polygon(&bound, Polygon::from_shell(shell), Orientation::Ccw).expect("clip");
        assert_eq!(out.len(), 2);
        assert_eq!(out.area(), 20.0);
        for p in out.iter() {
            assert!(p[0].is_closed());
            assert!(p[0].iter().all(|pt: &Point| bound.contains(*pt)));
        }
    }

    #[test]
    fn test_nan_vertex_is_rejected() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let shell = Ring::from(vec![
            (-5.0, 2.0),
            (5.0, 2.0),
            (f64::NAN, 5.0),
            (5.0, 8.0),
            (-5.0, 8.0),
            (-5.0, 2.0),
        ]);
        let err = polygon(&bound, Polygon::from_shell(shell), Orientation::Ccw).expect_err("NaN vertex");
        assert!(matches!(err, Error::MalformedGeometry(_)));
    }

    #[test]
    fn test_infinite_hole_vertex_is_rejected() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let hole = Ring::from(vec![(1.0, 1.0), (1.0, f64::INFINITY), (2.0, 2.0), (1.0, 1.0)]);
        let mp = MultiPolygon(vec![Polygon::new(vec![square(-5.0, 5.0), hole])]);
        let err = multi_polygon(&bound, mp, Orientation::Ccw).expect_err("infinite vertex");
        assert!(err.to_string().contains("[E1002]"));
    }

    #[test]
    fn test_geometry_ring_becomes_polygon() {
        let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
        let out = geometry(&bound, Geometry::Ring(square(-5.0, 5.0)), Orientation::Ccw).expect("clip");
        assert!(matches!(out, Some(Geometry::Polygon(_))));
    }
}
