//! Robust polygon clipping via Clipper2
//!
//! The smart clipper assumes simple input and reports malformed rings as
//! errors. This module intersects polygons with the bound using the
//! [Clipper2](https://github.com/AngusJohnson/Clipper2) boolean engine
//! instead, which resolves self-intersections on the way. Coordinates are
//! snapped to a precision of 0.01.
//!
//! Enabled with the `polygon-ops` feature.

use crate::error::{Error, Result};
use crate::model::{Bound, MultiPolygon, Orientation, Point, Polygon, Ring};
use crate::smart::attach_holes;
use clipper2::*;
use tracing::debug;

/// Intersect a polygon with a bound
///
/// # Arguments
///
/// * `bound` - The clip rectangle
/// * `polygon` - The polygon to clip; may self-intersect
/// * `orientation` - Winding of the output shells
///
/// # Returns
///
/// Closed shells in `orientation`, each with the holes it contains.
pub fn polygon(bound: &Bound, polygon: &Polygon, orientation: Orientation) -> Result<MultiPolygon> {
    intersect_rings(bound, polygon.iter(), orientation)
}

/// Intersect every polygon of a multi polygon with a bound
pub fn multi_polygon(bound: &Bound, mp: &MultiPolygon, orientation: Orientation) -> Result<MultiPolygon> {
    intersect_rings(bound, mp.iter().flat_map(|p| p.iter()), orientation)
}

fn intersect_rings<'a, I>(bound: &Bound, rings: I, orientation: Orientation) -> Result<MultiPolygon>
where
    I: IntoIterator<Item = &'a Ring>,
{
    if bound.is_empty() {
        return Ok(MultiPolygon::default());
    }

    let subject: Vec<Vec<(f64, f64)>> = rings
        .into_iter()
        .filter(|r| r.len() > 2)
        .map(|r| r.iter().map(|p| (p.x, p.y)).collect())
        .collect();
    if subject.is_empty() {
        return Ok(MultiPolygon::default());
    }

    let clip: Vec<(f64, f64)> = bound
        .to_ring(Orientation::Ccw)
        .iter()
        .map(|p| (p.x, p.y))
        .collect();

    let result = intersect::<Centi>(subject, vec![clip], FillRule::default())
        .map_err(|e| Error::PolygonOps(format!("{:?}", e)))?;
    let paths: Vec<Vec<(f64, f64)>> = result.into();

    let mut rings: Vec<Ring> = paths
        .into_iter()
        .filter(|path| path.len() > 2)
        .map(|path| {
            let mut ring: Ring = path.into_iter().map(Point::from).collect();
            let first = ring[0];
            if ring.last() != Some(&first) {
                ring.push(first);
            }
            ring
        })
        .collect();

    // Outer paths share the winding of the largest one
    let Some(outer_sign) = rings
        .iter()
        .map(Ring::signed_area)
        .max_by(|a, b| a.abs().total_cmp(&b.abs()))
        .map(f64::signum)
    else {
        return Ok(MultiPolygon::default());
    };

    let wrong_winding = match orientation {
        Orientation::Ccw => outer_sign < 0.0,
        Orientation::Cw => outer_sign > 0.0,
    };
    if wrong_winding {
        rings.iter_mut().for_each(|r| r.reverse());
    }

    let (shells, holes): (Vec<Ring>, Vec<Ring>) = rings
        .into_iter()
        .partition(|r| r.orientation() == Some(orientation));

    debug!(shells = shells.len(), holes = holes.len(), "clipper2 intersection");

    let mut out: MultiPolygon = shells.into_iter().map(Polygon::from_shell).collect();
    attach_holes(&mut out, holes)?;
    Ok(out)
}
