//! Naive clipping
//!
//! Truncates geometry to a bound without rebuilding topology. Lines are cut
//! with Cohen-Sutherland, rings with Sutherland-Hodgman. A polygon that leaves
//! and re-enters the bound keeps the segments running along the boundary, so
//! the output is always a single ring per input ring. Use [`crate::smart`] to
//! get properly separated shells instead.
//!
//! All functions take their input by value and may reuse its storage.

mod line;
mod outcode;
mod ring;

pub use line::clip_line;
pub use outcode::{closed_outcode, intersect, open_outcode, outcode, Outcode};
pub use ring::clip_ring;

use crate::model::{
    Bound, Collection, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
    Ring,
};

/// Clip a line string into its visible pieces
///
/// # Arguments
///
/// * `bound` - The clip rectangle
/// * `line` - The polyline to clip
/// * `open` - Treat the boundary as outside the bound
pub fn line_string(bound: &Bound, line: LineString, open: bool) -> MultiLineString {
    if bound.is_empty() {
        return MultiLineString::default();
    }
    clip_line(bound, &line, open)
}

/// Clip every line of a multi line string
pub fn multi_line_string(bound: &Bound, mls: MultiLineString, open: bool) -> MultiLineString {
    mls.0
        .into_iter()
        .flat_map(|l| line_string(bound, l, open).0)
        .collect()
}

/// Clip a ring, returning an empty ring when nothing is visible
///
/// Rings lying entirely inside the bound are returned unchanged and rings
/// whose bound does not touch the clip bound are returned empty, both without
/// running the edge passes.
pub fn ring(bound: &Bound, ring: Ring) -> Ring {
    if bound.is_empty() {
        return Ring::default();
    }
    match ring.bound() {
        None => Ring::default(),
        Some(rb) if !rb.intersects(bound) => Ring::default(),
        Some(rb) if rb.is_within(bound) => ring,
        Some(_) => clip_ring(bound, ring),
    }
}

/// Clip each ring of a polygon independently
///
/// # Returns
///
/// `None` if the shell vanishes. Holes that vanish are dropped.
pub fn polygon(bound: &Bound, polygon: Polygon) -> Option<Polygon> {
    let mut rings = polygon.0.into_iter();
    let shell = ring(bound, rings.next()?);
    if shell.is_empty() {
        return None;
    }

    let mut out = vec![shell];
    out.extend(rings.map(|r| ring(bound, r)).filter(|r| !r.is_empty()));
    Some(Polygon(out))
}

/// Clip every polygon of a multi polygon, dropping those that vanish
pub fn multi_polygon(bound: &Bound, mp: MultiPolygon) -> MultiPolygon {
    mp.0.into_iter().filter_map(|p| polygon(bound, p)).collect()
}

/// Keep the points lying inside or on the bound
pub fn multi_point(bound: &Bound, mut mp: MultiPoint) -> MultiPoint {
    mp.retain(|p| bound.contains(*p));
    mp
}

/// Clip any geometry, treating the bound's boundary as inside
///
/// Multi geometries reduced to a single member collapse to the single type.
///
/// # Returns
///
/// `None` when nothing of the geometry is visible.
pub fn geometry(bound: &Bound, geometry: Geometry) -> Option<Geometry> {
    clip_geometry(bound, geometry, false)
}

pub(crate) fn clip_geometry(bound: &Bound, geometry: Geometry, open: bool) -> Option<Geometry> {
    if bound.is_empty() {
        return None;
    }

    match geometry {
        Geometry::Point(p) => bound.contains(p).then_some(Geometry::Point(p)),
        Geometry::MultiPoint(mp) => {
            let mut out = multi_point(bound, mp);
            match out.len() {
                0 => None,
                1 => out.pop().map(Geometry::Point),
                _ => Some(Geometry::MultiPoint(out)),
            }
        }
        Geometry::LineString(ls) => lines_to_geometry(line_string(bound, ls, open)),
        Geometry::MultiLineString(mls) => lines_to_geometry(multi_line_string(bound, mls, open)),
        Geometry::Ring(r) => {
            let out = ring(bound, r);
            (!out.is_empty()).then_some(Geometry::Ring(out))
        }
        Geometry::Polygon(p) => polygon(bound, p).map(Geometry::Polygon),
        Geometry::MultiPolygon(mp) => polygons_to_geometry(multi_polygon(bound, mp)),
        Geometry::Collection(c) => {
            let out: Collection = c
                .0
                .into_iter()
                .filter_map(|g| clip_geometry(bound, g, open))
                .collect();
            (!out.0.is_empty()).then_some(Geometry::Collection(out))
        }
        Geometry::Bound(b) => b.intersection(bound).map(Geometry::Bound),
    }
}

fn lines_to_geometry(mut mls: MultiLineString) -> Option<Geometry> {
    match mls.len() {
        0 => None,
        1 => mls.pop().map(Geometry::LineString),
        _ => Some(Geometry::MultiLineString(mls)),
    }
}

pub(crate) fn polygons_to_geometry(mut mp: MultiPolygon) -> Option<Geometry> {
    match mp.len() {
        0 => None,
        1 => mp.pop().map(Geometry::Polygon),
        _ => Some(Geometry::MultiPolygon(mp)),
    }
}
