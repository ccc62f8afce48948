//! # boundclip
//!
//! Bounding-box clipping and topological reconstruction for 2D vector geometry.
//!
//! This library truncates points, polylines, rings and polygons to an
//! axis-aligned rectangle. Two families of operations are provided:
//!
//! - **Naive clipping** ([`clip`]): Cohen-Sutherland for lines and
//!   Sutherland-Hodgman for rings. Fast, one output ring per input ring.
//! - **Smart clipping** ([`smart`]): rings are cut into fragments whose ends
//!   lie on the bound, then closed shells are rebuilt by walking the bound's
//!   perimeter, and holes are re-attached to the shells containing them.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Exact floating-point comparisons, no epsilon tuning
//! - Multi polygons whose parts meet on the bound merge into a single shell
//! - Optional `serde` support for the geometry types
//! - Optional `polygon-ops` backend for self-intersecting input
//!
//! ## Ownership
//!
//! Clip operations take their geometry by value and may reuse its storage.
//! Clone the input first if the original is still needed.
//!
//! ## Example
//!
//! ```
//! use boundclip::{smart_clip_polygon, Bound, Orientation, Polygon, Ring};
//!
//! # fn main() -> Result<(), boundclip::Error> {
//! let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
//! let shell = Ring::from(vec![(-5.0, 2.0), (5.0, 2.0), (5.0, 8.0), (-5.0, 8.0), (-5.0, 2.0)]);
//!
//! let clipped = smart_clip_polygon(&bound, Polygon::from_shell(shell), Orientation::Ccw)?;
//! assert_eq!(clipped.len(), 1);
//! assert_eq!(clipped.area(), 30.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clip;
mod clipper;
mod config;
pub mod error;
pub mod model;
#[cfg(feature = "polygon-ops")]
pub mod robust;
pub mod smart;

pub use clipper::BoundClipper;
pub use config::ClipConfig;
pub use error::{Error, Result};
pub use model::{
    Bound, Collection, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Orientation, Point, Polygon, Ring,
};

/// Clip a line string to a bound
///
/// # Arguments
///
/// * `bound` - The clip rectangle
/// * `line` - The polyline to clip
/// * `open_boundary` - Treat the boundary as outside, dropping segments that
///   run along it
///
/// # Example
///
/// ```
/// use boundclip::{clip_line_string, Bound, LineString};
///
/// let bound = Bound::from_coords(0.0, 0.0, 10.0, 10.0);
/// let line = LineString::from(vec![(-5.0, 5.0), (5.0, 5.0), (5.0, 15.0)]);
/// let pieces = clip_line_string(&bound, line, false);
/// assert_eq!(pieces[0], LineString::from(vec![(0.0, 5.0), (5.0, 5.0), (5.0, 10.0)]));
/// ```
pub fn clip_line_string(bound: &Bound, line: LineString, open_boundary: bool) -> MultiLineString {
    clip::line_string(bound, line, open_boundary)
}

/// Clip a ring to a bound with Sutherland-Hodgman
///
/// Returns an empty ring when nothing is visible.
pub fn clip_ring(bound: &Bound, ring: Ring) -> Ring {
    clip::ring(bound, ring)
}

/// Clip every ring of a polygon without rebuilding topology
///
/// Returns `None` when the shell is not visible.
pub fn clip_polygon(bound: &Bound, polygon: Polygon) -> Option<Polygon> {
    clip::polygon(bound, polygon)
}

/// Clip a polygon and rebuild valid shells and holes
///
/// See [`smart::polygon`].
pub fn smart_clip_polygon(
    bound: &Bound,
    polygon: Polygon,
    orientation: Orientation,
) -> Result<MultiPolygon> {
    smart::polygon(bound, polygon, orientation)
}

/// Clip a multi polygon and rebuild valid shells and holes
///
/// See [`smart::multi_polygon`].
pub fn smart_clip_multi_polygon(
    bound: &Bound,
    mp: MultiPolygon,
    orientation: Orientation,
) -> Result<MultiPolygon> {
    smart::multi_polygon(bound, mp, orientation)
}
