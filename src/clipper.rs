//! A bound paired with clipping options

use crate::clip::{self, clip_geometry};
use crate::config::ClipConfig;
use crate::error::Result;
use crate::model::{Bound, Geometry, LineString, MultiLineString, MultiPolygon, Polygon, Ring};
use crate::smart::{self, smart_geometry};

/// Clips geometry to a fixed bound using a [`ClipConfig`]
///
/// Every method takes its geometry by value. Clone before clipping if the
/// original is still needed.
///
/// # Example
///
/// ```
/// use boundclip::{Bound, BoundClipper, LineString};
///
/// let clipper = BoundClipper::new(Bound::from_coords(0.0, 0.0, 10.0, 10.0));
/// let pieces = clipper.line_string(LineString::from(vec![(-5.0, 5.0), (15.0, 5.0)]));
/// assert_eq!(pieces.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundClipper {
    bound: Bound,
    config: ClipConfig,
}

impl BoundClipper {
    /// Create a clipper with the default configuration
    pub fn new(bound: Bound) -> Self {
        Self::with_config(bound, ClipConfig::default())
    }

    /// Create a clipper with a custom configuration
    pub fn with_config(bound: Bound, config: ClipConfig) -> Self {
        Self { bound, config }
    }

    /// The clip rectangle
    pub fn bound(&self) -> &Bound {
        &self.bound
    }

    /// The clipping options
    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    /// Clip a line string into its visible pieces
    pub fn line_string(&self, line: LineString) -> MultiLineString {
        clip::line_string(&self.bound, line, self.config.open_boundary())
    }

    /// Clip every line of a multi line string
    pub fn multi_line_string(&self, mls: MultiLineString) -> MultiLineString {
        clip::multi_line_string(&self.bound, mls, self.config.open_boundary())
    }

    /// Clip a ring without rebuilding topology
    pub fn ring(&self, ring: Ring) -> Ring {
        clip::ring(&self.bound, ring)
    }

    /// Clip each ring of a polygon without rebuilding topology
    pub fn polygon(&self, polygon: Polygon) -> Option<Polygon> {
        clip::polygon(&self.bound, polygon)
    }

    /// Clip a polygon and rebuild its shells and holes
    pub fn smart_polygon(&self, polygon: Polygon) -> Result<MultiPolygon> {
        smart::polygon(&self.bound, polygon, self.config.orientation())
    }

    /// Clip a multi polygon and rebuild its shells and holes
    pub fn smart_multi_polygon(&self, mp: MultiPolygon) -> Result<MultiPolygon> {
        smart::multi_polygon(&self.bound, mp, self.config.orientation())
    }

    /// Clip any geometry without rebuilding topology
    pub fn geometry(&self, geometry: Geometry) -> Option<Geometry> {
        clip_geometry(&self.bound, geometry, self.config.open_boundary())
    }

    /// Clip any geometry, rebuilding polygon topology
    pub fn smart_geometry(&self, geometry: Geometry) -> Result<Option<Geometry>> {
        smart_geometry(
            &self.bound,
            geometry,
            self.config.orientation(),
            self.config.open_boundary(),
        )
    }
}
