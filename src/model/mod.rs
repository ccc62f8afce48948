//! Geometry value types
//!
//! Plain containers consumed and produced by the clippers. Multi-point
//! containers are newtypes over `Vec` and dereference to it, so the usual
//! slice and vector methods are available directly.

mod geometry;
mod line;
mod point;
mod polygon;

pub use geometry::{Collection, Geometry};
pub use line::{LineString, MultiLineString, MultiPoint};
pub use point::{Bound, Point};
pub use polygon::{MultiPolygon, Orientation, Polygon, Ring};
