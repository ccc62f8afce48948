//! Error types for clipping operations
//!
//! Clipping itself never fails on well-formed input. The errors in this module
//! report geometry that cannot be reconstructed into closed polygons, so the
//! caller can decide what to do instead of receiving a guessed result.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! - `E1001`: Ring not closed (fragments that never meet, odd ray crossings)
//! - `E1002`: Malformed geometry (fragment endpoints off the boundary, non-finite coordinates)
//! - `E1003`: Polygon operation failed (robust clipping backend)
//!
//! Internal invariant violations, such as requesting an edge intersection for
//! an interior point, are bugs and panic instead of returning an error.

use thiserror::Error;

/// Result type for clipping operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconstructing clipped polygons
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A ring or set of fragments does not close
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Input ring whose first and last points differ and cannot be inferred
    /// - Shells and holes with inconsistent orientation
    /// - Self-intersecting input polygons
    ///
    /// **Suggestions**:
    /// - Close rings explicitly (first point == last point)
    /// - Orient shells with the requested orientation and holes the opposite way
    #[error("[E1001] Ring not closed: {0}")]
    RingNotClosed(String),

    /// Geometry that violates the clipper's structural expectations
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Open fragment whose endpoints do not lie on the clip bound
    /// - NaN or infinite coordinates passed to smart clipping
    #[error("[E1002] Malformed geometry: {0}")]
    MalformedGeometry(String),

    /// The polygon boolean backend rejected its input
    ///
    /// **Error Code**: E1003
    ///
    /// Only produced by the `polygon-ops` feature.
    #[error("[E1003] Polygon operation failed: {0}")]
    PolygonOps(String),
}

impl Error {
    /// Create a RingNotClosed error for fragments left over after stitching
    ///
    /// # Arguments
    /// * `unused` - Number of fragment endpoints that could not be connected
    pub fn unmatched_endpoints(unused: usize) -> Self {
        Error::RingNotClosed(format!(
            "{} fragment endpoint(s) could not be connected along the bound. \
             Check ring orientation and closure.",
            unused
        ))
    }

    /// Create a RingNotClosed error for an odd number of ray crossings
    ///
    /// # Arguments
    /// * `crossings` - Total number of edge crossings counted
    pub fn odd_crossings(crossings: usize) -> Self {
        Error::RingNotClosed(format!(
            "ray crossed the ring {} times; a closed ring is always crossed an even number of times",
            crossings
        ))
    }

    /// Create a MalformedGeometry error for a NaN or infinite coordinate
    pub fn non_finite(x: f64, y: f64) -> Self {
        Error::MalformedGeometry(format!("coordinate ({}, {}) is not finite", x, y))
    }

    /// Create a MalformedGeometry error for a fragment endpoint off the bound
    pub fn endpoint_off_bound(x: f64, y: f64) -> Self {
        Error::MalformedGeometry(format!(
            "fragment endpoint ({}, {}) does not lie on the clip bound",
            x, y
        ))
    }
}
