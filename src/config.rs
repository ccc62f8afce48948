//! Clipping configuration

use crate::model::Orientation;

/// Options shared by the clip operations of a [`crate::BoundClipper`]
///
/// # Example
///
/// ```
/// use boundclip::{ClipConfig, Orientation};
///
/// let config = ClipConfig::new()
///     .with_orientation(Orientation::Cw)
///     .with_open_boundary(true);
/// assert_eq!(config.orientation(), Orientation::Cw);
/// assert!(config.open_boundary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipConfig {
    /// Winding of shells passed to and produced by smart clipping
    orientation: Orientation,
    /// Treat the bound's boundary as outside when clipping lines
    open_boundary: bool,
}

impl ClipConfig {
    /// Counter-clockwise shells, boundary counted as inside
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Ccw,
            open_boundary: false,
        }
    }

    /// Set the shell winding used by smart clipping
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set whether line clipping treats the boundary as outside
    ///
    /// With an open boundary, line segments running exactly along the bound's
    /// edges are discarded.
    pub fn with_open_boundary(mut self, open: bool) -> Self {
        self.open_boundary = open;
        self
    }

    /// Shell winding used by smart clipping
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether line clipping treats the boundary as outside
    pub fn open_boundary(&self) -> bool {
        self.open_boundary
    }
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self::new()
    }
}
