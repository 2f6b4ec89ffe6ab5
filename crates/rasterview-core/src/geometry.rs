//! Coordinate types for the viewport.
//!
//! Screen coordinates are what the pointer reports (fractional, may be
//! negative or beyond the image). Pixel coordinates address the raster at
//! 100% scale and are always clamped to the image bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in panel (screen) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the pair of corners reordered so the first is top-left and
    /// the second is bottom-right.
    pub fn normalize(a: ScreenPoint, b: ScreenPoint) -> (ScreenPoint, ScreenPoint) {
        (
            ScreenPoint::new(a.x.min(b.x), a.y.min(b.y)),
            ScreenPoint::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A position in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

impl PixelPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of an image or panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A rectangle in pixel space, always stored top-left / bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub top_left: PixelPoint,
    pub bottom_right: PixelPoint,
}

impl PixelRect {
    /// Builds a rectangle from any two opposite corners.
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self {
            top_left: PixelPoint::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: PixelPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Checks whether the point lies inside (inclusive of the edges).
    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.top_left.x
            && p.x <= self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y <= self.bottom_right.y
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.top_left, self.bottom_right)
    }
}
