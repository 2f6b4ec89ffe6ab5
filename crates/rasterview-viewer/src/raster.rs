//! Shared raster handle.
//!
//! The viewer never mutates pixels in place; edits produce a new [`Image`]
//! that replaces the old one wholesale. Handles are reference counted so an
//! undo snapshot costs one pointer copy no matter how large the raster is,
//! and the raster is released once the last snapshot referencing it drops.

use image::{DynamicImage, Rgba, RgbaImage};
use rasterview_core::Size;
use std::fmt;
use std::sync::Arc;

/// Reference-counted RGBA raster.
///
/// Equality is identity: two handles are equal only when they point at the
/// same raster, which is what undo snapshots need to detect "unchanged".
#[derive(Clone)]
pub struct Image(Arc<RgbaImage>);

impl Image {
    pub fn new(pixels: RgbaImage) -> Self {
        Self(Arc::new(pixels))
    }

    /// Creates an image filled with a single colour.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Borrow the underlying pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }

    /// Number of live handles (viewer plus snapshots) sharing this raster.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Image {}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("size", &self.size())
            .field("ptr", &Arc::as_ptr(&self.0))
            .finish()
    }
}

impl From<RgbaImage> for Image {
    fn from(value: RgbaImage) -> Self {
        Self::new(value)
    }
}

impl From<DynamicImage> for Image {
    fn from(value: DynamicImage) -> Self {
        Self::new(value.into_rgba8())
    }
}
