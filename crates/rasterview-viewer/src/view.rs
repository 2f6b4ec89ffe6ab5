//! Read-only view of the panel handed to overlays, paintlets and listeners.

use crate::raster::Image;
use crate::viewport::{to_pixel, to_screen};
use rasterview_core::{PixelPoint, Report, ScreenPoint, Size};
use std::path::Path;
use uuid::Uuid;

/// Identifies the viewer an event or callback originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewerId(Uuid);

impl ViewerId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ViewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Viewer({})", &self.0.to_string()[..8])
    }
}

/// Borrowed snapshot of what the panel currently displays.
#[derive(Debug, Clone, Copy)]
pub struct PanelView<'a> {
    pub(crate) source: ViewerId,
    pub(crate) image: Option<&'a Image>,
    pub(crate) file: Option<&'a Path>,
    pub(crate) scale: f64,
    pub(crate) modified: bool,
    pub(crate) properties: &'a Report,
}

impl<'a> PanelView<'a> {
    pub fn source(&self) -> ViewerId {
        self.source
    }

    pub fn image(&self) -> Option<&'a Image> {
        self.image
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image.map(Image::size)
    }

    pub fn file(&self) -> Option<&'a Path> {
        self.file
    }

    /// Concrete scale of the frame being painted.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Image properties (file, dimensions, codec metadata).
    pub fn properties(&self) -> &'a Report {
        self.properties
    }

    pub fn to_pixel(&self, screen: ScreenPoint) -> PixelPoint {
        to_pixel(screen, self.scale, self.image_size())
    }

    pub fn to_screen(&self, pixel: PixelPoint) -> ScreenPoint {
        to_screen(pixel, self.scale)
    }
}
