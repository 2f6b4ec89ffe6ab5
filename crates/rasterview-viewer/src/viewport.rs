//! Viewport and coordinate transformation for the image panel.
//!
//! Handles conversion between pixel coordinates (image space, 100% scale)
//! and screen coordinates (panel space). Manages the requested zoom, which
//! may be the "fit" sentinel, and resolves it to a concrete scale.

use rasterview_core::constants::{
    DEFAULT_FIT_INSET, EMPTY_PANEL_HEIGHT, EMPTY_PANEL_WIDTH, FIT_SCALE, MAX_SCALE,
};
use rasterview_core::{PixelPoint, ScreenPoint, Size};
use std::fmt;

/// Absorbs float error so that `to_pixel(to_screen(p))` lands back on `p`.
const PIXEL_EPSILON: f64 = 1e-9;

/// Requested zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zoom {
    /// Recompute the scale from the panel size on every paint.
    Fit,
    /// Fixed factor in `(0, 16]`.
    Factor(f64),
}

impl Zoom {
    /// Interprets a raw scale value: `-1` means fit, `(0, 16]` a factor,
    /// anything else is rejected.
    pub fn from_value(value: f64) -> Option<Self> {
        if value == FIT_SCALE {
            Some(Self::Fit)
        } else if value > 0.0 && value <= MAX_SCALE {
            Some(Self::Factor(value))
        } else {
            None
        }
    }

    /// Raw value, with the fit sentinel as `-1`.
    pub fn value(&self) -> f64 {
        match self {
            Self::Fit => FIT_SCALE,
            Self::Factor(f) => *f,
        }
    }

    pub fn is_fit(&self) -> bool {
        matches!(self, Self::Fit)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::Factor(1.0)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit => write!(f, "best fit"),
            Self::Factor(s) => write!(f, "{:.1}%", s * 100.0),
        }
    }
}

/// Converts a pixel position to screen space.
pub fn to_screen(pixel: PixelPoint, scale: f64) -> ScreenPoint {
    ScreenPoint::new(pixel.x as f64 * scale, pixel.y as f64 * scale)
}

/// Converts a screen position to pixel space.
///
/// Negative positions clamp to 0. With an image, positions beyond it clamp
/// to its width/height, so pointer events slightly outside the raster never
/// produce out-of-range pixels.
pub fn to_pixel(screen: ScreenPoint, scale: f64, image: Option<Size>) -> PixelPoint {
    let axis = |value: f64, limit: Option<u32>| -> u32 {
        let raw = (value / scale + PIXEL_EPSILON).floor();
        let raw = if raw.is_nan() || raw < 0.0 { 0.0 } else { raw };
        match limit {
            Some(limit) => raw.min(limit as f64) as u32,
            None => raw.min(u32::MAX as f64) as u32,
        }
    };
    PixelPoint::new(
        axis(screen.x, image.map(|s| s.width)),
        axis(screen.y, image.map(|s| s.height)),
    )
}

/// Resolves the requested zoom to a concrete, positive scale.
///
/// A factor is returned unchanged. Fit divides the panel (minus `inset` on
/// each axis) by the image and takes the smaller ratio. Without an image the
/// default scale of 1.0 is used.
pub fn resolve_scale(zoom: Zoom, panel: Size, image: Option<Size>, inset: f64) -> f64 {
    match zoom {
        Zoom::Factor(scale) => scale,
        Zoom::Fit => match image.filter(|s| !s.is_empty()) {
            None => 1.0,
            Some(image) => {
                let width = (panel.width as f64 - inset).max(1.0);
                let height = (panel.height as f64 - inset).max(1.0);
                let scale_w = width / image.width as f64;
                let scale_h = height / image.height as f64;
                scale_w.min(scale_h)
            }
        },
    }
}

/// Outcome of a wheel zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelZoom {
    pub old_scale: f64,
    pub new_scale: f64,
    /// Scroll position that keeps the pixel under the pointer in place.
    pub view_position: ScreenPoint,
}

/// Represents the viewport state: requested zoom, last resolved scale, and
/// the sizes it is resolved against.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: Zoom,
    actual: f64,
    panel: Size,
    image: Option<Size>,
    fit_inset: f64,
}

impl Viewport {
    /// Creates a viewport for a panel of the given size, at 100%.
    pub fn new(panel: Size) -> Self {
        Self {
            zoom: Zoom::default(),
            actual: 1.0,
            panel,
            image: None,
            fit_inset: DEFAULT_FIT_INSET,
        }
    }

    pub fn with_fit_inset(mut self, inset: f64) -> Self {
        self.fit_inset = inset;
        self.resolve();
        self
    }

    pub fn fit_inset(&self) -> f64 {
        self.fit_inset
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Sets the requested zoom and resolves it immediately.
    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom;
        self.resolve();
    }

    /// Sets the zoom from a raw value (`(0,16]` or `-1`). Out-of-range
    /// values are ignored and `false` is returned.
    pub fn set_scale(&mut self, value: f64) -> bool {
        match Zoom::from_value(value) {
            Some(zoom) => {
                self.set_zoom(zoom);
                true
            }
            None => {
                tracing::debug!("Ignoring out-of-range scale {}", value);
                false
            }
        }
    }

    /// Requested scale, `-1` when fitting.
    pub fn scale(&self) -> f64 {
        self.zoom.value()
    }

    /// Last resolved concrete scale.
    pub fn actual_scale(&self) -> f64 {
        self.actual
    }

    pub fn panel_size(&self) -> Size {
        self.panel
    }

    /// Updates the panel size (window resize). Fit is re-resolved.
    pub fn set_panel_size(&mut self, panel: Size) {
        self.panel = panel;
        self.resolve();
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    pub fn set_image_size(&mut self, image: Option<Size>) {
        self.image = image;
        self.resolve();
    }

    /// Recomputes the concrete scale from the current request and sizes.
    /// Called on every paint since the panel may have changed in between.
    pub fn resolve(&mut self) -> f64 {
        self.actual = resolve_scale(self.zoom, self.panel, self.image, self.fit_inset);
        self.actual
    }

    /// Size the panel needs to show the whole image at the actual scale.
    /// Never zero in either dimension while an image is shown.
    pub fn required_size(&self) -> Size {
        match self.image {
            Some(image) => Size::new(
                ((image.width as f64 * self.actual) as u32).max(1),
                ((image.height as f64 * self.actual) as u32).max(1),
            ),
            None => Size::new(EMPTY_PANEL_WIDTH, EMPTY_PANEL_HEIGHT),
        }
    }

    /// Converts a screen position to a clamped pixel position.
    pub fn screen_to_pixel(&self, screen: ScreenPoint) -> PixelPoint {
        to_pixel(screen, self.actual, self.image)
    }

    /// Converts a pixel position to a screen position.
    pub fn pixel_to_screen(&self, pixel: PixelPoint) -> ScreenPoint {
        to_screen(pixel, self.actual)
    }

    /// Multiplies (`notches < 0`) or divides (`notches > 0`) the actual
    /// scale by `step` per notch. Returns the new scale if it was accepted.
    pub fn zoom_by_wheel(&mut self, notches: i32, step: f64) -> Option<f64> {
        let factor = step.powf(f64::from(notches.unsigned_abs()));
        let new_scale = if notches < 0 {
            self.actual * factor
        } else {
            self.actual / factor
        };
        self.set_scale(new_scale).then_some(new_scale)
    }

    /// Wheel zoom anchored at the pointer. `view_position` is the current
    /// scroll offset of the visible area; the returned one keeps the pixel
    /// under `pointer` at the same offset from the visible area's corner.
    pub fn wheel_zoom(
        &mut self,
        pointer: ScreenPoint,
        notches: i32,
        step: f64,
        view_position: ScreenPoint,
    ) -> Option<WheelZoom> {
        let old_scale = self.actual;
        let anchor = self.screen_to_pixel(pointer);
        let dist_x = pointer.x - view_position.x;
        let dist_y = pointer.y - view_position.y;

        let new_scale = self.zoom_by_wheel(notches, step)?;
        let view_position = ScreenPoint::new(
            (anchor.x as f64 * new_scale - dist_x).max(0.0),
            (anchor.y as f64 * new_scale - dist_y).max(0.0),
        );
        Some(WheelZoom {
            old_scale,
            new_scale,
            view_position,
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(800, 600))
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {} | Actual: {:.3} | Panel: {}",
            self.zoom, self.actual, self.panel
        )
    }
}
