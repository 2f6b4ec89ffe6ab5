//! Sample overlays shipped with the binary.
//!
//! Both keep their mutable state behind atomics or a lock since the viewer
//! shares them with whoever registered them.

use parking_lot::Mutex;
use rasterview_core::{Color, PixelRect, Result};
use rasterview_viewer::{Overlay, PanelView, SelectionEvent, SelectionListener, Surface};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

pub const GRID_FAMILY: &str = "grid";
pub const REGION_FAMILY: &str = "region";

/// Pixel grid drawn every `spacing` image pixels.
#[derive(Debug)]
pub struct GridOverlay {
    spacing: AtomicU32,
    color: Color,
    enabled: AtomicBool,
}

impl GridOverlay {
    pub fn new(spacing: u32, color: Color) -> Self {
        Self {
            spacing: AtomicU32::new(spacing),
            color,
            enabled: AtomicBool::new(true),
        }
    }

    pub fn spacing(&self) -> u32 {
        self.spacing.load(Ordering::Relaxed)
    }

    pub fn set_spacing(&self, spacing: u32) {
        self.spacing.store(spacing, Ordering::Relaxed);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

impl Overlay for GridOverlay {
    fn family(&self) -> &str {
        GRID_FAMILY
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn paint(&self, panel: &PanelView<'_>, surface: &mut Surface) -> Result<()> {
        let Some(size) = panel.image_size() else {
            return Ok(());
        };
        let spacing = self.spacing();
        if spacing == 0 {
            return Ok(());
        }

        // one screen pixel wide regardless of zoom
        let line = 1.0 / panel.scale();
        let (width, height) = (size.width as f64, size.height as f64);

        for x in (spacing..size.width).step_by(spacing as usize) {
            surface.fill_rect(x as f64, 0.0, line, height, self.color);
        }
        for y in (spacing..size.height).step_by(spacing as usize) {
            surface.fill_rect(0.0, y as f64, width, line, self.color);
        }
        Ok(())
    }
}

/// Outlines a region of interest. Registered as a selection listener it
/// follows the user's latest selection.
#[derive(Debug)]
pub struct RegionOverlay {
    region: Mutex<Option<PixelRect>>,
    color: Color,
    line_width: f64,
    enabled: AtomicBool,
}

impl RegionOverlay {
    pub fn new(color: Color) -> Self {
        Self {
            region: Mutex::new(None),
            color,
            line_width: 2.0,
            enabled: AtomicBool::new(true),
        }
    }

    pub fn with_region(self, region: PixelRect) -> Self {
        *self.region.lock() = Some(region);
        self
    }

    pub fn region(&self) -> Option<PixelRect> {
        *self.region.lock()
    }

    pub fn set_region(&self, region: Option<PixelRect>) {
        *self.region.lock() = region;
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

impl Overlay for RegionOverlay {
    fn family(&self) -> &str {
        REGION_FAMILY
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn image_changed(&self, _panel: &PanelView<'_>) {
        self.set_region(None);
    }

    fn paint(&self, _panel: &PanelView<'_>, surface: &mut Surface) -> Result<()> {
        if let Some(region) = self.region() {
            surface.stroke_rect(region, self.color, self.line_width);
        }
        Ok(())
    }
}

impl SelectionListener for RegionOverlay {
    fn selected(&self, event: &SelectionEvent) {
        tracing::debug!("Region set to {}", event.rect());
        self.set_region(Some(event.rect()));
    }
}
