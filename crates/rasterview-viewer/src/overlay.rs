//! Overlay plugin contract and registry.
//!
//! Overlays render on top of the base image at the current scale. They are
//! shared (`Arc`) between the caller and the viewer, so any state they keep
//! must use interior mutability. Family tags replace runtime type checks
//! when removing "all overlays of a kind".

use crate::registry::Registry;
use crate::surface::Surface;
use crate::view::PanelView;
use rasterview_core::Result;
use std::sync::Arc;

/// Default family for overlays that do not declare one.
pub const DEFAULT_FAMILY: &str = "overlay";

/// A renderer drawn over the image, toggled independently.
pub trait Overlay: Send + Sync {
    /// Tag used by [`OverlayRegistry::remove_family`].
    fn family(&self) -> &str {
        DEFAULT_FAMILY
    }

    /// Disabled overlays are not painted but still see image changes.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Called whenever the displayed image is replaced.
    fn image_changed(&self, _panel: &PanelView<'_>) {}

    /// Draws in pixel coordinates; the surface already carries the scale.
    fn paint(&self, panel: &PanelView<'_>, surface: &mut Surface) -> Result<()>;

    fn overlay_added(&self, _panel: &PanelView<'_>) {}

    fn overlay_removed(&self, _panel: &PanelView<'_>) {}
}

/// Thread-safe overlay set.
///
/// Insertion order is kept but callers must not rely on the relative paint
/// order of overlays; only that all of them paint after the image.
#[derive(Clone, Default)]
pub struct OverlayRegistry {
    inner: Registry<dyn Overlay>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, overlay: Arc<dyn Overlay>) -> bool {
        self.inner.add(overlay)
    }

    pub fn remove(&self, overlay: &Arc<dyn Overlay>) -> bool {
        self.inner.remove(overlay)
    }

    /// Removes every overlay tagged with `family`.
    pub fn remove_family(&self, family: &str) -> Vec<Arc<dyn Overlay>> {
        self.inner.remove_where(|o| o.family() == family)
    }

    pub fn clear(&self) -> Vec<Arc<dyn Overlay>> {
        self.inner.clear()
    }

    pub fn contains(&self, overlay: &Arc<dyn Overlay>) -> bool {
        self.inner.contains(overlay)
    }

    pub fn snapshot(&self) -> Vec<Arc<dyn Overlay>> {
        self.inner.snapshot()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Visits a snapshot of every registered overlay.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Arc<dyn Overlay>),
    {
        for overlay in self.snapshot() {
            visitor(&overlay);
        }
    }

    /// Fans out an image change to all overlays, enabled or not.
    pub fn notify_image_changed(&self, panel: &PanelView<'_>) {
        self.for_each(|overlay| overlay.image_changed(panel));
    }

    /// Paints every enabled overlay. A failing overlay is logged and
    /// skipped so the rest of the frame still renders.
    pub fn paint_enabled(&self, panel: &PanelView<'_>, surface: &mut Surface) {
        for overlay in self.snapshot() {
            if !overlay.is_enabled() {
                continue;
            }
            if let Err(e) = overlay.paint(panel, surface) {
                tracing::error!("Overlay '{}' failed to paint: {}", overlay.family(), e);
            }
        }
    }
}

impl std::fmt::Debug for OverlayRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayRegistry")
            .field("len", &self.len())
            .finish()
    }
}
