//! Always-on auxiliary painters, drawn after the overlays.

use crate::registry::Registry;
use crate::surface::Surface;
use crate::view::PanelView;

/// Low-level painter with no enabled flag.
pub trait Paintlet: Send + Sync {
    fn paint(&self, panel: &PanelView<'_>, surface: &mut Surface);
}

/// Paintlets share the overlay locking rules.
pub type PaintletRegistry = Registry<dyn Paintlet>;
