//! Frame composition for the image panel.
//!
//! Draw order is fixed and callers rely on it for visual stacking:
//! 1. background fill
//! 2. stop here if there is no image
//! 3. scale transform
//! 4. base image, transparent pixels over the background colour
//! 5. enabled overlays
//! 6. paintlets
//! 7. live selection, if a drag is in progress, drawn by the shape painter

use crate::overlay::OverlayRegistry;
use crate::paintlet::PaintletRegistry;
use crate::shape::{RectanglePainter, SelectionShape, SelectionShapePainter};
use crate::surface::Surface;
use crate::view::PanelView;
use rasterview_core::Color;
use std::fmt;
use std::sync::Arc;

/// Colours and the selection painter used when composing a frame.
#[derive(Clone)]
pub struct PaintPipeline {
    pub background: Color,
    pub selection_color: Color,
    shape_painter: Arc<dyn SelectionShapePainter>,
}

impl fmt::Debug for PaintPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintPipeline")
            .field("background", &self.background)
            .field("selection_color", &self.selection_color)
            .finish_non_exhaustive()
    }
}

impl Default for PaintPipeline {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::RED)
    }
}

impl PaintPipeline {
    pub fn new(background: Color, selection_color: Color) -> Self {
        Self {
            background,
            selection_color,
            shape_painter: Arc::new(RectanglePainter::default()),
        }
    }

    pub fn shape_painter(&self) -> &Arc<dyn SelectionShapePainter> {
        &self.shape_painter
    }

    pub fn set_shape_painter(&mut self, painter: Arc<dyn SelectionShapePainter>) {
        self.shape_painter = painter;
    }

    /// Renders one frame onto `surface`.
    pub fn render(
        &self,
        surface: &mut Surface,
        panel: &PanelView<'_>,
        overlays: &OverlayRegistry,
        paintlets: &PaintletRegistry,
        selection: Option<&SelectionShape>,
    ) {
        surface.reset_transform();
        surface.fill(self.background);

        let Some(image) = panel.image() else {
            return;
        };

        surface.set_scale(panel.scale());
        surface.draw_image(image, self.background);

        overlays.paint_enabled(panel, surface);

        for paintlet in paintlets.snapshot() {
            paintlet.paint(panel, surface);
        }

        if let Some(shape) = selection {
            self.shape_painter
                .paint(panel, shape, self.selection_color, surface);
        }

        tracing::trace!(
            "Rendered {}x{} frame at scale {:.3}",
            surface.width(),
            surface.height(),
            panel.scale()
        );
    }
}
