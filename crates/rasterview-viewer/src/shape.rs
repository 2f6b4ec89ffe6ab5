//! Painters for the live selection.
//!
//! While a drag is in progress the pipeline hands the current shape to the
//! configured [`SelectionShapePainter`] as the last paint step.

use crate::surface::Surface;
use crate::view::PanelView;
use rasterview_core::{Color, PixelPoint, PixelRect};

/// The in-progress selection in pixel space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionShape {
    /// Normalized bounding box of the drag.
    pub rect: PixelRect,
    /// Pointer positions since the press, in order, clamped to the image.
    pub trace: Vec<PixelPoint>,
}

/// Draws the selection while the user drags. The surface already carries
/// the scale transform, so painters work in pixel coordinates.
pub trait SelectionShapePainter: Send + Sync {
    fn paint(
        &self,
        panel: &PanelView<'_>,
        shape: &SelectionShape,
        color: Color,
        surface: &mut Surface,
    );
}

/// Outlines the bounding box of the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectanglePainter {
    /// In screen pixels.
    pub line_width: f64,
}

impl Default for RectanglePainter {
    fn default() -> Self {
        Self { line_width: 1.0 }
    }
}

impl SelectionShapePainter for RectanglePainter {
    fn paint(
        &self,
        _panel: &PanelView<'_>,
        shape: &SelectionShape,
        color: Color,
        surface: &mut Surface,
    ) {
        surface.stroke_rect(shape.rect, color, self.line_width);
    }
}

/// Lasso outline: the trace closed back to its first point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonPainter {
    /// In screen pixels.
    pub line_width: f64,
}

impl Default for PolygonPainter {
    fn default() -> Self {
        Self { line_width: 1.0 }
    }
}

impl SelectionShapePainter for PolygonPainter {
    fn paint(
        &self,
        _panel: &PanelView<'_>,
        shape: &SelectionShape,
        color: Color,
        surface: &mut Surface,
    ) {
        let Some(first) = shape.trace.first() else {
            return;
        };
        // through pixel centres
        let centre = |p: &PixelPoint| (p.x as f64 + 0.5, p.y as f64 + 0.5);
        let points: Vec<(f64, f64)> = shape
            .trace
            .iter()
            .chain(std::iter::once(first))
            .map(centre)
            .collect();
        surface.stroke_polyline(&points, color, self.line_width);
    }
}
