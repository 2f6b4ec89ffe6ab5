//! Rubber-band selection and click listeners.
//!
//! The controller is a three-phase machine: `Idle -> Armed -> Dragging`,
//! returning to `Idle` on release. Corners are tracked in screen space and
//! only converted to pixels when the rectangle is reported or drawn, so a
//! zoom change mid-gesture still yields a consistent box. The same holds
//! for the trace of pointer positions recorded while dragging.

use crate::input::{Modifiers, MouseButton};
use crate::shape::SelectionShape;
use crate::view::{PanelView, ViewerId};
use crate::viewport::Viewport;
use rasterview_core::{PixelPoint, PixelRect, ScreenPoint};

/// Phase of the current pointer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    /// Primary button pressed, no movement yet.
    Armed,
    Dragging,
}

/// What the host should do after feeding an event to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionUpdate {
    Unchanged,
    /// The live selection box moved.
    Repaint,
    /// A drag finished; corners are normalized pixel positions.
    Completed {
        rect: PixelRect,
        trace: Vec<PixelPoint>,
        modifiers: Modifiers,
    },
}

/// Tracks one selection gesture.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    enabled: bool,
    phase: SelectionPhase,
    from: ScreenPoint,
    to: ScreenPoint,
    trace: Vec<ScreenPoint>,
}

impl SelectionController {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Armed or dragging.
    pub fn is_selecting(&self) -> bool {
        self.phase != SelectionPhase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == SelectionPhase::Dragging
    }

    /// Screen corners as recorded, not normalized.
    pub fn corners(&self) -> (ScreenPoint, ScreenPoint) {
        (self.from, self.to)
    }

    /// Screen positions recorded since the press.
    pub fn trace(&self) -> &[ScreenPoint] {
        &self.trace
    }

    pub fn reset(&mut self) {
        self.phase = SelectionPhase::Idle;
        self.from = ScreenPoint::default();
        self.to = ScreenPoint::default();
        self.trace.clear();
    }

    fn push_trace(&mut self, position: ScreenPoint) {
        if self.trace.last() != Some(&position) {
            self.trace.push(position);
        }
    }

    fn arm(
        &mut self,
        position: ScreenPoint,
        button: MouseButton,
        modifiers: Modifiers,
        has_image: bool,
    ) -> bool {
        if button != MouseButton::Primary || modifiers.is_alternate() {
            return false;
        }
        // without an image there are no pixel coordinates to report
        if !self.enabled || !has_image {
            return false;
        }
        self.phase = SelectionPhase::Armed;
        self.from = position;
        self.to = position;
        self.trace.clear();
        self.trace.push(position);
        true
    }

    pub fn on_press(
        &mut self,
        position: ScreenPoint,
        button: MouseButton,
        modifiers: Modifiers,
        has_image: bool,
    ) -> SelectionUpdate {
        if self.arm(position, button, modifiers, has_image) {
            tracing::trace!("Selection armed at {}", position);
        }
        SelectionUpdate::Unchanged
    }

    /// Hover movement re-arms only when the toolkit still reports the
    /// primary button.
    pub fn on_move(
        &mut self,
        position: ScreenPoint,
        button: Option<MouseButton>,
        modifiers: Modifiers,
        has_image: bool,
    ) -> SelectionUpdate {
        if let Some(button) = button {
            self.arm(position, button, modifiers, has_image);
        }
        SelectionUpdate::Unchanged
    }

    pub fn on_drag(&mut self, position: ScreenPoint, modifiers: Modifiers) -> SelectionUpdate {
        if !self.is_selecting() || modifiers.is_alternate() {
            return SelectionUpdate::Unchanged;
        }
        self.phase = SelectionPhase::Dragging;
        self.to = position;
        self.push_trace(position);
        SelectionUpdate::Repaint
    }

    pub fn on_release(
        &mut self,
        position: ScreenPoint,
        button: MouseButton,
        modifiers: Modifiers,
        viewport: &Viewport,
    ) -> SelectionUpdate {
        if button != MouseButton::Primary {
            return SelectionUpdate::Unchanged;
        }
        match self.phase {
            SelectionPhase::Idle => SelectionUpdate::Unchanged,
            SelectionPhase::Armed => {
                // plain click
                self.reset();
                SelectionUpdate::Unchanged
            }
            SelectionPhase::Dragging => {
                self.to = position;
                self.push_trace(position);
                let shape = self.shape(viewport);
                self.reset();
                match shape {
                    Some(SelectionShape { rect, trace }) => SelectionUpdate::Completed {
                        rect,
                        trace,
                        modifiers,
                    },
                    None => SelectionUpdate::Unchanged,
                }
            }
        }
    }

    /// The live box in pixel space, only while dragging.
    pub fn box_corners(&self, viewport: &Viewport) -> Option<PixelRect> {
        if self.is_dragging() {
            self.pixel_rect(viewport)
        } else {
            None
        }
    }

    /// The live box and trace in pixel space, only while dragging.
    pub fn live_shape(&self, viewport: &Viewport) -> Option<SelectionShape> {
        if self.is_dragging() {
            self.shape(viewport)
        } else {
            None
        }
    }

    fn pixel_rect(&self, viewport: &Viewport) -> Option<PixelRect> {
        viewport.image_size()?;
        let (top_left, bottom_right) = ScreenPoint::normalize(self.from, self.to);
        Some(PixelRect {
            top_left: viewport.screen_to_pixel(top_left),
            bottom_right: viewport.screen_to_pixel(bottom_right),
        })
    }

    fn shape(&self, viewport: &Viewport) -> Option<SelectionShape> {
        let rect = self.pixel_rect(viewport)?;
        let trace = self
            .trace
            .iter()
            .map(|p| viewport.screen_to_pixel(*p))
            .collect();
        Some(SelectionShape { rect, trace })
    }
}

/// A completed selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub top_left: PixelPoint,
    pub bottom_right: PixelPoint,
    /// Pointer path from press to release, clamped to the image.
    pub trace: Vec<PixelPoint>,
    pub modifiers: Modifiers,
    pub source: ViewerId,
}

impl SelectionEvent {
    pub fn rect(&self) -> PixelRect {
        PixelRect {
            top_left: self.top_left,
            bottom_right: self.bottom_right,
        }
    }
}

/// Receives completed selections.
pub trait SelectionListener: Send + Sync {
    fn selected(&self, event: &SelectionEvent);

    fn image_changed(&self, _panel: &PanelView<'_>) {}
}

/// A primary-button click on the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeftClickEvent {
    pub screen: ScreenPoint,
    pub pixel: PixelPoint,
    pub modifiers: Modifiers,
    pub source: ViewerId,
}

/// Receives primary-button clicks.
pub trait LeftClickListener: Send + Sync {
    fn clicked(&self, event: &LeftClickEvent);

    fn image_changed(&self, _panel: &PanelView<'_>) {}
}
