//! Image viewer façade.
//!
//! Owns the displayed image and everything around it: viewport, overlays,
//! paintlets, selection, undo history and the interaction log. All
//! mutation happens on the owning thread; other threads either use the
//! shared registries directly or post a [`ViewerCommand`].

use crate::codec::{DefaultCodec, ImageReader, ImageWriter, LoadedImage};
use crate::dispatch::{self, CommandSender, ViewerCommand};
use crate::history::{History, ViewerState};
use crate::input::{Modifiers, MouseButton, PointerEvent};
use crate::interaction::InteractionLog;
use crate::overlay::{Overlay, OverlayRegistry};
use crate::paintlet::{Paintlet, PaintletRegistry};
use crate::raster::Image;
use crate::registry::Registry;
use crate::renderer::PaintPipeline;
use crate::selection::{
    LeftClickEvent, LeftClickListener, SelectionController, SelectionEvent, SelectionListener,
    SelectionPhase, SelectionUpdate,
};
use crate::shape::SelectionShapePainter;
use crate::surface::Surface;
use crate::view::{PanelView, ViewerId};
use crate::viewport::{Viewport, WheelZoom, Zoom};
use rasterview_core::{
    CodecError, Color, PixelPoint, PixelRect, Report, ScreenPoint, Size, ViewerError,
};
use rasterview_settings::{Config, HistorySettings, ViewerSettings};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::sync::mpsc;

const UNDO_STATUS: &str = "Saving undo data...";

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn pointer_data(
    position: ScreenPoint,
    button: Option<MouseButton>,
    modifiers: Modifiers,
) -> Map<String, Value> {
    object(json!({
        "x": position.x,
        "y": position.y,
        "button": button,
        "modifiers": modifiers.to_string(),
    }))
}

/// Interactive image viewer.
pub struct Viewer {
    id: ViewerId,
    image: Option<Image>,
    file: Option<PathBuf>,
    modified: bool,
    viewport: Viewport,
    initial_zoom: Zoom,
    zoom_step: f64,
    view_position: ScreenPoint,
    pointer: Option<ScreenPoint>,
    pipeline: PaintPipeline,
    overlays: OverlayRegistry,
    paintlets: PaintletRegistry,
    selection: SelectionController,
    selection_listeners: Registry<dyn SelectionListener>,
    left_click_listeners: Registry<dyn LeftClickListener>,
    history: History<ViewerState>,
    image_properties: Report,
    additional_properties: Option<Report>,
    interactions: InteractionLog,
    reader: Arc<dyn ImageReader>,
    writer: Arc<dyn ImageWriter>,
    sender: CommandSender,
    commands: mpsc::UnboundedReceiver<ViewerCommand>,
}

impl Viewer {
    /// Viewer with default settings and the `image`-crate codec.
    pub fn new() -> Self {
        Self::with_settings(&ViewerSettings::default(), &HistorySettings::default())
    }

    /// Viewer configured from a validated [`Config`].
    pub fn from_config(config: &Config) -> rasterview_core::Result<Self> {
        let mut viewer = Self::with_settings(&config.viewer, &config.history);
        viewer.history.set_capacity(config.history.capacity)?;
        Ok(viewer)
    }

    fn with_settings(settings: &ViewerSettings, history_settings: &HistorySettings) -> Self {
        let (sender, commands) = dispatch::channel();
        let panel = Size::new(settings.panel_width, settings.panel_height);
        let initial_zoom = Zoom::from_value(settings.initial_scale).unwrap_or_default();

        let mut history = History::new();
        history.set_enabled(history_settings.enabled);

        Self {
            id: ViewerId::new(),
            image: None,
            file: None,
            modified: false,
            viewport: Viewport::new(panel).with_fit_inset(settings.fit_inset),
            initial_zoom,
            zoom_step: settings.zoom_step,
            view_position: ScreenPoint::default(),
            pointer: None,
            pipeline: PaintPipeline::new(settings.background, settings.selection_color),
            overlays: OverlayRegistry::new(),
            paintlets: PaintletRegistry::new(),
            selection: SelectionController::new(settings.selection_enabled),
            selection_listeners: Registry::new(),
            left_click_listeners: Registry::new(),
            history,
            image_properties: Report::new(),
            additional_properties: None,
            interactions: InteractionLog::new(settings.log_interactions)
                .with_capacity(settings.interaction_log_capacity),
            reader: Arc::new(DefaultCodec),
            writer: Arc::new(DefaultCodec),
            sender,
            commands,
        }
    }

    /// Replaces the fallback reader and writer.
    pub fn with_codec(mut self, reader: Arc<dyn ImageReader>, writer: Arc<dyn ImageWriter>) -> Self {
        self.reader = reader;
        self.writer = writer;
        self
    }

    pub fn id(&self) -> ViewerId {
        self.id
    }

    /// What overlays and listeners get to see.
    pub fn panel_view(&self) -> PanelView<'_> {
        PanelView {
            source: self.id,
            image: self.image.as_ref(),
            file: self.file.as_deref(),
            scale: self.viewport.actual_scale(),
            modified: self.modified,
            properties: &self.image_properties,
        }
    }

    // Image lifecycle

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Loads a file with the configured reader at the initial zoom.
    pub fn load(&mut self, path: &Path) -> Result<(), ViewerError> {
        let reader = Arc::clone(&self.reader);
        self.load_with(path, reader.as_ref(), self.initial_zoom)
    }

    /// Loads a file with an explicit reader and zoom. On failure the viewer
    /// is left empty and the error is returned.
    pub fn load_with(
        &mut self,
        path: &Path,
        reader: &dyn ImageReader,
        zoom: Zoom,
    ) -> Result<(), ViewerError> {
        self.add_undo_point(UNDO_STATUS, format!("Loading file '{}'", path.display()));
        let result = reader.read(path);
        self.finish_load(path, result, zoom)
    }

    fn finish_load(
        &mut self,
        path: &Path,
        result: Result<LoadedImage, CodecError>,
        zoom: Zoom,
    ) -> Result<(), ViewerError> {
        match result {
            Ok(loaded) => {
                self.replace_image(
                    Some(loaded.image),
                    Some(path.to_path_buf()),
                    zoom,
                    Some(loaded.report),
                    false,
                );
                tracing::info!("load: {}", path.display());
                Ok(())
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.reset_to_empty();
                Err(e.into())
            }
        }
    }

    /// Writes the image with the configured writer.
    pub fn save(&mut self, path: &Path) -> Result<(), ViewerError> {
        let writer = Arc::clone(&self.writer);
        self.save_with(path, writer.as_ref())
    }

    /// Writes the image. On success the file becomes current and the
    /// modified flag is cleared; on failure nothing changes.
    pub fn save_with(&mut self, path: &Path, writer: &dyn ImageWriter) -> Result<(), ViewerError> {
        let image = self.image.as_ref().ok_or(ViewerError::NoImage)?;
        match writer.write(path, image) {
            Ok(()) => {
                self.file = Some(path.to_path_buf());
                self.modified = false;
                self.update_image_properties(None);
                tracing::info!("saved: {}", path.display());
                Ok(())
            }
            Err(e) => {
                tracing::error!("save failed: {}: {}", path.display(), e);
                Err(e.into())
            }
        }
    }

    /// Removes the image, recording an undo point first.
    pub fn clear(&mut self) {
        self.add_undo_point(UNDO_STATUS, "Removing image");
        self.reset_to_empty();
        tracing::info!("clear");
    }

    fn reset_to_empty(&mut self) {
        let zoom = self.viewport.zoom();
        self.replace_image(None, None, zoom, None, false);
    }

    /// Displays a new image not backed by a file. The zoom is kept.
    pub fn set_image(&mut self, image: Option<Image>) {
        let zoom = self.viewport.zoom();
        let modified = self.modified;
        self.replace_image(image, None, zoom, None, modified);
    }

    /// Displays an image together with its own metadata report, which
    /// becomes the additional properties.
    pub fn set_image_with_report(&mut self, image: Image, report: Report) {
        self.set_image(Some(image));
        self.set_additional_properties(Some(report));
    }

    /// Associates a file with the displayed image. Ignored without an image.
    pub fn set_current_file(&mut self, file: Option<PathBuf>) -> bool {
        if self.image.is_none() {
            return false;
        }
        self.file = file;
        self.update_image_properties(None);
        true
    }

    /// Swaps image, file and modified flag in one step, then tells
    /// everyone who cares.
    fn replace_image(
        &mut self,
        image: Option<Image>,
        file: Option<PathBuf>,
        zoom: Zoom,
        report: Option<Report>,
        modified: bool,
    ) {
        self.image = image;
        self.file = file;
        self.modified = modified;
        self.selection.reset();
        self.viewport.set_image_size(self.image.as_ref().map(Image::size));
        self.viewport.set_zoom(zoom);
        self.update_image_properties(report);
        self.notify_image_changed();
    }

    fn notify_image_changed(&self) {
        let view = self.panel_view();
        self.overlays.notify_image_changed(&view);
        for listener in self.selection_listeners.snapshot() {
            listener.image_changed(&view);
        }
        for listener in self.left_click_listeners.snapshot() {
            listener.image_changed(&view);
        }
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    // Properties

    fn update_image_properties(&mut self, report: Option<Report>) {
        let mut properties = report.unwrap_or_default();
        if let Some(image) = &self.image {
            if let Some(file) = &self.file {
                properties.set_string("File", file.display().to_string());
            }
            properties.set_number("Width", image.width() as f64);
            properties.set_number("Height", image.height() as f64);
        }
        self.image_properties = properties;
    }

    pub fn image_properties(&self) -> &Report {
        &self.image_properties
    }

    pub fn additional_properties(&self) -> Option<&Report> {
        self.additional_properties.as_ref()
    }

    pub fn set_additional_properties(&mut self, report: Option<Report>) {
        self.additional_properties = report;
    }

    /// Image properties overlaid with the additional ones.
    pub fn all_properties(&self) -> Report {
        match &self.additional_properties {
            Some(extra) => self.image_properties.merged(extra),
            None => self.image_properties.clone(),
        }
    }

    // Zoom

    /// Requests a scale in `(0, 16]` or `-1` for fit. Anything else is
    /// ignored and `false` returned.
    pub fn set_scale(&mut self, value: f64) -> bool {
        let old = self.viewport.scale();
        if !self.viewport.set_scale(value) {
            tracing::warn!("Rejected scale {}", value);
            return false;
        }
        self.interactions
            .record("zoom", object(json!({ "old": old, "new": value })));
        true
    }

    /// Requested scale, `-1` while fitting.
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    pub fn zoom(&self) -> Zoom {
        self.viewport.zoom()
    }

    /// Last resolved concrete scale.
    pub fn actual_scale(&self) -> f64 {
        self.viewport.actual_scale()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn panel_size(&self) -> Size {
        self.viewport.panel_size()
    }

    /// Called by the host when the visible area is resized.
    pub fn set_panel_size(&mut self, panel: Size) {
        self.viewport.set_panel_size(panel);
    }

    /// Size needed to show the whole image at the actual scale.
    pub fn required_size(&self) -> Size {
        self.viewport.required_size()
    }

    /// Back to 100% and an idle selection.
    pub fn reset_zoom(&mut self) {
        self.viewport.set_zoom(Zoom::Factor(1.0));
        self.selection.reset();
    }

    /// Scroll offset of the visible area, maintained by the host.
    pub fn view_position(&self) -> ScreenPoint {
        self.view_position
    }

    pub fn set_view_position(&mut self, position: ScreenPoint) {
        self.view_position = position;
    }

    /// Applies wheel zoom anchored at `pointer` and moves the view position
    /// accordingly.
    pub fn zoom_wheel(&mut self, pointer: ScreenPoint, notches: i32) -> Option<WheelZoom> {
        let outcome =
            self.viewport
                .wheel_zoom(pointer, notches, self.zoom_step, self.view_position)?;
        self.view_position = outcome.view_position;
        self.interactions.record(
            "wheel",
            object(json!({
                "x": pointer.x,
                "y": pointer.y,
                "notches": notches,
                "old": outcome.old_scale,
                "new": outcome.new_scale,
            })),
        );
        tracing::debug!(
            "Wheel zoom {:.3} -> {:.3}",
            outcome.old_scale,
            outcome.new_scale
        );
        Some(outcome)
    }

    pub fn mouse_to_pixel(&self, position: ScreenPoint) -> PixelPoint {
        self.viewport.screen_to_pixel(position)
    }

    pub fn pixel_to_mouse(&self, pixel: PixelPoint) -> ScreenPoint {
        self.viewport.pixel_to_screen(pixel)
    }

    // Overlays and paintlets

    /// Shared handle to the overlay set, usable from other threads.
    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    pub fn add_overlay(&self, overlay: Arc<dyn Overlay>) -> bool {
        if !self.overlays.add(Arc::clone(&overlay)) {
            return false;
        }
        overlay.overlay_added(&self.panel_view());
        true
    }

    pub fn remove_overlay(&self, overlay: &Arc<dyn Overlay>) -> bool {
        if !self.overlays.remove(overlay) {
            return false;
        }
        overlay.overlay_removed(&self.panel_view());
        true
    }

    /// Removes every overlay of the given family; returns how many went.
    pub fn remove_overlays(&self, family: &str) -> usize {
        let removed = self.overlays.remove_family(family);
        let view = self.panel_view();
        for overlay in &removed {
            overlay.overlay_removed(&view);
        }
        removed.len()
    }

    pub fn clear_overlays(&self) {
        let removed = self.overlays.clear();
        let view = self.panel_view();
        for overlay in &removed {
            overlay.overlay_removed(&view);
        }
    }

    pub fn add_paintlet(&self, paintlet: Arc<dyn Paintlet>) -> bool {
        self.paintlets.add(paintlet)
    }

    pub fn remove_paintlet(&self, paintlet: &Arc<dyn Paintlet>) -> bool {
        self.paintlets.remove(paintlet)
    }

    pub fn paintlets(&self) -> Vec<Arc<dyn Paintlet>> {
        self.paintlets.snapshot()
    }

    // Selection and click listeners

    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection.set_enabled(enabled);
    }

    pub fn is_selection_enabled(&self) -> bool {
        self.selection.is_enabled()
    }

    pub fn selection_phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    /// The in-progress selection in pixel space, while dragging.
    pub fn selection_box(&self) -> Option<PixelRect> {
        self.selection.box_corners(&self.viewport)
    }

    pub fn add_selection_listener(&self, listener: Arc<dyn SelectionListener>) -> bool {
        self.selection_listeners.add(listener)
    }

    pub fn remove_selection_listener(&self, listener: &Arc<dyn SelectionListener>) -> bool {
        self.selection_listeners.remove(listener)
    }

    pub fn clear_selection_listeners(&self) {
        self.selection_listeners.clear();
    }

    pub fn add_left_click_listener(&self, listener: Arc<dyn LeftClickListener>) -> bool {
        self.left_click_listeners.add(listener)
    }

    pub fn remove_left_click_listener(&self, listener: &Arc<dyn LeftClickListener>) -> bool {
        self.left_click_listeners.remove(listener)
    }

    pub fn clear_left_click_listeners(&self) {
        self.left_click_listeners.clear();
    }

    fn notify_selection(&self, rect: PixelRect, trace: Vec<PixelPoint>, modifiers: Modifiers) {
        let event = SelectionEvent {
            top_left: rect.top_left,
            bottom_right: rect.bottom_right,
            trace,
            modifiers,
            source: self.id,
        };
        tracing::debug!("Selection {}", rect);
        for listener in self.selection_listeners.snapshot() {
            listener.selected(&event);
        }
    }

    fn notify_left_click(&self, position: ScreenPoint, modifiers: Modifiers) {
        let event = LeftClickEvent {
            screen: position,
            pixel: self.mouse_to_pixel(position),
            modifiers,
            source: self.id,
        };
        for listener in self.left_click_listeners.snapshot() {
            listener.clicked(&event);
        }
    }

    // Pointer input

    /// Feeds a pointer event through selection, zoom and listeners.
    /// Returns true when the panel needs repainting.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let has_image = self.image.is_some();
        match event {
            PointerEvent::Pressed {
                position,
                button,
                modifiers,
            } => {
                self.interactions
                    .record("pressed", pointer_data(position, Some(button), modifiers));
                self.selection.on_press(position, button, modifiers, has_image);
                false
            }
            PointerEvent::Moved {
                position,
                button,
                modifiers,
            } => {
                self.pointer = Some(position);
                self.selection.on_move(position, button, modifiers, has_image);
                false
            }
            PointerEvent::Dragged {
                position,
                modifiers,
            } => {
                self.pointer = Some(position);
                self.selection.on_drag(position, modifiers) == SelectionUpdate::Repaint
            }
            PointerEvent::Released {
                position,
                button,
                modifiers,
            } => {
                self.interactions
                    .record("released", pointer_data(position, Some(button), modifiers));
                let was_dragging = self.selection.is_dragging();
                let update = self
                    .selection
                    .on_release(position, button, modifiers, &self.viewport);
                if let SelectionUpdate::Completed {
                    rect,
                    trace,
                    modifiers,
                } = update
                {
                    self.notify_selection(rect, trace, modifiers);
                }
                was_dragging && !self.selection.is_dragging()
            }
            PointerEvent::Clicked {
                position,
                button,
                modifiers,
            } => {
                self.interactions
                    .record("clicked", pointer_data(position, Some(button), modifiers));
                match button {
                    MouseButton::Primary => {
                        self.notify_left_click(position, modifiers);
                        false
                    }
                    MouseButton::Middle => {
                        self.reset_zoom();
                        true
                    }
                    MouseButton::Secondary => false,
                }
            }
            PointerEvent::Wheel {
                position, notches, ..
            } => self.zoom_wheel(position, notches).is_some(),
            PointerEvent::Exited => {
                self.pointer = None;
                false
            }
        }
    }

    /// Last pointer position over the panel.
    pub fn pointer(&self) -> Option<ScreenPoint> {
        self.pointer
    }

    // Undo / redo

    /// Snapshot of everything undo restores.
    pub fn state(&self) -> ViewerState {
        ViewerState {
            image: self.image.clone(),
            file: self.file.clone(),
            modified: self.modified,
            zoom: self.viewport.zoom(),
        }
    }

    fn set_state(&mut self, state: ViewerState) {
        self.replace_image(state.image, state.file, state.zoom, None, state.modified);
    }

    /// Records the current state if undo is enabled.
    pub fn add_undo_point(&mut self, status: &str, comment: impl Into<String>) {
        if !self.history.is_enabled() {
            return;
        }
        tracing::debug!("{}", status);
        let state = self.state();
        self.history.add_undo(state, comment);
    }

    /// Restores the previous state. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let comment = self.history.peek_undo_comment(false).unwrap_or_default();
        let current = self.state();
        self.history.add_redo(current, comment.as_str());
        let Some(point) = self.history.undo() else {
            return false;
        };
        self.set_state(point.state);
        tracing::info!("undo: {}", comment);
        true
    }

    /// Reapplies the last undone state. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let comment = self.history.peek_redo_comment(false).unwrap_or_default();
        let current = self.state();
        self.history
            .add_undo_keep_redo(current, comment.as_str(), true);
        let Some(point) = self.history.redo() else {
            return false;
        };
        self.set_state(point.state);
        tracing::info!("redo: {}", comment);
        true
    }

    pub fn history(&self) -> &History<ViewerState> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History<ViewerState> {
        &mut self.history
    }

    // Rendering

    pub fn background(&self) -> Color {
        self.pipeline.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.pipeline.background = color;
    }

    pub fn selection_color(&self) -> Color {
        self.pipeline.selection_color
    }

    pub fn set_selection_color(&mut self, color: Color) {
        self.pipeline.selection_color = color;
    }

    /// Replaces how the live selection is drawn. The default outlines
    /// the bounding box.
    pub fn set_selection_painter(&mut self, painter: Arc<dyn SelectionShapePainter>) {
        self.pipeline.set_shape_painter(painter);
    }

    /// Paints one frame. Fit is re-resolved first since the panel may
    /// have changed size since the last frame.
    pub fn paint(&mut self, surface: &mut Surface) {
        self.viewport.resolve();
        let selection = self.selection.live_shape(&self.viewport);
        let view = self.panel_view();
        self.pipeline.render(
            surface,
            &view,
            &self.overlays,
            &self.paintlets,
            selection.as_ref(),
        );
    }

    /// Paints a frame onto a fresh surface of [`Viewer::required_size`].
    pub fn render(&mut self) -> Result<Surface, ViewerError> {
        self.viewport.resolve();
        let mut surface = Surface::with_size(self.required_size())?;
        self.paint(&mut surface);
        Ok(surface)
    }

    // Status and interaction log

    /// Status line for the given pointer position, e.g.
    /// `W: 100  H: 50  X: 11  Y: 6  Zoom: 200.0%`.
    pub fn status_text(&self, pointer: Option<ScreenPoint>) -> String {
        let mut msg = String::new();
        if let Some(image) = &self.image {
            msg.push_str(&format!("W: {}  H: {}  ", image.width(), image.height()));
        }
        if let Some(position) = pointer {
            let pixel = self.mouse_to_pixel(position);
            msg.push_str(&format!("X: {}  Y: {}  ", pixel.x + 1, pixel.y + 1));
        }
        msg.push_str(&format!("Zoom: {}", self.viewport.zoom()));
        msg
    }

    /// Status line for the last known pointer position.
    pub fn status(&self) -> String {
        self.status_text(self.pointer)
    }

    pub fn interaction_log(&self) -> &InteractionLog {
        &self.interactions
    }

    pub fn interaction_log_mut(&mut self) -> &mut InteractionLog {
        &mut self.interactions
    }

    // Cross-thread commands

    pub fn command_sender(&self) -> CommandSender {
        self.sender.clone()
    }

    /// Applies every queued command; returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(command) = self.commands.try_recv() {
            self.apply_command(command);
            handled += 1;
        }
        handled
    }

    fn apply_command(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Loaded { path, result } => {
                self.add_undo_point(UNDO_STATUS, format!("Loading file '{}'", path.display()));
                // failure is already logged and leaves the viewer empty
                let _ = self.finish_load(&path, result, self.initial_zoom);
            }
            ViewerCommand::SetImage(image) => self.set_image(image),
            ViewerCommand::SetScale(scale) => {
                self.set_scale(scale);
            }
            ViewerCommand::Clear => self.clear(),
        }
    }

    /// Decodes on a worker thread and posts the result back. Call
    /// [`Viewer::process_pending`] to apply it.
    pub fn load_in_background(&self, path: impl Into<PathBuf>) -> JoinHandle<()> {
        let path = path.into();
        let reader = Arc::clone(&self.reader);
        let sender = self.command_sender();
        std::thread::spawn(move || {
            let result = reader.read(&path);
            sender.send(ViewerCommand::Loaded { path, result });
        })
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("id", &self.id)
            .field("image", &self.image)
            .field("file", &self.file)
            .field("modified", &self.modified)
            .field("viewport", &self.viewport)
            .field("overlays", &self.overlays.len())
            .finish()
    }
}
