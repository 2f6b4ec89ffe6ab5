use parking_lot::Mutex;
use rasterview_core::{CodecError, PixelPoint, Report, ReportValue, ScreenPoint, Size, ViewerError};
use rasterview_settings::Config;
use rasterview_viewer::{
    DefaultCodec, Image, ImageWriter, KindFilter, LeftClickEvent, LeftClickListener, Modifiers,
    MouseButton, PanelView, PointerEvent, SelectionEvent, SelectionListener, SelectionPhase,
    ViewerCommand, Viewer, Zoom,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DefaultCodec
        .write(&path, &Image::filled(width, height, [90, 90, 90, 255]))
        .unwrap();
    path
}

#[derive(Default)]
struct Recorder {
    selections: Mutex<Vec<SelectionEvent>>,
    clicks: Mutex<Vec<LeftClickEvent>>,
}

impl SelectionListener for Recorder {
    fn selected(&self, event: &SelectionEvent) {
        self.selections.lock().push(event.clone());
    }
}

impl LeftClickListener for Recorder {
    fn clicked(&self, event: &LeftClickEvent) {
        self.clicks.lock().push(*event);
    }
}

/// Remembers the modified flag each image change was announced with.
#[derive(Default)]
struct ModifiedWatcher {
    seen: Mutex<Vec<bool>>,
}

impl SelectionListener for ModifiedWatcher {
    fn selected(&self, _event: &SelectionEvent) {}

    fn image_changed(&self, panel: &PanelView<'_>) {
        self.seen.lock().push(panel.is_modified());
    }
}

struct BrokenWriter;

impl ImageWriter for BrokenWriter {
    fn write(&self, path: &Path, _image: &Image) -> Result<(), CodecError> {
        Err(CodecError::Encode {
            path: path.to_path_buf(),
            reason: "disk full".to_string(),
        })
    }
}

fn press(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Pressed {
        position: ScreenPoint::new(x, y),
        button: MouseButton::Primary,
        modifiers: Modifiers::NONE,
    }
}

fn drag_to(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Dragged {
        position: ScreenPoint::new(x, y),
        modifiers: Modifiers::NONE,
    }
}

fn release(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Released {
        position: ScreenPoint::new(x, y),
        button: MouseButton::Primary,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn test_load_scale_and_required_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "wide.png", 100, 50);
    let mut viewer = Viewer::new();

    viewer.load(&path).unwrap();
    assert!(viewer.set_scale(2.0));

    assert_eq!(viewer.actual_scale(), 2.0);
    assert_eq!(viewer.required_size(), Size::new(200, 100));
    assert_eq!(viewer.file(), Some(path.as_path()));
    assert!(!viewer.is_modified());

    let props = viewer.image_properties();
    assert_eq!(props.get("Width"), Some(&ReportValue::Number(100.0)));
    assert_eq!(props.get("Height"), Some(&ReportValue::Number(50.0)));
    assert!(props.has_value("File"));
    assert!(props.has_value("Format"));

    assert_eq!(
        viewer.history().peek_undo_comment(false),
        Some(format!("Loading file '{}'", path.display()))
    );
}

#[test]
fn test_failed_load_leaves_viewer_empty() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_png(dir.path(), "good.png", 8, 8);
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, b"not a png").unwrap();

    let mut viewer = Viewer::new();
    viewer.load(&good).unwrap();
    let err = viewer.load(&bad).unwrap_err();

    assert!(matches!(err, ViewerError::Codec(_)));
    assert!(viewer.image().is_none());
    assert!(viewer.file().is_none());
    assert!(viewer.image_properties().is_empty());
}

#[test]
fn test_save_failure_keeps_state() {
    let mut viewer = Viewer::new();
    viewer.set_image(Some(Image::filled(4, 4, [1, 1, 1, 255])));
    viewer.set_modified(true);

    let err = viewer
        .save_with(Path::new("/tmp/never.png"), &BrokenWriter)
        .unwrap_err();
    assert!(err.to_string().contains("disk full"));
    assert!(viewer.is_modified());
    assert!(viewer.file().is_none());
}

#[test]
fn test_save_success_clears_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let mut viewer = Viewer::new();

    assert!(matches!(viewer.save(&path), Err(ViewerError::NoImage)));

    viewer.set_image(Some(Image::filled(3, 2, [9, 9, 9, 255])));
    viewer.set_modified(true);
    viewer.save(&path).unwrap();

    assert!(!viewer.is_modified());
    assert_eq!(viewer.file(), Some(path.as_path()));
    assert!(path.exists());
}

#[test]
fn test_undo_redo_symmetry() {
    let mut viewer = Viewer::new();
    let a = Image::filled(2, 2, [1, 0, 0, 255]);
    let b = Image::filled(3, 3, [0, 1, 0, 255]);
    viewer.set_image(Some(a));
    let state_a = viewer.state();

    viewer.add_undo_point("Saving undo data...", "Replace image");
    viewer.set_image(Some(b));
    viewer.set_modified(true);
    viewer.set_scale(3.0);
    let state_b = viewer.state();
    assert_ne!(state_a, state_b);

    assert!(viewer.undo());
    assert_eq!(viewer.state(), state_a);
    assert_eq!(viewer.actual_scale(), 1.0);

    assert!(viewer.redo());
    assert_eq!(viewer.state(), state_b);
    assert_eq!(viewer.zoom(), Zoom::Factor(3.0));
}

#[test]
fn test_image_change_announces_final_modified_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "clean.png", 4, 4);
    let mut viewer = Viewer::new();
    let watcher = Arc::new(ModifiedWatcher::default());
    viewer.add_selection_listener(watcher.clone());

    viewer.set_image(Some(Image::filled(2, 2, [0; 4])));
    viewer.set_modified(true);
    viewer.load(&path).unwrap();
    // back to the edited image
    assert!(viewer.undo());
    viewer.clear();

    assert_eq!(*watcher.seen.lock(), vec![false, false, true, false]);
    assert!(!viewer.is_modified());
}

#[test]
fn test_new_edit_after_undo_clears_redo() {
    let mut viewer = Viewer::new();
    viewer.add_undo_point("", "first");
    viewer.set_image(Some(Image::filled(1, 1, [0; 4])));
    assert!(viewer.undo());
    assert!(viewer.history().can_redo());

    viewer.add_undo_point("", "second");
    assert!(!viewer.history().can_redo());
    assert!(!viewer.redo());
}

#[test]
fn test_clear_is_undoable() {
    let mut viewer = Viewer::new();
    let image = Image::filled(5, 5, [3, 3, 3, 255]);
    viewer.set_image(Some(image.clone()));
    viewer.clear();

    assert!(viewer.image().is_none());
    assert_eq!(
        viewer.history().peek_undo_comment(false).as_deref(),
        Some("Removing image")
    );
    assert!(viewer.undo());
    assert_eq!(viewer.image(), Some(&image));
}

#[test]
fn test_disabled_history_records_nothing() {
    let mut viewer = Viewer::new();
    viewer.history_mut().set_enabled(false);
    viewer.set_image(Some(Image::filled(1, 1, [0; 4])));
    viewer.clear();
    assert_eq!(viewer.history().undo_len(), 0);
    assert!(!viewer.undo());
}

#[test]
fn test_selection_listener_receives_pixels() {
    let mut viewer = Viewer::new();
    viewer.set_image(Some(Image::filled(100, 50, [0, 0, 0, 255])));
    viewer.set_scale(2.0);
    viewer.set_selection_enabled(true);
    let recorder = Arc::new(Recorder::default());
    viewer.add_selection_listener(recorder.clone());

    viewer.handle_pointer(press(20.0, 20.0));
    viewer.handle_pointer(drag_to(150.0, 90.0));
    let repaint = viewer.handle_pointer(release(220.0, 120.0));
    assert!(repaint);

    let selections = recorder.selections.lock();
    assert_eq!(selections.len(), 1);
    assert_eq!(selections[0].top_left, PixelPoint::new(10, 10));
    assert_eq!(selections[0].bottom_right, PixelPoint::new(100, 50));
    assert_eq!(
        selections[0].trace,
        vec![
            PixelPoint::new(10, 10),
            PixelPoint::new(75, 45),
            PixelPoint::new(100, 50),
        ]
    );
    assert_eq!(selections[0].source, viewer.id());
}

#[test]
fn test_shift_drag_is_not_a_selection() {
    let mut viewer = Viewer::new();
    viewer.set_image(Some(Image::filled(100, 50, [0, 0, 0, 255])));
    viewer.set_selection_enabled(true);
    let recorder = Arc::new(Recorder::default());
    viewer.add_selection_listener(recorder.clone());

    viewer.handle_pointer(PointerEvent::Pressed {
        position: ScreenPoint::new(5.0, 5.0),
        button: MouseButton::Primary,
        modifiers: Modifiers::SHIFT,
    });
    assert_eq!(viewer.selection_phase(), SelectionPhase::Idle);
    let repaint = viewer.handle_pointer(drag_to(40.0, 30.0));
    assert!(!repaint);
    viewer.handle_pointer(release(40.0, 30.0));

    assert!(viewer.selection_box().is_none());
    assert!(recorder.selections.lock().is_empty());
}

#[test]
fn test_plain_click_notifies_left_click_only() {
    let mut viewer = Viewer::new();
    viewer.set_image(Some(Image::filled(20, 20, [0, 0, 0, 255])));
    viewer.set_selection_enabled(true);
    let recorder = Arc::new(Recorder::default());
    viewer.add_selection_listener(recorder.clone());
    viewer.add_left_click_listener(recorder.clone());

    viewer.handle_pointer(press(7.0, 3.0));
    viewer.handle_pointer(release(7.0, 3.0));
    viewer.handle_pointer(PointerEvent::Clicked {
        position: ScreenPoint::new(7.0, 3.0),
        button: MouseButton::Primary,
        modifiers: Modifiers::NONE,
    });

    assert!(recorder.selections.lock().is_empty());
    let clicks = recorder.clicks.lock();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].pixel, PixelPoint::new(7, 3));
}

#[test]
fn test_middle_click_resets_zoom() {
    let mut viewer = Viewer::new();
    viewer.set_scale(4.0);
    let repaint = viewer.handle_pointer(PointerEvent::Clicked {
        position: ScreenPoint::new(1.0, 1.0),
        button: MouseButton::Middle,
        modifiers: Modifiers::NONE,
    });
    assert!(repaint);
    assert_eq!(viewer.scale(), 1.0);
}

#[test]
fn test_wheel_moves_view_position() {
    let mut viewer = Viewer::new();
    viewer.set_image(Some(Image::filled(100, 100, [0, 0, 0, 255])));
    let repaint = viewer.handle_pointer(PointerEvent::Wheel {
        position: ScreenPoint::new(50.0, 50.0),
        notches: -1,
        modifiers: Modifiers::NONE,
    });

    assert!(repaint);
    assert!((viewer.actual_scale() - 1.2).abs() < 1e-12);
    assert!((viewer.view_position().x - 10.0).abs() < 1e-9);
}

#[test]
fn test_extreme_wheel_is_ignored() {
    let mut viewer = Viewer::new();
    viewer.set_image(Some(Image::filled(100, 100, [0, 0, 0, 255])));
    let repaint = viewer.handle_pointer(PointerEvent::Wheel {
        position: ScreenPoint::new(10.0, 10.0),
        notches: i32::MIN,
        modifiers: Modifiers::NONE,
    });

    assert!(!repaint);
    assert_eq!(viewer.actual_scale(), 1.0);
}

#[test]
fn test_status_text() {
    let mut viewer = Viewer::new();
    assert_eq!(viewer.status_text(None), "Zoom: 100.0%");

    viewer.set_image(Some(Image::filled(100, 50, [0, 0, 0, 255])));
    viewer.set_scale(2.0);
    assert_eq!(
        viewer.status_text(Some(ScreenPoint::new(21.0, 13.0))),
        "W: 100  H: 50  X: 11  Y: 7  Zoom: 200.0%"
    );

    viewer.set_scale(-1.0);
    viewer.handle_pointer(PointerEvent::Exited);
    assert_eq!(viewer.status(), "W: 100  H: 50  Zoom: best fit");
}

#[test]
fn test_current_file_needs_image() {
    let mut viewer = Viewer::new();
    assert!(!viewer.set_current_file(Some(PathBuf::from("a.png"))));
    assert!(viewer.file().is_none());

    viewer.set_image(Some(Image::filled(1, 1, [0; 4])));
    assert!(viewer.set_current_file(Some(PathBuf::from("a.png"))));
    assert_eq!(
        viewer.image_properties().get("File"),
        Some(&ReportValue::Text("a.png".to_string()))
    );
}

#[test]
fn test_all_properties_merges_additional() {
    let mut viewer = Viewer::new();
    let mut extra = Report::new();
    extra.set_string("Source", "camera");
    extra.set_number("Width", 999.0);
    viewer.set_image_with_report(Image::filled(4, 2, [0; 4]), extra);

    let all = viewer.all_properties();
    assert_eq!(all.get("Source"), Some(&ReportValue::Text("camera".into())));
    assert_eq!(all.get("Width"), Some(&ReportValue::Number(999.0)));
    assert_eq!(all.get("Height"), Some(&ReportValue::Number(2.0)));
    assert_eq!(
        viewer.image_properties().get("Width"),
        Some(&ReportValue::Number(4.0))
    );
}

#[test]
fn test_interaction_log_records_when_enabled() {
    let mut viewer = Viewer::new();
    viewer.handle_pointer(press(1.0, 1.0));
    assert!(viewer.interaction_log().is_empty());

    viewer.interaction_log_mut().set_enabled(true);
    viewer.handle_pointer(press(1.0, 1.0));
    viewer.set_scale(2.0);

    let kinds: Vec<&str> = viewer
        .interaction_log()
        .entries()
        .iter()
        .map(|e| e.kind.as_str())
        .collect();
    assert_eq!(kinds, vec!["pressed", "zoom"]);
    assert!(viewer.interaction_log().to_json().unwrap().contains("\"pressed\""));
}

#[test]
fn test_interaction_log_filter_and_capacity() {
    let mut config = Config::default();
    config.viewer.log_interactions = true;
    config.viewer.interaction_log_capacity = 2;
    let mut viewer = Viewer::from_config(&config).unwrap();
    viewer
        .interaction_log_mut()
        .set_filter(Some(Arc::new(KindFilter::new(["pressed", "released"]))));

    viewer.handle_pointer(press(1.0, 1.0));
    viewer.set_scale(2.0);
    viewer.handle_pointer(release(1.0, 1.0));
    viewer.handle_pointer(press(2.0, 2.0));

    let kinds: Vec<&str> = viewer
        .interaction_log()
        .entries()
        .iter()
        .map(|e| e.kind.as_str())
        .collect();
    assert_eq!(kinds, vec!["released", "pressed"]);
}

#[test]
fn test_background_load_applied_on_owner_thread() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "bg.png", 6, 4);
    let mut viewer = Viewer::new();

    viewer.load_in_background(path.clone()).join().unwrap();
    assert!(viewer.image().is_none());

    assert_eq!(viewer.process_pending(), 1);
    assert_eq!(viewer.image().map(Image::size), Some(Size::new(6, 4)));
    assert_eq!(viewer.file(), Some(path.as_path()));
}

#[test]
fn test_commands_from_other_thread() {
    let mut viewer = Viewer::new();
    let sender = viewer.command_sender();
    std::thread::spawn(move || {
        sender.send(ViewerCommand::SetImage(Some(Image::filled(2, 2, [0; 4]))));
        sender.send(ViewerCommand::SetScale(50.0));
        sender.send(ViewerCommand::SetScale(4.0));
    })
    .join()
    .unwrap();

    assert_eq!(viewer.process_pending(), 3);
    assert!(viewer.has_image());
    assert_eq!(viewer.scale(), 4.0);
}

#[test]
fn test_from_config() {
    let mut config = Config::default();
    config.history.capacity = 2;
    config.viewer.selection_enabled = true;
    config.viewer.initial_scale = -1.0;

    let viewer = Viewer::from_config(&config).unwrap();
    assert_eq!(viewer.history().capacity(), 2);
    assert!(viewer.is_selection_enabled());
    assert_eq!(viewer.panel_size(), Size::new(800, 600));
}
