use parking_lot::Mutex;
use rasterview_core::{Error, Result};
use rasterview_viewer::{Image, Overlay, OverlayRegistry, PanelView, Surface, Viewer};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counting {
    family: &'static str,
    disabled: AtomicBool,
    paints: AtomicUsize,
    changes: AtomicUsize,
    added: AtomicUsize,
    removed: AtomicUsize,
}

impl Counting {
    fn new(family: &'static str) -> Arc<Self> {
        Arc::new(Self {
            family,
            ..Self::default()
        })
    }
}

impl Overlay for Counting {
    fn family(&self) -> &str {
        self.family
    }

    fn is_enabled(&self) -> bool {
        !self.disabled.load(Ordering::SeqCst)
    }

    fn image_changed(&self, _panel: &PanelView<'_>) {
        self.changes.fetch_add(1, Ordering::SeqCst);
    }

    fn paint(&self, _panel: &PanelView<'_>, _surface: &mut Surface) -> Result<()> {
        self.paints.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn overlay_added(&self, _panel: &PanelView<'_>) {
        self.added.fetch_add(1, Ordering::SeqCst);
    }

    fn overlay_removed(&self, _panel: &PanelView<'_>) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Removes itself and a victim from the registry while painting.
struct Remover {
    registry: OverlayRegistry,
    me: Mutex<Option<Arc<dyn Overlay>>>,
    victim: Arc<dyn Overlay>,
}

impl Overlay for Remover {
    fn paint(&self, _panel: &PanelView<'_>, _surface: &mut Surface) -> Result<()> {
        if let Some(me) = self.me.lock().take() {
            self.registry.remove(&me);
        }
        self.registry.remove(&self.victim);
        Ok(())
    }
}

struct Failing;

impl Overlay for Failing {
    fn paint(&self, _panel: &PanelView<'_>, _surface: &mut Surface) -> Result<()> {
        Err(Error::other("broken overlay"))
    }
}

fn viewer_with_image() -> Viewer {
    let mut viewer = Viewer::new();
    viewer.set_image(Some(Image::filled(10, 10, [0, 0, 0, 255])));
    viewer
}

#[test]
fn test_disabled_overlay_skipped_but_notified() {
    let mut viewer = viewer_with_image();
    let overlay = Counting::new("grid");
    overlay.disabled.store(true, Ordering::SeqCst);
    viewer.add_overlay(overlay.clone());

    viewer.render().unwrap();
    viewer.set_image(Some(Image::filled(5, 5, [0, 0, 0, 255])));

    assert_eq!(overlay.paints.load(Ordering::SeqCst), 0);
    assert_eq!(overlay.changes.load(Ordering::SeqCst), 1);

    overlay.disabled.store(false, Ordering::SeqCst);
    viewer.render().unwrap();
    assert_eq!(overlay.paints.load(Ordering::SeqCst), 1);
}

#[test]
fn test_no_overlay_paint_without_image() {
    let mut viewer = Viewer::new();
    let overlay = Counting::new("grid");
    viewer.add_overlay(overlay.clone());
    viewer.render().unwrap();
    assert_eq!(overlay.paints.load(Ordering::SeqCst), 0);
}

#[test]
fn test_self_removal_during_paint() {
    let mut viewer = viewer_with_image();
    let victim = Counting::new("victim");
    let victim_dyn: Arc<dyn Overlay> = victim.clone();
    let remover = Arc::new(Remover {
        registry: viewer.overlays().clone(),
        me: Mutex::new(None),
        victim: victim_dyn.clone(),
    });
    let remover_dyn: Arc<dyn Overlay> = remover.clone();
    *remover.me.lock() = Some(remover_dyn.clone());

    viewer.add_overlay(remover_dyn);
    viewer.add_overlay(victim_dyn);

    // the victim was captured in this frame's snapshot and still paints
    viewer.render().unwrap();
    assert_eq!(victim.paints.load(Ordering::SeqCst), 1);
    assert!(viewer.overlays().is_empty());

    viewer.render().unwrap();
    assert_eq!(victim.paints.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failing_overlay_does_not_abort_frame() {
    let mut viewer = viewer_with_image();
    let after = Counting::new("after");
    viewer.add_overlay(Arc::new(Failing));
    viewer.add_overlay(after.clone());

    assert!(viewer.render().is_ok());
    assert_eq!(after.paints.load(Ordering::SeqCst), 1);
}

#[test]
fn test_remove_by_family_and_hooks() {
    let viewer = viewer_with_image();
    let grid_a = Counting::new("grid");
    let grid_b = Counting::new("grid");
    let other = Counting::new("marker");
    viewer.add_overlay(grid_a.clone());
    viewer.add_overlay(grid_b.clone());
    viewer.add_overlay(other.clone());
    assert!(!viewer.add_overlay(other.clone()));

    assert_eq!(viewer.remove_overlays("grid"), 2);
    assert_eq!(viewer.overlays().len(), 1);
    assert_eq!(grid_a.added.load(Ordering::SeqCst), 1);
    assert_eq!(grid_a.removed.load(Ordering::SeqCst), 1);
    assert_eq!(other.added.load(Ordering::SeqCst), 1);

    viewer.clear_overlays();
    assert!(viewer.overlays().is_empty());
    assert_eq!(other.removed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_add_from_background_thread() {
    let mut viewer = viewer_with_image();
    let registry = viewer.overlays().clone();
    let overlay = Counting::new("bg");
    let handle = {
        let overlay = overlay.clone();
        std::thread::spawn(move || registry.add(overlay))
    };
    assert!(handle.join().unwrap());

    viewer.render().unwrap();
    assert_eq!(overlay.paints.load(Ordering::SeqCst), 1);
}
