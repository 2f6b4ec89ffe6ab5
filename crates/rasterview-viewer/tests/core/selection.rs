use rasterview_core::{PixelPoint, PixelRect, ScreenPoint, Size};
use rasterview_viewer::input::{Modifiers, MouseButton};
use rasterview_viewer::selection::{SelectionController, SelectionPhase, SelectionUpdate};
use rasterview_viewer::viewport::Viewport;

fn viewport(scale: f64) -> Viewport {
    let mut vp = Viewport::new(Size::new(800, 600));
    vp.set_image_size(Some(Size::new(100, 50)));
    vp.set_scale(scale);
    vp
}

fn drag(
    controller: &mut SelectionController,
    vp: &Viewport,
    from: (f64, f64),
    to: (f64, f64),
) -> SelectionUpdate {
    controller.on_press(
        ScreenPoint::new(from.0, from.1),
        MouseButton::Primary,
        Modifiers::NONE,
        true,
    );
    controller.on_drag(ScreenPoint::new(to.0, to.1), Modifiers::NONE);
    controller.on_release(
        ScreenPoint::new(to.0, to.1),
        MouseButton::Primary,
        Modifiers::NONE,
        vp,
    )
}

#[test]
fn test_reversed_drag_is_normalized() {
    let vp = viewport(1.0);
    let mut controller = SelectionController::new(true);

    let update = drag(&mut controller, &vp, (50.0, 50.0), (10.0, 10.0));
    match update {
        SelectionUpdate::Completed { rect, .. } => {
            assert_eq!(rect.top_left, PixelPoint::new(10, 10));
            // y clamps to the image height
            assert_eq!(rect.bottom_right, PixelPoint::new(50, 50));
        }
        other => panic!("expected completed selection, got {:?}", other),
    }
    assert_eq!(controller.phase(), SelectionPhase::Idle);
}

#[test]
fn test_scaled_drag_clamps_to_image() {
    let vp = viewport(2.0);
    let mut controller = SelectionController::new(true);

    let update = drag(&mut controller, &vp, (20.0, 20.0), (220.0, 120.0));
    assert_eq!(
        update,
        SelectionUpdate::Completed {
            rect: PixelRect::from_corners(PixelPoint::new(10, 10), PixelPoint::new(100, 50)),
            trace: vec![PixelPoint::new(10, 10), PixelPoint::new(100, 50)],
            modifiers: Modifiers::NONE,
        }
    );
}

#[test]
fn test_click_without_drag_emits_nothing() {
    let vp = viewport(1.0);
    let mut controller = SelectionController::new(true);
    let at = ScreenPoint::new(30.0, 30.0);

    controller.on_press(at, MouseButton::Primary, Modifiers::NONE, true);
    assert_eq!(controller.phase(), SelectionPhase::Armed);
    let update = controller.on_release(at, MouseButton::Primary, Modifiers::NONE, &vp);

    assert_eq!(update, SelectionUpdate::Unchanged);
    assert_eq!(controller.phase(), SelectionPhase::Idle);
}

#[test]
fn test_no_image_never_drags() {
    let vp = Viewport::new(Size::new(800, 600));
    let mut controller = SelectionController::new(true);

    controller.on_press(
        ScreenPoint::new(1.0, 1.0),
        MouseButton::Primary,
        Modifiers::NONE,
        false,
    );
    let update = controller.on_drag(ScreenPoint::new(40.0, 40.0), Modifiers::NONE);
    assert_eq!(update, SelectionUpdate::Unchanged);
    assert!(!controller.is_dragging());
    assert!(controller.box_corners(&vp).is_none());
}

#[test]
fn test_live_box_while_dragging() {
    let vp = viewport(2.0);
    let mut controller = SelectionController::new(true);
    controller.on_press(
        ScreenPoint::new(40.0, 40.0),
        MouseButton::Primary,
        Modifiers::NONE,
        true,
    );
    assert!(controller.box_corners(&vp).is_none());

    let update = controller.on_drag(ScreenPoint::new(20.0, 60.0), Modifiers::NONE);
    assert_eq!(update, SelectionUpdate::Repaint);
    assert_eq!(
        controller.box_corners(&vp),
        Some(PixelRect::from_corners(
            PixelPoint::new(10, 20),
            PixelPoint::new(20, 30)
        ))
    );
}

#[test]
fn test_modifiers_are_reported() {
    let vp = viewport(1.0);
    let mut controller = SelectionController::new(true);
    let ctrl = Modifiers {
        control: true,
        ..Modifiers::NONE
    };

    controller.on_press(ScreenPoint::new(0.0, 0.0), MouseButton::Primary, ctrl, true);
    controller.on_drag(ScreenPoint::new(5.0, 5.0), ctrl);
    let update = controller.on_release(ScreenPoint::new(5.0, 5.0), MouseButton::Primary, ctrl, &vp);

    assert!(matches!(
        update,
        SelectionUpdate::Completed { modifiers, .. } if modifiers.control
    ));
}

#[test]
fn test_trace_follows_pointer_in_pixels() {
    let vp = viewport(2.0);
    let mut controller = SelectionController::new(true);

    controller.on_press(
        ScreenPoint::new(10.0, 10.0),
        MouseButton::Primary,
        Modifiers::NONE,
        true,
    );
    controller.on_drag(ScreenPoint::new(60.0, 12.0), Modifiers::NONE);
    controller.on_drag(ScreenPoint::new(61.0, 13.0), Modifiers::NONE);
    controller.on_drag(ScreenPoint::new(400.0, 40.0), Modifiers::NONE);

    let live = controller.live_shape(&vp).unwrap();
    assert_eq!(live.trace.len(), 4);

    let update = controller.on_release(
        ScreenPoint::new(30.0, 90.0),
        MouseButton::Primary,
        Modifiers::NONE,
        &vp,
    );
    match update {
        SelectionUpdate::Completed { rect, trace, .. } => {
            assert_eq!(
                trace,
                vec![
                    PixelPoint::new(5, 5),
                    PixelPoint::new(30, 6),
                    PixelPoint::new(30, 6),
                    // clamped to the image
                    PixelPoint::new(100, 20),
                    PixelPoint::new(15, 45),
                ]
            );
            assert_eq!(
                rect,
                PixelRect::from_corners(PixelPoint::new(5, 5), PixelPoint::new(15, 45))
            );
        }
        other => panic!("expected completed selection, got {:?}", other),
    }
    assert!(controller.live_shape(&vp).is_none());
}

#[test]
fn test_shift_press_does_not_select() {
    let vp = viewport(1.0);
    let mut controller = SelectionController::new(true);

    controller.on_press(
        ScreenPoint::new(5.0, 5.0),
        MouseButton::Primary,
        Modifiers::SHIFT,
        true,
    );
    assert_eq!(controller.phase(), SelectionPhase::Idle);

    let update = controller.on_drag(ScreenPoint::new(40.0, 30.0), Modifiers::SHIFT);
    assert_eq!(update, SelectionUpdate::Unchanged);
    let update = controller.on_release(
        ScreenPoint::new(40.0, 30.0),
        MouseButton::Primary,
        Modifiers::SHIFT,
        &vp,
    );
    assert_eq!(update, SelectionUpdate::Unchanged);
    assert!(controller.box_corners(&vp).is_none());
}
