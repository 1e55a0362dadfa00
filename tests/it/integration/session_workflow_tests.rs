//! Extraction Session Workflow Tests

use crate::helpers::{click, committed_at, gradient_image, solid_image, tap, with_origin};
use huepick::input::{BoundingBox, PointerEvent, point};
use huepick::loader::ImageOrigin;
use huepick::session::{ExtractionSession, SessionEvent};
use huepick::settings::PickerSettings;

/// 400x300 image shown in a 200x150 box at (100, 50)
fn session_400x300() -> ExtractionSession {
    let mut session = ExtractionSession::default();
    assert_eq!(session.load_image(&gradient_image(400, 300)), (400, 300));
    session.set_layout(BoundingBox::new(100.0, 50.0, 200.0, 150.0));
    session
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_tap_at_box_center_picks_buffer_center() {
    let mut session = session_400x300();
    assert_eq!(committed_at(tap(&mut session, 200.0, 125.0, 0)), Some((200, 150)));
}

#[test]
fn test_positions_outside_box_clamp_to_edges() {
    let mut session = session_400x300();
    assert_eq!(committed_at(click(&mut session, 0.0, 0.0)), Some((0, 0)));
    assert_eq!(committed_at(click(&mut session, 5000.0, 5000.0)), Some((399, 299)));
}

#[test]
fn test_small_touch_wobble_commits_exactly_once() {
    let mut session = session_400x300();
    session.pointer_down(&PointerEvent::touch(150.0, 100.0));
    assert_eq!(session.pointer_move(&PointerEvent::touch(154.0, 107.0)), None);
    assert!(committed_at(session.pointer_up(&PointerEvent::touch(154.0, 107.0))).is_some());
    assert_eq!(session.pointer_up(&PointerEvent::touch(154.0, 107.0)), None);
}

#[test]
fn test_touch_drag_never_picks() {
    let mut session = session_400x300();
    session.pointer_down(&PointerEvent::touch(150.0, 100.0));
    session.pointer_move(&PointerEvent::touch(150.0, 115.0));
    session.pointer_move(&PointerEvent::touch(150.0, 101.0));
    assert_eq!(session.pointer_up(&PointerEvent::touch(150.0, 101.0)), None);
    assert!(session.interaction_state().is_idle());
}

#[test]
fn test_double_tap_toggles_zoom_instead_of_picking() {
    let mut session = session_400x300();

    assert!(committed_at(tap(&mut session, 200.0, 125.0, 1_000)).is_some());
    match tap(&mut session, 200.0, 125.0, 1_200) {
        Some(SessionEvent::ZoomChanged(level)) => assert!(approx(level, 2.0)),
        other => panic!("expected zoom toggle, got {other:?}"),
    }

    // Next pair toggles back
    assert!(committed_at(tap(&mut session, 200.0, 125.0, 5_000)).is_some());
    match tap(&mut session, 200.0, 125.0, 5_100) {
        Some(SessionEvent::ZoomChanged(level)) => assert!(approx(level, 1.0)),
        other => panic!("expected zoom toggle, got {other:?}"),
    }
}

#[test]
fn test_slow_second_tap_is_a_normal_pick() {
    let mut session = session_400x300();
    assert!(committed_at(tap(&mut session, 200.0, 125.0, 0)).is_some());
    assert!(committed_at(tap(&mut session, 200.0, 125.0, 301)).is_some());
    assert!(approx(session.zoom().level(), 1.0));
}

#[test]
fn test_zoomed_layout_maps_to_same_pixels() {
    let mut session = session_400x300();
    let base = BoundingBox::new(100.0, 50.0, 200.0, 150.0);
    assert!(session.zoom_in().is_some());
    assert!(session.zoom_in().is_some());
    let zoomed = base.scaled_about_center(session.zoom().level());
    session.set_layout(zoomed);

    // Center is invariant under a center-origin zoom
    assert_eq!(committed_at(click(&mut session, 200.0, 125.0)), Some((200, 150)));

    // A quarter of the way across the zoomed box is a quarter of the buffer
    let quarter = point(zoomed.left + zoomed.width / 4.0, zoomed.top + zoomed.height / 4.0);
    assert_eq!(committed_at(click(&mut session, quarter.x, quarter.y)), Some((100, 75)));
}

#[test]
fn test_mouse_hover_streams_previews() {
    let mut session = session_400x300();

    let Some(SessionEvent::Preview {
        sample,
        offset,
        crosshair,
    }) = session.pointer_move(&PointerEvent::mouse(150.0, 100.0))
    else {
        panic!("hover should preview");
    };
    assert_eq!((sample.position.x, sample.position.y), (100, 100));
    assert_eq!(offset, point(50.0, 50.0));
    assert_eq!(crosshair, point(150.0, 100.0));

    // Pressed mouse keeps previewing and still commits on release
    session.pointer_down(&PointerEvent::mouse(150.0, 100.0));
    assert!(session.pointer_move(&PointerEvent::mouse(250.0, 100.0)).is_some());
    assert!(session.interaction_state().is_hovering());
    assert_eq!(committed_at(session.pointer_up(&PointerEvent::mouse(250.0, 100.0))), Some((300, 100)));
}

#[test]
fn test_new_image_mid_gesture_drops_the_pick() {
    let mut session = session_400x300();
    session.pointer_down(&PointerEvent::touch(200.0, 125.0));
    session.load_image(&solid_image(20, 20, [1, 2, 3]));
    assert_eq!(session.pointer_up(&PointerEvent::touch(200.0, 125.0)), None);

    // The next gesture samples the new, smaller buffer
    let Some(SessionEvent::Commit(sample)) = tap(&mut session, 200.0, 125.0, 10_000) else {
        panic!("expected a commit on the new image");
    };
    assert_eq!((sample.position.x, sample.position.y), (10, 10));
    assert_eq!(sample.hex, "#010203");
}

#[test]
fn test_tap_before_reload_does_not_pair_into_double_tap() {
    let mut session = session_400x300();
    assert!(committed_at(tap(&mut session, 200.0, 125.0, 0)).is_some());

    session.load_image(&solid_image(20, 20, [9, 9, 9]));
    let Some(SessionEvent::Commit(sample)) = tap(&mut session, 200.0, 125.0, 200) else {
        panic!("first tap on the new image should pick");
    };
    assert_eq!(sample.hex, "#090909");
    assert!(approx(session.zoom().level(), 1.0));
}

#[test]
fn test_direct_picks_are_bounds_checked_after_reload() {
    let mut session = session_400x300();
    assert!(session.pick(350, 250).is_some());
    session.load_image(&solid_image(20, 20, [0, 0, 0]));
    assert!(session.pick(350, 250).is_none());
    assert!(session.pick(-1, 0).is_none());
    assert!(session.pick(19, 19).is_some());
}

#[test]
fn test_tainted_image_never_yields_colors() {
    let mut session = ExtractionSession::default();
    let image = with_origin(gradient_image(40, 40), ImageOrigin::Remote { cors_approved: false });
    session.load_image(&image);
    session.set_layout(BoundingBox::new(0.0, 0.0, 40.0, 40.0));

    assert_eq!(tap(&mut session, 10.0, 10.0, 0), None);
    assert_eq!(session.pointer_move(&PointerEvent::mouse(10.0, 10.0)), None);
}

#[test]
fn test_hidden_image_falls_back_to_last_good_pixel() {
    let mut session = session_400x300();
    assert_eq!(committed_at(click(&mut session, 200.0, 125.0)), Some((200, 150)));

    session.set_layout(BoundingBox::new(100.0, 50.0, 0.0, 0.0));
    assert_eq!(committed_at(click(&mut session, 120.0, 60.0)), Some((200, 150)));
}

#[test]
fn test_large_images_are_fitted_before_sampling() {
    let settings = PickerSettings {
        max_image_dimension: 100,
        ..PickerSettings::default()
    };
    let mut session = ExtractionSession::new(&settings);
    assert_eq!(session.load_image(&solid_image(400, 200, [5, 5, 5])), (100, 50));
    assert!(session.pick(99, 49).is_some());
    assert!(session.pick(100, 0).is_none());
}

#[test]
fn test_cancel_discards_gesture() {
    let mut session = session_400x300();
    session.pointer_down(&PointerEvent::touch(200.0, 125.0));
    session.pointer_cancel();
    assert_eq!(session.pointer_up(&PointerEvent::touch(200.0, 125.0)), None);
}

#[test]
fn test_zoom_controls_are_bounded() {
    let mut session = session_400x300();
    assert_eq!(session.zoom_out(), None);
    assert_eq!(session.reset_zoom(), None);

    let SessionEvent::ZoomChanged(level) = session.toggle_zoom() else {
        panic!("toggle always reports the new level");
    };
    assert!(approx(level, 2.0));

    while session.zoom_in().is_some() {}
    assert!(approx(session.zoom().level(), 3.0));
    assert!(matches!(session.reset_zoom(), Some(SessionEvent::ZoomChanged(l)) if approx(l, 1.0)));
}
