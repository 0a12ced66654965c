// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `PinchZoom` controller's host-facing behavior: wheel
//! debouncing, resize, programmatic moves, click suppression and lifecycle.

mod common;

use common::{FRAME_MS, RecordingHost, attached, drag_path, pinch, pump, release, tap, touch};
use kurbo::{Point, Rect, Size, Vec2};
use understory_pinch_zoom::pointer::{PointerPhase, PointerSample};
use understory_pinch_zoom::{
    ConfigError, DeltaMode, GestureNotice, Interaction, Modifiers, PinchZoom, PinchZoomConfig,
    ScaleToOptions, WheelSample,
};

const CENTER: Point = Point::new(200.0, 150.0);

#[test]
fn attach_fits_and_centers_content() {
    let mut host = RecordingHost::with_geometry(
        Rect::new(0.0, 0.0, 400.0, 400.0),
        Size::new(200.0, 100.0),
    );
    let mut zoom = PinchZoom::new(PinchZoomConfig::default());
    zoom.attach(&mut host);

    // 200x100 fits a 400x400 container at scale 2 (limited by width), which
    // leaves 200px of vertical slack split above and below.
    let update = host.last_update().unwrap();
    assert_eq!(update.scale, 2.0);
    assert_eq!(zoom.offset(), Vec2::new(0.0, -100.0));
    assert_eq!(zoom.transform().initial_offset(), Vec2::new(0.0, -100.0));
    assert_eq!((update.x, update.y), (0.0, 50.0));
    assert!(!zoom.is_out_of_bounds());
}

#[test]
fn try_new_rejects_invalid_config() {
    let config = PinchZoomConfig::default().with_zoom_limits(3.0, 1.0);
    assert_eq!(
        PinchZoom::try_new(config).err(),
        Some(ConfigError::ZoomRange { min: 3.0, max: 1.0 })
    );
    assert!(PinchZoom::try_new(PinchZoomConfig::default()).is_ok());
}

#[test]
fn input_before_attach_is_ignored() {
    let mut host = RecordingHost::new();
    let mut zoom = PinchZoom::new(PinchZoomConfig::default());
    assert!(!zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -100.0), 0));
    assert!(!zoom.handle_pointer(&mut host, touch(1, 1.0, 1.0, PointerPhase::Down), 0));
    assert!(host.updates.is_empty());
}

#[test]
fn input_updates_are_coalesced_per_frame() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(CENTER.x, CENTER.y, 3.0).with_animated(false),
        0,
    );
    let attached_updates = host.updates.len();
    let requests = host.frame_requests;

    drag_path(
        &mut zoom,
        &mut host,
        &[CENTER, Point::new(190.0, 150.0), Point::new(180.0, 150.0)],
        0,
    );
    // Nothing is delivered until the frame arrives, and only once.
    assert_eq!(host.updates.len(), attached_updates);
    assert_eq!(host.frame_requests, requests);
    zoom.on_frame(&mut host, 100);
    assert_eq!(host.updates.len(), attached_updates + 1);
    assert_eq!(host.last_update(), Some(zoom.current_update()));
}

#[test]
fn fling_release_emits_once_in_its_first_frame() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(CENTER.x, CENTER.y, 3.0).with_animated(false),
        0,
    );
    let now = pump(&mut zoom, &mut host, 0);

    let now = drag_path(
        &mut zoom,
        &mut host,
        &[CENTER, Point::new(190.0, 150.0), Point::new(170.0, 150.0)],
        now,
    );
    release(&mut zoom, &mut host, &[1], now);
    assert!(zoom.is_animating());

    // The pending drag update and the first inertia step share one emission.
    let before = host.updates.len();
    zoom.on_frame(&mut host, now + FRAME_MS);
    assert_eq!(host.updates.len(), before + 1);
    assert_eq!(host.last_update(), Some(zoom.current_update()));
}

#[test]
fn pinch_release_emits_once_in_the_first_settle_frame() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    let now = pinch(&mut zoom, &mut host, CENTER, &[50.0, 50.0, 50.0, 50.0, 55.0], 0);
    assert!((zoom.zoom_factor() - 1.1).abs() < 1e-12);
    release(&mut zoom, &mut host, &[1, 2], now);
    assert!(zoom.is_animating());

    let before = host.updates.len();
    zoom.on_frame(&mut host, now + FRAME_MS);
    assert_eq!(host.updates.len(), before + 1);
    assert!(zoom.zoom_factor() < 1.1);
    assert_eq!(host.last_update(), Some(zoom.current_update()));
}

#[test]
fn wheel_zooms_immediately_and_settles_after_quiet_period() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    assert!(zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -150.0), 0));
    assert!((zoom.zoom_factor() - 1.1).abs() < 1e-12);
    assert_eq!(host.wakeups.last(), Some(&100));

    // A second event pushes the deadline back.
    assert!(zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -30.0), 60));
    assert_eq!(host.wakeups.last(), Some(&160));
    zoom.on_frame(&mut host, 120);
    assert!(!zoom.is_animating());

    // 1.12 is below the zoom-out factor, so the settle zooms back to 1.
    zoom.on_frame(&mut host, 160);
    assert!(zoom.is_animating());
    pump(&mut zoom, &mut host, 160);
    assert_eq!(zoom.zoom_factor(), 1.0);
}

#[test]
fn wheel_respects_filter_and_delta_mode() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    let ctrl = Modifiers {
        ctrl: true,
        meta: false,
    };
    let pinch = WheelSample::pixels(CENTER, -10.0).with_modifiers(ctrl);
    assert!(!zoom.handle_wheel(&mut host, &pinch, 0));
    assert_eq!(zoom.zoom_factor(), 1.0);

    let lines = WheelSample::pixels(CENTER, -10.0).with_delta_mode(DeltaMode::Line);
    assert!(zoom.handle_wheel(&mut host, &lines, 0));
    assert!((zoom.zoom_factor() - 1.1).abs() < 1e-12);

    let config = zoom.config().with_wheel_filter(|_| true);
    zoom.set_config(config);
    assert!(zoom.handle_wheel(&mut host, &pinch, 10));
}

#[test]
fn wheel_positions_account_for_container_origin_and_scroll() {
    let mut host = RecordingHost::with_geometry(
        Rect::new(50.0, 60.0, 450.0, 360.0),
        Size::new(800.0, 600.0),
    );
    host.scroll = Vec2::new(0.0, 100.0);
    let mut zoom = PinchZoom::new(PinchZoomConfig::default());
    zoom.attach(&mut host);

    // Page point (250, 310) is container point (200, 150).
    zoom.handle_wheel(&mut host, &WheelSample::pixels(Point::new(250.0, 310.0), -1500.0), 0);
    assert_eq!(zoom.zoom_factor(), 2.0);
    assert_eq!(zoom.offset(), Vec2::new(200.0, 150.0));
}

#[test]
fn scale_to_animates_and_settles() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.scale_to(&mut host, ScaleToOptions::new(100.0, 100.0, 2.5), 0);
    assert!(zoom.is_animating());
    assert_eq!(zoom.zoom_factor(), 1.0);

    zoom.on_frame(&mut host, 125);
    assert!((zoom.zoom_factor() - 1.75).abs() < 1e-12);
    assert!(!zoom.is_out_of_bounds());

    pump(&mut zoom, &mut host, 125);
    assert_eq!(zoom.zoom_factor(), 2.5);
    assert_eq!(zoom.offset(), Vec2::new(150.0, 150.0));
    assert!(!zoom.is_animating());
}

#[test]
fn scale_to_clamps_target_zoom() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(0.0, 0.0, 50.0).with_animated(false),
        0,
    );
    assert_eq!(zoom.zoom_factor(), 5.0);
}

#[test]
fn align_center_puts_point_in_the_middle() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.align_center(
        &mut host,
        ScaleToOptions::new(100.0, 75.0, 2.0).with_animated(false),
        0,
    );
    assert_eq!(zoom.zoom_factor(), 2.0);
    assert_eq!(zoom.offset(), Vec2::ZERO);
    // Container point (100, 75) at zoom 1 showed content (200, 150); now the
    // container center does.
    assert_eq!(
        zoom.transform().content_point_at(CENTER),
        Point::new(200.0, 150.0)
    );
}

#[test]
fn new_animation_supersedes_the_running_one() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.scale_to(&mut host, ScaleToOptions::new(0.0, 0.0, 4.0), 0);
    zoom.on_frame(&mut host, 100);
    zoom.align_center(&mut host, ScaleToOptions::new(200.0, 150.0, 2.0), 110);
    pump(&mut zoom, &mut host, 110);
    assert_eq!(zoom.zoom_factor(), 2.0);
    assert_eq!(zoom.offset(), Vec2::new(200.0, 150.0));
}

#[test]
fn drag_suppresses_the_following_click() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default().with_inertia(false));
    let now = drag_path(
        &mut zoom,
        &mut host,
        &[CENTER, Point::new(210.0, 150.0), Point::new(220.0, 150.0)],
        0,
    );
    release(&mut zoom, &mut host, &[1], now);
    assert!(zoom.should_suppress_click(now + 10));
    assert!(!zoom.should_suppress_click(now + 20));

    // A plain tap lets the click through.
    tap(&mut zoom, &mut host, CENTER, now + 1_000);
    assert!(!zoom.should_suppress_click(now + 1_040));
}

#[test]
fn click_suppression_expires() {
    let config = PinchZoomConfig::default().with_inertia(false);
    let (mut zoom, mut host) = attached(config);
    let now = drag_path(&mut zoom, &mut host, &[CENTER, Point::new(230.0, 150.0)], 0);
    release(&mut zoom, &mut host, &[1], now);
    assert!(!zoom.should_suppress_click(now + config.click_suppress_ms + 1));
}

#[test]
fn gesture_notices_follow_interactions() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default().with_inertia(false));
    let now = drag_path(
        &mut zoom,
        &mut host,
        &[CENTER, Point::new(210.0, 150.0)],
        0,
    );
    assert_eq!(zoom.interaction(), Interaction::Drag);

    // A second finger turns the drag into a pinch.
    zoom.handle_pointer(&mut host, touch(2, 300.0, 150.0, PointerPhase::Down), now + 16);
    zoom.handle_pointers(
        &mut host,
        &[
            touch(1, 210.0, 150.0, PointerPhase::Move),
            touch(2, 300.0, 150.0, PointerPhase::Move),
        ],
        now + 32,
    );
    assert_eq!(zoom.interaction(), Interaction::Zoom);
    release(&mut zoom, &mut host, &[1, 2], now + 48);
    assert_eq!(zoom.interaction(), Interaction::None);

    assert_eq!(host.notices, [
        GestureNotice::DragStart,
        GestureNotice::DragUpdate,
        GestureNotice::DragEnd,
        GestureNotice::ZoomStart,
        GestureNotice::ZoomEnd,
    ]);
}

#[test]
fn double_tap_notice_and_disabled_tap_zoom() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default().with_tap_zoom_factor(0.0));
    tap(&mut zoom, &mut host, CENTER, 0);
    tap(&mut zoom, &mut host, CENTER, 100);
    assert_eq!(host.notices, [GestureNotice::DoubleTap]);
    assert!(!zoom.is_animating());
    assert_eq!(zoom.zoom_factor(), 1.0);
    assert!(zoom.should_suppress_click(150));
}

#[test]
fn double_tap_target_respects_max_zoom() {
    let config = PinchZoomConfig::default()
        .with_zoom_limits(0.5, 1.5)
        .with_tap_zoom_factor(2.0);
    let (mut zoom, mut host) = attached(config);
    tap(&mut zoom, &mut host, CENTER, 0);
    tap(&mut zoom, &mut host, CENTER, 100);
    pump(&mut zoom, &mut host, 100);
    assert_eq!(zoom.zoom_factor(), 1.5);
}

#[test]
fn double_tap_adds_tap_zoom_to_the_current_zoom() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(CENTER.x, CENTER.y, 1.5).with_animated(false),
        0,
    );
    pump(&mut zoom, &mut host, 0);

    tap(&mut zoom, &mut host, CENTER, 100);
    tap(&mut zoom, &mut host, CENTER, 200);
    let now = pump(&mut zoom, &mut host, 200);
    assert_eq!(zoom.zoom_factor(), 2.5);

    // Past one tap step above 1, the next double tap zooms back out.
    tap(&mut zoom, &mut host, CENTER, now + 400);
    tap(&mut zoom, &mut host, CENTER, now + 500);
    pump(&mut zoom, &mut host, now + 500);
    assert_eq!(zoom.zoom_factor(), 1.0);
}

#[test]
fn drag_past_the_edge_is_clamped_on_every_move() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default().with_inertia(false));
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(CENTER.x, CENTER.y, 2.0).with_animated(false),
        0,
    );
    assert_eq!(zoom.offset(), Vec2::new(200.0, 150.0));

    let mut now = 100;
    zoom.handle_pointer(&mut host, touch(1, CENTER.x, CENTER.y, PointerPhase::Down), now);
    now += FRAME_MS;
    zoom.handle_pointer(&mut host, touch(1, CENTER.x, CENTER.y, PointerPhase::Move), now);
    for step in 1..=6 {
        now += FRAME_MS;
        let x = CENTER.x + 60.0 * f64::from(step);
        zoom.handle_pointer(&mut host, touch(1, x, CENTER.y, PointerPhase::Move), now);
        assert!(!zoom.is_out_of_bounds(), "out of bounds after move {step}");
    }
    // 360px of drag against 200px of room: pinned to the left edge.
    assert_eq!(zoom.offset(), Vec2::new(0.0, 150.0));
    release(&mut zoom, &mut host, &[1], now);
    assert!(!zoom.is_animating());
}

#[test]
fn unzoomed_drag_can_be_disabled() {
    let config = PinchZoomConfig::default().with_draggable_unzoomed(false);
    let (mut zoom, mut host) = attached(config);
    drag_path(&mut zoom, &mut host, &[CENTER, Point::new(250.0, 150.0)], 0);
    assert_eq!(zoom.interaction(), Interaction::None);
    assert_eq!(zoom.offset(), Vec2::ZERO);
}

#[test]
fn mouse_drags_like_a_single_touch() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default().with_inertia(false));
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(CENTER.x, CENTER.y, 2.0).with_animated(false),
        0,
    );
    let start = zoom.offset();

    // Hovering does nothing.
    assert!(!zoom.handle_pointer(&mut host, PointerSample::mouse(CENTER, PointerPhase::Move), 0));

    zoom.handle_pointer(&mut host, PointerSample::mouse(CENTER, PointerPhase::Down), 10);
    assert!(zoom.handle_pointer(&mut host, PointerSample::mouse(CENTER, PointerPhase::Move), 20));
    zoom.handle_pointer(
        &mut host,
        PointerSample::mouse(Point::new(170.0, 130.0), PointerPhase::Move),
        30,
    );
    zoom.handle_pointer(
        &mut host,
        PointerSample::mouse(Point::new(170.0, 130.0), PointerPhase::Up),
        40,
    );
    assert_eq!(zoom.offset() - start, Vec2::new(30.0, 20.0));
    assert_eq!(zoom.interaction(), Interaction::None);
}

#[test]
fn disabled_controller_ignores_input() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.set_config(zoom.config().with_enabled(false));
    assert!(!zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -300.0), 0));
    drag_path(&mut zoom, &mut host, &[CENTER, Point::new(250.0, 150.0)], 0);
    assert_eq!(zoom.interaction(), Interaction::None);

    // Commands still work.
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(0.0, 0.0, 2.0).with_animated(false),
        0,
    );
    assert_eq!(zoom.zoom_factor(), 2.0);
}

#[test]
fn resize_recenters_without_aborting_gesture() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    drag_path(&mut zoom, &mut host, &[CENTER, Point::new(210.0, 150.0)], 0);
    assert_eq!(zoom.interaction(), Interaction::Drag);

    host.rect = Rect::new(0.0, 0.0, 200.0, 300.0);
    zoom.on_resize(&mut host);
    assert_eq!(zoom.interaction(), Interaction::Drag);
    assert_eq!(zoom.transform().initial_zoom_factor(), 0.25);
    // 200x150 content centered vertically in 200x300.
    assert_eq!(zoom.offset(), Vec2::new(0.0, -75.0));
    assert!(!zoom.is_out_of_bounds());
}

#[test]
fn set_offsets_once_keeps_offsets_on_resize() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default().with_set_offsets_once(true));
    zoom.scale_to(
        &mut host,
        ScaleToOptions::new(CENTER.x, CENTER.y, 2.0).with_animated(false),
        0,
    );
    host.rect = Rect::new(0.0, 0.0, 400.0, 600.0);
    zoom.on_resize(&mut host);
    assert_eq!(zoom.transform().initial_zoom_factor(), 0.5);
    assert_eq!(zoom.transform().initial_offset(), Vec2::ZERO);
    // Still in bounds: 800x600 content vs a 400x600 container.
    assert_eq!(zoom.offset(), Vec2::new(200.0, 0.0));
}

#[test]
fn degenerate_geometry_reports_zero_transform() {
    let mut host = RecordingHost::with_geometry(Rect::new(0.0, 0.0, 400.0, 300.0), Size::ZERO);
    let mut zoom = PinchZoom::new(PinchZoomConfig::default());
    zoom.attach(&mut host);
    let update = host.last_update().unwrap();
    assert_eq!((update.scale, update.x, update.y), (0.0, 0.0, 0.0));

    zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -300.0), 0);
    pump(&mut zoom, &mut host, 0);
    for update in &host.updates {
        assert!(update.scale.is_finite() && update.x.is_finite() && update.y.is_finite());
    }
}

#[test]
fn detach_stops_motion_and_timers() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -150.0), 0);
    zoom.scale_to(&mut host, ScaleToOptions::new(0.0, 0.0, 3.0), 10);
    assert!(zoom.is_animating());

    zoom.detach();
    assert!(!zoom.is_animating());
    let updates = host.updates.len();
    zoom.on_frame(&mut host, 500);
    assert_eq!(host.updates.len(), updates);
    assert!(!zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -150.0), 600));
}
