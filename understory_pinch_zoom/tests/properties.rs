// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariants of the gesture-to-transform engine, exercised end to end
//! through `PinchZoom` and a recording host.

mod common;

use common::{attached, drag_path, pinch, pump, release, tap, touch};
use kurbo::{Point, Vec2};
use understory_pinch_zoom::pointer::PointerPhase;
use understory_pinch_zoom::{Interaction, PinchZoomConfig, ScaleToOptions, WheelSample};

const CENTER: Point = Point::new(200.0, 150.0);

fn zoom_in_place(zoom: &mut understory_pinch_zoom::PinchZoom, host: &mut common::RecordingHost, scale: f64) {
    zoom.scale_to(
        host,
        ScaleToOptions::new(CENTER.x, CENTER.y, scale).with_animated(false),
        0,
    );
}

#[test]
fn zoom_factor_is_within_limits_after_settle() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    let mut now = 0;
    for _ in 0..40 {
        zoom.handle_wheel(&mut host, &WheelSample::pixels(CENTER, -600.0), now);
        now += 10;
    }
    assert_eq!(zoom.zoom_factor(), 5.0);
    now = pump(&mut zoom, &mut host, now);
    assert_eq!(zoom.zoom_factor(), 5.0);

    // Pinch far past the lower limit.
    now = pinch(&mut zoom, &mut host, CENTER, &[100.0, 100.0, 100.0, 100.0, 10.0, 1.0], now);
    assert_eq!(zoom.zoom_factor(), 0.5);
    release(&mut zoom, &mut host, &[1, 2], now);
    pump(&mut zoom, &mut host, now);

    let z = zoom.zoom_factor();
    assert!((0.5..=5.0).contains(&z), "zoom factor {z} escaped the limits");
    // Below the zoom-out factor, settling returns to 1.
    assert_eq!(z, 1.0);
    let update = host.last_update().unwrap();
    assert!((update.scale - 0.5).abs() < 1e-12);
}

#[test]
fn offset_is_contained_after_settle() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    zoom_in_place(&mut zoom, &mut host, 2.0);
    assert_eq!(zoom.offset(), Vec2::new(200.0, 150.0));

    // A two-finger pan is not clamped while it runs.
    let fingers = |dx: f64, phase| {
        [
            touch(1, 150.0 + dx, 150.0, phase),
            touch(2, 250.0 + dx, 150.0, phase),
        ]
    };
    let mut now = 100;
    zoom.handle_pointers(&mut host, &fingers(0.0, PointerPhase::Down), now);
    for dx in [0.0, 0.0, 0.0, 0.0, 100.0, 200.0, 300.0] {
        now += 16;
        zoom.handle_pointers(&mut host, &fingers(dx, PointerPhase::Move), now);
    }
    assert_eq!(zoom.interaction(), Interaction::Zoom);
    assert!((zoom.offset().x - -100.0).abs() < 1e-9);
    assert!(zoom.is_out_of_bounds());

    release(&mut zoom, &mut host, &[1, 2], now);
    assert!(zoom.is_animating());
    pump(&mut zoom, &mut host, now);

    assert!(!zoom.is_out_of_bounds());
    let offset = zoom.offset();
    let scale = zoom.transform().effective_scale();
    assert_eq!(zoom.containment().sanitize_offset(offset, scale), offset);
    assert_eq!(offset, Vec2::new(0.0, 150.0));
}

#[test]
fn wheel_zoom_keeps_content_under_pointer() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    let anchor = Point::new(310.0, 40.0);
    let before = zoom.transform().content_point_at(anchor);
    assert!(zoom.handle_wheel(&mut host, &WheelSample::pixels(anchor, -450.0), 0));
    assert!((zoom.zoom_factor() - 1.3).abs() < 1e-12);
    let after = zoom.transform().content_point_at(anchor);
    assert!((before - after).hypot() < 1e-9, "{before:?} moved to {after:?}");
}

#[test]
fn double_tap_toggles_between_one_and_tap_zoom() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default().with_tap_zoom_factor(1.0));

    tap(&mut zoom, &mut host, CENTER, 0);
    assert!(!zoom.is_animating());
    tap(&mut zoom, &mut host, CENTER, 100);
    assert!(zoom.is_animating());

    zoom.on_frame(&mut host, 225);
    let mid = zoom.zoom_factor();
    assert!(mid > 1.0 && mid < 2.0, "mid-animation zoom {mid}");
    zoom.on_frame(&mut host, 360);
    assert_eq!(zoom.zoom_factor(), 2.0);
    assert!(!zoom.is_animating());

    // Third tap within the window of the second zooms back out.
    tap(&mut zoom, &mut host, CENTER, 380);
    assert!(zoom.is_animating());
    zoom.on_frame(&mut host, 500);
    assert!(zoom.zoom_factor() < 2.0);
    pump(&mut zoom, &mut host, 500);
    assert_eq!(zoom.zoom_factor(), 1.0);
    assert!(zoom.offset().hypot() < 1e-9);
}

#[test]
fn pinch_from_100_to_200_doubles_zoom() {
    let (mut zoom, mut host) = attached(PinchZoomConfig::default());
    pinch(&mut zoom, &mut host, CENTER, &[50.0, 50.0, 50.0, 50.0, 100.0], 0);
    assert_eq!(zoom.zoom_factor(), 2.0);
    // The centroid did not move, so it stays fixed on screen.
    assert_eq!(zoom.offset(), Vec2::new(200.0, 150.0));
}

#[test]
fn inertia_decays_and_stops() {
    let config = PinchZoomConfig::default().with_inertia_friction(0.96);
    let (mut zoom, mut host) = attached(config);
    zoom_in_place(&mut zoom, &mut host, 3.0);
    assert_eq!(zoom.offset(), Vec2::new(400.0, 300.0));

    let path = [CENTER, Point::new(205.0, 150.0), Point::new(212.0, 150.0)];
    let now = drag_path(&mut zoom, &mut host, &path, 100);
    assert_eq!(zoom.offset(), Vec2::new(388.0, 300.0));
    release(&mut zoom, &mut host, &[1], now);
    assert!(zoom.is_animating());

    let updates_before = host.updates.len();
    pump(&mut zoom, &mut host, now);
    assert!(!zoom.is_animating());
    // 7 * 0.96^n stays at or above 0.5 for 64 frames.
    assert!(host.updates.len() >= updates_before + 64);
    let x = zoom.offset().x;
    assert!(x < 250.0 && x > 200.0, "inertia ended at {x}");
    assert_eq!(zoom.offset().y, 300.0);
}

#[test]
fn axis_lock_keeps_dominant_axis_only() {
    let config = PinchZoomConfig::default().with_lock_drag_axis(true);
    let (mut zoom, mut host) = attached(config);
    zoom_in_place(&mut zoom, &mut host, 3.0);
    let start = zoom.offset();

    let now = drag_path(&mut zoom, &mut host, &[CENTER, CENTER + Vec2::new(10.0, 3.0)], 0);
    let step = zoom.offset() - start;
    assert_eq!(step, Vec2::new(-10.0, 0.0));

    let before = zoom.offset();
    zoom.handle_pointer(&mut host, touch(1, 213.0, 163.0, PointerPhase::Move), now + 16);
    let step = zoom.offset() - before;
    assert_eq!(step, Vec2::new(0.0, -10.0));
}
