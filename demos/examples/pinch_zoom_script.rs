// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pinch-zoom session.
//!
//! Replays a double tap, a pinch, a fling and a programmatic move against a
//! headless host and prints the resulting transform after each step. Set
//! `RUST_LOG=debug` to see state transitions, or `RUST_LOG=info` to see
//! every transform update.
//!
//! Run:
//! - `cargo run -p understory_demos --example pinch_zoom_script`

use kurbo::{Point, Rect, Size};
use understory_demos::{FRAME_MS, ScriptedHost};
use understory_pinch_zoom::pointer::{PointerId, PointerPhase, PointerSample};
use understory_pinch_zoom::{PinchZoom, PinchZoomConfig, ScaleToOptions};

fn finger(id: u64, x: f64, y: f64, phase: PointerPhase) -> PointerSample {
    PointerSample::new(PointerId(id), Point::new(x, y), phase)
}

fn report(step: &str, zoom: &PinchZoom) {
    let update = zoom.current_update();
    println!(
        "{step:<24} zoom={:.3} scale={:.3} pan=({:.1}, {:.1}) interaction={:?}",
        zoom.zoom_factor(),
        update.scale,
        update.x,
        update.y,
        zoom.interaction()
    );
}

fn main() {
    env_logger::init();

    // A 1600x1200 photo in a 400x300 viewport.
    let mut host = ScriptedHost::new(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(1600.0, 1200.0));
    let config = PinchZoomConfig::default().with_zoom_limits(0.5, 6.0);
    let mut zoom = match PinchZoom::try_new(config) {
        Ok(zoom) => zoom,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            return;
        }
    };
    zoom.attach(&mut host);
    report("attached", &zoom);

    // Double tap near the top-left corner.
    for _ in 0..2 {
        host.pointer(&mut zoom, finger(1, 100.0, 80.0, PointerPhase::Down));
        host.wait(40);
        host.pointer(&mut zoom, finger(1, 100.0, 80.0, PointerPhase::Up));
        host.wait(80);
    }
    host.run_until_idle(&mut zoom);
    report("double tap", &zoom);

    // Pinch out around the middle.
    let pinch = |half: f64, phase| {
        [
            finger(1, 200.0 - half, 150.0, phase),
            finger(2, 200.0 + half, 150.0, phase),
        ]
    };
    host.wait(500);
    host.pointers(&mut zoom, &pinch(40.0, PointerPhase::Down));
    for half in [40.0, 41.0, 42.0, 43.0, 50.0, 60.0, 70.0] {
        host.run_for(&mut zoom, FRAME_MS);
        host.pointers(&mut zoom, &pinch(half, PointerPhase::Move));
    }
    report("pinching", &zoom);
    let up = [
        finger(1, 0.0, 0.0, PointerPhase::Up),
        finger(2, 0.0, 0.0, PointerPhase::Up),
    ];
    host.pointers(&mut zoom, &up);
    host.run_until_idle(&mut zoom);
    report("pinch released", &zoom);

    // Fling to the left and let inertia carry the content.
    host.wait(500);
    host.pointer(&mut zoom, finger(3, 300.0, 150.0, PointerPhase::Down));
    for x in [300.0, 290.0, 270.0, 240.0] {
        host.run_for(&mut zoom, FRAME_MS);
        host.pointer(&mut zoom, finger(3, x, 150.0, PointerPhase::Move));
    }
    host.pointer(&mut zoom, finger(3, 240.0, 150.0, PointerPhase::Up));
    report("fling released", &zoom);
    host.run_until_idle(&mut zoom);
    report("inertia done", &zoom);
    println!("click after fling suppressed: {}", zoom.should_suppress_click(host.now()));

    // Programmatic move: center the photo's middle at 3x.
    let now = host.now();
    zoom.align_center(&mut host, ScaleToOptions::new(200.0, 150.0, 3.0), now);
    host.run_until_idle(&mut zoom);
    report("align_center", &zoom);

    println!("{} transform updates delivered", host.update_count());
}
