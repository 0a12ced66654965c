// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel zoom with a delayed settle.
//!
//! Zooms in with a burst of wheel events, waits for the settle, then zooms
//! out below the zoom-out factor so the settle snaps back to fit. Also shows
//! how a resize keeps the content centered.
//!
//! Run:
//! - `cargo run -p understory_demos --example wheel_zoom`

use kurbo::{Point, Rect, Size};
use understory_demos::ScriptedHost;
use understory_pinch_zoom::{DeltaMode, Modifiers, PinchZoom, PinchZoomConfig, WheelSample};

fn main() {
    env_logger::init();

    let mut host = ScriptedHost::new(Rect::new(0.0, 0.0, 640.0, 480.0), Size::new(1280.0, 720.0));
    let mut zoom = PinchZoom::new(PinchZoomConfig::default().with_padding(20.0, 20.0));
    zoom.attach(&mut host);

    let cursor = Point::new(480.0, 200.0);
    for _ in 0..5 {
        let intercepted = host.wheel(&mut zoom, &WheelSample::pixels(cursor, -120.0));
        assert!(intercepted);
        host.run_for(&mut zoom, 30);
    }
    println!("after wheel burst: zoom={:.3}", zoom.zoom_factor());
    host.run_until_idle(&mut zoom);
    println!("after settle:      zoom={:.3}", zoom.zoom_factor());

    // Ctrl+wheel is left to the browser/OS page zoom by default.
    let ctrl = WheelSample::pixels(cursor, -3.0)
        .with_delta_mode(DeltaMode::Line)
        .with_modifiers(Modifiers {
            ctrl: true,
            meta: false,
        });
    println!("ctrl+wheel intercepted: {}", host.wheel(&mut zoom, &ctrl));

    // Zoom back out a bit past the zoom-out factor; the settle returns to fit.
    host.wheel(&mut zoom, &WheelSample::pixels(cursor, 900.0));
    println!("zoomed out:        zoom={:.3}", zoom.zoom_factor());
    host.run_until_idle(&mut zoom);
    println!("after settle:      zoom={:.3} offset={:?}", zoom.zoom_factor(), zoom.offset());

    host.resize(Rect::new(0.0, 0.0, 320.0, 480.0));
    zoom.on_resize(&mut host);
    host.run_until_idle(&mut zoom);
    let update = zoom.current_update();
    println!(
        "after resize:      scale={:.3} pan=({:.1}, {:.1})",
        update.scale, update.x, update.y
    );
}
