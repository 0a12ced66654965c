// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for controller integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use kurbo::{Point, Rect, Size, Vec2};
use understory_pinch_zoom::pointer::{PointerId, PointerPhase, PointerSample};
use understory_pinch_zoom::{GestureNotice, HostSurface, PinchZoom, PinchZoomConfig, TransformUpdate};

/// Frame interval used when pumping frames.
pub(crate) const FRAME_MS: u64 = 16;

/// A host that records everything the controller tells it.
#[derive(Debug)]
pub(crate) struct RecordingHost {
    pub(crate) rect: Rect,
    pub(crate) content: Size,
    pub(crate) scroll: Vec2,
    pub(crate) updates: Vec<TransformUpdate>,
    pub(crate) notices: Vec<GestureNotice>,
    pub(crate) frame_pending: bool,
    pub(crate) frame_requests: usize,
    pub(crate) wakeups: Vec<u64>,
}

impl RecordingHost {
    /// A 400x300 container at the viewport origin showing 800x600 content,
    /// which fits at scale 0.5 with a zero centering offset.
    pub(crate) fn new() -> Self {
        Self::with_geometry(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(800.0, 600.0))
    }

    pub(crate) fn with_geometry(rect: Rect, content: Size) -> Self {
        Self {
            rect,
            content,
            scroll: Vec2::ZERO,
            updates: Vec::new(),
            notices: Vec::new(),
            frame_pending: false,
            frame_requests: 0,
            wakeups: Vec::new(),
        }
    }

    pub(crate) fn last_update(&self) -> Option<TransformUpdate> {
        self.updates.last().copied()
    }
}

impl HostSurface for RecordingHost {
    fn container_rect(&self) -> Rect {
        self.rect
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn on_update(&mut self, update: TransformUpdate) {
        self.updates.push(update);
    }

    fn request_frame(&mut self) {
        self.frame_pending = true;
        self.frame_requests += 1;
    }

    fn request_wakeup(&mut self, at_ms: u64) {
        self.wakeups.push(at_ms);
        self.request_frame();
    }

    fn on_gesture(&mut self, notice: GestureNotice) {
        self.notices.push(notice);
    }
}

/// Creates and attaches a controller.
pub(crate) fn attached(config: PinchZoomConfig) -> (PinchZoom, RecordingHost) {
    let mut host = RecordingHost::new();
    let mut zoom = PinchZoom::new(config);
    zoom.attach(&mut host);
    (zoom, host)
}

/// Delivers requested frames every [`FRAME_MS`] until none is pending.
/// Returns the time of the last frame.
pub(crate) fn pump(zoom: &mut PinchZoom, host: &mut RecordingHost, mut now: u64) -> u64 {
    for _ in 0..10_000 {
        if !host.frame_pending {
            return now;
        }
        host.frame_pending = false;
        now += FRAME_MS;
        zoom.on_frame(host, now);
    }
    panic!("frames were still requested after 10000 frames");
}

pub(crate) fn touch(id: u64, x: f64, y: f64, phase: PointerPhase) -> PointerSample {
    PointerSample::new(PointerId(id), Point::new(x, y), phase)
}

/// Single-finger tap (press and release) at `at`.
pub(crate) fn tap(zoom: &mut PinchZoom, host: &mut RecordingHost, at: Point, now: u64) {
    zoom.handle_pointer(host, touch(1, at.x, at.y, PointerPhase::Down), now);
    zoom.handle_pointer(host, touch(1, at.x, at.y, PointerPhase::Up), now + 30);
}

/// One-finger drag through `path`, without releasing. The first point is the
/// press; the first move classifies the gesture and does not pan.
pub(crate) fn drag_path(
    zoom: &mut PinchZoom,
    host: &mut RecordingHost,
    path: &[Point],
    mut now: u64,
) -> u64 {
    let Some((&first, rest)) = path.split_first() else {
        return now;
    };
    zoom.handle_pointer(host, touch(1, first.x, first.y, PointerPhase::Down), now);
    now += FRAME_MS;
    zoom.handle_pointer(host, touch(1, first.x, first.y, PointerPhase::Move), now);
    for p in rest {
        now += FRAME_MS;
        zoom.handle_pointer(host, touch(1, p.x, p.y, PointerPhase::Move), now);
    }
    now
}

/// Two-finger horizontal pinch centered at `center`, through the given
/// half-distances between the fingers. Fingers stay pressed.
pub(crate) fn pinch(
    zoom: &mut PinchZoom,
    host: &mut RecordingHost,
    center: Point,
    half_widths: &[f64],
    mut now: u64,
) -> u64 {
    let fingers = |half: f64, phase| {
        [
            touch(1, center.x - half, center.y, phase),
            touch(2, center.x + half, center.y, phase),
        ]
    };
    let Some((&first, rest)) = half_widths.split_first() else {
        return now;
    };
    zoom.handle_pointers(host, &fingers(first, PointerPhase::Down), now);
    now += FRAME_MS;
    zoom.handle_pointers(host, &fingers(first, PointerPhase::Move), now);
    for &half in rest {
        now += FRAME_MS;
        zoom.handle_pointers(host, &fingers(half, PointerPhase::Move), now);
    }
    now
}

/// Releases fingers `ids` at their last positions (positions are ignored on
/// release).
pub(crate) fn release(zoom: &mut PinchZoom, host: &mut RecordingHost, ids: &[u64], now: u64) {
    let samples: Vec<PointerSample> = ids
        .iter()
        .map(|&id| touch(id, 0.0, 0.0, PointerPhase::Up))
        .collect();
    zoom.handle_pointers(host, &samples, now);
}
