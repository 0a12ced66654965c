// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scaffolding shared by the pinch-zoom demos.
//!
//! [`ScriptedHost`] stands in for a windowing toolkit: it owns a virtual
//! clock, remembers whether the controller asked for a frame or a wakeup, and
//! logs every transform update and gesture notice.

use kurbo::{Rect, Size};
use understory_pinch_zoom::{
    GestureNotice, HostSurface, PinchZoom, PointerSample, TransformUpdate, WheelSample,
};

/// Display refresh interval of the simulated screen.
pub const FRAME_MS: u64 = 16;

/// A headless host driven by a virtual clock.
#[derive(Debug)]
pub struct ScriptedHost {
    rect: Rect,
    content: Size,
    now_ms: u64,
    frame_requested: bool,
    wakeup_at: Option<u64>,
    last: Option<TransformUpdate>,
    updates: usize,
}

impl ScriptedHost {
    /// A host whose container occupies `rect` and whose content has `content`
    /// as natural size.
    pub fn new(rect: Rect, content: Size) -> Self {
        Self {
            rect,
            content,
            now_ms: 0,
            frame_requested: false,
            wakeup_at: None,
            last: None,
            updates: 0,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Moves the clock forward without delivering frames, as between two
    /// input events.
    pub fn wait(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    /// Last transform received.
    pub fn last_update(&self) -> Option<TransformUpdate> {
        self.last
    }

    /// Number of transform updates received.
    pub fn update_count(&self) -> usize {
        self.updates
    }

    /// Changes the container size, as a window resize would.
    pub fn resize(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Delivers one pointer sample at the current time.
    pub fn pointer(&mut self, zoom: &mut PinchZoom, sample: PointerSample) -> bool {
        let now = self.now_ms;
        zoom.handle_pointer(self, sample, now)
    }

    /// Delivers the samples of one multi-touch event at the current time.
    pub fn pointers(&mut self, zoom: &mut PinchZoom, samples: &[PointerSample]) -> bool {
        let now = self.now_ms;
        zoom.handle_pointers(self, samples, now)
    }

    /// Delivers a wheel event at the current time.
    pub fn wheel(&mut self, zoom: &mut PinchZoom, sample: &WheelSample) -> bool {
        let now = self.now_ms;
        zoom.handle_wheel(self, sample, now)
    }

    /// Runs the display for `ms`, delivering a frame on every refresh that the
    /// controller asked for.
    pub fn run_for(&mut self, zoom: &mut PinchZoom, ms: u64) {
        let end = self.now_ms + ms;
        while self.now_ms + FRAME_MS <= end {
            self.now_ms += FRAME_MS;
            self.deliver(zoom);
        }
        self.now_ms = end;
    }

    /// Runs the display until the controller stops asking for frames.
    pub fn run_until_idle(&mut self, zoom: &mut PinchZoom) {
        while self.frame_requested || self.wakeup_at.is_some() {
            self.now_ms += FRAME_MS;
            self.deliver(zoom);
        }
    }

    fn deliver(&mut self, zoom: &mut PinchZoom) {
        let wakeup_due = self.wakeup_at.is_some_and(|at| at <= self.now_ms);
        if !(self.frame_requested || wakeup_due) {
            return;
        }
        self.frame_requested = false;
        if wakeup_due {
            self.wakeup_at = None;
        }
        let now = self.now_ms;
        zoom.on_frame(self, now);
    }
}

impl HostSurface for ScriptedHost {
    fn container_rect(&self) -> Rect {
        self.rect
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn on_update(&mut self, update: TransformUpdate) {
        log::info!(
            "t={:>5}ms scale={:.3} x={:.1} y={:.1}",
            self.now_ms,
            update.scale,
            update.x,
            update.y
        );
        self.last = Some(update);
        self.updates += 1;
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn request_wakeup(&mut self, at_ms: u64) {
        self.wakeup_at = Some(self.wakeup_at.map_or(at_ms, |t| t.min(at_ms)));
    }

    fn on_gesture(&mut self, notice: GestureNotice) {
        log::info!("t={:>5}ms gesture {notice:?}", self.now_ms);
    }
}
