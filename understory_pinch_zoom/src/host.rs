// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};
use understory_view2d::TransformUpdate;

/// Gesture lifecycle notifications delivered through [`HostSurface::on_gesture`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureNotice {
    /// A one-finger (or mouse) pan began.
    DragStart,
    /// The pan moved the content.
    DragUpdate,
    /// The pan ended.
    DragEnd,
    /// A two-finger pinch began.
    ZoomStart,
    /// The pinch changed the zoom.
    ZoomUpdate,
    /// The pinch ended.
    ZoomEnd,
    /// A double tap started a zoom animation.
    DoubleTap,
}

/// The embedding surface: geometry in, transforms and scheduling requests out.
///
/// Methods are called synchronously from [`PinchZoom`](crate::PinchZoom)
/// entry points; none of them may call back into the controller.
pub trait HostSurface {
    /// Current bounding box of the container, in viewport coordinates.
    fn container_rect(&self) -> Rect;

    /// Natural (unscaled) size of the wrapped content.
    fn content_size(&self) -> Size;

    /// Page scroll, subtracted from page-coordinate input positions.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Receives every transform change.
    fn on_update(&mut self, update: TransformUpdate);

    /// Asks for one [`PinchZoom::on_frame`](crate::PinchZoom::on_frame) call
    /// at the next display refresh.
    fn request_frame(&mut self);

    /// Asks for an [`PinchZoom::on_frame`](crate::PinchZoom::on_frame) call
    /// at or after `at_ms`.
    fn request_wakeup(&mut self, at_ms: u64) {
        let _ = at_ms;
        self.request_frame();
    }

    /// Fire-and-forget gesture notifications.
    fn on_gesture(&mut self, notice: GestureNotice) {
        let _ = notice;
    }
}
