// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::bounds::Containment;
use crate::geometry::{CLOSE_TOLERANCE, clamp, is_close_to};

/// Transform reported to the host after every change.
///
/// `scale` is the absolute scale (fit scale times the user zoom factor) and
/// `x`/`y` is the pan position in content-space units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformUpdate {
    /// Absolute scale to render the content at.
    pub scale: f64,
    /// Horizontal pan in content units.
    pub x: f64,
    /// Vertical pan in content units.
    pub y: f64,
}

/// Zoom/pan state of a single embedded element.
///
/// The offset is kept in container-relative pixels, pre-division by scale:
/// a positive offset moves the content towards the top-left. The zoom factor is
/// the user-applied multiplier on top of the fit scale
/// ([`ZoomTransform::initial_zoom_factor`]).
///
/// ```rust
/// use kurbo::Point;
/// use understory_view2d::ZoomTransform;
///
/// let mut t = ZoomTransform::new(0.5, 5.0);
/// let applied = t.scale_around_point(2.0, Point::new(50.0, 50.0));
/// assert_eq!(applied, 2.0);
/// assert_eq!(t.zoom_factor(), 2.0);
/// // The anchor stays put: content under (50, 50) is unchanged.
/// assert_eq!(t.content_point_at(Point::new(50.0, 50.0)), Point::new(50.0, 50.0));
/// ```
#[derive(Clone, Debug)]
pub struct ZoomTransform {
    offset: Vec2,
    initial_offset: Vec2,
    zoom_factor: f64,
    initial_zoom_factor: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl ZoomTransform {
    /// Creates a transform at zoom factor `1.0`, fit scale `1.0` and zero offset.
    ///
    /// The limits are normalized so that `min_zoom <= max_zoom`.
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        let mut t = Self {
            offset: Vec2::ZERO,
            initial_offset: Vec2::ZERO,
            zoom_factor: 1.0,
            initial_zoom_factor: 1.0,
            min_zoom: 1.0,
            max_zoom: 1.0,
        };
        t.set_zoom_limits(min_zoom, max_zoom);
        t
    }

    /// Current offset in container pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Replaces the offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Adds `delta` to the offset.
    pub fn add_offset(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Offset the content had when it was last laid out (centered at fit scale).
    #[must_use]
    pub fn initial_offset(&self) -> Vec2 {
        self.initial_offset
    }

    /// Sets the layout offset used as the zoom-out target.
    pub fn set_initial_offset(&mut self, offset: Vec2) {
        self.initial_offset = offset;
    }

    /// User zoom multiplier.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Sets the zoom factor without clamping.
    ///
    /// Animations interpolate through this; callers are expected to settle
    /// back into `[min_zoom, max_zoom]` afterwards.
    pub fn set_zoom_factor(&mut self, zoom_factor: f64) {
        self.zoom_factor = zoom_factor;
    }

    /// Fit-to-container scale.
    #[must_use]
    pub fn initial_zoom_factor(&self) -> f64 {
        self.initial_zoom_factor
    }

    /// Sets the fit-to-container scale, treating non-finite values as `0.0`.
    pub fn set_initial_zoom_factor(&mut self, factor: f64) {
        self.initial_zoom_factor = if factor.is_finite() { factor } else { 0.0 };
    }

    /// Returns `(min_zoom, max_zoom)`.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the zoom limits, normalizing the order. The current zoom factor is
    /// left untouched; it is clamped by the next zoom operation.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
    }

    /// Scale the content is actually drawn at.
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        self.initial_zoom_factor * self.zoom_factor
    }

    /// Derived output for the host.
    ///
    /// With a zero effective scale (degenerate geometry) the pan is reported
    /// as zero instead of dividing by zero.
    #[must_use]
    pub fn update(&self) -> TransformUpdate {
        let scale = self.effective_scale();
        if scale == 0.0 || !scale.is_finite() {
            return TransformUpdate {
                scale: 0.0,
                x: 0.0,
                y: 0.0,
            };
        }
        TransformUpdate {
            scale,
            x: -self.offset.x / scale,
            y: -self.offset.y / scale,
        }
    }

    /// Whether a one-finger drag should pan the content.
    #[must_use]
    pub fn can_drag(&self, draggable_unzoomed: bool) -> bool {
        draggable_unzoomed || !is_close_to(self.zoom_factor, 1.0, CLOSE_TOLERANCE)
    }

    /// Multiplies the zoom factor by `multiplier`, clamped into the zoom limits.
    ///
    /// Returns the multiplier that was actually applied, which differs from the
    /// request when the result was clamped. Non-positive or non-finite
    /// requests are ignored and report `1.0`.
    pub fn scale_zoom_factor(&mut self, multiplier: f64) -> f64 {
        if !(multiplier.is_finite() && multiplier > 0.0) || self.zoom_factor == 0.0 {
            return 1.0;
        }
        let original = self.zoom_factor;
        self.zoom_factor = clamp(self.min_zoom, self.max_zoom, original * multiplier);
        self.zoom_factor / original
    }

    /// Zooms by `multiplier` keeping `center` (container coordinates) fixed.
    ///
    /// Returns the multiplier actually applied.
    pub fn scale_around_point(&mut self, multiplier: f64, center: Point) -> f64 {
        let applied = self.scale_zoom_factor(multiplier);
        self.offset += (center.to_vec2() + self.offset) * (applied - 1.0);
        applied
    }

    /// Zooms to an absolute zoom factor keeping `center` fixed.
    pub fn scale_to(&mut self, zoom_factor: f64, center: Point) -> f64 {
        if self.zoom_factor == 0.0 {
            return 1.0;
        }
        self.scale_around_point(zoom_factor / self.zoom_factor, center)
    }

    /// Pans by a screen-space movement `delta`.
    ///
    /// Moving the pointer right moves the content right, so the offset moves
    /// the other way. With `axis_lock` only the dominant axis of this step is
    /// applied.
    pub fn drag_by(&mut self, delta: Vec2, axis_lock: bool) {
        let delta = if !axis_lock {
            delta
        } else if delta.x.abs() > delta.y.abs() {
            Vec2::new(delta.x, 0.0)
        } else {
            Vec2::new(0.0, delta.y)
        };
        self.offset -= delta;
    }

    /// Content-space point shown at container point `view`.
    #[must_use]
    pub fn content_point_at(&self, view: Point) -> Point {
        let scale = self.effective_scale();
        let scale = if scale == 0.0 { 1.0 } else { scale };
        ((view.to_vec2() + self.offset) / scale).to_point()
    }

    /// Container point that stays fixed when zooming back to a zoom factor of `1.0`
    /// and the initial offset.
    ///
    /// Falls back to the container center when the zoom factor is already
    /// (close to) `1.0`, where the fixed point is undefined.
    #[must_use]
    pub fn current_zoom_center(&self, container: Size) -> Point {
        let k = 1.0 / self.zoom_factor;
        if !k.is_finite() || is_close_to(k, 1.0, 1e-9) {
            return Point::new(container.width / 2.0, container.height / 2.0);
        }
        (-self.offset - (self.offset - self.initial_offset) / (k - 1.0)).to_point()
    }

    /// Clamps the offset into the containment range for the current scale.
    pub fn sanitize(&mut self, containment: &Containment) {
        self.offset = self.sanitized_offset(containment);
    }

    /// The offset clamped into the containment range, without applying it.
    #[must_use]
    pub fn sanitized_offset(&self, containment: &Containment) -> Vec2 {
        containment.sanitize_offset(self.offset, self.effective_scale())
    }

    /// Returns `true` if sanitizing would move the offset.
    #[must_use]
    pub fn is_out_of_bounds(&self, containment: &Containment) -> bool {
        self.sanitized_offset(containment) != self.offset
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::new(0.5, 5.0)
    }
}
