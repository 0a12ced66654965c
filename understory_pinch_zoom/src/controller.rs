// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use understory_event_state::pointer::{PointerSample, TouchChange, TouchSet};
use understory_timing::{Animator, Debounce, Easing, FrameCoalescer, Tick};
use understory_view2d::{CLOSE_TOLERANCE, Containment, TransformUpdate, ZoomTransform, clamp};

use crate::config::{ConfigError, PinchZoomConfig};
use crate::gesture::{
    GestureEffect, GestureEnv, GestureInterpreter, Interaction, TouchFrame, TouchPhase,
};
use crate::host::{GestureNotice, HostSurface};
use crate::inertia::Inertia;
use crate::input::{WheelSample, wheel_zoom_target};

/// Target of [`PinchZoom::scale_to`] and [`PinchZoom::align_center`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleToOptions {
    /// Horizontal anchor, in container pixels at zoom factor `1.0`.
    pub x: f64,
    /// Vertical anchor, in container pixels at zoom factor `1.0`.
    pub y: f64,
    /// Target zoom factor; clamped into the configured limits.
    pub scale: f64,
    /// Interpolate to the target instead of jumping.
    pub animated: bool,
    /// Animation duration.
    pub duration_ms: u64,
}

impl ScaleToOptions {
    /// An animated move to zoom factor `scale` anchored at `(x, y)`, with the
    /// default 250ms duration.
    #[must_use]
    pub fn new(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x,
            y,
            scale,
            animated: true,
            duration_ms: 250,
        }
    }

    /// Sets whether the move is animated.
    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Sets the animation duration.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// What an animation session interpolates.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    /// Zoom factor `from -> to`, keeping `center` fixed.
    ZoomTo { from: f64, to: f64, center: Point },
    /// Offset `from -> to` at a constant zoom factor.
    OffsetTo { from: Vec2, to: Vec2 },
    /// Zoom factor and offset together; the offset is kept in bounds.
    Transition {
        from_zoom: f64,
        to_zoom: f64,
        from_offset: Vec2,
        to_offset: Vec2,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct AnimationPayload {
    motion: Motion,
    settle_on_complete: bool,
}

fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    if progress >= 1.0 {
        to
    } else {
        from + (to - from) * progress
    }
}

fn lerp_vec(from: Vec2, to: Vec2, progress: f64) -> Vec2 {
    Vec2::new(
        lerp(from.x, to.x, progress),
        lerp(from.y, to.y, progress),
    )
}

/// Pinch-zoom/pan controller for one embedded element.
///
/// The controller is driven entirely by the host: input samples and frame
/// callbacks come in with a millisecond timestamp, and geometry, transform
/// updates and scheduling requests go out through a [`HostSurface`].
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use understory_pinch_zoom::{
///     HostSurface, PinchZoom, PinchZoomConfig, PointerSample, ScaleToOptions, TransformUpdate,
/// };
/// use understory_pinch_zoom::pointer::PointerPhase;
///
/// #[derive(Default)]
/// struct Host {
///     last: Option<TransformUpdate>,
///     frame_requested: bool,
/// }
///
/// impl HostSurface for Host {
///     fn container_rect(&self) -> Rect {
///         Rect::new(0.0, 0.0, 400.0, 300.0)
///     }
///     fn content_size(&self) -> Size {
///         Size::new(800.0, 600.0)
///     }
///     fn on_update(&mut self, update: TransformUpdate) {
///         self.last = Some(update);
///     }
///     fn request_frame(&mut self) {
///         self.frame_requested = true;
///     }
/// }
///
/// let mut host = Host::default();
/// let mut zoom = PinchZoom::new(PinchZoomConfig::default());
/// zoom.attach(&mut host);
/// assert_eq!(host.last.map(|u| u.scale), Some(0.5));
///
/// zoom.scale_to(&mut host, ScaleToOptions::new(200.0, 150.0, 2.0).with_animated(false), 0);
/// assert_eq!(zoom.zoom_factor(), 2.0);
///
/// // A mouse press with no movement is not a gesture.
/// zoom.handle_pointer(&mut host, PointerSample::mouse(Point::new(10.0, 10.0), PointerPhase::Down), 16);
/// assert!(!zoom.should_suppress_click(20));
/// ```
#[derive(Clone, Debug)]
pub struct PinchZoom {
    config: PinchZoomConfig,
    transform: ZoomTransform,
    containment: Containment,
    gestures: GestureInterpreter,
    touches: TouchSet,
    animator: Animator<AnimationPayload>,
    inertia: Option<Inertia>,
    wheel_settle: Debounce,
    update: FrameCoalescer,
    attached: bool,
    offsets_set: bool,
}

impl PinchZoom {
    /// Creates a detached controller. The configuration is used as given.
    #[must_use]
    pub fn new(config: PinchZoomConfig) -> Self {
        Self {
            transform: ZoomTransform::new(config.min_zoom, config.max_zoom),
            containment: Containment::default().with_padding(
                config.horizontal_padding,
                config.vertical_padding,
            ),
            gestures: GestureInterpreter::new(config.double_tap_window_ms),
            touches: TouchSet::new(),
            animator: Animator::new(),
            inertia: None,
            wheel_settle: Debounce::new(config.wheel_settle_delay_ms),
            update: FrameCoalescer::new(),
            attached: false,
            offsets_set: false,
            config,
        }
    }

    /// Creates a detached controller after validating `config`.
    pub fn try_new(config: PinchZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PinchZoomConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The current zoom factor is not clamped to new limits until the next
    /// zoom operation or [`PinchZoom::settle`]. Disabling input drops any
    /// gesture in progress.
    pub fn set_config(&mut self, config: PinchZoomConfig) {
        if self.config.enabled && !config.enabled {
            self.touches.clear();
            self.gestures.reset();
        }
        self.transform
            .set_zoom_limits(config.min_zoom, config.max_zoom);
        self.containment = self
            .containment
            .with_padding(config.horizontal_padding, config.vertical_padding);
        self.gestures
            .set_double_tap_window_ms(config.double_tap_window_ms);
        self.wheel_settle.set_delay_ms(config.wheel_settle_delay_ms);
        self.config = config;
    }

    /// Binds to the host's geometry: computes the fit scale, centers the
    /// content at zoom factor `1.0` and emits the first update.
    pub fn attach<H: HostSurface + ?Sized>(&mut self, host: &mut H) {
        self.attached = true;
        self.measure(host);
        let fit = self.transform.initial_zoom_factor();
        let offset = self.containment.centered_offset(fit);
        self.transform.set_zoom_factor(1.0);
        self.transform.set_initial_offset(offset);
        self.transform.set_offset(offset);
        self.offsets_set = true;
        log::debug!("attached: fit scale {fit}, initial offset {offset:?}");
        host.on_update(self.transform.update());
    }

    /// Recomputes the fit scale and bounds after the container or content
    /// changed size.
    ///
    /// Offsets are re-centered unless `set_offsets_once` is set and they were
    /// already initialized. Gestures and animations in progress continue.
    pub fn on_resize<H: HostSurface + ?Sized>(&mut self, host: &mut H) {
        if !self.attached {
            return;
        }
        self.measure(host);
        if !(self.config.set_offsets_once && self.offsets_set) {
            let fit = self.transform.initial_zoom_factor();
            self.transform
                .set_initial_offset(self.containment.centered_offset(fit));
            self.transform.set_offset(
                self.containment
                    .centered_offset(self.transform.effective_scale()),
            );
            self.offsets_set = true;
        }
        self.transform.sanitize(&self.containment);
        log::debug!(
            "resized: fit scale {}, offset {:?}",
            self.transform.initial_zoom_factor(),
            self.transform.offset()
        );
        self.request_update(host);
    }

    fn measure<H: HostSurface + ?Sized>(&mut self, host: &H) {
        self.containment = Containment::new(host.container_rect().size(), host.content_size())
            .with_padding(self.config.horizontal_padding, self.config.vertical_padding);
        if self.containment.is_degenerate() {
            log::warn!(
                "degenerate geometry: container {:?}, content {:?}",
                self.containment.container(),
                self.containment.content()
            );
        }
        self.transform
            .set_initial_zoom_factor(self.containment.fit_scale());
    }

    /// Stops animations, inertia and the wheel timer and forgets all input.
    pub fn detach(&mut self) {
        self.stop_animation();
        self.wheel_settle.cancel();
        self.update.take();
        self.touches.clear();
        self.gestures.reset();
        self.attached = false;
        log::debug!("detached");
    }

    /// Feeds one pointer sample (touch point or mouse button) in page
    /// coordinates.
    ///
    /// Returns `true` if the host should cancel the platform default action
    /// (scrolling, text selection) for this event.
    pub fn handle_pointer<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        sample: PointerSample,
        now_ms: u64,
    ) -> bool {
        self.handle_pointers(host, &[sample], now_ms)
    }

    /// Feeds every pointer sample of one platform event, e.g. all changed
    /// touches of a touch event.
    ///
    /// Presses are interpreted before releases; moves are only interpreted
    /// when the event neither pressed nor released a pointer.
    pub fn handle_pointers<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        samples: &[PointerSample],
        now_ms: u64,
    ) -> bool {
        if !self.attached || !self.config.enabled {
            return false;
        }
        let (mut started, mut ended, mut moved) = (false, false, false);
        for sample in samples {
            match self.touches.apply(sample) {
                TouchChange::Started => started = true,
                TouchChange::Ended => ended = true,
                TouchChange::Moved => moved = true,
                TouchChange::Ignored => {}
            }
        }
        let mut cancel = false;
        if started {
            cancel |= self.interpret(host, TouchPhase::Start, now_ms);
        }
        if ended {
            cancel |= self.interpret(host, TouchPhase::End, now_ms);
        }
        if moved && !started && !ended {
            cancel |= self.interpret(host, TouchPhase::Move, now_ms);
        }
        cancel
    }

    /// Page-coordinate position of the container's top-left corner.
    fn container_origin<H: HostSurface + ?Sized>(host: &H) -> Vec2 {
        host.scroll_offset() + host.container_rect().origin().to_vec2()
    }

    fn interpret<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        phase: TouchPhase,
        now_ms: u64,
    ) -> bool {
        let origin = Self::container_origin(host);
        let touches: SmallVec<[Point; 4]> = self
            .touches
            .positions()
            .into_iter()
            .map(|p| p - origin)
            .collect();
        let env = GestureEnv {
            can_drag: self.transform.can_drag(self.config.draggable_unzoomed),
            click_suppress_ms: self.config.click_suppress_ms,
        };
        let effects = self
            .gestures
            .handle(&TouchFrame::new(phase, &touches, now_ms), env);
        let mut cancel = false;
        for effect in effects {
            cancel |= self.apply_effect(host, effect, now_ms);
        }
        cancel
    }

    fn apply_effect<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        effect: GestureEffect,
        now_ms: u64,
    ) -> bool {
        match effect {
            GestureEffect::CancelDefault => return true,
            GestureEffect::DragStart => {
                self.stop_animation();
                host.on_gesture(GestureNotice::DragStart);
            }
            GestureEffect::DragMove { delta } => {
                self.transform.drag_by(delta, self.config.lock_drag_axis);
                self.transform.sanitize(&self.containment);
                self.request_update(host);
                host.on_gesture(GestureNotice::DragUpdate);
            }
            GestureEffect::DragEnd { velocity } => {
                host.on_gesture(GestureNotice::DragEnd);
                let inertia = velocity
                    .filter(|_| self.config.inertia)
                    .and_then(|v| Inertia::new(v, self.config.inertia_friction));
                match inertia {
                    Some(inertia) => {
                        self.stop_animation();
                        log::debug!("inertia from {:?}", inertia.velocity());
                        self.inertia = Some(inertia);
                        host.request_frame();
                    }
                    None => self.settle(host, now_ms),
                }
            }
            GestureEffect::ZoomStart => {
                self.stop_animation();
                host.on_gesture(GestureNotice::ZoomStart);
            }
            GestureEffect::ZoomMove { scale, center, pan } => {
                self.transform.scale_around_point(scale, center);
                if let Some(pan) = pan {
                    self.transform.drag_by(pan, self.config.lock_drag_axis);
                }
                self.request_update(host);
                host.on_gesture(GestureNotice::ZoomUpdate);
            }
            GestureEffect::ZoomEnd => {
                host.on_gesture(GestureNotice::ZoomEnd);
                self.settle(host, now_ms);
            }
            GestureEffect::DoubleTap { at } => {
                host.on_gesture(GestureNotice::DoubleTap);
                self.double_tap(host, at, now_ms);
            }
        }
        false
    }

    /// Zoom factor the content will rest at once the current zoom animation
    /// (if any) completes.
    fn resting_zoom(&self) -> f64 {
        match self.animator.payload().map(|p| p.motion) {
            Some(Motion::ZoomTo { to, .. }) => to,
            Some(Motion::Transition { to_zoom, .. }) => to_zoom,
            _ => self.transform.zoom_factor(),
        }
    }

    fn double_tap<H: HostSurface + ?Sized>(&mut self, host: &mut H, at: Point, now_ms: u64) {
        if self.config.tap_zoom_factor <= 0.0 {
            return;
        }
        let (min_zoom, max_zoom) = self.transform.zoom_limits();
        let tap_zoom = self.config.tap_zoom_factor;
        let resting = self.resting_zoom();
        let from = self.transform.zoom_factor();
        // At or past one tap step above 1, the tap zooms back out.
        let zoom_back = resting >= (1.0 + tap_zoom).min(max_zoom) - CLOSE_TOLERANCE;
        let (to, center) = if zoom_back {
            (
                clamp(min_zoom, max_zoom, 1.0),
                self.transform
                    .current_zoom_center(self.containment.container()),
            )
        } else {
            ((resting + tap_zoom).min(max_zoom), at)
        };
        log::debug!("double tap at {at:?}: zoom {from} -> {to}");
        self.start_animation(
            host,
            now_ms,
            self.config.animation_duration_ms,
            AnimationPayload {
                motion: Motion::ZoomTo { from, to, center },
                settle_on_complete: true,
            },
        );
    }

    /// Handles a wheel event. Returns `true` if the event was turned into a
    /// zoom and the host should cancel its default action.
    ///
    /// The zoom is applied immediately; a settle runs once no wheel event has
    /// arrived for `wheel_settle_delay_ms`.
    pub fn handle_wheel<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        sample: &WheelSample,
        now_ms: u64,
    ) -> bool {
        if !self.attached || !self.config.enabled || !(self.config.wheel_filter)(sample) {
            return false;
        }
        self.stop_animation();
        let (min_zoom, max_zoom) = self.transform.zoom_limits();
        let target = clamp(
            min_zoom,
            max_zoom,
            wheel_zoom_target(self.transform.zoom_factor(), sample, &self.config),
        );
        let center = sample.position - Self::container_origin(host);
        self.transform.scale_to(target, center);
        self.request_update(host);
        let deadline = self.wheel_settle.arm(now_ms);
        host.request_wakeup(deadline);
        true
    }

    /// Consumes the click-suppression token left by a drag or double tap.
    ///
    /// Hosts call this from their click handler and swallow the click when it
    /// returns `true`.
    pub fn should_suppress_click(&mut self, now_ms: u64) -> bool {
        self.gestures.take_click_suppression(now_ms)
    }

    /// Advances timers, the current animation or inertia, and flushes a
    /// pending update. Call whenever a requested frame or wakeup arrives.
    pub fn on_frame<H: HostSurface + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        if self.wheel_settle.fire_if_due(now_ms) {
            log::debug!("wheel idle, settling");
            self.settle(host, now_ms);
        }

        // Animation and inertia frames move the transform themselves; a pending
        // input update is folded into the same emission.
        let mut moved = false;
        if let Some(token) = self.animator.current() {
            match self.animator.tick(token, now_ms) {
                Tick::Stale => {}
                Tick::Frame { progress, payload } => {
                    self.apply_motion(payload.motion, progress);
                    moved = true;
                    host.request_frame();
                }
                Tick::Finished { payload } => {
                    self.apply_motion(payload.motion, 1.0);
                    moved = true;
                    if payload.settle_on_complete {
                        self.settle(host, now_ms);
                    }
                }
            }
        } else if let Some(inertia) = self.inertia.as_mut() {
            match inertia.step() {
                Some(velocity) => {
                    let before = self.transform.offset();
                    self.transform.add_offset(-velocity);
                    self.transform.sanitize(&self.containment);
                    moved = true;
                    if self.transform.offset() == before {
                        self.end_inertia(host, now_ms);
                    } else {
                        host.request_frame();
                    }
                }
                None => self.end_inertia(host, now_ms),
            }
        }

        if self.update.take() || moved {
            host.on_update(self.transform.update());
        }
        if let Some(deadline) = self.wheel_settle.deadline() {
            host.request_wakeup(deadline);
        }
    }

    fn end_inertia<H: HostSurface + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        log::debug!("inertia finished at {:?}", self.transform.offset());
        self.inertia = None;
        self.settle(host, now_ms);
    }

    fn apply_motion(&mut self, motion: Motion, progress: f64) {
        match motion {
            Motion::ZoomTo { from, to, center } => {
                self.transform.scale_to(lerp(from, to, progress), center);
                if progress >= 1.0 {
                    self.transform.set_zoom_factor(to);
                }
            }
            Motion::OffsetTo { from, to } => {
                self.transform.set_offset(lerp_vec(from, to, progress));
            }
            Motion::Transition {
                from_zoom,
                to_zoom,
                from_offset,
                to_offset,
            } => {
                self.transform
                    .set_zoom_factor(lerp(from_zoom, to_zoom, progress));
                self.transform
                    .set_offset(lerp_vec(from_offset, to_offset, progress));
                self.transform.sanitize(&self.containment);
            }
        }
    }

    fn start_animation<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        now_ms: u64,
        duration_ms: u64,
        payload: AnimationPayload,
    ) {
        self.inertia = None;
        let token = self
            .animator
            .start(now_ms, duration_ms, Easing::Swing, payload);
        log::debug!("animation {token:?}: {:?}", payload.motion);
        host.request_frame();
    }

    /// Stops the current animation and any inertia, leaving the transform
    /// where it is.
    pub fn stop_animation(&mut self) {
        self.animator.stop();
        self.inertia = None;
    }

    /// Corrects the transform after an interaction.
    ///
    /// A zoom factor below `zoom_out_factor` animates back to `1.0` around the
    /// current zoom center. Otherwise a zoom factor outside the limits is
    /// animated back inside them, and an offset outside the bounds is
    /// animated back into them.
    pub fn settle<H: HostSurface + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        let (min_zoom, max_zoom) = self.transform.zoom_limits();
        let zoom = self.transform.zoom_factor();
        let (target, center) = if zoom < self.config.zoom_out_factor {
            (
                clamp(min_zoom, max_zoom, 1.0),
                self.transform
                    .current_zoom_center(self.containment.container()),
            )
        } else {
            let container = self.containment.container();
            (
                clamp(min_zoom, max_zoom, zoom),
                Point::new(container.width / 2.0, container.height / 2.0),
            )
        };
        let duration = self.config.animation_duration_ms;
        if zoom != target {
            log::debug!("settle: zoom {zoom} -> {target}");
            self.start_animation(
                host,
                now_ms,
                duration,
                AnimationPayload {
                    motion: Motion::ZoomTo {
                        from: zoom,
                        to: target,
                        center,
                    },
                    settle_on_complete: true,
                },
            );
        } else if self.transform.is_out_of_bounds(&self.containment) {
            let from = self.transform.offset();
            let to = self.transform.sanitized_offset(&self.containment);
            log::debug!("settle: offset {from:?} -> {to:?}");
            self.start_animation(
                host,
                now_ms,
                duration,
                AnimationPayload {
                    motion: Motion::OffsetTo { from, to },
                    settle_on_complete: false,
                },
            );
        }
    }

    /// Moves to zoom factor `options.scale` so that the content point shown at
    /// `(options.x, options.y)` at zoom factor `1.0` (with no pan) stays under
    /// that container point.
    pub fn scale_to<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        options: ScaleToOptions,
        now_ms: u64,
    ) {
        let start = (self.transform.zoom_factor(), self.transform.offset());
        self.transform.set_zoom_factor(1.0);
        self.transform.set_offset(Vec2::ZERO);
        self.transform
            .scale_to(options.scale, Point::new(options.x, options.y));
        self.move_to_target(host, start, options, now_ms);
    }

    /// Moves to zoom factor `options.scale` with the content point at
    /// `(options.x, options.y)` (container pixels at zoom factor `1.0`)
    /// centered in the container.
    pub fn align_center<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        options: ScaleToOptions,
        now_ms: u64,
    ) {
        let start = (self.transform.zoom_factor(), self.transform.offset());
        let container = self.containment.container();
        let center = Point::new(container.width / 2.0, container.height / 2.0);
        self.transform.set_zoom_factor(1.0);
        self.transform
            .set_offset(Point::new(options.x, options.y) - center);
        self.transform.scale_to(options.scale, center);
        self.move_to_target(host, start, options, now_ms);
    }

    /// The transform currently holds the target; restore `start` and animate
    /// towards it, or keep it and report it.
    fn move_to_target<H: HostSurface + ?Sized>(
        &mut self,
        host: &mut H,
        (from_zoom, from_offset): (f64, Vec2),
        options: ScaleToOptions,
        now_ms: u64,
    ) {
        self.stop_animation();
        if !options.animated {
            self.request_update(host);
            return;
        }
        let (to_zoom, to_offset) = (self.transform.zoom_factor(), self.transform.offset());
        self.transform.set_zoom_factor(from_zoom);
        self.transform.set_offset(from_offset);
        self.start_animation(
            host,
            now_ms,
            options.duration_ms,
            AnimationPayload {
                motion: Motion::Transition {
                    from_zoom,
                    to_zoom,
                    from_offset,
                    to_offset,
                },
                settle_on_complete: true,
            },
        );
    }

    fn request_update<H: HostSurface + ?Sized>(&mut self, host: &mut H) {
        if self.update.request() {
            host.request_frame();
        }
    }

    /// Current interaction.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.gestures.interaction()
    }

    /// Current user zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.transform.zoom_factor()
    }

    /// Current offset in container pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset()
    }

    /// Full transform state.
    #[must_use]
    pub fn transform(&self) -> &ZoomTransform {
        &self.transform
    }

    /// Bounds derived from the last measured geometry.
    #[must_use]
    pub fn containment(&self) -> &Containment {
        &self.containment
    }

    /// The update the host would receive now.
    #[must_use]
    pub fn current_update(&self) -> TransformUpdate {
        self.transform.update()
    }

    /// Returns `true` while an animation or inertia is moving the content.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running() || self.inertia.is_some()
    }

    /// Returns `true` if the offset lies outside the containment bounds.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        self.transform.is_out_of_bounds(&self.containment)
    }
}
