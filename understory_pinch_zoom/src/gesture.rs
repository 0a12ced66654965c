// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch gesture interpreter: classifies touch frames into drag, pinch and
//! double-tap effects.
//!
//! The interpreter owns a [`GestureContext`] and never touches the zoom/pan
//! state itself. Each call to [`GestureInterpreter::handle`] takes one
//! [`TouchFrame`] plus a [`GestureEnv`] snapshot and returns the
//! [`GestureEffect`]s the controller should apply, in order.
//!
//! ## State machine
//!
//! | Fingers | `can_drag` | Interaction |
//! |---|---|---|
//! | 2 | any | [`Interaction::Zoom`] |
//! | 1 | `true` | [`Interaction::Drag`] |
//! | otherwise | | [`Interaction::None`] |
//!
//! Interactions are (re)classified on the first move after a touch start and
//! on every touch end. Leaving a state emits its end effect; entering one
//! emits its start effect. Re-classifying into the same state emits nothing.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_pinch_zoom::gesture::{
//!     GestureEffect, GestureEnv, GestureInterpreter, Interaction, TouchFrame, TouchPhase,
//! };
//!
//! let mut gestures = GestureInterpreter::new(300);
//! let env = GestureEnv { can_drag: true, click_suppress_ms: 300 };
//! let at = |x: f64| [Point::new(x, 10.0)];
//!
//! gestures.handle(&TouchFrame::new(TouchPhase::Start, &at(10.0), 0), env);
//! let effects = gestures.handle(&TouchFrame::new(TouchPhase::Move, &at(12.0), 16), env);
//! assert!(effects.contains(&GestureEffect::DragStart));
//! assert_eq!(gestures.interaction(), Interaction::Drag);
//!
//! let effects = gestures.handle(&TouchFrame::new(TouchPhase::Move, &at(20.0), 32), env);
//! assert!(effects.contains(&GestureEffect::DragMove { delta: Vec2::new(8.0, 0.0) }));
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use understory_event_state::click_guard::ClickGuard;
use understory_event_state::drag::DragTracker;
use understory_event_state::tap::DoubleTapDetector;
use understory_view2d::{centroid, pinch_scale};

/// Number of pinch samples discarded after a pinch starts; early samples are
/// noisy on most touch screens.
pub const DISCARDED_PINCH_SAMPLES: u32 = 3;

/// The currently recognized multi-touch gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    /// No gesture is driving the transform.
    #[default]
    None,
    /// One finger pans the content.
    Drag,
    /// Two fingers pinch-zoom (and pan) the content.
    Zoom,
}

/// Which part of a touch sequence a frame reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A pointer went down.
    Start,
    /// Pressed pointers moved.
    Move,
    /// A pointer was released or cancelled.
    End,
}

/// One touch frame: the phase and every pressed pointer after it.
#[derive(Clone, Copy, Debug)]
pub struct TouchFrame<'a> {
    /// What happened.
    pub phase: TouchPhase,
    /// Pressed pointers in container coordinates, in press order.
    pub touches: &'a [Point],
    /// Event time.
    pub now_ms: u64,
}

impl<'a> TouchFrame<'a> {
    /// Creates a frame.
    #[must_use]
    pub fn new(phase: TouchPhase, touches: &'a [Point], now_ms: u64) -> Self {
        Self {
            phase,
            touches,
            now_ms,
        }
    }
}

/// Controller state the interpreter needs but does not own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureEnv {
    /// Whether a one-finger drag would pan the content.
    pub can_drag: bool,
    /// Lifetime of the click-suppression token armed by drags and double taps.
    pub click_suppress_ms: u64,
}

/// Work the controller performs in response to a touch frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEffect {
    /// The platform default for this event should be cancelled.
    CancelDefault,
    /// A drag began: stop animations and reset inertia.
    DragStart,
    /// Pan by a screen-space movement.
    DragMove {
        /// Pointer movement since the previous sample.
        delta: Vec2,
    },
    /// The drag ended.
    DragEnd {
        /// Movement of the last drag step, for inertia.
        velocity: Option<Vec2>,
    },
    /// A pinch began: stop animations.
    ZoomStart,
    /// Zoom around `center`, then pan by `pan`.
    ZoomMove {
        /// Relative zoom since the previous applied sample.
        scale: f64,
        /// Centroid of the two touches.
        center: Point,
        /// Centroid movement since the previous sample.
        pan: Option<Vec2>,
    },
    /// The pinch ended.
    ZoomEnd,
    /// A double tap at `at` (container coordinates).
    DoubleTap {
        /// Position of the second tap.
        at: Point,
    },
}

/// Effects produced by a single frame.
pub type GestureEffects = SmallVec<[GestureEffect; 4]>;

/// Interpreter-internal state, reset at interaction boundaries.
#[derive(Clone, Debug)]
pub struct GestureContext {
    interaction: Interaction,
    fingers: usize,
    first_move: bool,
    start_touches: SmallVec<[Point; 2]>,
    last_scale: f64,
    nth_zoom: u32,
    last_zoom_center: Option<Point>,
    drag: DragTracker,
    taps: DoubleTapDetector,
    is_double_tap: bool,
    click_guard: ClickGuard,
}

impl GestureContext {
    fn new(double_tap_window_ms: u64) -> Self {
        Self {
            interaction: Interaction::None,
            fingers: 0,
            first_move: false,
            start_touches: SmallVec::new(),
            last_scale: 1.0,
            nth_zoom: 0,
            last_zoom_center: None,
            drag: DragTracker::default(),
            taps: DoubleTapDetector::new(double_tap_window_ms),
            is_double_tap: false,
            click_guard: ClickGuard::default(),
        }
    }
}

/// Touch gesture state machine.
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    ctx: GestureContext,
}

impl GestureInterpreter {
    /// Creates an idle interpreter with the given double-tap window.
    #[must_use]
    pub fn new(double_tap_window_ms: u64) -> Self {
        Self {
            ctx: GestureContext::new(double_tap_window_ms),
        }
    }

    /// Current interaction.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.ctx.interaction
    }

    /// Read-only view of the interpreter state.
    #[must_use]
    pub fn context(&self) -> &GestureContext {
        &self.ctx
    }

    /// Changes the double-tap window.
    pub fn set_double_tap_window_ms(&mut self, window_ms: u64) {
        self.ctx.taps.set_window_ms(window_ms);
    }

    /// Consumes the click-suppression token.
    pub fn take_click_suppression(&mut self, now_ms: u64) -> bool {
        self.ctx.click_guard.take(now_ms)
    }

    /// Drops all gesture state without emitting end effects.
    pub fn reset(&mut self) {
        let window = self.ctx.taps.window_ms();
        self.ctx = GestureContext::new(window);
    }

    /// Interprets one touch frame.
    pub fn handle(&mut self, frame: &TouchFrame<'_>, env: GestureEnv) -> GestureEffects {
        let mut effects = GestureEffects::new();
        match frame.phase {
            TouchPhase::Start => self.on_start(frame, env, &mut effects),
            TouchPhase::Move => self.on_move(frame, env, &mut effects),
            TouchPhase::End => {
                self.ctx.fingers = frame.touches.len();
                self.update_interaction(frame, env, &mut effects);
            }
        }
        effects
    }

    fn on_start(&mut self, frame: &TouchFrame<'_>, env: GestureEnv, effects: &mut GestureEffects) {
        let ctx = &mut self.ctx;
        ctx.first_move = true;
        ctx.fingers = frame.touches.len();
        // A new sequence means any earlier synthetic click has been delivered.
        ctx.click_guard.disarm();

        if !ctx.taps.on_touch_start(frame.now_ms, ctx.fingers) {
            ctx.is_double_tap = false;
            return;
        }
        effects.push(GestureEffect::CancelDefault);
        if ctx.interaction == Interaction::None
            && let Some(&at) = frame.touches.first()
        {
            ctx.is_double_tap = true;
            ctx.click_guard.arm(frame.now_ms, env.click_suppress_ms);
            effects.push(GestureEffect::DoubleTap { at });
        }
        self.end_interaction(frame.now_ms, env, effects);
    }

    fn on_move(&mut self, frame: &TouchFrame<'_>, env: GestureEnv, effects: &mut GestureEffects) {
        if self.ctx.is_double_tap {
            return;
        }
        if self.ctx.first_move {
            self.ctx.first_move = false;
            self.update_interaction(frame, env, effects);
            if self.ctx.interaction != Interaction::None {
                effects.push(GestureEffect::CancelDefault);
            }
            self.ctx.start_touches = frame.touches.iter().copied().collect();
            return;
        }
        match self.ctx.interaction {
            Interaction::Zoom => self.zoom_move(frame.touches, effects),
            Interaction::Drag => {
                if let Some(&touch) = frame.touches.first()
                    && let Some(delta) = self.ctx.drag.update(touch)
                {
                    effects.push(GestureEffect::DragMove { delta });
                }
            }
            Interaction::None => return,
        }
        effects.push(GestureEffect::CancelDefault);
    }

    fn zoom_move(&mut self, touches: &[Point], effects: &mut GestureEffects) {
        let ctx = &mut self.ctx;
        if ctx.start_touches.len() != 2 || touches.len() != 2 {
            return;
        }
        let Some(new_scale) = pinch_scale(&ctx.start_touches, touches) else {
            return;
        };
        let Some(center) = centroid(touches) else {
            return;
        };
        if ctx.last_scale <= 0.0 || new_scale <= 0.0 {
            return;
        }
        let scale = new_scale / ctx.last_scale;
        ctx.last_scale = new_scale;
        ctx.nth_zoom += 1;
        if ctx.nth_zoom > DISCARDED_PINCH_SAMPLES {
            effects.push(GestureEffect::ZoomMove {
                scale,
                center,
                pan: ctx.last_zoom_center.map(|last| center - last),
            });
        }
        ctx.last_zoom_center = Some(center);
    }

    fn update_interaction(
        &mut self,
        frame: &TouchFrame<'_>,
        env: GestureEnv,
        effects: &mut GestureEffects,
    ) {
        let next = match self.ctx.fingers {
            2 => Interaction::Zoom,
            1 if env.can_drag => Interaction::Drag,
            _ => Interaction::None,
        };
        if next == self.ctx.interaction {
            return;
        }
        log::debug!("interaction {:?} -> {next:?}", self.ctx.interaction);
        self.end_interaction(frame.now_ms, env, effects);
        match next {
            Interaction::Zoom => {
                let ctx = &mut self.ctx;
                ctx.nth_zoom = 0;
                ctx.last_scale = 1.0;
                ctx.last_zoom_center = None;
                effects.push(GestureEffect::ZoomStart);
            }
            Interaction::Drag => {
                let ctx = &mut self.ctx;
                ctx.drag.reset();
                if let Some(&touch) = frame.touches.first() {
                    ctx.drag.update(touch);
                }
                effects.push(GestureEffect::DragStart);
            }
            Interaction::None => {}
        }
        self.ctx.interaction = next;
    }

    fn end_interaction(&mut self, now_ms: u64, env: GestureEnv, effects: &mut GestureEffects) {
        match core::mem::take(&mut self.ctx.interaction) {
            Interaction::Zoom => effects.push(GestureEffect::ZoomEnd),
            Interaction::Drag => {
                // The release of a drag must not activate what lies under it.
                self.ctx.click_guard.arm(now_ms, env.click_suppress_ms);
                effects.push(GestureEffect::DragEnd {
                    velocity: self.ctx.drag.finish(),
                });
            }
            Interaction::None => {}
        }
    }
}

impl GestureContext {
    /// Current interaction.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Number of pressed pointers at the last start/end.
    #[must_use]
    pub fn fingers(&self) -> usize {
        self.fingers
    }

    /// Pinch samples seen since the pinch started.
    #[must_use]
    pub fn nth_zoom(&self) -> u32 {
        self.nth_zoom
    }

    /// Whether the current touch sequence was claimed by a double tap.
    #[must_use]
    pub fn is_double_tap(&self) -> bool {
        self.is_double_tap
    }
}
