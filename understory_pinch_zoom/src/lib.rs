// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pinch_zoom --heading-base-level=0

//! Understory Pinch Zoom: a headless pinch-zoom/pan gesture engine.
//!
//! [`PinchZoom`] turns touch, mouse and wheel input into a zoom/pan transform
//! for one element wrapped in a fixed container, with animated settle,
//! double-tap zoom and drag inertia. It does not render anything and does not
//! read a clock: the embedding application implements [`HostSurface`] to
//! report geometry, receive [`TransformUpdate`]s and schedule frames, and
//! passes a millisecond timestamp with every call.
//!
//! ## Pieces
//!
//! - [`gesture`]: the touch state machine (`none`, `drag`, `zoom`) returning
//!   effects instead of mutating state.
//! - [`inertia`]: post-drag momentum with per-frame friction.
//! - [`PinchZoomConfig`]: tunables, validated by [`PinchZoomConfig::validate`].
//! - [`WheelSample`] and [`WheelFilter`]: the wheel zoom path.
//! - [`PinchZoom`]: owns the transform, runs animations and settles.
//!
//! Lower layers live in their own crates and are re-exported here:
//! `understory_view2d` for transform math and bounds, `understory_timing` for
//! animation sessions and debouncing, and `understory_event_state` for
//! pointer normalization, double taps and click suppression.
//!
//! ## Driving the controller
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_pinch_zoom::pointer::{PointerId, PointerPhase, PointerSample};
//! use understory_pinch_zoom::{HostSurface, Interaction, PinchZoom, PinchZoomConfig, TransformUpdate};
//!
//! #[derive(Default)]
//! struct Host {
//!     updates: Vec<TransformUpdate>,
//!     frames: usize,
//! }
//!
//! impl HostSurface for Host {
//!     fn container_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 300.0, 300.0)
//!     }
//!     fn content_size(&self) -> Size {
//!         Size::new(300.0, 300.0)
//!     }
//!     fn on_update(&mut self, update: TransformUpdate) {
//!         self.updates.push(update);
//!     }
//!     fn request_frame(&mut self) {
//!         self.frames += 1;
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut zoom = PinchZoom::new(PinchZoomConfig::default());
//! zoom.attach(&mut host);
//!
//! let touch = |id, x, phase| PointerSample::new(PointerId(id), Point::new(x, 150.0), phase);
//! zoom.handle_pointers(&mut host, &[touch(1, 100.0, PointerPhase::Down), touch(2, 200.0, PointerPhase::Down)], 0);
//! zoom.handle_pointers(&mut host, &[touch(1, 100.0, PointerPhase::Move), touch(2, 200.0, PointerPhase::Move)], 16);
//! assert_eq!(zoom.interaction(), Interaction::Zoom);
//!
//! // Spread the fingers apart; the first samples are discarded as noise.
//! for (i, spread) in [50.0, 52.0, 54.0, 60.0, 75.0, 100.0].into_iter().enumerate() {
//!     let now = 32 + 16 * i as u64;
//!     zoom.handle_pointers(
//!         &mut host,
//!         &[touch(1, 150.0 - spread, PointerPhase::Move), touch(2, 150.0 + spread, PointerPhase::Move)],
//!         now,
//!     );
//! }
//! assert!((zoom.zoom_factor() - 100.0 / 54.0).abs() < 1e-9);
//! ```
//!
//! ## Scheduling
//!
//! Transform changes driven by input are coalesced: the controller calls
//! [`HostSurface::request_frame`] once and delivers a single update from the
//! next [`PinchZoom::on_frame`]. Animation and inertia steps are applied from
//! `on_frame` too, and each frame delivers at most one update. The wheel path
//! asks for a wakeup through [`HostSurface::request_wakeup`] to settle after
//! the wheel goes quiet.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
pub mod gesture;
mod host;
pub mod inertia;
mod input;

pub use config::{ConfigError, PinchZoomConfig};
pub use controller::{PinchZoom, ScaleToOptions};
pub use gesture::Interaction;
pub use host::{GestureNotice, HostSurface};
pub use input::{DeltaMode, Modifiers, WheelFilter, WheelSample, default_wheel_filter};

pub use understory_event_state::pointer;
pub use understory_event_state::pointer::PointerSample;
pub use understory_view2d::{Containment, TransformUpdate, ZoomTransform};
