// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic frame animation and timer primitives.
//!
//! UI runtimes usually offer two scheduling primitives: "call me on the next
//! display frame" and "call me after a delay". This crate models what runs on
//! top of them without owning a clock or an event loop:
//!
//! - [`Animator`]: one current animation session at a time, advanced by the
//!   host's frame callback. Every session carries a [`SessionToken`]; frames
//!   for superseded sessions report [`Tick::Stale`] instead of sharing a
//!   single stop flag.
//! - [`Easing`] / [`swing`]: progress curves applied to intermediate frames.
//! - [`Debounce`]: a trailing-edge timer that fires once after the last arm.
//! - [`FrameCoalescer`]: collapses repeated "something changed" requests into
//!   one delivery per frame.
//!
//! Times are plain `u64` milliseconds supplied by the caller, so the same code
//! runs under `requestAnimationFrame`, winit redraws, or a test loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::{Animator, Easing, Tick};
//!
//! let mut zoom = 1.0_f64;
//! let mut animator = Animator::new();
//! let token = animator.start(0, 100, Easing::Swing, (1.0_f64, 2.0_f64));
//!
//! let mut now = 0;
//! loop {
//!     now += 16;
//!     match animator.tick(token, now) {
//!         Tick::Stale => break,
//!         Tick::Frame { progress, payload: (from, to) } => zoom = from + (to - from) * progress,
//!         Tick::Finished { payload: (_, to) } => {
//!             zoom = to;
//!             break;
//!         }
//!     }
//! }
//! assert_eq!(zoom, 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod debounce;
mod easing;

pub use animation::{Animator, SessionToken, Tick};
pub use debounce::{Debounce, FrameCoalescer};
pub use easing::{Easing, swing};
