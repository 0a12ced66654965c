// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for pointer interactions
//! that require stateful tracking across multiple events. Each module handles a
//! specific pattern:
//!
//! - [`pointer`]: Normalize touch and mouse input into one [`pointer::PointerSample`]
//!   type and track the set of pressed pointers
//! - [`drag`]: Track drag operations with per-sample deltas and release velocity
//! - [`tap`]: Recognize double taps from touch-start timing
//! - [`click_guard`]: Suppress the synthetic click that follows a drag or tap
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Clock-free**: Times are `u64` milliseconds passed in by the caller
//! - **Input-source agnostic**: Gesture code consumes [`pointer::PointerSample`]s
//!   and never special-cases touch versus mouse
//!
//! The crate does not assume any particular UI framework or event system.
//! Hosts translate their native events into samples; higher-level crates such
//! as `understory_pinch_zoom` combine these managers into gesture recognizers.
//!
//! ## Usage Patterns
//!
//! ### Touch tracking
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::pointer::{PointerId, PointerPhase, PointerSample, TouchSet};
//!
//! let mut touches = TouchSet::new();
//! touches.apply(&PointerSample::new(PointerId(7), Point::new(4.0, 4.0), PointerPhase::Down));
//! assert_eq!(touches.len(), 1);
//! touches.apply(&PointerSample::new(PointerId(7), Point::new(4.0, 4.0), PointerPhase::Up));
//! assert!(touches.is_empty());
//! ```
//!
//! ### Drag Operations
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.update(Point::new(10.0, 10.0));
//! let delta = drag.update(Point::new(15.0, 12.0));
//! assert_eq!(delta, Some(Vec2::new(5.0, 2.0)));
//! ```
//!
//! ### Double taps and click suppression
//!
//! ```rust
//! use understory_event_state::click_guard::ClickGuard;
//! use understory_event_state::tap::DoubleTapDetector;
//!
//! let mut taps = DoubleTapDetector::new(300);
//! let mut guard = ClickGuard::default();
//! taps.on_touch_start(0, 1);
//! if taps.on_touch_start(200, 1) {
//!     guard.arm(200, 300);
//! }
//! assert!(guard.take(260));
//! ```
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

pub mod click_guard;
pub mod drag;
pub mod pointer;
pub mod tap;
