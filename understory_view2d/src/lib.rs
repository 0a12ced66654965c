// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view2d --heading-base-level=0

//! Understory View 2D: zoom/pan transform state for an embedded element.
//!
//! This crate provides a small, headless model of an element that is wrapped
//! in a fixed container and can be zoomed and panned inside it. It focuses on:
//! - Geometry helpers for gesture math (distance, pinch scale, centroid).
//! - [`ZoomTransform`]: offset + zoom factor, anchored zoom and drag offsets.
//! - [`Containment`]: the allowed offset range for a container/content pair,
//!   with optional padding past the container edges.
//! - [`TransformUpdate`]: the `{ scale, x, y }` output handed to renderers.
//!
//! It does **not** interpret input or run animations. Gesture recognition,
//! inertia and settle animations live in `understory_pinch_zoom`, which is
//! built on top of this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_view2d::{Containment, ZoomTransform};
//!
//! // A 400x300 image in a 200x150 container fits at half scale.
//! let containment = Containment::new(Size::new(200.0, 150.0), Size::new(400.0, 300.0));
//! let mut t = ZoomTransform::new(0.5, 5.0);
//! t.set_initial_zoom_factor(containment.fit_scale());
//!
//! // Pinch-zoom by 2x around the container center, then drag.
//! t.scale_around_point(2.0, Point::new(100.0, 75.0));
//! t.drag_by(Vec2::new(-30.0, 0.0), false);
//! t.sanitize(&containment);
//!
//! let update = t.update();
//! assert_eq!(update.scale, 1.0);
//! ```
//!
//! ## Coordinate conventions
//!
//! - The offset lives in container-relative pixels; a positive offset shows
//!   content further right/down.
//! - Dragging the pointer right by `d` subtracts `d` from the offset.
//! - The reported pan is `-offset / scale`, i.e. content-space units.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod geometry;
mod transform;

pub use bounds::{Containment, OffsetRange};
pub use geometry::{
    CLOSE_TOLERANCE, centroid, clamp, distance, is_close_to, pinch_scale, velocity,
};
pub use transform::{TransformUpdate, ZoomTransform};
