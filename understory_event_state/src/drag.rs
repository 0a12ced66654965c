// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker: per-sample movement deltas plus the last-step velocity used
//! for inertia.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::reset`] when a drag gesture begins.
//! 2) On each move sample, call [`DragTracker::update`]. The first sample after
//!    a reset only records the position; later samples return the movement
//!    since the previous one.
//! 3) On release, [`DragTracker::finish`] returns the velocity of the last
//!    step (movement per sample) and resets the tracker.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! assert_eq!(drag.update(Point::new(10.0, 20.0)), None);
//! assert_eq!(drag.update(Point::new(15.0, 22.0)), Some(Vec2::new(5.0, 2.0)));
//! assert_eq!(drag.update(Point::new(18.0, 22.0)), Some(Vec2::new(3.0, 0.0)));
//!
//! // Release: the last step is the velocity.
//! assert_eq!(drag.finish(), Some(Vec2::new(3.0, 0.0)));
//! assert!(drag.last_position().is_none());
//! ```

use kurbo::{Point, Vec2};
use understory_view2d::velocity;

/// Tracks consecutive drag samples.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragTracker {
    last_pos: Option<Point>,
    velocity: Option<Vec2>,
}

impl DragTracker {
    /// Forgets the previous position and velocity.
    pub fn reset(&mut self) {
        self.last_pos = None;
        self.velocity = None;
    }

    /// Records `pos`, returning the movement since the previous sample.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.last_pos.map(|last| velocity(last, pos));
        if delta.is_some() {
            self.velocity = delta;
        }
        self.last_pos = Some(pos);
        delta
    }

    /// Last recorded position.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last_pos
    }

    /// Movement of the most recent step, if at least two samples were seen.
    #[must_use]
    pub fn velocity(&self) -> Option<Vec2> {
        self.velocity
    }

    /// Ends the drag, returning the last-step velocity.
    pub fn finish(&mut self) -> Option<Vec2> {
        let velocity = self.velocity;
        self.reset();
        velocity
    }
}
