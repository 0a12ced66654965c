// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-drag momentum.
//!
//! Velocity is the last drag step in container pixels. Each frame it is
//! multiplied by the friction and applied to the offset until both components
//! round to zero.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Vec2;

/// Decaying pan velocity released by a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertia {
    velocity: Vec2,
    friction: f64,
}

impl Inertia {
    /// Starts momentum with `velocity`, or returns `None` if there is nothing
    /// to carry (zero or non-finite velocity, or friction outside `(0, 1)`).
    #[must_use]
    pub fn new(velocity: Vec2, friction: f64) -> Option<Self> {
        if !(friction > 0.0 && friction < 1.0) || !velocity.is_finite() {
            return None;
        }
        let inertia = Self { velocity, friction };
        (!inertia.is_spent()).then_some(inertia)
    }

    /// Current velocity, in screen pixels per frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Decays the velocity by one frame and returns the screen-space movement
    /// to apply, or `None` once the motion has died out.
    pub fn step(&mut self) -> Option<Vec2> {
        self.velocity *= self.friction;
        log::trace!("inertia velocity {:?}", self.velocity);
        (!self.is_spent()).then_some(self.velocity)
    }

    fn is_spent(&self) -> bool {
        self.velocity.x.round() == 0.0 && self.velocity.y.round() == 0.0
    }
}
