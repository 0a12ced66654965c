// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pointer input: one sample type for touch and mouse.
//!
//! Host adapters translate platform events into [`PointerSample`]s:
//!
//! - Each touch point becomes a sample with its own [`PointerId`].
//! - A mouse button press/drag/release becomes a sample with
//!   [`PointerId::MOUSE`]; mouse moves without a pressed button are fed as
//!   [`PointerPhase::Move`] and are ignored by [`TouchSet`] because the mouse
//!   is not down.
//!
//! [`TouchSet`] keeps the currently pressed pointers in press order, which is
//! what gesture code needs to count fingers and pair up pinch points.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::pointer::{PointerId, PointerPhase, PointerSample, TouchChange, TouchSet};
//!
//! let mut touches = TouchSet::new();
//! let a = PointerSample::new(PointerId(1), Point::new(10.0, 10.0), PointerPhase::Down);
//! let b = PointerSample::new(PointerId(2), Point::new(50.0, 10.0), PointerPhase::Down);
//! assert_eq!(touches.apply(&a), TouchChange::Started);
//! assert_eq!(touches.apply(&b), TouchChange::Started);
//! assert_eq!(touches.len(), 2);
//!
//! // Hover-style moves for pointers that are not down are ignored.
//! let hover = PointerSample::mouse(Point::new(0.0, 0.0), PointerPhase::Move);
//! assert_eq!(touches.apply(&hover), TouchChange::Ignored);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Identifies one pointer (a finger, or the mouse) for the lifetime of a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Reserved id for the primary mouse button.
    pub const MOUSE: Self = Self(u64::MAX);
}

/// Lifecycle phase of a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer was pressed.
    Down,
    /// The pointer moved.
    Move,
    /// The pointer was released.
    Up,
    /// The platform cancelled the pointer.
    Cancel,
}

/// One normalized input sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Which pointer this sample belongs to.
    pub id: PointerId,
    /// Position in page coordinates.
    pub position: Point,
    /// Lifecycle phase.
    pub phase: PointerPhase,
}

impl PointerSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(id: PointerId, position: Point, phase: PointerPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }

    /// Creates a primary-mouse-button sample.
    #[must_use]
    pub fn mouse(position: Point, phase: PointerPhase) -> Self {
        Self::new(PointerId::MOUSE, position, phase)
    }
}

/// Effect of applying a sample to a [`TouchSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchChange {
    /// A new pointer went down.
    Started,
    /// A pressed pointer moved (or was pressed again).
    Moved,
    /// A pressed pointer was released or cancelled.
    Ended,
    /// The sample referred to a pointer that is not down.
    Ignored,
}

/// The set of currently pressed pointers, in press order.
#[derive(Clone, Debug, Default)]
pub struct TouchSet {
    touches: SmallVec<[(PointerId, Point); 4]>,
}

impl TouchSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one sample and reports how the set changed.
    pub fn apply(&mut self, sample: &PointerSample) -> TouchChange {
        let index = self.touches.iter().position(|(id, _)| *id == sample.id);
        match (sample.phase, index) {
            (PointerPhase::Down, None) => {
                self.touches.push((sample.id, sample.position));
                TouchChange::Started
            }
            (PointerPhase::Down | PointerPhase::Move, Some(i)) => {
                self.touches[i].1 = sample.position;
                TouchChange::Moved
            }
            (PointerPhase::Up | PointerPhase::Cancel, Some(i)) => {
                self.touches.remove(i);
                TouchChange::Ended
            }
            (PointerPhase::Move | PointerPhase::Up | PointerPhase::Cancel, None) => {
                TouchChange::Ignored
            }
        }
    }

    /// Number of pressed pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    /// Returns `true` if no pointer is pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// Positions of the pressed pointers, in press order.
    #[must_use]
    pub fn positions(&self) -> SmallVec<[Point; 4]> {
        self.touches.iter().map(|(_, p)| *p).collect()
    }

    /// Position of the earliest pressed pointer.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.touches.first().map(|(_, p)| *p)
    }

    /// Releases every pointer.
    pub fn clear(&mut self) {
        self.touches.clear();
    }
}
