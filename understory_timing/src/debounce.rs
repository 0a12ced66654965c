// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce timer and per-frame request coalescing.

/// A cancelable timer that fires once, `delay_ms` after the last [`Debounce::arm`].
///
/// The timer does not schedule anything itself. Hosts ask for a wake-up at
/// [`Debounce::deadline`] and call [`Debounce::fire_if_due`] when it arrives.
///
/// ```
/// use understory_timing::Debounce;
///
/// let mut settle = Debounce::new(100);
/// settle.arm(1_000);
/// settle.arm(1_050); // re-arming pushes the deadline out
/// assert!(!settle.fire_if_due(1_120));
/// assert!(settle.fire_if_due(1_150));
/// assert!(!settle.fire_if_due(1_200)); // fires only once
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Configured delay.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay used by subsequent [`Debounce::arm`] calls.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// (Re)starts the timer from `now_ms` and returns the new deadline.
    pub fn arm(&mut self, now_ms: u64) -> u64 {
        let deadline = now_ms.saturating_add(self.delay_ms);
        self.deadline = Some(deadline);
        deadline
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Pending deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` and disarms if the deadline has been reached.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Coalesces repeated requests into at most one delivery per frame.
///
/// [`FrameCoalescer::request`] reports whether a frame needs to be requested
/// from the host; [`FrameCoalescer::take`] is called on that frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    /// Creates a coalescer with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Marks a delivery as wanted. Returns `true` only for the first request
    /// since the last [`FrameCoalescer::take`].
    pub fn request(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Clears and returns the pending flag.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Returns `true` if a delivery is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
