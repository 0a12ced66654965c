// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition from touch-start timestamps.
//!
//! A single-finger touch start that follows the previous single-finger touch
//! start within the window is a double tap. Multi-finger starts clear the
//! history so a pinch never counts as a tap.
//!
//! ```
//! use understory_event_state::tap::DoubleTapDetector;
//!
//! let mut taps = DoubleTapDetector::new(300);
//! assert!(!taps.on_touch_start(1_000, 1));
//! assert!(taps.on_touch_start(1_200, 1));
//! // A third tap soon after the second is another double tap.
//! assert!(taps.on_touch_start(1_350, 1));
//! // Too slow.
//! assert!(!taps.on_touch_start(1_700, 1));
//! ```

/// Recognizes double taps from touch-start times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoubleTapDetector {
    window_ms: u64,
    last_start: Option<u64>,
}

impl DoubleTapDetector {
    /// Creates a detector with the given maximum interval between taps.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_start: None,
        }
    }

    /// Maximum interval between two taps.
    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Changes the tap window.
    pub fn set_window_ms(&mut self, window_ms: u64) {
        self.window_ms = window_ms;
    }

    /// Feeds a touch start with `fingers` pressed pointers. Returns `true` if
    /// this start completes a double tap.
    pub fn on_touch_start(&mut self, now_ms: u64, fingers: usize) -> bool {
        if fingers > 1 {
            self.last_start = None;
        }
        let is_double = self
            .last_start
            .is_some_and(|last| now_ms.saturating_sub(last) < self.window_ms);
        if fingers == 1 {
            self.last_start = Some(now_ms);
        }
        if is_double {
            log::debug!("double tap recognized at {now_ms}ms");
        }
        is_double
    }

    /// Forgets tap history.
    pub fn reset(&mut self) {
        self.last_start = None;
    }
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::new(300)
    }
}
