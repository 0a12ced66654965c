// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Short-lived "suppress the next synthetic click" token.
//!
//! Platforms synthesize a click after a touch or mouse sequence ends. When that
//! sequence was a drag or a double tap the click should not reach the
//! content. The gesture layer arms a [`ClickGuard`]; the click layer consumes
//! it with [`ClickGuard::take`]. A token that is never consumed expires so a
//! later, unrelated click goes through.
//!
//! ```
//! use understory_event_state::click_guard::ClickGuard;
//!
//! let mut guard = ClickGuard::default();
//! guard.arm(1_000, 300);
//! assert!(guard.take(1_100)); // suppressed
//! assert!(!guard.take(1_110)); // consumed
//!
//! guard.arm(2_000, 300);
//! assert!(!guard.take(2_500)); // expired
//! ```

/// Click-suppression token with an expiry time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickGuard {
    armed_until: Option<u64>,
}

impl ClickGuard {
    /// Arms the guard until `now_ms + ttl_ms`, replacing any earlier token.
    pub fn arm(&mut self, now_ms: u64, ttl_ms: u64) {
        self.armed_until = Some(now_ms.saturating_add(ttl_ms));
    }

    /// Drops any token.
    pub fn disarm(&mut self) {
        self.armed_until = None;
    }

    /// Returns `true` if an unexpired token is held.
    #[must_use]
    pub fn is_armed(&self, now_ms: u64) -> bool {
        self.armed_until.is_some_and(|until| now_ms <= until)
    }

    /// Consumes the token. Returns `true` if the click should be suppressed.
    pub fn take(&mut self, now_ms: u64) -> bool {
        let armed = self.is_armed(now_ms);
        self.armed_until = None;
        armed
    }
}
