// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven animation sessions with explicit session tokens.
//!
//! ## Usage
//!
//! 1) Call [`Animator::start`] with the current time, a duration, an easing
//!    curve and a payload describing what to interpolate. Keep the returned
//!    [`SessionToken`].
//! 2) On every display frame, call [`Animator::tick`] with that token. A token
//!    from a superseded or stopped session yields [`Tick::Stale`] and the
//!    caller should simply return.
//! 3) Apply [`Tick::Frame`] progress to your state; on [`Tick::Finished`],
//!    apply progress `1.0` and run any completion logic.
//!
//! Starting a new session always invalidates the previous one, so two logical
//! animations never share a stop flag.
//!
//! ## Minimal example
//!
//! ```
//! use understory_timing::{Animator, Easing, Tick};
//!
//! let mut animator = Animator::new();
//! let token = animator.start(1_000, 200, Easing::Linear, "zoom");
//!
//! match animator.tick(token, 1_050) {
//!     Tick::Frame { progress, payload } => {
//!         assert_eq!(progress, 0.25);
//!         assert_eq!(payload, "zoom");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! // A newer session makes the old token stale.
//! let newer = animator.start(1_060, 200, Easing::Swing, "pan");
//! assert!(matches!(animator.tick(token, 1_070), Tick::Stale));
//! assert!(matches!(animator.tick(newer, 1_300), Tick::Finished { payload: "pan" }));
//! ```

use crate::Easing;

/// Identifies one animation session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

/// Outcome of advancing a session by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick<T> {
    /// The token no longer names the current session; do nothing.
    Stale,
    /// An intermediate frame with eased progress.
    Frame {
        /// Eased progress, nominally in `[0, 1)`.
        progress: f64,
        /// The session payload.
        payload: T,
    },
    /// The final frame: apply raw progress `1.0`. The session has ended.
    Finished {
        /// The session payload.
        payload: T,
    },
}

#[derive(Clone, Copy, Debug)]
struct Session<T> {
    token: SessionToken,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
    payload: T,
}

/// Drives at most one animation session at a time.
#[derive(Clone, Debug)]
pub struct Animator<T> {
    current: Option<Session<T>>,
    next_token: u64,
}

impl<T: Copy> Animator<T> {
    /// Creates an idle animator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            next_token: 0,
        }
    }

    /// Starts a new session, superseding any current one.
    pub fn start(
        &mut self,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
        payload: T,
    ) -> SessionToken {
        let token = SessionToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        if self.current.is_some() {
            log::debug!("animation {token:?} supersedes a running session");
        }
        self.current = Some(Session {
            token,
            start_ms: now_ms,
            duration_ms,
            easing,
            payload,
        });
        token
    }

    /// Ends the current session, if any, and returns its payload.
    ///
    /// Outstanding frame callbacks will observe [`Tick::Stale`].
    pub fn stop(&mut self) -> Option<T> {
        self.current.take().map(|s| s.payload)
    }

    /// Token of the current session.
    #[must_use]
    pub fn current(&self) -> Option<SessionToken> {
        self.current.as_ref().map(|s| s.token)
    }

    /// Returns `true` while a session is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Returns `true` if `token` names the current session.
    #[must_use]
    pub fn is_current(&self, token: SessionToken) -> bool {
        self.current() == Some(token)
    }

    /// Payload of the current session.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.current.as_ref().map(|s| &s.payload)
    }

    /// Advances the session named by `token` to time `now_ms`.
    ///
    /// Once elapsed time reaches the duration the session ends and
    /// [`Tick::Finished`] is returned; easing is not applied to that frame.
    pub fn tick(&mut self, token: SessionToken, now_ms: u64) -> Tick<T> {
        let Some(session) = self.current else {
            return Tick::Stale;
        };
        if session.token != token {
            return Tick::Stale;
        }
        let elapsed = now_ms.saturating_sub(session.start_ms);
        if elapsed >= session.duration_ms {
            self.current = None;
            log::debug!("animation {token:?} finished after {elapsed}ms");
            return Tick::Finished {
                payload: session.payload,
            };
        }
        let raw = elapsed as f64 / session.duration_ms as f64;
        let progress = session.easing.apply(raw);
        log::trace!("animation {token:?} progress {progress:.3}");
        Tick::Frame {
            progress,
            payload: session.payload,
        }
    }
}

impl<T: Copy> Default for Animator<T> {
    fn default() -> Self {
        Self::new()
    }
}
