// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `cos`

/// Progress curve applied to linear animation progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Progress is used as-is.
    Linear,
    /// Cosine ease-in-out, see [`swing`].
    #[default]
    Swing,
}

impl Easing {
    /// Maps linear progress through this curve.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        match self {
            Self::Linear => progress,
            Self::Swing => swing(progress),
        }
    }
}

/// Cosine ease-in-out: `-cos(p·π)/2 + 0.5`.
///
/// Maps `[0, 1]` onto `[0, 1]` with zero slope at both ends.
///
/// ```rust
/// use understory_timing::swing;
///
/// assert_eq!(swing(0.0), 0.0);
/// assert_eq!(swing(1.0), 1.0);
/// assert!((swing(0.5) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn swing(progress: f64) -> f64 {
    -(progress * PI).cos() / 2.0 + 0.5
}
