// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::input::{WheelFilter, default_wheel_filter};

/// Tunables for a [`PinchZoom`](crate::PinchZoom) instance.
///
/// All fields are public; the `with_*` methods are chainable shorthands.
///
/// ```rust
/// use understory_pinch_zoom::PinchZoomConfig;
///
/// let config = PinchZoomConfig::default()
///     .with_zoom_limits(1.0, 8.0)
///     .with_inertia(false)
///     .with_lock_drag_axis(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PinchZoomConfig {
    /// Smallest zoom factor reachable by gestures.
    pub min_zoom: f64,
    /// Largest zoom factor reachable by gestures.
    pub max_zoom: f64,
    /// Zoom factor added by a double tap; `0.0` disables double-tap zoom.
    pub tap_zoom_factor: f64,
    /// Zoom factors below this snap back to `1.0` when a gesture settles.
    pub zoom_out_factor: f64,
    /// Duration of settle and double-tap animations.
    pub animation_duration_ms: u64,
    /// Keep panning after a drag is released.
    pub inertia: bool,
    /// Per-frame velocity multiplier for inertia, in `(0, 1)`.
    pub inertia_friction: f64,
    /// Allow one-finger panning while the zoom factor is `1.0`.
    pub draggable_unzoomed: bool,
    /// Only pan along the dominant axis of each drag step.
    pub lock_drag_axis: bool,
    /// How far (px) the content may be pulled past the left/right edges.
    pub horizontal_padding: f64,
    /// How far (px) the content may be pulled past the top/bottom edges.
    pub vertical_padding: f64,
    /// Wheel delta that corresponds to a zoom factor change of `1.0`.
    pub wheel_scale_factor: f64,
    /// Only center the content on the first layout, not on every resize.
    pub set_offsets_once: bool,
    /// Maximum interval between the two taps of a double tap.
    pub double_tap_window_ms: u64,
    /// Quiet time after the last wheel event before settling.
    pub wheel_settle_delay_ms: u64,
    /// How long a drag or double tap suppresses the following click.
    pub click_suppress_ms: u64,
    /// Treat ctrl+wheel as a trackpad pinch (coarse deltas).
    pub platform_pinch_ctrl: bool,
    /// Decides which wheel events are turned into zoom.
    pub wheel_filter: WheelFilter,
    /// When `false`, pointer and wheel input is ignored.
    pub enabled: bool,
}

impl Default for PinchZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 5.0,
            tap_zoom_factor: 1.0,
            zoom_out_factor: 1.3,
            animation_duration_ms: 250,
            inertia: true,
            inertia_friction: 0.96,
            draggable_unzoomed: true,
            lock_drag_axis: false,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
            wheel_scale_factor: 1500.0,
            set_offsets_once: false,
            double_tap_window_ms: 300,
            wheel_settle_delay_ms: 100,
            click_suppress_ms: 300,
            platform_pinch_ctrl: false,
            wheel_filter: default_wheel_filter,
            enabled: true,
        }
    }
}

impl PinchZoomConfig {
    /// Sets `min_zoom` and `max_zoom`.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets `tap_zoom_factor`.
    #[must_use]
    pub fn with_tap_zoom_factor(mut self, factor: f64) -> Self {
        self.tap_zoom_factor = factor;
        self
    }

    /// Sets `zoom_out_factor`.
    #[must_use]
    pub fn with_zoom_out_factor(mut self, factor: f64) -> Self {
        self.zoom_out_factor = factor;
        self
    }

    /// Sets `animation_duration_ms`.
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    /// Enables or disables inertia.
    #[must_use]
    pub fn with_inertia(mut self, inertia: bool) -> Self {
        self.inertia = inertia;
        self
    }

    /// Sets `inertia_friction`.
    #[must_use]
    pub fn with_inertia_friction(mut self, friction: f64) -> Self {
        self.inertia_friction = friction;
        self
    }

    /// Sets `draggable_unzoomed`.
    #[must_use]
    pub fn with_draggable_unzoomed(mut self, draggable: bool) -> Self {
        self.draggable_unzoomed = draggable;
        self
    }

    /// Sets `lock_drag_axis`.
    #[must_use]
    pub fn with_lock_drag_axis(mut self, lock: bool) -> Self {
        self.lock_drag_axis = lock;
        self
    }

    /// Sets horizontal and vertical padding.
    #[must_use]
    pub fn with_padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    /// Sets `wheel_scale_factor`.
    #[must_use]
    pub fn with_wheel_scale_factor(mut self, factor: f64) -> Self {
        self.wheel_scale_factor = factor;
        self
    }

    /// Sets `set_offsets_once`.
    #[must_use]
    pub fn with_set_offsets_once(mut self, once: bool) -> Self {
        self.set_offsets_once = once;
        self
    }

    /// Sets `platform_pinch_ctrl`.
    #[must_use]
    pub fn with_platform_pinch_ctrl(mut self, enabled: bool) -> Self {
        self.platform_pinch_ctrl = enabled;
        self
    }

    /// Sets the wheel intercept predicate.
    #[must_use]
    pub fn with_wheel_filter(mut self, filter: WheelFilter) -> Self {
        self.wheel_filter = filter;
        self
    }

    /// Enables or disables input handling.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Checks that the numeric fields describe a usable configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_zoom, self.max_zoom);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::ZoomRange { min, max });
        }
        if !(self.inertia_friction > 0.0 && self.inertia_friction < 1.0) {
            return Err(ConfigError::Friction(self.inertia_friction));
        }
        if !(self.wheel_scale_factor.is_finite() && self.wheel_scale_factor > 0.0) {
            return Err(ConfigError::WheelScaleFactor(self.wheel_scale_factor));
        }
        let (horizontal, vertical) = (self.horizontal_padding, self.vertical_padding);
        if !(horizontal.is_finite() && vertical.is_finite() && horizontal >= 0.0 && vertical >= 0.0)
        {
            return Err(ConfigError::Padding {
                horizontal,
                vertical,
            });
        }
        Ok(())
    }
}

/// Reason a [`PinchZoomConfig`] was rejected by [`PinchZoomConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Zoom limits are not finite, not positive, or inverted.
    ZoomRange {
        /// Offending minimum.
        min: f64,
        /// Offending maximum.
        max: f64,
    },
    /// Inertia friction outside `(0, 1)`.
    Friction(f64),
    /// Wheel scale factor is not a positive finite number.
    WheelScaleFactor(f64),
    /// Padding is negative or not finite.
    Padding {
        /// Offending horizontal padding.
        horizontal: f64,
        /// Offending vertical padding.
        vertical: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomRange { min, max } => {
                write!(f, "invalid zoom range [{min}, {max}]")
            }
            Self::Friction(friction) => {
                write!(f, "inertia friction {friction} is outside (0, 1)")
            }
            Self::WheelScaleFactor(factor) => {
                write!(f, "wheel scale factor {factor} must be positive")
            }
            Self::Padding {
                horizontal,
                vertical,
            } => write!(
                f,
                "padding ({horizontal}, {vertical}) must be finite and non-negative"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
