// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel input and its zoom mapping.

use kurbo::Point;

use crate::config::PinchZoomConfig;

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Deltas are in pixels (trackpads, most mice on the web).
    #[default]
    Pixel,
    /// Deltas are in lines.
    Line,
    /// Deltas are in pages.
    Page,
}

/// Keyboard modifiers held during a wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Meta / command key.
    pub meta: bool,
}

/// One normalized wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WheelSample {
    /// Pointer position in page coordinates.
    pub position: Point,
    /// Vertical delta; positive values scroll down (zoom out).
    pub delta_y: f64,
    /// Unit of `delta_y`.
    pub delta_mode: DeltaMode,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl WheelSample {
    /// A pixel-mode wheel event without modifiers.
    #[must_use]
    pub fn pixels(position: Point, delta_y: f64) -> Self {
        Self {
            position,
            delta_y,
            ..Self::default()
        }
    }

    /// Sets the delta mode.
    #[must_use]
    pub fn with_delta_mode(mut self, delta_mode: DeltaMode) -> Self {
        self.delta_mode = delta_mode;
        self
    }

    /// Sets the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Decides whether a wheel event is handled as zoom (`true`) or left to the
/// host (`false`).
pub type WheelFilter = fn(&WheelSample) -> bool;

/// Default [`WheelFilter`]: zoom unless ctrl or meta is held, so the browser
/// or OS page zoom keeps working.
#[must_use]
pub fn default_wheel_filter(sample: &WheelSample) -> bool {
    !(sample.modifiers.ctrl || sample.modifiers.meta)
}

/// Multiplier for coarse wheel deltas: line/page units and trackpad pinches
/// delivered as ctrl+wheel.
const COARSE_DELTA_MULTIPLIER: f64 = 15.0;

/// Zoom factor a wheel event asks for, starting from `zoom_factor`.
///
/// The result is not clamped; the caller applies it through the clamped
/// zoom path.
pub(crate) fn wheel_zoom_target(
    zoom_factor: f64,
    sample: &WheelSample,
    config: &PinchZoomConfig,
) -> f64 {
    let coarse = !matches!(sample.delta_mode, DeltaMode::Pixel)
        || (config.platform_pinch_ctrl && sample.modifiers.ctrl);
    let multiplier = if coarse { COARSE_DELTA_MULTIPLIER } else { 1.0 };
    zoom_factor - sample.delta_y * multiplier / config.wheel_scale_factor
}
