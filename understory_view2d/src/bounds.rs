// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::geometry::clamp;

/// Allowed offset interval for each axis, as produced by [`Containment::offset_range`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetRange {
    /// Smallest allowed offset on each axis.
    pub min: Vec2,
    /// Largest allowed offset on each axis.
    pub max: Vec2,
}

impl OffsetRange {
    /// Clamps `offset` into this range, axis by axis.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            clamp(self.min.x, self.max.x, offset.x),
            clamp(self.min.y, self.max.y, offset.y),
        )
    }

    /// Returns `true` if `offset` already lies inside the range.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        self.clamp(offset) == offset
    }
}

/// Container/content geometry used to keep the content in view.
///
/// The container is the on-screen box receiving input; the content is the
/// wrapped element at its natural (unscaled) size. Padding lets the content be
/// pulled that many pixels past each container edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Containment {
    container: Size,
    content: Size,
    padding: Vec2,
}

impl Containment {
    /// Creates containment geometry with no padding.
    #[must_use]
    pub fn new(container: Size, content: Size) -> Self {
        Self {
            container,
            content,
            padding: Vec2::ZERO,
        }
    }

    /// Sets horizontal and vertical padding.
    #[must_use]
    pub fn with_padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.padding = Vec2::new(horizontal, vertical);
        self
    }

    /// Container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Natural content size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Returns `true` if either size has a zero (or negative) dimension.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.container.width > 0.0
            && self.container.height > 0.0
            && self.content.width > 0.0
            && self.content.height > 0.0)
    }

    /// Scale at which the content exactly fits inside the container.
    ///
    /// Degenerate geometry yields `0.0` rather than an infinite or NaN scale.
    #[must_use]
    pub fn fit_scale(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let sx = self.container.width / self.content.width;
        let sy = self.container.height / self.content.height;
        sx.min(sy)
    }

    /// Offset that centers the content in the container at `effective_scale`.
    #[must_use]
    pub fn centered_offset(&self, effective_scale: f64) -> Vec2 {
        let el = self.content * effective_scale;
        Vec2::new(
            (el.width - self.container.width) / 2.0,
            (el.height - self.container.height) / 2.0,
        )
    }

    /// Allowed offset range for content drawn at `effective_scale`.
    ///
    /// When the scaled content is larger than the container the offset may
    /// range from `-padding` to the overflow plus padding. When it is smaller,
    /// the content may sit anywhere inside the container, again widened by
    /// padding.
    #[must_use]
    pub fn offset_range(&self, effective_scale: f64) -> OffsetRange {
        let el = self.content * effective_scale;
        let dx = el.width - self.container.width;
        let dy = el.height - self.container.height;
        OffsetRange {
            min: Vec2::new(dx.min(0.0) - self.padding.x, dy.min(0.0) - self.padding.y),
            max: Vec2::new(
                (dx + self.padding.x).max(0.0),
                (dy + self.padding.y).max(0.0),
            ),
        }
    }

    /// Clamps `offset` into the allowed range at `effective_scale`.
    #[must_use]
    pub fn sanitize_offset(&self, offset: Vec2, effective_scale: f64) -> Vec2 {
        self.offset_range(effective_scale).clamp(offset)
    }
}
