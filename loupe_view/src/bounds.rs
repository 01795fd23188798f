// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds constraint policy for the content offset.
//!
//! For each axis, with `scaled = content * scale`, the allowed offset range is
//! `[min(0, viewport - scaled), 0]`: content may never be panned far enough
//! to reveal empty space past its own edges.
//!
//! Content smaller than the viewport on an axis collapses that range to
//! `[0, 0]`, pinning the content to the viewport origin on that axis.

use kurbo::{Size, Vec2};

/// Per‑axis offset range produced by the bounds policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetLimits {
    /// Smallest allowed offset on each axis.
    pub min: Vec2,
    /// Largest allowed offset on each axis.
    pub max: Vec2,
}

impl OffsetLimits {
    /// No limits on either axis.
    pub const UNBOUNDED: Self = Self {
        min: Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        max: Vec2::new(f64::INFINITY, f64::INFINITY),
    };

    /// Computes the limits for `content` shown at `scale` inside `viewport`.
    ///
    /// Returns [`OffsetLimits::UNBOUNDED`] if any input is not a finite,
    /// non‑negative size.
    #[must_use]
    pub fn for_content(content: Size, viewport: Size, scale: f64) -> Self {
        if !is_usable(content) || !is_usable(viewport) || !scale.is_finite() {
            return Self::UNBOUNDED;
        }
        let scaled = content * scale;
        Self {
            min: Vec2::new(
                axis_min(viewport.width, scaled.width),
                axis_min(viewport.height, scaled.height),
            ),
            max: Vec2::ZERO,
        }
    }

    /// Resolves the limits for the current configuration.
    ///
    /// Constraining disabled, or either size missing, yields
    /// [`OffsetLimits::UNBOUNDED`].
    #[must_use]
    pub fn resolve(
        constrain: bool,
        content: Option<Size>,
        viewport: Option<Size>,
        scale: f64,
    ) -> Self {
        match (constrain, content, viewport) {
            (true, Some(content), Some(viewport)) => Self::for_content(content, viewport, scale),
            _ => Self::UNBOUNDED,
        }
    }

    /// Returns `true` if neither axis is limited.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }

    /// Clamps `offset` into the limits, axis by axis.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.clamp(self.min.x, self.max.x),
            offset.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Returns `true` if `offset` lies within the limits.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&offset.x)
            && (self.min.y..=self.max.y).contains(&offset.y)
    }

    /// How far `offset` lies outside the limits on each axis (zero inside).
    #[must_use]
    pub fn overshoot(&self, offset: Vec2) -> Vec2 {
        offset - self.clamp(offset)
    }
}

fn axis_min(viewport_extent: f64, scaled_content_extent: f64) -> f64 {
    (viewport_extent - scaled_content_extent).min(0.0)
}

fn is_usable(size: Size) -> bool {
    size.is_finite() && size.width >= 0.0 && size.height >= 0.0
}
