// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Axis restriction for panning, wheel scrolling and fling displacement.
///
/// Every raw pan delta is passed through [`ScrollMode::mask`] before it
/// reaches the transform, so the same policy applies to live drags, wheel
/// scrolling and momentum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Panning is disabled on both axes.
    None,
    /// Only horizontal motion is kept; the vertical component is zeroed.
    Horizontal,
    /// Only vertical motion is kept; the horizontal component is zeroed.
    Vertical,
    /// Deltas pass through unchanged.
    #[default]
    Both,
}

impl ScrollMode {
    /// Filters `delta` through this mode's axis mask.
    ///
    /// Masking is idempotent: `mode.mask(mode.mask(d)) == mode.mask(d)`.
    #[must_use]
    pub fn mask(self, delta: Vec2) -> Vec2 {
        match self {
            Self::None => Vec2::ZERO,
            Self::Horizontal => Vec2::new(delta.x, 0.0),
            Self::Vertical => Vec2::new(0.0, delta.y),
            Self::Both => delta,
        }
    }
}
