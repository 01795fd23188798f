// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_fling::FlingModel;
use loupe_view::ScrollMode;

/// Relative scale step applied per wheel notch while the zoom modifier is held.
pub const DEFAULT_SCROLL_ZOOM_STEP: f64 = 0.1;

/// Immutable settings read by the [`GestureEngine`](crate::GestureEngine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Two‑finger rotation.
    pub enable_rotation: bool,
    /// Pinch zoom.
    pub enable_zoom: bool,
    /// Momentum after a fast single‑pointer release.
    pub enable_fling: bool,
    /// Double‑tap toggles between scale `1.0` and `double_tap_zoom_factor`.
    pub enable_double_tap_zoom: bool,
    /// Wheel zoom while the zoom modifier is held.
    pub enable_ctrl_scroll_to_scale: bool,
    /// Keep content covering the viewport.
    pub constrain_bounds: bool,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scale reached by a double‑tap from `1.0`.
    pub double_tap_zoom_factor: f64,
    /// Relative scale step per wheel event in zoom mode.
    pub scroll_zoom_step: f64,
    /// Axis restriction for pan, wheel and fling.
    pub scroll_mode: ScrollMode,
    /// Momentum model.
    pub fling_model: FlingModel,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            enable_rotation: false,
            enable_zoom: true,
            enable_fling: true,
            enable_double_tap_zoom: true,
            enable_ctrl_scroll_to_scale: true,
            constrain_bounds: true,
            min_scale: 0.5,
            max_scale: 4.0,
            double_tap_zoom_factor: 2.0,
            scroll_zoom_step: DEFAULT_SCROLL_ZOOM_STEP,
            scroll_mode: ScrollMode::Both,
            fling_model: FlingModel::default(),
        }
    }
}

impl InteractionConfig {
    /// Returns a copy with unusable numeric settings replaced.
    ///
    /// - Scale limits must be finite and positive; they are swapped if
    ///   reversed and reset to the defaults otherwise.
    /// - The double‑tap factor and wheel step fall back to their defaults
    ///   when not finite and positive.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.min_scale) && usable(self.max_scale) {
            if self.min_scale > self.max_scale {
                core::mem::swap(&mut self.min_scale, &mut self.max_scale);
            }
        } else {
            self.min_scale = defaults.min_scale;
            self.max_scale = defaults.max_scale;
        }
        if !usable(self.double_tap_zoom_factor) {
            self.double_tap_zoom_factor = defaults.double_tap_zoom_factor;
        }
        if !usable(self.scroll_zoom_step) {
            self.scroll_zoom_step = defaults.scroll_zoom_step;
        }
        self
    }
}
