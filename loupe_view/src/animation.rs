// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::transform::ViewTransform;

/// Fixed‑duration transition between two transforms.
///
/// Progress is driven by the caller with [`TransformAnimation::advance`];
/// the animation never reads a clock of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformAnimation {
    from: ViewTransform,
    to: ViewTransform,
    duration: Duration,
    elapsed: Duration,
}

impl TransformAnimation {
    /// Creates an animation from `from` to `to` lasting `duration`.
    #[must_use]
    pub fn new(from: ViewTransform, to: ViewTransform, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// The transform the animation settles on.
    #[must_use]
    pub fn target(&self) -> ViewTransform {
        self.to
    }

    /// Replaces the settled transform, keeping the elapsed time.
    pub fn retarget(&mut self, to: ViewTransform) {
        self.to = to;
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Normalized progress in `[0, 1]` before easing.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// The transform at the current progress.
    #[must_use]
    pub fn current(&self) -> ViewTransform {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(&self.to, ease_out_cubic(self.progress()))
    }

    /// Moves the animation forward by `dt` and returns the new transform.
    pub fn advance(&mut self, dt: Duration) -> ViewTransform {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.current()
    }
}

/// Starts fast, ends slow.
fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
