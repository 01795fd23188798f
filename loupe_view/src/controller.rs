// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Size, Vec2};

use crate::animation::TransformAnimation;
use crate::bounds::OffsetLimits;
use crate::transform::ViewTransform;

/// Duration used for animated zoom, pan and reset transitions.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Partial transform update; only the provided fields are replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformUpdate {
    /// New scale, clamped into the controller's limits.
    pub scale: Option<f64>,
    /// New rotation in radians.
    pub rotation: Option<f64>,
    /// New offset in viewport‑local coordinates.
    pub offset: Option<Vec2>,
}

impl TransformUpdate {
    /// An update that only replaces the offset.
    #[must_use]
    pub fn offset(offset: Vec2) -> Self {
        Self {
            offset: Some(offset),
            ..Self::default()
        }
    }

    /// Returns `true` if no field is provided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scale.is_none() && self.rotation.is_none() && self.offset.is_none()
    }
}

/// Owner of the transform applied to a viewport's content.
///
/// `ViewController` is the only writer of its [`ViewTransform`]. It keeps the
/// scale inside `[min_scale, max_scale]` and offers the four mutations used by
/// gesture handling and programmatic callers alike:
/// - [`ViewController::update`] replaces any subset of scale/rotation/offset.
/// - [`ViewController::zoom`] changes the scale about a focal point.
/// - [`ViewController::pan`] translates the content.
/// - [`ViewController::constrain_to_bounds`] applies the bounds policy.
///
/// Zoom, pan and reset can be animated over [`DEFAULT_ANIMATION_DURATION`].
/// Animations are progressed by the host through
/// [`ViewController::advance_to`] with its frame clock, or through
/// [`ViewController::advance`] with explicit steps. Immediate mutations
/// cancel any animation in flight; a new animated mutation starts from the
/// current transform and replaces it.
#[derive(Clone, Debug)]
pub struct ViewController {
    transform: ViewTransform,
    min_scale: f64,
    max_scale: f64,
    animation: Option<TransformAnimation>,
    animation_duration: Duration,
    last_frame: Option<Duration>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    /// Creates a controller with the identity transform.
    ///
    /// Scale is clamped to `[1e-3, 1e3]` until limits are configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            min_scale: 1e-3,
            max_scale: 1e3,
            animation: None,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            last_frame: None,
        }
    }

    /// Builder form of [`ViewController::set_scale_limits`].
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.set_scale_limits(min_scale, max_scale);
        self
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The range is normalized so that `min_scale <= max_scale` and the
    /// current scale is clamped into it. Non‑finite or non‑positive limits are
    /// ignored.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        if !(min_scale.is_finite() && max_scale.is_finite()) || min_scale <= 0.0 || max_scale <= 0.0
        {
            return;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.transform.scale = self.clamp_scale(self.transform.scale);
    }

    /// Sets the duration of animated transitions.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Current rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    /// Current offset in viewport‑local coordinates.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset
    }

    /// Minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Replaces the provided fields of the transform, leaving the rest.
    ///
    /// Cancels any animation in flight.
    pub fn update(&mut self, update: TransformUpdate) {
        if update.is_empty() {
            return;
        }
        let mut next = self.transform;
        if let Some(scale) = update.scale.filter(|s| s.is_finite()) {
            next.scale = self.clamp_scale(scale);
        }
        if let Some(rotation) = update.rotation.filter(|r| r.is_finite()) {
            next.rotation = rotation;
        }
        if let Some(offset) = update.offset.filter(|o| o.is_finite()) {
            next.offset = offset;
        }
        self.apply(next, false);
    }

    /// Changes the scale by the additive `delta`, keeping `focal` fixed.
    ///
    /// `focal` is in viewport‑local coordinates. The resulting scale is
    /// clamped into the configured limits; if clamping leaves the scale
    /// unchanged this is a no‑op.
    pub fn zoom(&mut self, delta: f64, focal: Point, animate: bool) {
        if !delta.is_finite() || !focal.is_finite() {
            return;
        }
        let current = self.transform;
        let new_scale = self.clamp_scale(current.scale + delta);
        if (new_scale - current.scale).abs() < f64::EPSILON {
            return;
        }
        let next = current.scale_rotate_about(focal, Some(new_scale), None);
        self.apply(next, animate);
    }

    /// Adds `delta` to the offset.
    pub fn pan(&mut self, delta: Vec2, animate: bool) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        let mut next = self.transform;
        next.offset += delta;
        self.apply(next, animate);
    }

    /// Returns to the identity transform (clamped into the scale limits).
    pub fn reset(&mut self, animate: bool) {
        let mut next = ViewTransform::IDENTITY;
        next.scale = self.clamp_scale(next.scale);
        self.apply(next, animate);
    }

    /// Applies the bounds policy for `content` shown inside `viewport`.
    ///
    /// Clamps the scale into its limits, then clamps the offset into the
    /// [`OffsetLimits`] for that scale. If an animation is in flight its
    /// target is constrained as well, so the settled state obeys the policy.
    /// Calling this repeatedly with the same sizes is a no‑op after the first
    /// call.
    pub fn constrain_to_bounds(&mut self, content: Size, viewport: Size) {
        self.transform = self.constrained(self.transform, content, viewport);
        if let Some(target) = self.animation.map(|a| a.target()) {
            let target = self.constrained(target, content, viewport);
            if let Some(animation) = self.animation.as_mut() {
                animation.retarget(target);
            }
        }
    }

    /// Offset limits for the current scale.
    #[must_use]
    pub fn offset_limits(&self, content: Size, viewport: Size) -> OffsetLimits {
        OffsetLimits::for_content(content, viewport, self.transform.scale)
    }

    /// Returns `true` while an animated transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Stops any animated transition, leaving the transform where it is.
    pub fn cancel_animation(&mut self) {
        self.animation = None;
        self.last_frame = None;
    }

    /// Progresses the animation in flight by `dt`.
    ///
    /// Returns `true` if an animation is still running afterwards.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        self.transform = animation.advance(dt);
        if animation.is_finished() {
            self.cancel_animation();
        }
        self.animation.is_some()
    }

    /// Progresses the animation in flight to the frame time `now`.
    ///
    /// The first frame of each animation only records `now`; later frames
    /// advance by the time since the previous one. Returns `true` if an
    /// animation is still running afterwards.
    pub fn advance_to(&mut self, now: Duration) -> bool {
        if self.animation.is_none() {
            self.last_frame = None;
            return false;
        }
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_frame = Some(now);
        self.advance(dt)
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewControllerDebugInfo {
        ViewControllerDebugInfo {
            transform: self.transform,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            animation_target: self.animation.map(|a| a.target()),
            animation_progress: self.animation.map(|a| a.progress()),
        }
    }

    fn constrained(
        &self,
        transform: ViewTransform,
        content: Size,
        viewport: Size,
    ) -> ViewTransform {
        let scale = self.clamp_scale(transform.scale);
        let limits = OffsetLimits::for_content(content, viewport, scale);
        ViewTransform {
            scale,
            offset: limits.clamp(transform.offset),
            ..transform
        }
    }

    fn apply(&mut self, next: ViewTransform, animate: bool) {
        self.last_frame = None;
        if animate && !self.animation_duration.is_zero() && next != self.transform {
            self.animation = Some(TransformAnimation::new(
                self.transform,
                next,
                self.animation_duration,
            ));
        } else {
            self.animation = None;
            self.transform = next;
        }
    }
}

/// Debug snapshot of a [`ViewController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewControllerDebugInfo {
    /// Current transform.
    pub transform: ViewTransform,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Settled transform of the animation in flight, if any.
    pub animation_target: Option<ViewTransform>,
    /// Progress of the animation in flight, if any.
    pub animation_progress: Option<f64>,
}
