// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale, rotation and translation applied to content inside a viewport.
///
/// A content‑space point `p` is rendered at
/// `offset + rotate(rotation) * (scale * p)` in viewport‑local coordinates,
/// which is what [`ViewTransform::to_affine`] returns.
///
/// The type itself carries no invariants on `offset`; scale limits and
/// bounds are policies applied by [`crate::ViewController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in radians. Unrestricted; wraps through the trigonometry.
    pub rotation: f64,
    /// Translation in viewport‑local coordinates.
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// Scale `1.0`, no rotation, zero offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform from its three components.
    #[must_use]
    pub const fn new(scale: f64, rotation: f64, offset: Vec2) -> Self {
        Self {
            scale,
            rotation,
            offset,
        }
    }

    /// Returns the content → viewport affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::rotate(self.rotation) * Affine::scale(self.scale)
    }

    /// Maps a content‑space point into viewport‑local coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Maps a viewport‑local point back into content space.
    ///
    /// The result is meaningless for a zero scale.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.to_affine().inverse() * pt
    }

    /// Returns `(focal - offset) / scale`.
    ///
    /// This is the focal point's content position expressed in the current
    /// rotated frame; rotating it by the current rotation's inverse would give
    /// the untransformed content coordinate.
    #[must_use]
    pub fn focal_vector(&self, focal: Point) -> Vec2 {
        (focal.to_vec2() - self.offset) / self.scale
    }

    /// Returns the transform obtained by scaling and/or rotating about `focal`.
    ///
    /// `focal` is in viewport‑local coordinates and stays visually fixed. The
    /// scale correction is applied first; the rotation correction is then
    /// layered on top using the resulting scale, so combined pinch+rotate
    /// gestures do not double count the focal shift. Both corrections are
    /// derived from the focal vector of `self`, i.e. the state before the
    /// update.
    ///
    /// Passing `None` for both returns `self` unchanged.
    #[must_use]
    pub fn scale_rotate_about(
        &self,
        focal: Point,
        new_scale: Option<f64>,
        new_rotation: Option<f64>,
    ) -> Self {
        if new_scale.is_none() && new_rotation.is_none() {
            return *self;
        }
        let focal_content = self.focal_vector(focal);
        let mut next = *self;
        if let Some(scale) = new_scale {
            next.scale = scale;
            next.offset = focal.to_vec2() - focal_content * scale;
        }
        if let Some(rotation) = new_rotation {
            let rotated = rotate_vec(focal_content, rotation - self.rotation);
            next.rotation = rotation;
            next.offset = focal.to_vec2() - rotated * next.scale;
        }
        next
    }

    /// Linear interpolation of every component; `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            rotation: self.rotation + (other.rotation - self.rotation) * t,
            offset: self.offset.lerp(other.offset, t),
        }
    }
}

/// Standard 2D rotation: `x' = x·cosθ − y·sinθ`, `y' = x·sinθ + y·cosθ`.
fn rotate_vec(v: Vec2, angle: f64) -> Vec2 {
    (Affine::rotate(angle) * v.to_point()).to_vec2()
}
