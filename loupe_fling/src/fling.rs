// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use loupe_view::OffsetLimits;

use crate::axis::{AxisFling, BallisticConfig};
use crate::friction::{FrictionFling, TieredFriction};

/// Minimum release speed (px/s) that starts a fling.
pub const MIN_FLING_VELOCITY: f64 = 50.0;

/// Release speeds (px/s) are capped to this magnitude.
pub const MAX_FLING_VELOCITY: f64 = 8_000.0;

/// Per‑tick displacement (px) below which motion is treated as settled.
pub const NEGLIGIBLE_DISPLACEMENT: f64 = 0.1;

/// Speed (px/s) below which a simulation reports rest.
///
/// At a 60 Hz cadence this is roughly [`NEGLIGIBLE_DISPLACEMENT`] per tick.
pub const VELOCITY_TOLERANCE: f64 = 6.0;

/// Distance (px) from an elastic edge within which a spring counts as settled.
pub const DISTANCE_TOLERANCE: f64 = 0.5;

/// Time‑indexed decaying motion started from a release velocity.
///
/// Times are seconds since release. Implementations must be pure functions
/// of `elapsed` so a caller can sample them at any cadence.
pub trait FlingSimulation {
    /// Total displacement since release.
    fn offset_at(&self, elapsed: f64) -> Vec2;

    /// Instantaneous velocity (px/s).
    fn velocity_at(&self, elapsed: f64) -> Vec2;

    /// Returns `true` once the motion has come to rest.
    fn is_done(&self, elapsed: f64) -> bool;
}

/// Which fling model to run, with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlingModel {
    /// Per‑axis ballistic travel with elastic edges.
    ///
    /// With bounds present, overshoot is allowed while the fling runs and
    /// corrected once at the end.
    Ballistic(BallisticConfig),
    /// Scalar distance along the release direction under tiered friction.
    ///
    /// Bounds are re‑applied on every tick.
    Friction(TieredFriction),
}

impl Default for FlingModel {
    fn default() -> Self {
        Self::Friction(TieredFriction::default())
    }
}

impl FlingModel {
    /// Returns `true` if bounds correction is deferred until the fling ends.
    #[must_use]
    pub fn defers_bounds(&self) -> bool {
        matches!(self, Self::Ballistic(_))
    }
}

/// A running fling of either model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fling {
    /// See [`FlingModel::Ballistic`].
    Axes(AxisFling),
    /// See [`FlingModel::Friction`].
    Friction(FrictionFling),
}

impl Fling {
    /// Builds the simulation selected by `model`.
    ///
    /// `offset` and `limits` describe where the content is and where it may
    /// rest; the friction model ignores them. `velocity` is capped with
    /// [`clamp_release_velocity`].
    #[must_use]
    pub fn new(model: &FlingModel, velocity: Vec2, offset: Vec2, limits: &OffsetLimits) -> Self {
        let velocity = clamp_release_velocity(velocity);
        match model {
            FlingModel::Ballistic(config) => {
                Self::Axes(AxisFling::new(offset, limits, velocity, config))
            }
            FlingModel::Friction(tiers) => Self::Friction(FrictionFling::new(velocity, tiers)),
        }
    }
}

impl FlingSimulation for Fling {
    fn offset_at(&self, elapsed: f64) -> Vec2 {
        match self {
            Self::Axes(f) => f.offset_at(elapsed),
            Self::Friction(f) => f.offset_at(elapsed),
        }
    }

    fn velocity_at(&self, elapsed: f64) -> Vec2 {
        match self {
            Self::Axes(f) => f.velocity_at(elapsed),
            Self::Friction(f) => f.velocity_at(elapsed),
        }
    }

    fn is_done(&self, elapsed: f64) -> bool {
        match self {
            Self::Axes(f) => f.is_done(elapsed),
            Self::Friction(f) => f.is_done(elapsed),
        }
    }
}

/// Caps `velocity` to [`MAX_FLING_VELOCITY`], keeping its direction.
///
/// Non‑finite velocities become zero.
#[must_use]
pub fn clamp_release_velocity(velocity: Vec2) -> Vec2 {
    if !velocity.is_finite() {
        return Vec2::ZERO;
    }
    let speed = velocity.hypot();
    if speed > MAX_FLING_VELOCITY {
        velocity * (MAX_FLING_VELOCITY / speed)
    } else {
        velocity
    }
}

/// Returns `true` if `velocity` is fast enough to start a fling.
#[must_use]
pub fn exceeds_fling_threshold(velocity: Vec2) -> bool {
    velocity.is_finite() && velocity.hypot() > MIN_FLING_VELOCITY
}
