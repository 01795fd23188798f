// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Magnitude + direction friction fling.
//!
//! The release speed decays exponentially: `v(t) = v₀·dragᵗ`, so the distance
//! travelled is `d(t) = v₀·(dragᵗ − 1) / ln(drag)`. `drag` is the fraction of
//! velocity retained after one second; it is chosen from the release speed by
//! a [`FrictionModel`], so hard flicks can be braked harder than gentle ones.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::{FlingSimulation, VELOCITY_TOLERANCE};

/// Picks the drag for a given release speed.
pub trait FrictionModel {
    /// Returns the fraction of velocity retained after one second, in `(0, 1)`.
    fn drag_for_speed(&self, speed: f64) -> f64;
}

/// One speed tier of a [`TieredFriction`] model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrictionTier {
    /// Release speeds at or above this (px/s) use this tier.
    pub min_speed: f64,
    /// Drag applied in this tier.
    pub drag: f64,
}

/// Coarse speed tiers: very fast releases get a lower drag (more friction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TieredFriction {
    /// Tiers, checked in order; the first whose `min_speed` is reached wins.
    pub tiers: [FrictionTier; 3],
    /// Drag for speeds below every tier.
    pub base_drag: f64,
}

impl Default for TieredFriction {
    fn default() -> Self {
        Self {
            tiers: [
                FrictionTier {
                    min_speed: 5000.0,
                    drag: 0.02,
                },
                FrictionTier {
                    min_speed: 2500.0,
                    drag: 0.05,
                },
                FrictionTier {
                    min_speed: 1000.0,
                    drag: 0.1,
                },
            ],
            base_drag: 0.135,
        }
    }
}

impl FrictionModel for TieredFriction {
    fn drag_for_speed(&self, speed: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| speed >= tier.min_speed)
            .map_or(self.base_drag, |tier| tier.drag)
    }
}

/// Distance along the release direction under exponential drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrictionFling {
    direction: Vec2,
    speed: f64,
    drag: f64,
    ln_drag: f64,
}

impl FrictionFling {
    /// Builds a fling for `velocity` (px/s) with drag chosen by `model`.
    ///
    /// A drag outside `(0, 1)` falls back to the default base drag.
    #[must_use]
    pub fn new(velocity: Vec2, model: &impl FrictionModel) -> Self {
        let speed = velocity.hypot();
        let direction = if speed > 0.0 && speed.is_finite() {
            velocity / speed
        } else {
            Vec2::ZERO
        };
        let mut drag = model.drag_for_speed(speed);
        if !(drag > 0.0 && drag < 1.0) {
            drag = TieredFriction::default().base_drag;
        }
        Self {
            direction,
            speed: if direction == Vec2::ZERO { 0.0 } else { speed },
            drag,
            ln_drag: drag.ln(),
        }
    }

    /// The drag selected for this fling.
    #[must_use]
    pub fn drag(&self) -> f64 {
        self.drag
    }

    /// Unit release direction (zero for a zero velocity).
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Scalar distance travelled after `t` seconds.
    #[must_use]
    pub fn distance_at(&self, t: f64) -> f64 {
        self.speed * (self.drag.powf(t) - 1.0) / self.ln_drag
    }

    /// Scalar speed after `t` seconds.
    #[must_use]
    pub fn speed_at(&self, t: f64) -> f64 {
        self.speed * self.drag.powf(t)
    }

    /// Distance travelled once the fling comes to rest.
    #[must_use]
    pub fn final_distance(&self) -> f64 {
        -self.speed / self.ln_drag
    }

    /// Time in seconds until the speed falls below [`VELOCITY_TOLERANCE`].
    #[must_use]
    pub fn duration(&self) -> f64 {
        if self.speed <= VELOCITY_TOLERANCE {
            return 0.0;
        }
        (VELOCITY_TOLERANCE / self.speed).ln() / self.ln_drag
    }
}

impl FlingSimulation for FrictionFling {
    fn offset_at(&self, elapsed: f64) -> Vec2 {
        self.direction * self.distance_at(elapsed.max(0.0))
    }

    fn velocity_at(&self, elapsed: f64) -> Vec2 {
        self.direction * self.speed_at(elapsed.max(0.0))
    }

    fn is_done(&self, elapsed: f64) -> bool {
        self.speed_at(elapsed.max(0.0)) < VELOCITY_TOLERANCE
    }
}
