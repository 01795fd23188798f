// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per‑axis ballistic fling with elastic edges.
//!
//! Each axis starts in a friction phase. If the motion carries the position
//! past an edge of its [`ScrollMetrics`] range, the axis switches to a
//! critically damped spring anchored on that edge: the content overshoots,
//! then settles back. A position that already starts outside the range
//! springs back immediately.

use core::f64::consts::E;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;
use loupe_view::OffsetLimits;

use crate::{DISTANCE_TOLERANCE, FlingSimulation, VELOCITY_TOLERANCE};

/// Parameters of the per‑axis ballistic model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallisticConfig {
    /// Fraction of velocity retained after one second of free travel.
    pub drag: f64,
    /// Spring stiffness used past an edge.
    pub spring_stiffness: f64,
    /// Spring mass used past an edge.
    pub spring_mass: f64,
}

impl Default for BallisticConfig {
    fn default() -> Self {
        Self {
            drag: 0.135,
            spring_stiffness: 100.0,
            spring_mass: 0.5,
        }
    }
}

impl BallisticConfig {
    /// Natural angular frequency of the edge spring.
    ///
    /// Falls back to the default spring when stiffness or mass are unusable.
    #[must_use]
    pub fn spring_omega(&self) -> f64 {
        let omega = (self.spring_stiffness / self.spring_mass).sqrt();
        if omega.is_finite() && omega > 0.0 {
            omega
        } else {
            let d = Self::default();
            (d.spring_stiffness / d.spring_mass).sqrt()
        }
    }
}

/// Position and allowed range along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Current position.
    pub position: f64,
    /// Smallest in‑range position; may be `-inf`.
    pub min: f64,
    /// Largest in‑range position; may be `+inf`.
    pub max: f64,
}

impl ScrollMetrics {
    /// Metrics for an axis without limits.
    #[must_use]
    pub fn unbounded(position: f64) -> Self {
        Self {
            position,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Splits an offset and its limits into horizontal and vertical metrics.
    #[must_use]
    pub fn from_limits(offset: Vec2, limits: &OffsetLimits) -> (Self, Self) {
        (
            Self {
                position: offset.x,
                min: limits.min.x,
                max: limits.max.x,
            },
            Self {
                position: offset.y,
                min: limits.min.y,
                max: limits.max.y,
            },
        )
    }

    /// Returns `true` if `position` lies outside `[min, max]`.
    #[must_use]
    pub fn out_of_range(&self) -> bool {
        self.position < self.min || self.position > self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Spring {
    start_time: f64,
    target: f64,
    c1: f64,
    c2: f64,
}

/// One axis of an [`AxisFling`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSimulation {
    start: f64,
    velocity: f64,
    drag: f64,
    ln_drag: f64,
    omega: f64,
    spring: Option<Spring>,
}

impl AxisSimulation {
    /// Creates the simulation for `metrics` and a release `velocity` (px/s).
    #[must_use]
    pub fn new(metrics: ScrollMetrics, velocity: f64, config: &BallisticConfig) -> Self {
        let drag = if config.drag > 0.0 && config.drag < 1.0 {
            config.drag
        } else {
            BallisticConfig::default().drag
        };
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        let mut sim = Self {
            start: metrics.position,
            velocity,
            drag,
            ln_drag: drag.ln(),
            omega: config.spring_omega(),
            spring: None,
        };
        if metrics.out_of_range() {
            let target = metrics.position.clamp(metrics.min, metrics.max);
            sim.spring = Some(sim.spring_from(0.0, metrics.position, velocity, target));
        } else if let Some((time, edge)) = sim.edge_crossing(metrics) {
            let v = velocity * drag.powf(time);
            sim.spring = Some(sim.spring_from(time, edge, v, edge));
        }
        sim
    }

    /// Position after `t` seconds.
    #[must_use]
    pub fn position_at(&self, t: f64) -> f64 {
        match self.spring {
            Some(s) if t >= s.start_time => {
                let tau = t - s.start_time;
                s.target + (s.c1 + s.c2 * tau) * self.spring_decay(tau)
            }
            _ => self.start + self.velocity * (self.drag.powf(t) - 1.0) / self.ln_drag,
        }
    }

    /// Velocity after `t` seconds.
    #[must_use]
    pub fn velocity_at(&self, t: f64) -> f64 {
        match self.spring {
            Some(s) if t >= s.start_time => {
                let tau = t - s.start_time;
                (s.c2 - self.omega * (s.c1 + s.c2 * tau)) * self.spring_decay(tau)
            }
            _ => self.velocity * self.drag.powf(t),
        }
    }

    /// Returns `true` once the axis has come to rest.
    #[must_use]
    pub fn is_done(&self, t: f64) -> bool {
        let v = self.velocity_at(t).abs();
        match self.spring {
            Some(s) if t >= s.start_time => {
                v < VELOCITY_TOLERANCE
                    && (self.position_at(t) - s.target).abs() < DISTANCE_TOLERANCE
            }
            // Still travelling toward an edge it will reach.
            Some(_) => false,
            None => v < VELOCITY_TOLERANCE,
        }
    }

    /// Returns `true` if the axis reaches the elastic phase at some point.
    #[must_use]
    pub fn is_elastic(&self) -> bool {
        self.spring.is_some()
    }

    /// Time and edge at which free travel leaves the range, if it does.
    fn edge_crossing(&self, metrics: ScrollMetrics) -> Option<(f64, f64)> {
        let edge = if self.velocity > 0.0 {
            metrics.max
        } else if self.velocity < 0.0 {
            metrics.min
        } else {
            return None;
        };
        if !edge.is_finite() {
            return None;
        }
        // dragᵗ = 1 + (edge − x₀)·ln(drag) / v₀; unreachable when this is ≤ 0.
        let a = 1.0 + (edge - self.start) * self.ln_drag / self.velocity;
        if a <= 0.0 {
            return None;
        }
        Some(((a.ln() / self.ln_drag).max(0.0), edge))
    }

    /// `e^(-ω·τ)`.
    fn spring_decay(&self, tau: f64) -> f64 {
        E.powf(-self.omega * tau)
    }

    fn spring_from(&self, start_time: f64, position: f64, velocity: f64, target: f64) -> Spring {
        let c1 = position - target;
        Spring {
            start_time,
            target,
            c1,
            c2: velocity + self.omega * c1,
        }
    }
}

/// Horizontal and vertical [`AxisSimulation`]s run side by side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFling {
    x: AxisSimulation,
    y: AxisSimulation,
    origin: Vec2,
}

impl AxisFling {
    /// Builds both axes from the current `offset`, its `limits` and `velocity`.
    #[must_use]
    pub fn new(
        offset: Vec2,
        limits: &OffsetLimits,
        velocity: Vec2,
        config: &BallisticConfig,
    ) -> Self {
        let (mx, my) = ScrollMetrics::from_limits(offset, limits);
        Self {
            x: AxisSimulation::new(mx, velocity.x, config),
            y: AxisSimulation::new(my, velocity.y, config),
            origin: offset,
        }
    }

    /// Absolute offset after `t` seconds.
    #[must_use]
    pub fn position_at(&self, t: f64) -> Vec2 {
        Vec2::new(self.x.position_at(t), self.y.position_at(t))
    }

    /// Returns `true` if either axis reaches its elastic phase.
    #[must_use]
    pub fn is_elastic(&self) -> bool {
        self.x.is_elastic() || self.y.is_elastic()
    }
}

impl FlingSimulation for AxisFling {
    fn offset_at(&self, elapsed: f64) -> Vec2 {
        self.position_at(elapsed.max(0.0)) - self.origin
    }

    fn velocity_at(&self, elapsed: f64) -> Vec2 {
        let t = elapsed.max(0.0);
        Vec2::new(self.x.velocity_at(t), self.y.velocity_at(t))
    }

    fn is_done(&self, elapsed: f64) -> bool {
        let t = elapsed.max(0.0);
        self.x.is_done(t) && self.y.is_done(t)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{AxisFling, AxisSimulation, BallisticConfig, ScrollMetrics};
    use crate::FlingSimulation;

    fn run_until_done(sim: &AxisSimulation) -> f64 {
        let mut t = 0.0;
        while !sim.is_done(t) {
            t += 1.0 / 60.0;
            assert!(t < 30.0, "axis never settled");
        }
        t
    }

    #[test]
    fn unbounded_axis_is_pure_friction() {
        let cfg = BallisticConfig::default();
        let sim = AxisSimulation::new(ScrollMetrics::unbounded(10.0), 1200.0, &cfg);
        assert!(!sim.is_elastic());
        assert_eq!(sim.position_at(0.0), 10.0);
        let end = sim.position_at(run_until_done(&sim));
        assert!(end > 10.0);
        assert!(end < 10.0 + 1200.0 / -cfg.drag.ln());
    }

    #[test]
    fn stays_inside_when_edge_is_far() {
        let metrics = ScrollMetrics {
            position: -100.0,
            min: -5000.0,
            max: 0.0,
        };
        let sim = AxisSimulation::new(metrics, -200.0, &BallisticConfig::default());
        assert!(!sim.is_elastic());
        let end = sim.position_at(run_until_done(&sim));
        assert!(end < -100.0 && end > -5000.0);
    }

    #[test]
    fn overshoots_then_settles_on_edge() {
        let metrics = ScrollMetrics {
            position: -50.0,
            min: -1000.0,
            max: 0.0,
        };
        let sim = AxisSimulation::new(metrics, 2000.0, &BallisticConfig::default());
        assert!(sim.is_elastic());

        let mut peak = f64::NEG_INFINITY;
        let mut t = 0.0;
        while !sim.is_done(t) {
            peak = peak.max(sim.position_at(t));
            t += 1.0 / 60.0;
            assert!(t < 30.0, "axis never settled");
        }
        assert!(peak > 0.0, "expected elastic overshoot past the edge");
        assert!(sim.position_at(t).abs() < 1.0);
    }

    #[test]
    fn out_of_range_start_springs_back() {
        let metrics = ScrollMetrics {
            position: 80.0,
            min: -400.0,
            max: 0.0,
        };
        let sim = AxisSimulation::new(metrics, 0.0, &BallisticConfig::default());
        assert!(sim.is_elastic());
        let t = run_until_done(&sim);
        assert!(sim.position_at(t).abs() < 1.0);
    }

    #[test]
    fn position_is_continuous_at_edge() {
        let metrics = ScrollMetrics {
            position: -300.0,
            min: -1000.0,
            max: 0.0,
        };
        let sim = AxisSimulation::new(metrics, 1500.0, &BallisticConfig::default());
        let mut last = sim.position_at(0.0);
        for i in 1..600 {
            let p = sim.position_at(f64::from(i) / 600.0);
            assert!((p - last).abs() < 5.0, "jump at step {i}: {last} -> {p}");
            last = p;
        }
    }

    #[test]
    fn fling_reports_displacement_from_origin() {
        let limits = loupe_view::OffsetLimits::UNBOUNDED;
        let fling = AxisFling::new(
            Vec2::new(-20.0, -30.0),
            &limits,
            Vec2::new(0.0, 500.0),
            &BallisticConfig::default(),
        );
        assert_eq!(fling.offset_at(0.0), Vec2::ZERO);
        let d = fling.offset_at(0.25);
        assert_eq!(d.x, 0.0);
        assert!(d.y > 0.0);
    }
}
