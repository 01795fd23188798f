// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for fling decay and termination.
//!
//! Every release velocity above the fling threshold must come to rest in
//! finite time, with per‑tick displacement that never grows after the first
//! tick while the motion is unobstructed.

use kurbo::{Size, Vec2};
use loupe_fling::{
    BallisticConfig, Fling, FlingModel, FlingSimulation, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY,
    NEGLIGIBLE_DISPLACEMENT, TieredFriction,
};
use loupe_view::OffsetLimits;

const TICK: f64 = 1.0 / 60.0;

fn models() -> [FlingModel; 2] {
    [
        FlingModel::Friction(TieredFriction::default()),
        FlingModel::Ballistic(BallisticConfig::default()),
    ]
}

fn speeds() -> impl Iterator<Item = f64> {
    [MIN_FLING_VELOCITY + 1.0, 120.0, 999.0, 1000.0, 2600.0, 5000.0, MAX_FLING_VELOCITY, 20_000.0]
        .into_iter()
}

/// Per‑tick displacement magnitudes until the simulation reports rest.
fn tick_magnitudes(fling: &Fling) -> Vec<f64> {
    let mut out = Vec::new();
    let mut last = Vec2::ZERO;
    let mut t = 0.0;
    loop {
        t += TICK;
        let now = fling.offset_at(t);
        out.push((now - last).hypot());
        last = now;
        if fling.is_done(t) {
            return out;
        }
        assert!(t < 60.0, "fling did not finish within a minute");
    }
}

#[test]
fn unobstructed_displacement_is_non_increasing() {
    for model in models() {
        for speed in speeds() {
            for dir in [Vec2::new(1.0, 0.0), Vec2::new(-0.6, 0.8), Vec2::new(0.0, -1.0)] {
                let fling = Fling::new(&model, dir * speed, Vec2::ZERO, &OffsetLimits::UNBOUNDED);
                let mags = tick_magnitudes(&fling);
                for pair in mags.windows(2) {
                    assert!(
                        pair[1] <= pair[0] + 1e-9,
                        "{model:?} at {speed}: {} then {}",
                        pair[0],
                        pair[1]
                    );
                }
                // Rest is reported once the remaining motion is on the order of the
                // negligible per-tick displacement.
                assert!(*mags.last().unwrap() < NEGLIGIBLE_DISPLACEMENT * 2.0);
            }
        }
    }
}

#[test]
fn bounded_ballistic_fling_finishes_near_limits() {
    let limits = OffsetLimits::for_content(Size::new(2000.0, 2000.0), Size::new(400.0, 400.0), 1.0);
    let model = FlingModel::Ballistic(BallisticConfig::default());
    for speed in speeds() {
        for dir in [Vec2::new(1.0, 0.0), Vec2::new(-0.6, -0.8)] {
            let start = Vec2::new(-800.0, -800.0);
            let fling = Fling::new(&model, dir * speed, start, &limits);
            let mut t = 0.0;
            while !fling.is_done(t) {
                t += TICK;
                assert!(t < 60.0, "fling did not finish within a minute");
            }
            let rest = start + fling.offset_at(t);
            assert!(limits.overshoot(rest).hypot() < 1.0, "rest {rest:?} too far outside");
        }
    }
}

#[test]
fn very_fast_flicks_are_braked_harder() {
    let tiers = TieredFriction::default();
    let gentle = loupe_fling::FrictionFling::new(Vec2::new(900.0, 0.0), &tiers);
    let hard = loupe_fling::FrictionFling::new(Vec2::new(MAX_FLING_VELOCITY, 0.0), &tiers);
    assert!(hard.drag() < gentle.drag());
    // Travel still grows with speed, but far less than linearly.
    let ratio = hard.final_distance() / gentle.final_distance();
    assert!(ratio > 1.0 && ratio < MAX_FLING_VELOCITY / 900.0);
}
