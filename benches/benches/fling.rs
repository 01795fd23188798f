// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `loupe_fling`: building and sampling both fling models.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use loupe_fling::{BallisticConfig, Fling, FlingModel, FlingSimulation, TieredFriction};
use loupe_view::OffsetLimits;

const FRAME: f64 = 1.0 / 60.0;

fn models() -> [(&'static str, FlingModel); 2] {
    [
        ("Friction", FlingModel::Friction(TieredFriction::default())),
        ("Ballistic", FlingModel::Ballistic(BallisticConfig::default())),
    ]
}

fn bench_sample_to_rest(c: &mut Criterion) {
    let limits = OffsetLimits::for_content(Size::new(4000.0, 3000.0), Size::new(800.0, 600.0), 1.0);
    let mut group = c.benchmark_group("fling_sample_to_rest");
    for (name, model) in models() {
        for speed in [500.0, 2500.0, 8000.0] {
            let velocity = Vec2::new(-speed, -speed * 0.5);
            group.bench_function(BenchmarkId::new(name, speed), |b| {
                b.iter(|| {
                    let fling = Fling::new(&model, velocity, Vec2::new(-1600.0, -1200.0), &limits);
                    let mut t = 0.0;
                    let mut acc = Vec2::ZERO;
                    while !fling.is_done(t) && t < 30.0 {
                        t += FRAME;
                        acc += fling.offset_at(t);
                    }
                    black_box(acc)
                });
            });
        }
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let limits = OffsetLimits::for_content(Size::new(4000.0, 3000.0), Size::new(800.0, 600.0), 1.0);
    let mut group = c.benchmark_group("fling_build");
    for (name, model) in models() {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(Fling::new(
                    &model,
                    black_box(Vec2::new(-3000.0, 1200.0)),
                    Vec2::new(-100.0, -50.0),
                    &limits,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_sample_to_rest);
criterion_main!(benches);
