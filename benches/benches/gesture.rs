// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `loupe_gesture`: per-event cost of the engine.

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use loupe_gesture::{
    GestureEngine, InteractionConfig, ScaleEnd, ScaleStart, ScaleUpdate, ScrollEvent,
    StaticViewport,
};

fn host() -> StaticViewport {
    StaticViewport::new(Size::new(800.0, 600.0), Some(Size::new(4000.0, 3000.0)))
}

fn bench_pinch(c: &mut Criterion) {
    let host = host();
    let config = InteractionConfig {
        enable_rotation: true,
        ..InteractionConfig::default()
    };
    c.bench_function("pinch_rotate_100_updates", |b| {
        b.iter_batched(
            || GestureEngine::new(config),
            |mut engine| {
                let focal = Point::new(400.0, 300.0);
                engine.on_scale_start(
                    &host,
                    ScaleStart {
                        focal_point: focal,
                        pointer_count: 2,
                    },
                );
                for i in 1..=100 {
                    let f = f64::from(i) / 100.0;
                    engine.on_scale_update(
                        &host,
                        ScaleUpdate {
                            focal_point: focal + Vec2::new(f * 20.0, f * -10.0),
                            scale: 1.0 + f,
                            rotation: f * 0.5,
                            pointer_count: 2,
                        },
                    );
                }
                black_box(engine.transform())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_scroll(c: &mut Criterion) {
    let host = host();
    let mut engine = GestureEngine::new(InteractionConfig::default());
    c.bench_function("scroll_event", |b| {
        b.iter(|| {
            engine.on_scroll(
                &host,
                ScrollEvent {
                    position: Point::new(400.0, 300.0),
                    delta: black_box(Vec2::new(3.0, 12.0)),
                },
            );
        });
    });
}

fn bench_fling_run(c: &mut Criterion) {
    let host = host();
    c.bench_function("fling_until_idle", |b| {
        b.iter_batched(
            || {
                let mut engine = GestureEngine::new(InteractionConfig::default());
                engine.on_scale_start(
                    &host,
                    ScaleStart {
                        focal_point: Point::new(400.0, 300.0),
                        pointer_count: 1,
                    },
                );
                engine.on_scale_end(
                    &host,
                    ScaleEnd {
                        velocity: Vec2::new(-2400.0, -1800.0),
                        pointer_count: 1,
                    },
                    Duration::ZERO,
                );
                engine
            },
            |mut engine| {
                let mut now = Duration::ZERO;
                while engine.needs_tick() && now < Duration::from_secs(30) {
                    now += Duration::from_millis(16);
                    engine.tick(&host, now);
                }
                black_box(engine.transform())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pinch, bench_scroll, bench_fling_run);
criterion_main!(benches);
