// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the public `loupe_view` API.
//!
//! These exercise focal‑point invariance and the bounds policy through
//! [`ViewController`] the way a gesture layer or programmatic caller would.

use kurbo::{Point, Size, Vec2};
use loupe_view::{OffsetLimits, TransformUpdate, ViewController, ViewTransform};

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-7
}

#[test]
fn focal_point_survives_a_sequence_of_zooms() {
    let mut view = ViewController::new().with_scale_limits(0.25, 8.0);
    view.update(TransformUpdate {
        rotation: Some(0.7),
        offset: Some(Vec2::new(-35.0, 60.0)),
        ..TransformUpdate::default()
    });

    let focal = Point::new(150.0, 90.0);
    let content = view.transform().view_to_content_point(focal);
    for delta in [0.5, 1.25, -0.3, 2.0, -1.0] {
        view.zoom(delta, focal, false);
        assert!(close(view.transform().content_to_view_point(content), focal));
    }
}

#[test]
fn bounds_containment_for_large_content() {
    let content = Size::new(1200.0, 900.0);
    let viewport = Size::new(400.0, 300.0);
    let mut view = ViewController::new().with_scale_limits(0.5, 4.0);

    for (scale, offset) in [
        (1.0, Vec2::new(100.0, 100.0)),
        (2.0, Vec2::new(-5000.0, 40.0)),
        (0.5, Vec2::new(-250.0, -9.0)),
    ] {
        view.update(TransformUpdate {
            scale: Some(scale),
            offset: Some(offset),
            ..TransformUpdate::default()
        });
        view.constrain_to_bounds(content, viewport);

        let scaled = content * view.scale();
        let o = view.offset();
        assert!(o.x <= 0.0 && o.x >= (viewport.width - scaled.width).min(0.0));
        assert!(o.y <= 0.0 && o.y >= (viewport.height - scaled.height).min(0.0));
    }
}

#[test]
fn small_content_is_pinned() {
    let mut view = ViewController::new().with_scale_limits(0.1, 4.0);
    view.update(TransformUpdate {
        scale: Some(0.25),
        offset: Some(Vec2::new(73.0, -12.0)),
        ..TransformUpdate::default()
    });
    view.constrain_to_bounds(Size::new(800.0, 800.0), Size::new(400.0, 400.0));
    assert_eq!(view.offset(), Vec2::ZERO);
}

#[test]
fn pinch_scenario_from_identity() {
    // 400x400 viewport over 800x800 content, pinch x2 about the center.
    let content = Size::new(800.0, 800.0);
    let viewport = Size::new(400.0, 400.0);
    let mut view = ViewController::new().with_scale_limits(0.5, 4.0);
    let focal = Point::new(200.0, 200.0);

    let next = view
        .transform()
        .scale_rotate_about(focal, Some(view.clamp_scale(2.0)), None);
    view.update(TransformUpdate {
        scale: Some(next.scale),
        offset: Some(next.offset),
        ..TransformUpdate::default()
    });
    view.constrain_to_bounds(content, viewport);

    assert_eq!(view.scale(), 2.0);
    assert!(close(
        view.transform().content_to_view_point(Point::new(200.0, 200.0)),
        focal
    ));
}

#[test]
fn limits_resolve_matches_controller_helper() {
    let content = Size::new(640.0, 480.0);
    let viewport = Size::new(320.0, 320.0);
    let mut view = ViewController::new();
    view.update(TransformUpdate {
        scale: Some(1.5),
        ..TransformUpdate::default()
    });
    assert_eq!(
        OffsetLimits::resolve(true, Some(content), Some(viewport), view.scale()),
        view.offset_limits(content, viewport)
    );
    assert_eq!(ViewTransform::default(), ViewTransform::IDENTITY);
}
