// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by the engine.
//!
//! Positions are global (screen or window) coordinates; the engine maps them
//! into the viewport through [`ViewportHost`](crate::ViewportHost).

use kurbo::{Point, Vec2};

/// A scale gesture began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleStart {
    /// Centroid of the active pointers.
    pub focal_point: Point,
    /// Number of pointers in contact.
    pub pointer_count: usize,
}

/// A scale gesture moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleUpdate {
    /// Centroid of the active pointers.
    pub focal_point: Point,
    /// Scale ratio relative to the start of the gesture.
    pub scale: f64,
    /// Rotation in radians relative to the start of the gesture.
    pub rotation: f64,
    /// Number of pointers in contact.
    pub pointer_count: usize,
}

/// A scale gesture ended.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleEnd {
    /// Release velocity in px/s.
    pub velocity: Vec2,
    /// Number of pointers that were in contact before release.
    pub pointer_count: usize,
}

/// A discrete wheel or trackpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    /// Pointer position.
    pub position: Point,
    /// Scroll delta; positive `y` scrolls down.
    pub delta: Vec2,
}
